//! Platform-agnostic core of css-modal.
//!
//! A modal is shown when the location fragment names an element whose first
//! child carries the structural class, and hidden when the fragment is empty,
//! `!`, or names nothing. [`navigation::NavigationSync`] is the entry point;
//! it reaches the page only through [`host::DocumentHost`] and
//! [`events::EventPublisher`].

pub mod classes;
pub mod config;
pub mod constants;
pub mod events;
pub mod focus;
pub mod fragment;
pub mod host;
pub mod keys;
pub mod memory;
pub mod navigation;
pub mod tracker;

pub use config::*;
pub use events::*;
pub use host::*;
pub use keys::*;
pub use navigation::*;
pub use tracker::*;
