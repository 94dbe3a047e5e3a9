//! Ports into the surrounding document.
//!
//! The state machine never touches a real DOM. Everything it needs from the
//! page goes through [`DocumentHost`]: the web front end implements it over
//! `web-sys`, and [`crate::memory::MemoryDocument`] implements it in memory.

use std::fmt::Debug;

pub trait DocumentHost {
    /// Handle to a node in the document. Cheap to clone, compared by identity.
    type Element: Clone + PartialEq + Debug;

    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    /// First *element* child, skipping text and comment nodes.
    fn first_element_child(&self, element: &Self::Element) -> Option<Self::Element>;

    /// The document element (`<html>`), target of the scroll-lock class.
    fn root(&self) -> Option<Self::Element>;

    fn element_id(&self, element: &Self::Element) -> String;

    fn class_name(&self, element: &Self::Element) -> String;
    fn set_class_name(&self, element: &Self::Element, value: &str);

    /// Element that currently has keyboard focus, if any.
    fn focused(&self) -> Option<Self::Element>;
    fn focus(&self, element: &Self::Element);

    /// Raw location hash. May or may not carry the leading `#`.
    fn fragment(&self) -> String;

    /// Assigning the fragment makes the host emit a fragment-change
    /// notification later; it must not call back into the controller.
    fn set_fragment(&self, value: &str);
}
