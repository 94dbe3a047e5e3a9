pub mod keyboard;
pub mod navigation;

pub use keyboard::wire_escape_keyup;
pub use navigation::wire_fragment_sync;
