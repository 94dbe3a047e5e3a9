/// Class names, event names and key codes shared by the core and the web front end.
///
/// The stylesheet that ships with css-modal keys off these class names, so
/// changing a default here means changing the CSS as well.
// Marker on the element that is currently shown
pub const ACTIVE_CLASS: &str = "is-active";

// Scroll-lock marker placed on the document root while a modal is shown
pub const OVERLAY_CLASS: &str = "has-overlay";

// Structural class on the first child of a genuine modal
pub const INNER_CLASS: &str = "modal-inner";

// Fragment written when a modal is dismissed; "" is accepted as well
pub const SENTINEL_FRAGMENT: &str = "!";

// Lifecycle event names dispatched on the document
pub const SHOW_EVENT: &str = "cssmodal:show";
pub const HIDE_EVENT: &str = "cssmodal:hide";

// Keyboard
pub const ESCAPE_KEY: &str = "Escape";
pub const ESCAPE_KEY_LEGACY: &str = "Esc"; // pre-standard Edge/IE value of KeyboardEvent.key
pub const ESCAPE_KEY_CODE: u32 = 27;
