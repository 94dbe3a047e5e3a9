use crate::constants::{ESCAPE_KEY, ESCAPE_KEY_CODE, ESCAPE_KEY_LEGACY};

/// A key release as seen by the controller.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyPress {
    /// `KeyboardEvent.key`
    pub key: String,
    /// `KeyboardEvent.keyCode`; 0 when the host does not report one
    pub key_code: u32,
}

impl KeyPress {
    pub fn new(key: impl Into<String>, key_code: u32) -> Self {
        Self {
            key: key.into(),
            key_code,
        }
    }

    pub fn escape() -> Self {
        Self::new(ESCAPE_KEY, ESCAPE_KEY_CODE)
    }

    #[inline]
    pub fn is_escape(&self) -> bool {
        is_escape(&self.key, self.key_code)
    }
}

#[inline]
pub fn is_escape(key: &str, key_code: u32) -> bool {
    matches!(key, ESCAPE_KEY | ESCAPE_KEY_LEGACY) || key_code == ESCAPE_KEY_CODE
}

/// What a key release did, so the host can finish the job.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KeyOutcome {
    /// The sentinel was written to the fragment; a fragment-change follows.
    pub dismissed: bool,
    /// The browser's default handling for this key should be suppressed.
    pub prevent_default: bool,
}
