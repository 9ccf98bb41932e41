//! Core types for the keyboard system: KeyEvent, TriState, Platform, keys

use serde::{Deserialize, Serialize};

/// Named key codes, matching the values reported by the event source.
///
/// This table is process-wide immutable configuration: binding specs refer
/// to it by name (case-insensitively) through [`keys::code`].
pub mod keys {
    pub const BACKSPACE: u32 = 8;
    pub const TAB: u32 = 9;
    pub const ENTER: u32 = 13;
    pub const ESCAPE: u32 = 27;
    pub const LEFT: u32 = 37;
    pub const UP: u32 = 38;
    pub const RIGHT: u32 = 39;
    pub const DOWN: u32 = 40;
    pub const DELETE: u32 = 46;

    /// Resolve a named key, case-insensitively.
    pub fn code(name: &str) -> Option<u32> {
        let code = match name.to_ascii_uppercase().as_str() {
            "BACKSPACE" => BACKSPACE,
            "TAB" => TAB,
            "ENTER" => ENTER,
            "ESCAPE" => ESCAPE,
            "LEFT" => LEFT,
            "UP" => UP,
            "RIGHT" => RIGHT,
            "DOWN" => DOWN,
            "DELETE" => DELETE,
            _ => return None,
        };
        Some(code)
    }

    /// Display name for a named key code, used by `Binding`'s Display impl.
    pub(crate) fn name(code: u32) -> Option<&'static str> {
        let name = match code {
            BACKSPACE => "Backspace",
            TAB => "Tab",
            ENTER => "Enter",
            ESCAPE => "Escape",
            LEFT => "Left",
            UP => "Up",
            RIGHT => "Right",
            DOWN => "Down",
            DELETE => "Delete",
            _ => return None,
        };
        Some(name)
    }
}

/// Per-modifier constraint in a binding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TriState {
    /// The modifier must be held.
    Required,
    /// The modifier must not be held.
    Forbidden,
    /// The modifier does not affect matching.
    #[default]
    Indifferent,
}

impl TriState {
    /// Whether an event's modifier flag satisfies this constraint.
    #[inline]
    pub const fn admits(self, held: bool) -> bool {
        match self {
            TriState::Required => held,
            TriState::Forbidden => !held,
            TriState::Indifferent => true,
        }
    }
}

impl From<Option<bool>> for TriState {
    fn from(value: Option<bool>) -> Self {
        match value {
            Some(true) => TriState::Required,
            Some(false) => TriState::Forbidden,
            None => TriState::Indifferent,
        }
    }
}

/// A raw key-press notification from the event source. Consumed read-only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEvent {
    pub key_code: u32,
    pub meta: bool,
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
}

impl KeyEvent {
    pub fn new(key_code: u32) -> Self {
        Self {
            key_code,
            ..Self::default()
        }
    }

    pub fn with_meta(mut self) -> Self {
        self.meta = true;
        self
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }

    pub fn with_alt(mut self) -> Self {
        self.alt = true;
        self
    }
}

/// Modifier-key convention of the host platform.
///
/// On macOS the meta constraint means the Cmd key alone; elsewhere Ctrl is
/// accepted as the meta equivalent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Platform {
    MacOs,
    Other,
}

impl Platform {
    /// The platform this binary was built for.
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Platform::MacOs
        } else {
            Platform::Other
        }
    }

    /// The effective "meta" signal of an event under this convention.
    #[inline]
    pub fn meta_signal(self, event: &KeyEvent) -> bool {
        match self {
            Platform::MacOs => event.meta,
            Platform::Other => event.meta || event.ctrl,
        }
    }
}
