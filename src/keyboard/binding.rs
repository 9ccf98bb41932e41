//! Binding: a canonical key constraint, and the specs that normalize into it

use std::fmt;

use serde::{Deserialize, Serialize};

use super::types::{keys, TriState};

/// A normalized key constraint: a resolved key code plus one tri-state
/// constraint per modifier.
///
/// Bindings are immutable value records; the registry never shares state
/// with caller-supplied specs, so later caller-side mutation cannot corrupt
/// a stored binding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Binding {
    /// Always a resolved integer key code, never a raw character.
    pub key_code: u32,
    /// Cmd on macOS; Cmd-or-Ctrl elsewhere. See [`super::Platform`].
    pub meta_or_ctrl: TriState,
    pub shift: TriState,
    pub alt: TriState,
}

impl Binding {
    /// A binding on a bare key code, indifferent to all modifiers.
    pub const fn from_code(key_code: u32) -> Self {
        Self {
            key_code,
            meta_or_ctrl: TriState::Indifferent,
            shift: TriState::Indifferent,
            alt: TriState::Indifferent,
        }
    }

    /// A binding on a character key, indifferent to all modifiers.
    pub fn from_char(c: char) -> Self {
        Self::from_code(char_code(c))
    }

    /// Require the platform meta chord (builder pattern).
    pub const fn with_meta(mut self) -> Self {
        self.meta_or_ctrl = TriState::Required;
        self
    }

    pub const fn with_shift(mut self) -> Self {
        self.shift = TriState::Required;
        self
    }

    pub const fn with_alt(mut self) -> Self {
        self.alt = TriState::Required;
        self
    }
}

impl fmt::Display for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.meta_or_ctrl == TriState::Required {
            write!(f, "Meta+")?;
        }
        if self.shift == TriState::Required {
            write!(f, "Shift+")?;
        }
        if self.alt == TriState::Required {
            write!(f, "Alt+")?;
        }
        if let Some(name) = keys::name(self.key_code) {
            write!(f, "{}", name)
        } else if let Some(c) = char::from_u32(self.key_code).filter(|c| c.is_ascii_graphic()) {
            write!(f, "{}", c)
        } else {
            write!(f, "#{}", self.key_code)
        }
    }
}

/// The key part of a partial binding spec.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeySpec {
    /// A literal character; uppercased and resolved to its char code.
    Char(char),
    /// An already-resolved key code.
    Code(u32),
}

impl KeySpec {
    fn resolve(self) -> u32 {
        match self {
            KeySpec::Char(c) => char_code(c),
            KeySpec::Code(code) => code,
        }
    }
}

/// A heterogeneous binding specification, before normalization.
///
/// Callers usually build these through the `From` impls:
///
/// ```
/// use vellum::{keys, BindingSpec, TriState};
///
/// let binding = BindingSpec::from('b').normalize().unwrap();
/// assert_eq!(binding.key_code, u32::from('B'));
///
/// let binding = BindingSpec::from("enter").normalize().unwrap();
/// assert_eq!(binding.key_code, keys::ENTER);
/// assert_eq!(binding.shift, TriState::Indifferent);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BindingSpec {
    /// A literal one-character key, modifiers indifferent.
    Char(char),
    /// A named key from the [`keys`] table, resolved case-insensitively.
    /// One-character names fall back to the literal key.
    Named(String),
    /// A raw key code, modifiers indifferent.
    Code(u32),
    /// A key plus explicit modifier constraints. `None` means indifferent.
    Partial {
        key: KeySpec,
        meta_or_ctrl: Option<bool>,
        shift: Option<bool>,
        alt: Option<bool>,
    },
    /// An already-canonical binding, returned unchanged.
    Exact(Binding),
}

impl BindingSpec {
    /// Convert this spec into a canonical [`Binding`].
    ///
    /// Returns `None` for an unrecognized named key; callers must treat that
    /// as invalid and register nothing. Normalization is idempotent: feeding
    /// the result back through [`BindingSpec::Exact`] yields the same value.
    pub fn normalize(&self) -> Option<Binding> {
        match self {
            BindingSpec::Char(c) => Some(Binding::from_char(*c)),
            BindingSpec::Named(name) => {
                if let Some(code) = keys::code(name) {
                    return Some(Binding::from_code(code));
                }
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Some(Binding::from_char(c)),
                    _ => None,
                }
            }
            BindingSpec::Code(code) => Some(Binding::from_code(*code)),
            BindingSpec::Partial {
                key,
                meta_or_ctrl,
                shift,
                alt,
            } => Some(Binding {
                key_code: key.resolve(),
                meta_or_ctrl: TriState::from(*meta_or_ctrl),
                shift: TriState::from(*shift),
                alt: TriState::from(*alt),
            }),
            BindingSpec::Exact(binding) => Some(*binding),
        }
    }

    /// A partial spec on a character key (builder entry point).
    pub fn key(c: char) -> Self {
        BindingSpec::Partial {
            key: KeySpec::Char(c),
            meta_or_ctrl: None,
            shift: None,
            alt: None,
        }
    }

    /// A partial spec on a key code (builder entry point).
    pub fn key_code(code: u32) -> Self {
        BindingSpec::Partial {
            key: KeySpec::Code(code),
            meta_or_ctrl: None,
            shift: None,
            alt: None,
        }
    }

    /// Constrain the platform meta chord. `false` forbids it.
    pub fn meta(self, required: bool) -> Self {
        let mut spec = self.into_partial();
        if let BindingSpec::Partial {
            ref mut meta_or_ctrl,
            ..
        } = spec
        {
            *meta_or_ctrl = Some(required);
        }
        spec
    }

    pub fn shift(self, required: bool) -> Self {
        let mut spec = self.into_partial();
        if let BindingSpec::Partial { ref mut shift, .. } = spec {
            *shift = Some(required);
        }
        spec
    }

    pub fn alt(self, required: bool) -> Self {
        let mut spec = self.into_partial();
        if let BindingSpec::Partial { ref mut alt, .. } = spec {
            *alt = Some(required);
        }
        spec
    }

    /// Promote any resolvable spec to the partial form so the modifier
    /// builders apply. Unresolvable specs are returned unchanged.
    fn into_partial(self) -> Self {
        if let BindingSpec::Partial { .. } = self {
            return self;
        }
        match self.normalize() {
            Some(binding) => BindingSpec::Partial {
                key: KeySpec::Code(binding.key_code),
                meta_or_ctrl: as_option(binding.meta_or_ctrl),
                shift: as_option(binding.shift),
                alt: as_option(binding.alt),
            },
            None => self,
        }
    }
}

impl From<char> for BindingSpec {
    fn from(c: char) -> Self {
        BindingSpec::Char(c)
    }
}

impl From<u32> for BindingSpec {
    fn from(code: u32) -> Self {
        BindingSpec::Code(code)
    }
}

impl From<&str> for BindingSpec {
    fn from(name: &str) -> Self {
        BindingSpec::Named(name.to_string())
    }
}

impl From<String> for BindingSpec {
    fn from(name: String) -> Self {
        BindingSpec::Named(name)
    }
}

impl From<Binding> for BindingSpec {
    fn from(binding: Binding) -> Self {
        BindingSpec::Exact(binding)
    }
}

/// Uppercase a character and resolve it to its key code, the way the event
/// source reports letter keys.
fn char_code(c: char) -> u32 {
    c.to_uppercase().next().unwrap_or(c) as u32
}

fn as_option(state: TriState) -> Option<bool> {
    match state {
        TriState::Required => Some(true),
        TriState::Forbidden => Some(false),
        TriState::Indifferent => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_spec_uppercases() {
        let binding = BindingSpec::from('b').normalize().unwrap();
        assert_eq!(binding.key_code, u32::from('B'));
        assert_eq!(binding.meta_or_ctrl, TriState::Indifferent);
        assert_eq!(binding.shift, TriState::Indifferent);
        assert_eq!(binding.alt, TriState::Indifferent);
    }

    #[test]
    fn test_named_spec_resolves_constants() {
        let binding = BindingSpec::from("backspace").normalize().unwrap();
        assert_eq!(binding.key_code, keys::BACKSPACE);

        let binding = BindingSpec::from("TAB").normalize().unwrap();
        assert_eq!(binding.key_code, keys::TAB);
    }

    #[test]
    fn test_one_char_name_falls_back_to_literal() {
        let binding = BindingSpec::from("x").normalize().unwrap();
        assert_eq!(binding.key_code, u32::from('X'));
    }

    #[test]
    fn test_unknown_multi_char_name_is_invalid() {
        assert_eq!(BindingSpec::from("bogus").normalize(), None);
        assert_eq!(BindingSpec::from("F13").normalize(), None);
    }

    #[test]
    fn test_code_spec() {
        let binding = BindingSpec::from(13u32).normalize().unwrap();
        assert_eq!(binding.key_code, 13);
        assert_eq!(binding.shift, TriState::Indifferent);
    }

    #[test]
    fn test_partial_spec_modifiers() {
        let spec = BindingSpec::Partial {
            key: KeySpec::Char('b'),
            meta_or_ctrl: Some(true),
            shift: Some(false),
            alt: None,
        };
        let binding = spec.normalize().unwrap();
        assert_eq!(binding.key_code, u32::from('B'));
        assert_eq!(binding.meta_or_ctrl, TriState::Required);
        assert_eq!(binding.shift, TriState::Forbidden);
        assert_eq!(binding.alt, TriState::Indifferent);
    }

    #[test]
    fn test_builder_spec() {
        let binding = BindingSpec::key('b').meta(true).normalize().unwrap();
        assert_eq!(binding.key_code, u32::from('B'));
        assert_eq!(binding.meta_or_ctrl, TriState::Required);
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let specs = [
            BindingSpec::from('b'),
            BindingSpec::from("enter"),
            BindingSpec::from(46u32),
            BindingSpec::key('i').meta(true).shift(false),
        ];
        for spec in specs {
            let once = spec.normalize().unwrap();
            let twice = BindingSpec::from(once).normalize().unwrap();
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_display() {
        let binding = BindingSpec::key('b').meta(true).normalize().unwrap();
        assert_eq!(binding.to_string(), "Meta+B");

        let binding = BindingSpec::from("enter").normalize().unwrap();
        assert_eq!(binding.to_string(), "Enter");

        let binding = BindingSpec::key_code(keys::TAB)
            .shift(true)
            .normalize()
            .unwrap();
        assert_eq!(binding.to_string(), "Shift+Tab");
    }
}
