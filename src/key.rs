//! Type-safe key bindings for table interaction.
//!
//! A [`Binding`] groups one or more key combinations under a single action,
//! together with help text for display in a help view. Components collect
//! their bindings in a keymap struct implementing the [`KeyMap`] trait so
//! hosts can render short or full help listings.
//!
//! # Examples
//!
//! ```rust
//! use bubbletea_datatable::key::Binding;
//! use crossterm::event::{KeyCode, KeyModifiers};
//!
//! let select_all = Binding::new(vec![(KeyCode::Char('a'), KeyModifiers::CONTROL)])
//!     .with_help("ctrl+a", "select all");
//! let activate = Binding::new(vec![KeyCode::Enter])
//!     .with_help("enter", "open row");
//! ```

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// A single key combination: a key code plus its modifier set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    /// The key code of the combination.
    pub code: KeyCode,
    /// Modifier keys that must be held.
    pub mods: KeyModifiers,
}

impl From<KeyCode> for KeyPress {
    fn from(code: KeyCode) -> Self {
        Self {
            code,
            mods: KeyModifiers::NONE,
        }
    }
}

impl From<(KeyCode, KeyModifiers)> for KeyPress {
    fn from((code, mods): (KeyCode, KeyModifiers)) -> Self {
        Self { code, mods }
    }
}

/// Help text describing a binding: the key label and what it does.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// Short key label, e.g. `"↑/k"`.
    pub key: String,
    /// Action description, e.g. `"up"`.
    pub desc: String,
}

/// A named action bound to one or more key combinations.
///
/// Bindings can be disabled at runtime; a disabled binding never matches
/// and is skipped by help rendering.
#[derive(Debug, Clone)]
pub struct Binding {
    keys: Vec<KeyPress>,
    help: Help,
    disabled: bool,
}

impl Binding {
    /// Creates a binding for the given key combinations.
    ///
    /// Accepts plain [`KeyCode`]s or `(KeyCode, KeyModifiers)` tuples.
    pub fn new<K: Into<KeyPress>>(keys: Vec<K>) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            help: Help::default(),
            disabled: false,
        }
    }

    /// Attaches help text to the binding.
    pub fn with_help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Help {
            key: key.into(),
            desc: desc.into(),
        };
        self
    }

    /// Disables or enables the binding.
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Returns the bound key combinations.
    pub fn keys(&self) -> &[KeyPress] {
        &self.keys
    }

    /// Returns the help text for this binding.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// Whether the binding is currently active.
    pub fn enabled(&self) -> bool {
        !self.disabled && !self.keys.is_empty()
    }

    /// Whether a received key message triggers this binding.
    ///
    /// Shift is ignored when comparing character keys, since terminals
    /// already encode it in the character's case.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        if !self.enabled() {
            return false;
        }
        self.keys.iter().any(|kp| {
            if kp.code != msg.key {
                return false;
            }
            let (mut want, mut got) = (kp.mods, msg.modifiers);
            if matches!(kp.code, KeyCode::Char(_)) {
                want.remove(KeyModifiers::SHIFT);
                got.remove(KeyModifiers::SHIFT);
            }
            want == got
        })
    }
}

/// Trait for keymaps that can describe themselves in a help view.
pub trait KeyMap {
    /// The most important bindings, for a one-line help bar.
    fn short_help(&self) -> Vec<&Binding>;

    /// All bindings, grouped into columns for a full help view.
    fn full_help(&self) -> Vec<Vec<&Binding>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, mods: KeyModifiers) -> KeyMsg {
        KeyMsg {
            key: code,
            modifiers: mods,
        }
    }

    #[test]
    fn test_matches_plain_key() {
        let b = Binding::new(vec![KeyCode::Up, KeyCode::Char('k')]);
        assert!(b.matches(&key(KeyCode::Up, KeyModifiers::NONE)));
        assert!(b.matches(&key(KeyCode::Char('k'), KeyModifiers::NONE)));
        assert!(!b.matches(&key(KeyCode::Down, KeyModifiers::NONE)));
    }

    #[test]
    fn test_matches_requires_modifiers() {
        let b = Binding::new(vec![(KeyCode::Char('a'), KeyModifiers::CONTROL)]);
        assert!(b.matches(&key(KeyCode::Char('a'), KeyModifiers::CONTROL)));
        assert!(!b.matches(&key(KeyCode::Char('a'), KeyModifiers::NONE)));
    }

    #[test]
    fn test_shift_ignored_for_chars() {
        // 'G' usually arrives with an explicit SHIFT modifier
        let b = Binding::new(vec![KeyCode::Char('G')]);
        assert!(b.matches(&key(KeyCode::Char('G'), KeyModifiers::SHIFT)));
        assert!(b.matches(&key(KeyCode::Char('G'), KeyModifiers::NONE)));
    }

    #[test]
    fn test_disabled_never_matches() {
        let b = Binding::new(vec![KeyCode::Enter]).with_disabled(true);
        assert!(!b.matches(&key(KeyCode::Enter, KeyModifiers::NONE)));
        assert!(!b.enabled());
    }
}
