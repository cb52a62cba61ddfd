//! Key bindings for keyboard-driven components.
//!
//! A [`Binding`] groups one or more key presses under a single action and
//! carries the help text shown to the user. Components expose their bindings
//! through a [`KeyMap`] so help views can be built from them.
//!
//! ```rust
//! use roster_widgets::key;
//! use bubbletea_rs::KeyMsg;
//! use crossterm::event::{KeyCode, KeyModifiers};
//!
//! let next = key::new_binding(vec![
//!     key::with_keys_str(&["right", "l"]),
//!     key::with_help("→/l", "next page"),
//! ]);
//!
//! let msg = KeyMsg { key: KeyCode::Char('l'), modifiers: KeyModifiers::NONE };
//! assert!(next.matches(&msg));
//! assert_eq!(next.help().key, "→/l");
//! ```

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// A single key press: a key code plus the modifiers held with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    /// The key itself.
    pub code: KeyCode,
    /// Modifiers that must be held.
    pub modifiers: KeyModifiers,
}

impl From<KeyCode> for KeyPress {
    fn from(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }
}

impl From<(KeyCode, KeyModifiers)> for KeyPress {
    fn from((code, modifiers): (KeyCode, KeyModifiers)) -> Self {
        Self { code, modifiers }
    }
}

/// Help text for a binding, e.g. `("→/l", "next page")`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// Short label for the keys.
    pub key: String,
    /// What the binding does.
    pub desc: String,
}

/// A named action bound to one or more key presses.
#[derive(Debug, Clone, Default)]
pub struct Binding {
    keys: Vec<KeyPress>,
    help: Help,
    disabled: bool,
}

/// Option applied by [`new_binding`].
pub type BindingOpt = Box<dyn FnOnce(&mut Binding)>;

impl Binding {
    /// Creates a binding from raw key presses.
    pub fn new<K: Into<KeyPress>>(keys: Vec<K>) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            help: Help::default(),
            disabled: false,
        }
    }

    /// Sets the help text (builder pattern).
    pub fn with_help(mut self, key: &str, desc: &str) -> Self {
        self.help = Help {
            key: key.to_string(),
            desc: desc.to_string(),
        };
        self
    }

    /// Returns the key presses of this binding.
    pub fn keys(&self) -> &[KeyPress] {
        &self.keys
    }

    /// Returns the help text.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// Enables or disables the binding. Disabled bindings never match.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }

    /// Returns true unless the binding was disabled or has no keys.
    pub fn enabled(&self) -> bool {
        !self.disabled && !self.keys.is_empty()
    }

    /// Returns true if the key message triggers this binding.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        self.enabled()
            && self
                .keys
                .iter()
                .any(|k| k.code == msg.key && k.modifiers == msg.modifiers)
    }
}

/// Builds a binding from a list of options.
pub fn new_binding(opts: Vec<BindingOpt>) -> Binding {
    let mut binding = Binding::default();
    for opt in opts {
        opt(&mut binding);
    }
    binding
}

/// Option: bind the given key presses.
pub fn with_keys<K: Into<KeyPress>>(keys: Vec<K>) -> BindingOpt {
    let keys: Vec<KeyPress> = keys.into_iter().map(Into::into).collect();
    Box::new(move |b| b.keys = keys)
}

/// Option: bind keys by name (`"left"`, `"pgdown"`, `"esc"`, `"ctrl+c"`, `"h"`).
///
/// Unknown names are skipped.
pub fn with_keys_str(names: &[&str]) -> BindingOpt {
    let keys: Vec<KeyPress> = names.iter().filter_map(|n| parse_key(n)).collect();
    Box::new(move |b| b.keys = keys)
}

/// Option: set the help text.
pub fn with_help(key: &str, desc: &str) -> BindingOpt {
    let help = Help {
        key: key.to_string(),
        desc: desc.to_string(),
    };
    Box::new(move |b| b.help = help)
}

/// Option: create the binding disabled.
pub fn with_disabled() -> BindingOpt {
    Box::new(|b| b.disabled = true)
}

fn parse_key(name: &str) -> Option<KeyPress> {
    if let Some(rest) = name.strip_prefix("ctrl+") {
        return parse_key(rest).map(|k| KeyPress {
            code: k.code,
            modifiers: k.modifiers | KeyModifiers::CONTROL,
        });
    }

    let code = match name {
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pgup" => KeyCode::PageUp,
        "pgdown" => KeyCode::PageDown,
        "enter" => KeyCode::Enter,
        "esc" => KeyCode::Esc,
        "tab" => KeyCode::Tab,
        "backspace" => KeyCode::Backspace,
        "space" => KeyCode::Char(' '),
        other => {
            let mut chars = other.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeyCode::Char(c),
                _ => return None,
            }
        }
    };
    Some(code.into())
}

/// Implemented by components that expose key bindings for help views.
pub trait KeyMap {
    /// Bindings for the compact, single-line help.
    fn short_help(&self) -> Vec<&Binding>;
    /// Bindings grouped into columns for the expanded help.
    fn full_help(&self) -> Vec<Vec<&Binding>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyMsg {
        KeyMsg {
            key: code,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_with_keys_str_parses_names() {
        let b = new_binding(vec![with_keys_str(&["pgup", "left", "h", "bogus"])]);
        assert_eq!(b.keys().len(), 3);
        assert!(b.matches(&press(KeyCode::PageUp)));
        assert!(b.matches(&press(KeyCode::Left)));
        assert!(b.matches(&press(KeyCode::Char('h'))));
        assert!(!b.matches(&press(KeyCode::Right)));
    }

    #[test]
    fn test_modifiers_must_match() {
        let b = new_binding(vec![with_keys_str(&["ctrl+c"])]);
        assert!(!b.matches(&press(KeyCode::Char('c'))));
        assert!(b.matches(&KeyMsg {
            key: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
        }));
    }

    #[test]
    fn test_disabled_binding_never_matches() {
        let mut b = new_binding(vec![with_keys_str(&["l"]), with_disabled()]);
        assert!(!b.matches(&press(KeyCode::Char('l'))));
        b.set_enabled(true);
        assert!(b.matches(&press(KeyCode::Char('l'))));
    }

    #[test]
    fn test_binding_new_with_help() {
        let b = Binding::new(vec![KeyCode::Enter]).with_help("enter", "select");
        assert_eq!(b.help().desc, "select");
        assert!(b.matches(&press(KeyCode::Enter)));
    }
}
