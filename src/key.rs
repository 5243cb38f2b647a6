//! Decoded key presses and key bindings.
//!
//! The pager dispatches on a logical key *name* plus modifier flags rather than
//! on raw terminal codes. [`KeyPress`] is that descriptor. It can be built from a
//! crossterm [`KeyEvent`], from a bubbletea-rs [`KeyMsg`], or parsed from a
//! string such as `"ctrl+c"`.
//!
//! ```rust
//! use list_pager::key::{Binding, KeyPress};
//!
//! let quit = Binding::new(&["ctrl+c"]).with_help("ctrl+c", "quit");
//! assert!(quit.matches(&KeyPress::parse("ctrl+c")));
//! assert!(!quit.matches(&KeyPress::parse("c")));
//! ```

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// A decoded key press: a logical name and modifier flags.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyPress {
    /// Logical key name, e.g. `"up"`, `"return"`, `"c"`.
    pub name: String,
    /// Control modifier.
    pub ctrl: bool,
    /// Alt/meta modifier.
    pub meta: bool,
    /// Shift modifier. Set for uppercase letters even when the terminal
    /// does not report the modifier separately.
    pub shift: bool,
}

impl KeyPress {
    /// Creates an unmodified key press with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ctrl: false,
            meta: false,
            shift: false,
        }
    }

    /// Sets the control modifier (builder pattern).
    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    /// Parses a descriptor like `"down"`, `"ctrl+c"` or `"alt+shift+x"`.
    ///
    /// Modifier prefixes are case-insensitive and may be combined in any order.
    /// The last `+`-separated segment is the key name.
    ///
    /// ```rust
    /// use list_pager::key::KeyPress;
    ///
    /// let key = KeyPress::parse("ctrl+c");
    /// assert_eq!(key.name, "c");
    /// assert!(key.ctrl);
    /// assert!(!key.meta);
    /// ```
    pub fn parse(s: &str) -> Self {
        let mut parts: Vec<&str> = s.split('+').collect();
        // "ctrl++" style descriptors name the plus key itself
        let name = match parts.pop() {
            Some("") if s.ends_with("++") => {
                parts.pop();
                "+"
            }
            Some(name) => name,
            None => "",
        };

        let mut key = Self::new(name.to_lowercase());
        for modifier in parts {
            match modifier.to_ascii_lowercase().as_str() {
                "ctrl" | "control" => key.ctrl = true,
                "alt" | "meta" => key.meta = true,
                "shift" => key.shift = true,
                _ => {}
            }
        }
        key
    }

    /// Decodes a crossterm key event.
    ///
    /// Returns `None` for key releases and for codes that have no logical name,
    /// such as punctuation or media keys. Those events carry no descriptor and
    /// the pager drops them.
    pub fn from_key_event(event: &KeyEvent) -> Option<Self> {
        if event.kind == KeyEventKind::Release {
            return None;
        }
        Self::from_code(event.code, event.modifiers)
    }

    /// Decodes a bubbletea-rs key message.
    pub fn from_key_msg(msg: &KeyMsg) -> Option<Self> {
        Self::from_code(msg.key, msg.modifiers)
    }

    fn from_code(code: KeyCode, modifiers: KeyModifiers) -> Option<Self> {
        let mut shift = modifiers.contains(KeyModifiers::SHIFT);
        let name = match code {
            KeyCode::Up => "up".to_string(),
            KeyCode::Down => "down".to_string(),
            KeyCode::Left => "left".to_string(),
            KeyCode::Right => "right".to_string(),
            KeyCode::Enter => "return".to_string(),
            KeyCode::Esc => "escape".to_string(),
            KeyCode::Tab => "tab".to_string(),
            KeyCode::BackTab => {
                shift = true;
                "tab".to_string()
            }
            KeyCode::Backspace => "backspace".to_string(),
            KeyCode::Delete => "delete".to_string(),
            KeyCode::Insert => "insert".to_string(),
            KeyCode::Home => "home".to_string(),
            KeyCode::End => "end".to_string(),
            KeyCode::PageUp => "pageup".to_string(),
            KeyCode::PageDown => "pagedown".to_string(),
            KeyCode::F(n) => format!("f{n}"),
            KeyCode::Char(' ') => "space".to_string(),
            KeyCode::Char(c) if c.is_ascii_alphanumeric() => {
                if c.is_ascii_uppercase() {
                    shift = true;
                }
                c.to_ascii_lowercase().to_string()
            }
            _ => return None,
        };

        Some(Self {
            name,
            ctrl: modifiers.contains(KeyModifiers::CONTROL),
            meta: modifiers.contains(KeyModifiers::ALT),
            shift,
        })
    }
}

/// A set of key patterns that trigger one action, with help text.
#[derive(Debug, Clone)]
pub struct Binding {
    keys: Vec<KeyPress>,
    /// Short key label for help output, e.g. `"↑"`.
    pub help: String,
    /// Description of the action, e.g. `"up"`.
    pub description: String,
}

impl Binding {
    /// Creates a binding from key descriptors such as `"up"` or `"ctrl+c"`.
    pub fn new(keys: &[&str]) -> Self {
        Self {
            keys: keys.iter().map(|k| KeyPress::parse(k)).collect(),
            help: String::new(),
            description: String::new(),
        }
    }

    /// Attaches help text (builder pattern).
    pub fn with_help(mut self, help: impl Into<String>, description: impl Into<String>) -> Self {
        self.help = help.into();
        self.description = description.into();
        self
    }

    /// The key patterns of this binding.
    pub fn keys(&self) -> &[KeyPress] {
        &self.keys
    }

    /// Reports whether `key` triggers this binding.
    ///
    /// Names must be equal. A pattern that requires a modifier only matches
    /// keys with that modifier set; a pattern without modifiers matches the
    /// name regardless of modifiers.
    pub fn matches(&self, key: &KeyPress) -> bool {
        self.keys.iter().any(|pattern| {
            pattern.name == key.name
                && (!pattern.ctrl || key.ctrl)
                && (!pattern.meta || key.meta)
                && (!pattern.shift || key.shift)
        })
    }
}

/// Components that can describe their key bindings for help output.
pub trait KeyMap {
    /// Bindings for a compact, single-line help view.
    fn short_help(&self) -> Vec<&Binding>;

    /// Bindings grouped into columns for an expanded help view.
    fn full_help(&self) -> Vec<Vec<&Binding>>;
}

/// Renders bindings as `"key desc • key desc"` for a footer line.
pub fn short_help_view(map: &impl KeyMap) -> String {
    map.short_help()
        .iter()
        .map(|b| format!("{} {}", b.help, b.description))
        .collect::<Vec<_>>()
        .join(" • ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_arrow_keys_decode_to_names() {
        let up = KeyPress::from_key_event(&press(KeyCode::Up, KeyModifiers::NONE)).unwrap();
        assert_eq!(up.name, "up");
        assert!(!up.ctrl);

        let down = KeyPress::from_key_event(&press(KeyCode::Down, KeyModifiers::NONE)).unwrap();
        assert_eq!(down.name, "down");
    }

    #[test]
    fn test_ctrl_c_sets_control_flag() {
        let key =
            KeyPress::from_key_event(&press(KeyCode::Char('c'), KeyModifiers::CONTROL)).unwrap();
        assert_eq!(key.name, "c");
        assert!(key.ctrl);
    }

    #[test]
    fn test_uppercase_letter_sets_shift() {
        let key = KeyPress::from_key_event(&press(KeyCode::Char('G'), KeyModifiers::NONE)).unwrap();
        assert_eq!(key.name, "g");
        assert!(key.shift);
    }

    #[test]
    fn test_undecodable_codes_yield_none() {
        assert!(KeyPress::from_key_event(&press(KeyCode::Char('/'), KeyModifiers::NONE)).is_none());
        assert!(KeyPress::from_key_event(&press(KeyCode::Null, KeyModifiers::NONE)).is_none());
    }

    #[test]
    fn test_release_events_are_dropped() {
        let mut event = press(KeyCode::Up, KeyModifiers::NONE);
        event.kind = KeyEventKind::Release;
        assert!(KeyPress::from_key_event(&event).is_none());
    }

    #[test]
    fn test_key_msg_conversion() {
        let msg = KeyMsg {
            key: KeyCode::Enter,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(KeyPress::from_key_msg(&msg), Some(KeyPress::new("return")));
    }

    #[test]
    fn test_parse_modifiers() {
        let key = KeyPress::parse("Alt+Shift+X");
        assert_eq!(key.name, "x");
        assert!(key.meta);
        assert!(key.shift);
        assert!(!key.ctrl);

        assert_eq!(KeyPress::parse("ctrl++").name, "+");
    }

    #[test]
    fn test_binding_requires_pattern_modifiers() {
        let quit = Binding::new(&["ctrl+c"]);
        assert!(quit.matches(&KeyPress::new("c").with_ctrl()));
        assert!(!quit.matches(&KeyPress::new("c")));

        // Unmodified patterns match regardless of modifiers.
        let up = Binding::new(&["up"]);
        assert!(up.matches(&KeyPress::new("up").with_ctrl()));
        assert!(!up.matches(&KeyPress::new("down")));
    }
}
