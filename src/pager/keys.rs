//! Key bindings for pager navigation.
//!
//! - **Cursor Movement**: `↑` (up), `↓` (down)
//! - **Stop**: `ctrl+c` detaches from input and resets the surface
//!
//! Any other key is reported to keypress observers and otherwise ignored.

use crate::key::{self, Binding};

/// Key bindings the pager dispatches on.
#[derive(Debug, Clone)]
pub struct PagerKeyMap {
    /// Move the selection up one item.
    pub cursor_up: Binding,
    /// Move the selection down one item.
    pub cursor_down: Binding,
    /// Stop the pager.
    pub force_quit: Binding,
}

impl Default for PagerKeyMap {
    fn default() -> Self {
        Self {
            cursor_up: Binding::new(&["up"]).with_help("↑", "up"),
            cursor_down: Binding::new(&["down"]).with_help("↓", "down"),
            force_quit: Binding::new(&["ctrl+c"]).with_help("ctrl+c", "quit"),
        }
    }
}

impl key::KeyMap for PagerKeyMap {
    fn short_help(&self) -> Vec<&Binding> {
        vec![&self.cursor_up, &self.cursor_down, &self.force_quit]
    }

    fn full_help(&self) -> Vec<Vec<&Binding>> {
        vec![
            vec![&self.cursor_up, &self.cursor_down],
            vec![&self.force_quit],
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::short_help_view;

    #[test]
    fn test_short_help_view() {
        let keymap = PagerKeyMap::default();
        assert_eq!(short_help_view(&keymap), "↑ up • ↓ down • ctrl+c quit");
    }
}
