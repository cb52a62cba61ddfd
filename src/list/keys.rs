//! Key bindings for the list view.
//!
//! Page navigation keys live on the embedded paginator
//! ([`crate::paginator::PaginatorKeyMap`]); the list itself only binds the
//! keys that touch list state directly.
//!
//! ```rust
//! use roster_widgets::list::ListKeyMap;
//! use roster_widgets::key::KeyMap;
//!
//! let keymap = ListKeyMap::default();
//! assert_eq!(keymap.short_help().len(), 1);
//! ```

use crate::key;

/// Key bindings owned by the list view.
#[derive(Debug, Clone)]
pub struct ListKeyMap {
    /// Clear the active search query. Default key: Esc
    pub clear_search: key::Binding,
}

impl Default for ListKeyMap {
    fn default() -> Self {
        Self {
            clear_search: key::new_binding(vec![
                key::with_keys_str(&["esc"]),
                key::with_help("esc", "clear search"),
            ]),
        }
    }
}

impl key::KeyMap for ListKeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![&self.clear_search]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![vec![&self.clear_search]]
    }
}
