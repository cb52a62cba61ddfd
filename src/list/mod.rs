//! Searchable, paginated record list.
//!
//! This module exposes a generic `Model<R: Record>` plus supporting traits and submodules:
//! - `Record`: Implement for your record type; gives an id and the searchable fields
//! - `RowDelegate`: Turns a record into table cells
//! - Submodules: `delegate`, `keys`, and `style`
//!
//! ## Page state
//!
//! The list owns the current page and page size. The embedded
//! [`paginator::Model`](crate::paginator::Model) only receives copies of that
//! state and answers key presses with [`PageRequest`](crate::paginator::PageRequest)
//! intents, which the list validates and applies. Three events re-derive the
//! filtered set and the page count:
//!
//! - a query change, which always returns to page 1
//! - a page-size change, which always returns to page 1
//! - a collection change, which keeps the page unless it no longer exists
//!
//! ## Searching
//!
//! A query matches a record when any searchable field contains it,
//! ignoring case. Absent fields never match.
//!
//! ### Help Integration
//! The list implements `key::KeyMap`, combining its own bindings with the
//! paginator's, so a help view can list every active key.

/// Ready-made row delegates.
///
/// - `DefaultDelegate`: id plus every searchable field
/// - `ColumnDelegate`: explicit columns with computed values
pub mod delegate;

/// Key bindings owned by the list.
pub mod keys;

/// Visual styling for list components.
pub mod style;

// Internal modules
mod api;
mod filtering;
mod model;
mod rendering;
mod types;


pub use api::Snapshot;
pub use delegate::{Column, ColumnDelegate, DefaultDelegate};
pub use keys::ListKeyMap;
pub use model::Model;
pub use style::ListStyles;
pub use types::{FieldAccessor, Record, RowDelegate, SearchField};

use crate::key;
use bubbletea_rs::{KeyMsg, Msg};

impl<R: Record> key::KeyMap for Model<R> {
    fn short_help(&self) -> Vec<&key::Binding> {
        let pager = &self.paginator.keymap;
        let mut bindings = vec![&pager.prev_page, &pager.next_page];
        if !self.query.is_empty() {
            bindings.push(&self.keymap.clear_search);
        }
        bindings
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        let pager = &self.paginator.keymap;
        vec![
            vec![
                &pager.prev_page,
                &pager.next_page,
                &pager.first_page,
                &pager.last_page,
            ],
            vec![
                &pager.larger_page_size,
                &pager.smaller_page_size,
                &self.keymap.clear_search,
            ],
        ]
    }
}

impl<R: Record + 'static> Model<R> {
    /// Handles a message.
    ///
    /// Key presses go to the paginator first; its request, if any, is
    /// applied to the list. Otherwise the clear-search binding is checked.
    /// Returns true if the list state changed.
    ///
    /// # Examples
    ///
    /// ```
    /// use bubbletea_rs::{KeyMsg, Msg};
    /// use crossterm::event::{KeyCode, KeyModifiers};
    /// use roster_widgets::employee::Employee;
    /// use roster_widgets::list::Model;
    ///
    /// let mut list = Model::new((1..=30).map(|i| Employee::new(i, "x")).collect());
    ///
    /// let end: Msg = Box::new(KeyMsg { key: KeyCode::End, modifiers: KeyModifiers::NONE });
    /// assert!(list.update(&end));
    /// assert_eq!(list.current_page(), 3);
    /// ```
    pub fn update(&mut self, msg: &Msg) -> bool {
        let Some(key_msg) = msg.downcast_ref::<KeyMsg>() else {
            return false;
        };

        if let Some(request) = self.paginator.update(msg) {
            let before = (self.current_page, self.per_page);
            if let Err(err) = self.apply(request) {
                tracing::warn!(?request, %err, "paginator request rejected");
                return false;
            }
            return before != (self.current_page, self.per_page);
        }

        if self.keymap.clear_search.matches(key_msg) && !self.query.is_empty() {
            self.clear_search();
            return true;
        }

        false
    }

    /// Renders the complete list: title, results counter, table and
    /// pagination.
    ///
    /// ```
    /// use lipgloss_extras::lipgloss::strip_ansi;
    /// use roster_widgets::employee::Employee;
    /// use roster_widgets::list::Model;
    ///
    /// let list = Model::new(vec![Employee::new(1, "Ada Lovelace")]).with_title("Staff");
    /// let view = strip_ansi(&list.view());
    ///
    /// assert!(view.contains("Staff"));
    /// assert!(view.contains("Ada Lovelace"));
    /// assert!(view.contains("Showing 1-1 of 1"));
    /// ```
    pub fn view(&self) -> String {
        let mut sections = vec![self.view_header()];

        let search_info = self.view_search_info();
        if !search_info.is_empty() {
            sections.push(search_info);
        }

        sections.push(self.view_table());

        let pagination = self.view_pagination();
        if !pagination.is_empty() {
            sections.push(pagination);
        }

        sections.join("\n\n")
    }
}
