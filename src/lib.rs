#![warn(missing_docs)]

//! # roster-widgets
//!
//! Terminal widgets for browsing a record collection with search and
//! pagination, built for [bubbletea-rs](https://github.com/joshka/bubbletea-rs)
//! applications.
//!
//! ## Overview
//!
//! The crate has two cooperating components:
//!
//! - [`list::Model`] owns a collection of [`list::Record`]s, a search query
//!   and the pagination state. It filters, slices and renders the current page.
//! - [`paginator::Model`] computes the compact page window
//!   (`1 … 9 [10] 11 … 20`), navigation availability and the rows-per-page
//!   selector. It never mutates state; it answers input with
//!   [`paginator::PageRequest`]s that the list validates and applies.
//!
//! [`employee::Employee`] is a ready-made record type and
//! [`dashboard::Stats`] summarizes a collection of them.
//!
//! ## Quick Start
//!
//! ```rust
//! use roster_widgets::prelude::*;
//!
//! let employees = vec![
//!     Employee::new(1, "Ada Lovelace").with_department("Research"),
//!     Employee::new(2, "Alan Turing").with_department("Cryptography"),
//! ];
//!
//! let mut list = List::new(employees)
//!     .with_title("Employees")
//!     .with_delegate(ColumnDelegate::new(Employee::columns()));
//!
//! list.set_search_query("turing");
//! assert_eq!(list.filtered_len(), 1);
//! assert_eq!(list.search_summary().as_deref(), Some("Showing 1 of 2 results"));
//! ```
//!
//! ## Integration with bubbletea-rs
//!
//! Forward messages from your model's `update` and call `view` from its
//! `view`:
//!
//! ```rust
//! use roster_widgets::prelude::*;
//! use bubbletea_rs::{Cmd, Model, Msg};
//!
//! struct App {
//!     list: List<Employee>,
//! }
//!
//! impl Model for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let list = List::new(Vec::new()).with_title("Employees");
//!         (Self { list }, None)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         self.list.update(&msg);
//!         None
//!     }
//!
//!     fn view(&self) -> String {
//!         self.list.view()
//!     }
//! }
//! ```
//!
//! ## Logging
//!
//! State transitions emit [`tracing`] events at `debug` and `trace` level.
//! The crate never installs a subscriber.

pub mod config;
pub mod dashboard;
pub mod employee;
pub mod error;
pub mod key;
pub mod list;
pub mod paginator;

pub use config::ListConfig;
pub use error::{Error, Result};

/// Commonly used types.
///
/// ```rust
/// use roster_widgets::prelude::*;
///
/// let list: List<Employee> = List::new(Vec::new());
/// assert_eq!(list.page_count(), 1);
/// ```
pub mod prelude {
    pub use crate::config::ListConfig;
    pub use crate::dashboard::{DepartmentStat, Stats};
    pub use crate::employee::{Employee, Status};
    pub use crate::error::{Error, Result};
    pub use crate::key::{Binding, KeyMap};
    pub use crate::list::{
        Column, ColumnDelegate, DefaultDelegate, Model as List, Record, RowDelegate,
        SearchField, Snapshot,
    };
    pub use crate::paginator::{
        DisplayRange, EllipsisPosition, Model as Paginator, PageEntry, PageRequest,
    };
}
