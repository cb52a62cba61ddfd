//! Core types and traits for list components.
//!
//! - [`Record`]: the trait list items implement (identity + searchable fields)
//! - [`SearchField`]: a statically declared accessor for one searchable field
//! - [`RowDelegate`]: controls how a record becomes a table row

use std::fmt;
use std::hash::Hash;

/// Reads one text field of a record. `None` means the field is absent.
pub type FieldAccessor<R> = fn(&R) -> Option<&str>;

/// A named, searchable field of a record type.
///
/// The set of searchable fields is fixed per record type and resolved when a
/// list is configured, never by looking fields up by name at match time.
pub struct SearchField<R> {
    /// Field name, used for column headers by the default delegate.
    pub name: &'static str,
    /// Accessor returning the field's text.
    pub accessor: FieldAccessor<R>,
}

impl<R> SearchField<R> {
    /// Declares a searchable field.
    pub fn new(name: &'static str, accessor: FieldAccessor<R>) -> Self {
        Self { name, accessor }
    }

    /// Returns the field value for `record`.
    pub fn value<'a>(&self, record: &'a R) -> Option<&'a str> {
        (self.accessor)(record)
    }

    /// Case-insensitive substring match against an already lower-cased needle.
    ///
    /// Absent fields never match.
    pub fn matches(&self, record: &R, needle_lower: &str) -> bool {
        self.value(record)
            .is_some_and(|v| v.to_lowercase().contains(needle_lower))
    }
}

impl<R> Clone for SearchField<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for SearchField<R> {}

impl<R> fmt::Debug for SearchField<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchField").field("name", &self.name).finish()
    }
}

/// Trait for records that can be listed, searched and paginated.
///
/// # Examples
///
/// ```
/// use roster_widgets::list::{Record, SearchField};
///
/// #[derive(Clone)]
/// struct Task {
///     id: u32,
///     title: String,
///     owner: Option<String>,
/// }
///
/// impl Record for Task {
///     type Id = u32;
///
///     fn id(&self) -> u32 {
///         self.id
///     }
///
///     fn search_fields() -> Vec<SearchField<Self>> {
///         vec![
///             SearchField::new("title", |t: &Task| Some(t.title.as_str())),
///             SearchField::new("owner", |t: &Task| t.owner.as_deref()),
///         ]
///     }
/// }
/// ```
pub trait Record: Clone {
    /// Stable unique key.
    type Id: Clone + Eq + Hash + fmt::Debug + fmt::Display;

    /// Returns the record's identity.
    fn id(&self) -> Self::Id;

    /// The default set of searchable fields for this record type.
    fn search_fields() -> Vec<SearchField<Self>>
    where
        Self: Sized;
}

/// Controls how records are rendered as table rows.
pub trait RowDelegate<R: Record> {
    /// Column headers, without the row-number column.
    fn headers(&self) -> Vec<String>;

    /// Cell texts for one record, in header order.
    fn cells(&self, record: &R) -> Vec<String>;
}
