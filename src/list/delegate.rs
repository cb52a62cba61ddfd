//! Row delegates: how records become table rows.
//!
//! - [`DefaultDelegate`]: an id column plus one column per searchable field
//! - [`ColumnDelegate`]: explicitly declared columns with computed values
//!
//! Absent values render as [`MISSING_VALUE`](super::style::MISSING_VALUE).

use super::style::MISSING_VALUE;
use super::types::{Record, RowDelegate, SearchField};
use std::fmt;

/// Renders the record id followed by every searchable field.
pub struct DefaultDelegate<R> {
    fields: Vec<SearchField<R>>,
}

impl<R: Record> DefaultDelegate<R> {
    /// Uses the record type's default searchable fields.
    pub fn new() -> Self {
        Self {
            fields: R::search_fields(),
        }
    }
}

impl<R: Record> Default for DefaultDelegate<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record> RowDelegate<R> for DefaultDelegate<R> {
    fn headers(&self) -> Vec<String> {
        std::iter::once("id".to_string())
            .chain(self.fields.iter().map(|f| f.name.to_string()))
            .collect()
    }

    fn cells(&self, record: &R) -> Vec<String> {
        std::iter::once(record.id().to_string())
            .chain(
                self.fields
                    .iter()
                    .map(|f| f.value(record).unwrap_or(MISSING_VALUE).to_string()),
            )
            .collect()
    }
}

/// A table column: header label plus a value function.
pub struct Column<R> {
    /// Header label.
    pub label: &'static str,
    /// Cell value; `None` renders as a placeholder.
    pub value: fn(&R) -> Option<String>,
}

impl<R> Column<R> {
    /// Declares a column.
    pub fn new(label: &'static str, value: fn(&R) -> Option<String>) -> Self {
        Self { label, value }
    }
}

impl<R> fmt::Debug for Column<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column").field("label", &self.label).finish()
    }
}

/// Renders a fixed list of columns.
///
/// ```
/// use roster_widgets::employee::Employee;
/// use roster_widgets::list::{ColumnDelegate, RowDelegate};
///
/// let delegate = ColumnDelegate::new(Employee::columns());
/// let ada = Employee::new(1, "Ada Lovelace").with_department("Research");
///
/// assert_eq!(delegate.headers()[0], "Name");
/// assert_eq!(
///     delegate.cells(&ada),
///     vec!["Ada Lovelace", "-", "Research", "-", "Inactive"]
/// );
/// ```
#[derive(Debug)]
pub struct ColumnDelegate<R> {
    columns: Vec<Column<R>>,
}

impl<R> ColumnDelegate<R> {
    /// Creates a delegate rendering `columns` in order.
    pub fn new(columns: Vec<Column<R>>) -> Self {
        Self { columns }
    }
}

impl<R: Record> RowDelegate<R> for ColumnDelegate<R> {
    fn headers(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.label.to_string()).collect()
    }

    fn cells(&self, record: &R) -> Vec<String> {
        self.columns
            .iter()
            .map(|c| (c.value)(record).unwrap_or_else(|| MISSING_VALUE.to_string()))
            .collect()
    }
}
