//! Read-only views of list state for rendering collaborators.

use super::types::Record;
use super::Model;
use crate::paginator::{DisplayRange, PageEntry};

/// Everything a renderer needs to draw one page, borrowed from the list.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot<'a, R> {
    /// Records on the current page, in collection order.
    pub visible_records: Vec<&'a R>,
    /// 1-based current page.
    pub current_page: usize,
    /// Number of pages for the filtered set.
    pub page_count: usize,
    /// Positions of the first and last visible record.
    pub display_range: DisplayRange,
    /// The paginator's page window.
    pub page_entries: Vec<PageEntry>,
}

impl<R: Record + 'static> Model<R> {
    /// Captures the current page for rendering.
    ///
    /// # Examples
    ///
    /// ```
    /// use roster_widgets::employee::Employee;
    /// use roster_widgets::list::Model;
    /// use roster_widgets::paginator::DisplayRange;
    ///
    /// let mut list = Model::new((1..=25).map(|i| Employee::new(i, "x")).collect());
    /// list.set_page(3);
    ///
    /// let snapshot = list.snapshot();
    /// assert_eq!(snapshot.page_count, 3);
    /// assert_eq!(snapshot.display_range, DisplayRange { start: 21, end: 25 });
    /// assert_eq!(snapshot.visible_records.len(), 5);
    /// ```
    pub fn snapshot(&self) -> Snapshot<'_, R> {
        Snapshot {
            visible_records: self.visible_slice(),
            current_page: self.current_page,
            page_count: self.page_count(),
            display_range: self.display_range(),
            page_entries: self.paginator.visible_pages(),
        }
    }

    /// Results counter shown while a query is entered, e.g.
    /// `"Showing 3 of 40 results"`.
    pub fn search_summary(&self) -> Option<String> {
        if self.query.is_empty() {
            return None;
        }
        Some(format!(
            "Showing {} of {} results",
            self.filtered_len(),
            self.len()
        ))
    }
}
