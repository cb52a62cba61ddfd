//! Search filtering for list components.
//!
//! Matching is a case-insensitive substring test against every searchable
//! field of a record; a record matches if any field contains the query.
//! A blank query (empty or whitespace only) matches everything.

use super::types::Record;
use super::Model;

impl<R: Record + 'static> Model<R> {
    /// Sets the search query and returns to page 1.
    ///
    /// The query is stored as given. Setting the same query again still
    /// resets the page.
    ///
    /// # Examples
    ///
    /// ```
    /// use roster_widgets::employee::Employee;
    /// use roster_widgets::list::Model;
    ///
    /// let mut list = Model::new(vec![
    ///     Employee::new(1, "Ada Lovelace").with_department("Research"),
    ///     Employee::new(2, "Alan Turing").with_department("Cryptography"),
    ///     Employee::new(3, "Grace Hopper").with_department("research"),
    /// ]);
    ///
    /// list.set_search_query("RESEARCH");
    /// assert_eq!(list.filtered_len(), 2);
    /// ```
    pub fn set_search_query(&mut self, query: &str) {
        tracing::debug!(query, "search query changed");
        self.query = query.to_string();
        self.current_page = 1;
        self.refilter();
        self.sync_paginator();
    }

    /// Clears the search query. Same as setting an empty query.
    pub fn clear_search(&mut self) {
        self.set_search_query("");
    }

    /// The current search query, exactly as entered.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Returns true if a non-blank query is narrowing the collection.
    pub fn is_filtered(&self) -> bool {
        !self.query.trim().is_empty()
    }

    /// Records matching the current query, in collection order.
    ///
    /// The iterator borrows the list and is cheap to clone, so callers can
    /// walk the filtered set more than once without collecting it.
    pub fn filtered_records(&self) -> impl Iterator<Item = &R> + Clone + '_ {
        self.filtered.iter().map(move |&i| &self.items[i])
    }

    /// Number of records matching the current query.
    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    /// Total number of records, ignoring the query.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the collection holds no records at all.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Recomputes the filtered index set from the query and collection.
    pub(super) fn refilter(&mut self) {
        if !self.is_filtered() {
            self.filtered = (0..self.items.len()).collect();
            return;
        }

        let needle = self.query.to_lowercase();
        self.filtered = self
            .items
            .iter()
            .enumerate()
            .filter(|(_, record)| self.search_fields.iter().any(|f| f.matches(record, &needle)))
            .map(|(i, _)| i)
            .collect();

        tracing::trace!(
            query = %self.query,
            matched = self.filtered.len(),
            total = self.items.len(),
            "filter applied"
        );
    }
}
