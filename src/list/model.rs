//! Main Model struct and core state management for list components.
//!
//! The model owns the record collection, the search query and the
//! pagination state. Derived data (the filtered index set, the paginator's
//! props) is recomputed eagerly on three triggers: a query change, a
//! collection change and a page-size change.

use super::delegate::DefaultDelegate;
use super::keys::ListKeyMap;
use super::style::ListStyles;
use super::types::{Record, RowDelegate, SearchField};
use crate::config::ListConfig;
use crate::error::{Error, Result};
use crate::paginator::{self, DisplayRange, PageRequest};

/// A searchable, paginated list of records.
///
/// # Page state invariant
///
/// `current_page` is always within `1..=page_count()`. Search changes and
/// page-size changes reset it to 1; collection changes clamp it down to the
/// new page count.
///
/// # Examples
///
/// ```
/// use roster_widgets::employee::Employee;
/// use roster_widgets::list::Model;
///
/// let employees: Vec<Employee> = (1..=25)
///     .map(|i| Employee::new(i, &format!("Employee {i}")))
///     .collect();
///
/// let mut list = Model::new(employees);
/// assert_eq!(list.page_count(), 3);
///
/// list.set_page(3);
/// assert_eq!(list.visible_slice().len(), 5);
///
/// list.set_search_query("employee 1");
/// assert_eq!(list.current_page(), 1);
/// assert_eq!(list.filtered_len(), 11); // 1, 10..=19
/// ```
pub struct Model<R: Record> {
    pub(super) title: String,
    pub(super) items: Vec<R>,
    pub(super) search_fields: Vec<SearchField<R>>,
    pub(super) delegate: Box<dyn RowDelegate<R> + Send + Sync>,

    // Search
    pub(super) query: String,
    /// Indices into `items` of the records matching `query`, in collection order.
    pub(super) filtered: Vec<usize>,

    // Pagination
    pub(super) current_page: usize,
    pub(super) per_page: usize,
    pub(super) default_per_page: usize,
    pub(super) paginator: paginator::Model,
    pub(super) show_pagination: bool,

    // UI
    pub(super) styles: ListStyles,
    pub(super) keymap: ListKeyMap,
}

impl<R: Record + 'static> Model<R> {
    /// Creates a list with the default configuration and delegate.
    pub fn new(items: Vec<R>) -> Self {
        Self::configured(items, &ListConfig::default())
    }

    /// Creates a list from an explicit configuration.
    ///
    /// # Errors
    ///
    /// Fails when the configuration does not validate.
    pub fn with_config(items: Vec<R>, config: &ListConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::configured(items, config))
    }

    fn configured(items: Vec<R>, config: &ListConfig) -> Self {
        let mut model = Self {
            title: "List".to_string(),
            items,
            search_fields: R::search_fields(),
            delegate: Box::new(DefaultDelegate::<R>::new()),
            query: String::new(),
            filtered: Vec::new(),
            current_page: 1,
            per_page: config.default_page_size,
            default_per_page: config.default_page_size,
            paginator: paginator::Model::configured(config),
            show_pagination: true,
            styles: ListStyles::default(),
            keymap: ListKeyMap::default(),
        };
        model.refilter();
        model.sync_paginator();
        model
    }

    /// Sets the list title (builder pattern).
    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    /// Replaces the row delegate (builder pattern).
    pub fn with_delegate<D>(mut self, delegate: D) -> Self
    where
        D: RowDelegate<R> + Send + Sync + 'static,
    {
        self.delegate = Box::new(delegate);
        self
    }

    /// Replaces the searchable field set (builder pattern).
    pub fn with_search_fields(mut self, fields: Vec<SearchField<R>>) -> Self {
        self.search_fields = fields;
        self.refilter();
        self.clamp_page();
        self.sync_paginator();
        self
    }

    /// Replaces the styles (builder pattern).
    pub fn with_styles(mut self, styles: ListStyles) -> Self {
        self.styles = styles;
        self
    }

    /// Returns the list title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the whole, unfiltered collection.
    pub fn items(&self) -> &[R] {
        &self.items
    }

    /// Returns the current 1-based page.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Returns the number of records per page.
    pub fn per_page(&self) -> usize {
        self.per_page
    }

    /// Returns the embedded pagination control.
    pub fn paginator(&self) -> &paginator::Model {
        &self.paginator
    }

    /// Disables or re-enables page navigation, e.g. while an operation is
    /// pending. A disabled paginator still renders but emits no requests.
    pub fn set_paginator_disabled(&mut self, disabled: bool) {
        self.paginator.set_disabled(disabled);
    }

    /// Shows or hides the pagination control in [`Model::view`](super::Model::view).
    pub fn set_show_pagination(&mut self, show: bool) {
        self.show_pagination = show;
    }

    /// Number of pages for the filtered set, never less than one.
    pub fn page_count(&self) -> usize {
        paginator::total_pages(self.filtered_len(), self.per_page)
    }

    /// Records on the current page, in collection order.
    ///
    /// Empty if `current_page` somehow exceeds `page_count()`.
    pub fn visible_slice(&self) -> Vec<&R> {
        if self.current_page > self.page_count() {
            return Vec::new();
        }
        let start = (self.current_page - 1) * self.per_page;
        self.filtered
            .iter()
            .skip(start)
            .take(self.per_page)
            .map(|&i| &self.items[i])
            .collect()
    }

    /// 1-based positions of the first and last visible record.
    pub fn display_range(&self) -> DisplayRange {
        paginator::display_range(self.current_page, self.filtered_len(), self.per_page)
    }

    /// Row number shown next to the `index`-th visible record.
    pub fn row_number(&self, index: usize) -> usize {
        (self.current_page - 1) * self.per_page + index + 1
    }

    /// Moves to `page`.
    ///
    /// Out-of-range targets and the current page are ignored. Returns true
    /// if the page changed.
    pub fn set_page(&mut self, page: usize) -> bool {
        let page_count = self.page_count();
        if page < 1 || page > page_count || page == self.current_page {
            tracing::trace!(page, page_count, current = self.current_page, "page change ignored");
            return false;
        }
        tracing::debug!(from = self.current_page, to = page, "page changed");
        self.current_page = page;
        self.sync_paginator();
        true
    }

    /// Sets the page size and returns to page 1.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPageSize`] for a size of zero; the state is
    /// left untouched.
    pub fn set_page_size(&mut self, size: usize) -> Result<()> {
        if size == 0 {
            return Err(Error::InvalidPageSize { size });
        }
        tracing::debug!(from = self.per_page, to = size, "page size changed");
        self.per_page = size;
        self.current_page = 1;
        self.sync_paginator();
        Ok(())
    }

    /// Applies a request emitted by the paginator.
    pub fn apply(&mut self, request: PageRequest) -> Result<()> {
        match request {
            PageRequest::Page(page) => {
                self.set_page(page);
                Ok(())
            }
            PageRequest::PageSize(size) => self.set_page_size(size),
        }
    }

    /// Restores the state of a freshly entered view: page 1, the default
    /// page size and no search query.
    pub fn reset_view(&mut self) {
        self.query.clear();
        self.per_page = self.default_per_page;
        self.current_page = 1;
        self.refilter();
        self.sync_paginator();
    }

    /// Re-derives everything that depends on the collection.
    ///
    /// Call after any change to the records. The search query is kept; the
    /// current page is clamped down if it no longer exists.
    pub fn on_collection_changed(&mut self) {
        self.refilter();
        self.clamp_page();
        self.sync_paginator();
    }

    /// Replaces all records.
    pub fn set_items(&mut self, items: Vec<R>) {
        self.items = items;
        self.on_collection_changed();
    }

    /// Mutates the collection in place, then re-derives page state.
    ///
    /// ```
    /// use roster_widgets::employee::Employee;
    /// use roster_widgets::list::Model;
    ///
    /// let mut list = Model::new((1..=30).map(|i| Employee::new(i, "x")).collect());
    /// list.set_page(3);
    ///
    /// list.update_items(|items| items.truncate(12));
    /// assert_eq!(list.current_page(), 2);
    /// ```
    pub fn update_items<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Vec<R>),
    {
        f(&mut self.items);
        self.on_collection_changed();
    }

    /// Appends a record.
    pub fn insert(&mut self, record: R) {
        self.items.push(record);
        self.on_collection_changed();
    }

    /// Replaces the record with the same id, keeping its position.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RecordNotFound`] when no record has that id.
    pub fn replace(&mut self, record: R) -> Result<()> {
        let id = record.id();
        let slot = self
            .items
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| Error::RecordNotFound { id: id.to_string() })?;
        *slot = record;
        self.on_collection_changed();
        Ok(())
    }

    /// Looks up a record by id.
    pub fn get(&self, id: &R::Id) -> Option<&R> {
        self.items.iter().find(|r| &r.id() == id)
    }

    pub(super) fn clamp_page(&mut self) {
        let page_count = self.page_count();
        if self.current_page > page_count {
            tracing::debug!(from = self.current_page, to = page_count, "current page clamped");
            self.current_page = page_count;
        }
    }

    pub(super) fn sync_paginator(&mut self) {
        let total = self.filtered_len();
        self.paginator.sync(self.current_page, total, self.per_page);
    }
}
