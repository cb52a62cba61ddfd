//! A pagination control: page-window computation plus a stateless component.
//!
//! The paginator never owns the page state of the list it controls. The owner
//! (usually [`crate::list::Model`]) syncs `current_page`, `total_items` and
//! `per_page` into it before rendering, and the paginator answers user intent
//! with a [`PageRequest`] that the owner applies. Re-syncing with identical
//! values always produces identical output.
//!
//! The heart of the module is [`visible_pages`], which bounds the number of
//! page buttons for any page count while keeping the first and last page
//! reachable:
//!
//! ```rust
//! use roster_widgets::paginator::{visible_pages, EllipsisPosition, PageEntry};
//!
//! let entries = visible_pages(10, 20, 5).unwrap();
//! assert_eq!(
//!     entries,
//!     vec![
//!         PageEntry::Page(1),
//!         PageEntry::Ellipsis(EllipsisPosition::Start),
//!         PageEntry::Page(9),
//!         PageEntry::Page(10),
//!         PageEntry::Page(11),
//!         PageEntry::Ellipsis(EllipsisPosition::End),
//!         PageEntry::Page(20),
//!     ]
//! );
//! ```

use crate::config::{ListConfig, DEFAULT_MAX_VISIBLE_PAGES, DEFAULT_PAGE_SIZE, MIN_MAX_VISIBLE_PAGES};
use crate::error::{Error, Result};
use crate::key::{self, KeyMap as KeyMapTrait};
use bubbletea_rs::{KeyMsg, Msg};
use lipgloss_extras::prelude::*;

/// Symbol rendered in place of skipped page ranges.
pub const ELLIPSIS: &str = "…";

/// Which side of the page window an ellipsis sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EllipsisPosition {
    /// Between page 1 and the window.
    Start,
    /// Between the window and the last page.
    End,
}

/// One entry of the page window: a selectable page or a gap marker.
///
/// Ellipsis entries carry no page number and cannot be selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageEntry {
    /// A 1-based page number.
    Page(usize),
    /// A collapsed run of pages.
    Ellipsis(EllipsisPosition),
}

impl PageEntry {
    /// Returns the page number, or `None` for an ellipsis.
    pub fn page(&self) -> Option<usize> {
        match self {
            PageEntry::Page(n) => Some(*n),
            PageEntry::Ellipsis(_) => None,
        }
    }

    /// Returns true for ellipsis entries.
    pub fn is_ellipsis(&self) -> bool {
        matches!(self, PageEntry::Ellipsis(_))
    }
}

/// The 1-based, inclusive range of items shown on the current page.
///
/// An empty result set is represented as `{ start: 0, end: 0 }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DisplayRange {
    /// Position of the first item on the page.
    pub start: usize,
    /// Position of the last item on the page.
    pub end: usize,
}

impl DisplayRange {
    /// Returns true when there is nothing to show.
    pub fn is_empty(&self) -> bool {
        self.start == 0 && self.end == 0
    }
}

/// Intent emitted by the paginator. The owner of the page state applies it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageRequest {
    /// Switch to the given 1-based page.
    Page(usize),
    /// Switch to the given page size.
    PageSize(usize),
}

/// Number of pages needed for `total_items`, never less than one.
///
/// ```rust
/// use roster_widgets::paginator::total_pages;
///
/// assert_eq!(total_pages(0, 10), 1);
/// assert_eq!(total_pages(25, 10), 3);
/// assert_eq!(total_pages(30, 10), 3);
/// ```
pub fn total_pages(total_items: usize, per_page: usize) -> usize {
    total_items.div_ceil(per_page.max(1)).max(1)
}

/// Range of item positions covered by `current_page`.
///
/// ```rust
/// use roster_widgets::paginator::{display_range, DisplayRange};
///
/// assert_eq!(display_range(3, 25, 10), DisplayRange { start: 21, end: 25 });
/// assert!(display_range(1, 0, 10).is_empty());
/// ```
pub fn display_range(current_page: usize, total_items: usize, per_page: usize) -> DisplayRange {
    if total_items == 0 {
        return DisplayRange::default();
    }
    let page = current_page.max(1);
    DisplayRange {
        start: (page - 1).saturating_mul(per_page).saturating_add(1),
        end: page.saturating_mul(per_page).min(total_items),
    }
}

/// Computes the page window for the given position.
///
/// When `total_pages <= max_visible` every page is listed. Otherwise page 1
/// and `total_pages` are always present, the window around `current_page`
/// keeps a stable width near either end, and each collapsed side gets exactly
/// one ellipsis.
///
/// # Errors
///
/// Returns [`Error::InvalidMaxVisible`] when `max_visible < 3`.
pub fn visible_pages(
    current_page: usize,
    total_pages: usize,
    max_visible: usize,
) -> Result<Vec<PageEntry>> {
    validate_max_visible(max_visible)?;
    Ok(page_window(current_page, total_pages, max_visible))
}

fn validate_max_visible(max_visible: usize) -> Result<()> {
    if max_visible < MIN_MAX_VISIBLE_PAGES {
        return Err(Error::InvalidMaxVisible { max_visible });
    }
    Ok(())
}

// Callers guarantee max_visible >= 3.
fn page_window(current: usize, total: usize, max_visible: usize) -> Vec<PageEntry> {
    if total <= max_visible {
        return (1..=total).map(PageEntry::Page).collect();
    }

    let mut pages = Vec::with_capacity(max_visible + 2);
    pages.push(PageEntry::Page(1));

    let last_inner = total - 1;
    let current = current.min(total);
    let mut start = current.saturating_sub((max_visible - 2) / 2).max(2);
    let end = (start + max_visible - 3).min(last_inner);
    if end == last_inner {
        start = end.saturating_sub(max_visible - 3).max(2);
    }

    if start > 2 {
        pages.push(PageEntry::Ellipsis(EllipsisPosition::Start));
    }
    pages.extend((start..=end).map(PageEntry::Page));
    if end < last_inner {
        pages.push(PageEntry::Ellipsis(EllipsisPosition::End));
    }
    pages.push(PageEntry::Page(total));

    pages
}

/// Key bindings for paginator navigation.
#[derive(Debug, Clone)]
pub struct PaginatorKeyMap {
    /// Previous page. Default keys: PageUp, Left Arrow, 'h'
    pub prev_page: key::Binding,
    /// Next page. Default keys: PageDown, Right Arrow, 'l'
    pub next_page: key::Binding,
    /// First page. Default keys: Home, 'g'
    pub first_page: key::Binding,
    /// Last page. Default keys: End, 'G'
    pub last_page: key::Binding,
    /// Previous page-size option. Default key: '-'
    pub smaller_page_size: key::Binding,
    /// Next page-size option. Default keys: '+', '='
    pub larger_page_size: key::Binding,
}

impl Default for PaginatorKeyMap {
    fn default() -> Self {
        Self {
            prev_page: key::new_binding(vec![
                key::with_keys_str(&["pgup", "left", "h"]),
                key::with_help("←/h", "prev page"),
            ]),
            next_page: key::new_binding(vec![
                key::with_keys_str(&["pgdown", "right", "l"]),
                key::with_help("→/l", "next page"),
            ]),
            first_page: key::new_binding(vec![
                key::with_keys_str(&["home", "g"]),
                key::with_help("g/home", "first page"),
            ]),
            last_page: key::new_binding(vec![
                key::with_keys_str(&["end", "G"]),
                key::with_help("G/end", "last page"),
            ]),
            smaller_page_size: key::new_binding(vec![
                key::with_keys_str(&["-"]),
                key::with_help("-", "fewer rows"),
            ]),
            larger_page_size: key::new_binding(vec![
                key::with_keys_str(&["+", "="]),
                key::with_help("+", "more rows"),
            ]),
        }
    }
}

impl KeyMapTrait for PaginatorKeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![&self.prev_page, &self.next_page]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![
            vec![
                &self.prev_page,
                &self.next_page,
                &self.first_page,
                &self.last_page,
            ],
            vec![&self.smaller_page_size, &self.larger_page_size],
        ]
    }
}

/// Styles for the rendered control.
#[derive(Debug, Clone)]
pub struct PaginatorStyles {
    /// The current page number.
    pub active_page: Style,
    /// Other page numbers.
    pub page: Style,
    /// Ellipsis markers.
    pub ellipsis: Style,
    /// Enabled first/prev/next/last buttons.
    pub nav: Style,
    /// Disabled first/prev/next/last buttons.
    pub nav_disabled: Style,
    /// The "Showing a-b of n" line and the size selector.
    pub info: Style,
}

impl Default for PaginatorStyles {
    fn default() -> Self {
        let subdued = AdaptiveColor {
            Light: "#9B9B9B",
            Dark: "#5C5C5C",
        };
        Self {
            active_page: Style::new()
                .background(Color::from("62"))
                .foreground(Color::from("230"))
                .bold(true),
            page: Style::new(),
            ellipsis: Style::new().foreground(subdued.clone()),
            nav: Style::new().foreground(AdaptiveColor {
                Light: "#1a1a1a",
                Dark: "#dddddd",
            }),
            nav_disabled: Style::new().foreground(AdaptiveColor {
                Light: "#DDDADA",
                Dark: "#3C3C3C",
            }),
            info: Style::new().foreground(subdued),
        }
    }
}

/// The pagination component.
///
/// Holds configuration (window size, page-size options, what to show) and
/// the values last synced from the list it controls. It does not change
/// those values itself; every navigation method returns the request the
/// owner should apply.
///
/// ```rust
/// use roster_widgets::paginator::{Model, PageRequest};
///
/// let mut paginator = Model::new();
/// paginator.sync(1, 95, 10);
///
/// assert_eq!(paginator.total_pages(), 10);
/// assert!(!paginator.can_go_previous());
/// assert_eq!(paginator.go_to_next(), Some(PageRequest::Page(2)));
/// assert_eq!(paginator.go_to_last(), Some(PageRequest::Page(10)));
///
/// // Still page 1 until the owner applies a request and syncs again.
/// assert_eq!(paginator.current_page, 1);
/// ```
#[derive(Debug, Clone)]
pub struct Model {
    /// Current 1-based page, as synced from the owner.
    pub current_page: usize,
    /// Number of items being paginated, as synced from the owner.
    pub total_items: usize,
    /// Items per page, as synced from the owner.
    pub per_page: usize,

    max_visible: usize,
    page_size_options: Vec<usize>,

    /// Render the "Showing a-b of n" line.
    pub show_info: bool,
    /// Render the rows-per-page selector.
    pub show_page_size_selector: bool,
    /// When set, no request is ever emitted.
    pub disabled: bool,

    /// Key bindings.
    pub keymap: PaginatorKeyMap,
    /// Rendering styles.
    pub styles: PaginatorStyles,
}

impl Default for Model {
    /// Page 1 of an empty set, 10 per page, a 5-entry window and size
    /// options `[5, 10, 25, 50, 100]`.
    fn default() -> Self {
        Self {
            current_page: 1,
            total_items: 0,
            per_page: DEFAULT_PAGE_SIZE,
            max_visible: DEFAULT_MAX_VISIBLE_PAGES,
            page_size_options: vec![5, 10, 25, 50, 100],
            show_info: true,
            show_page_size_selector: true,
            disabled: false,
            keymap: PaginatorKeyMap::default(),
            styles: PaginatorStyles::default(),
        }
    }
}

impl Model {
    /// Creates a paginator with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a paginator from a list configuration.
    ///
    /// # Errors
    ///
    /// Fails when the configuration does not validate.
    pub fn from_config(config: &ListConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::configured(config))
    }

    // Callers validate `config` first.
    pub(crate) fn configured(config: &ListConfig) -> Self {
        Self {
            per_page: config.default_page_size,
            max_visible: config.max_visible_pages,
            page_size_options: config.page_size_options.clone(),
            show_info: config.show_info,
            show_page_size_selector: config.show_page_size_selector,
            ..Self::default()
        }
    }

    /// Sets the maximum number of page entries (builder pattern).
    ///
    /// ```rust
    /// use roster_widgets::paginator::Model;
    ///
    /// assert!(Model::new().with_max_visible(7).is_ok());
    /// assert!(Model::new().with_max_visible(2).is_err());
    /// ```
    pub fn with_max_visible(mut self, max_visible: usize) -> Result<Self> {
        self.set_max_visible(max_visible)?;
        Ok(self)
    }

    /// Sets the maximum number of page entries.
    ///
    /// A rejected value leaves the previous configuration in place.
    pub fn set_max_visible(&mut self, max_visible: usize) -> Result<()> {
        validate_max_visible(max_visible)?;
        self.max_visible = max_visible;
        Ok(())
    }

    /// Returns the configured window size.
    pub fn max_visible(&self) -> usize {
        self.max_visible
    }

    /// Sets the page-size selector options (builder pattern).
    pub fn with_page_size_options(mut self, options: Vec<usize>) -> Result<Self> {
        if options.is_empty() {
            return Err(Error::EmptyPageSizeOptions);
        }
        if options.contains(&0) {
            return Err(Error::InvalidPageSize { size: 0 });
        }
        self.page_size_options = options;
        Ok(self)
    }

    /// Returns the page-size selector options.
    pub fn page_size_options(&self) -> &[usize] {
        &self.page_size_options
    }

    /// Enables or disables the whole control (builder pattern).
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Enables or disables the whole control.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Copies the owner's page state into the paginator.
    pub fn sync(&mut self, current_page: usize, total_items: usize, per_page: usize) {
        self.current_page = current_page;
        self.total_items = total_items;
        self.per_page = per_page;
    }

    /// Number of pages, never less than one.
    pub fn total_pages(&self) -> usize {
        total_pages(self.total_items, self.per_page)
    }

    /// Range of item positions on the current page.
    pub fn display_range(&self) -> DisplayRange {
        display_range(self.current_page, self.total_items, self.per_page)
    }

    /// The page window for the synced state.
    pub fn visible_pages(&self) -> Vec<PageEntry> {
        page_window(self.current_page, self.total_pages(), self.max_visible)
    }

    /// Returns true if `page` is the current page.
    pub fn is_current_page(&self, page: usize) -> bool {
        page == self.current_page
    }

    /// First and previous buttons are enabled.
    pub fn can_go_previous(&self) -> bool {
        self.current_page > 1 && !self.disabled
    }

    /// Next and last buttons are enabled.
    pub fn can_go_next(&self) -> bool {
        self.current_page < self.total_pages() && !self.disabled
    }

    /// Requests a jump to `page`.
    ///
    /// Returns `None` when the control is disabled, the page is out of
    /// `1..=total_pages()` or already current.
    pub fn go_to_page(&self, page: usize) -> Option<PageRequest> {
        if self.disabled {
            tracing::trace!(page, "paginator disabled, page request suppressed");
            return None;
        }
        if page < 1 || page > self.total_pages() || page == self.current_page {
            return None;
        }
        Some(PageRequest::Page(page))
    }

    /// Requests the previous page.
    pub fn go_to_previous(&self) -> Option<PageRequest> {
        if self.can_go_previous() {
            self.go_to_page(self.current_page - 1)
        } else {
            None
        }
    }

    /// Requests the next page.
    pub fn go_to_next(&self) -> Option<PageRequest> {
        if self.can_go_next() {
            self.go_to_page(self.current_page + 1)
        } else {
            None
        }
    }

    /// Requests page 1.
    pub fn go_to_first(&self) -> Option<PageRequest> {
        self.go_to_page(1)
    }

    /// Requests the last page.
    pub fn go_to_last(&self) -> Option<PageRequest> {
        self.go_to_page(self.total_pages())
    }

    /// Requests a new page size. Suppressed only when disabled.
    pub fn change_page_size(&self, size: usize) -> Option<PageRequest> {
        if self.disabled {
            tracing::trace!(size, "paginator disabled, page size request suppressed");
            return None;
        }
        Some(PageRequest::PageSize(size))
    }

    /// Requests the next larger option from `page_size_options`.
    pub fn next_page_size(&self) -> Option<PageRequest> {
        let size = self
            .page_size_options
            .iter()
            .copied()
            .filter(|&s| s > self.per_page)
            .min()?;
        self.change_page_size(size)
    }

    /// Requests the next smaller option from `page_size_options`.
    pub fn prev_page_size(&self) -> Option<PageRequest> {
        let size = self
            .page_size_options
            .iter()
            .copied()
            .filter(|&s| s < self.per_page)
            .max()?;
        self.change_page_size(size)
    }

    /// Translates key messages into page requests.
    ///
    /// ```rust
    /// use roster_widgets::paginator::{Model, PageRequest};
    /// use bubbletea_rs::{KeyMsg, Msg};
    /// use crossterm::event::{KeyCode, KeyModifiers};
    ///
    /// let mut paginator = Model::new();
    /// paginator.sync(2, 50, 10);
    ///
    /// let msg: Msg = Box::new(KeyMsg { key: KeyCode::Right, modifiers: KeyModifiers::NONE });
    /// assert_eq!(paginator.update(&msg), Some(PageRequest::Page(3)));
    ///
    /// paginator.set_disabled(true);
    /// assert_eq!(paginator.update(&msg), None);
    /// ```
    pub fn update(&self, msg: &Msg) -> Option<PageRequest> {
        let key_msg = msg.downcast_ref::<KeyMsg>()?;
        if self.disabled {
            return None;
        }
        if self.keymap.next_page.matches(key_msg) {
            self.go_to_next()
        } else if self.keymap.prev_page.matches(key_msg) {
            self.go_to_previous()
        } else if self.keymap.first_page.matches(key_msg) {
            self.go_to_first()
        } else if self.keymap.last_page.matches(key_msg) {
            self.go_to_last()
        } else if self.keymap.larger_page_size.matches(key_msg) {
            self.next_page_size()
        } else if self.keymap.smaller_page_size.matches(key_msg) {
            self.prev_page_size()
        } else {
            None
        }
    }

    /// "Showing a-b of n", or "No data" for an empty set.
    pub fn info_view(&self) -> String {
        if self.total_items == 0 {
            return "No data".to_string();
        }
        let range = self.display_range();
        format!(
            "Showing {}-{} of {}",
            range.start, range.end, self.total_items
        )
    }

    /// Renders the navigation row, e.g. `«« « 1 … 9 [10] 11 … 20 » »»`.
    pub fn nav_view(&self) -> String {
        let nav = |label: &str, enabled: bool| {
            if enabled {
                self.styles.nav.clone().render(label)
            } else {
                self.styles.nav_disabled.clone().render(label)
            }
        };

        let mut parts = vec![nav("««", self.can_go_previous()), nav("«", self.can_go_previous())];
        for entry in self.visible_pages() {
            let part = match entry {
                PageEntry::Page(n) if self.is_current_page(n) => {
                    self.styles.active_page.clone().render(&format!("[{n}]"))
                }
                PageEntry::Page(n) => self.styles.page.clone().render(&n.to_string()),
                PageEntry::Ellipsis(_) => self.styles.ellipsis.clone().render(ELLIPSIS),
            };
            parts.push(part);
        }
        parts.push(nav("»", self.can_go_next()));
        parts.push(nav("»»", self.can_go_next()));
        parts.join(" ")
    }

    /// Renders the rows-per-page selector, marking the active size.
    pub fn page_size_view(&self) -> String {
        let options: Vec<String> = self
            .page_size_options
            .iter()
            .map(|&s| {
                if s == self.per_page {
                    format!("[{s}]")
                } else {
                    s.to_string()
                }
            })
            .collect();
        self.styles
            .info
            .clone()
            .render(&format!("Rows per page: {}", options.join(" ")))
    }

    /// Renders the complete control: info line, navigation, size selector.
    pub fn view(&self) -> String {
        let mut lines = Vec::new();
        if self.show_info {
            lines.push(self.styles.info.clone().render(&self.info_view()));
        }
        lines.push(self.nav_view());
        if self.show_page_size_selector {
            lines.push(self.page_size_view());
        }
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    use EllipsisPosition::{End, Start};
    use PageEntry::{Ellipsis, Page};

    fn strip(s: &str) -> String {
        lipgloss_extras::lipgloss::strip_ansi(s)
    }

    fn key(code: KeyCode) -> Msg {
        Box::new(KeyMsg {
            key: code,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_window_lists_all_pages_when_they_fit() {
        assert_eq!(
            visible_pages(1, 3, 5).unwrap(),
            vec![Page(1), Page(2), Page(3)]
        );
        assert_eq!(visible_pages(1, 1, 5).unwrap(), vec![Page(1)]);
        for total in 1..=7 {
            for current in 1..=total {
                let got = visible_pages(current, total, 7).unwrap();
                let want: Vec<_> = (1..=total).map(Page).collect();
                assert_eq!(got, want);
            }
        }
    }

    #[test]
    fn test_window_middle() {
        assert_eq!(
            visible_pages(10, 20, 5).unwrap(),
            vec![Page(1), Ellipsis(Start), Page(9), Page(10), Page(11), Ellipsis(End), Page(20)]
        );
    }

    #[test]
    fn test_window_near_start() {
        assert_eq!(
            visible_pages(1, 20, 5).unwrap(),
            vec![Page(1), Page(2), Page(3), Page(4), Ellipsis(End), Page(20)]
        );
        assert_eq!(
            visible_pages(3, 20, 5).unwrap(),
            vec![Page(1), Page(2), Page(3), Page(4), Ellipsis(End), Page(20)]
        );
        assert_eq!(
            visible_pages(4, 20, 5).unwrap(),
            vec![Page(1), Ellipsis(Start), Page(3), Page(4), Page(5), Ellipsis(End), Page(20)]
        );
    }

    #[test]
    fn test_window_near_end_keeps_width() {
        assert_eq!(
            visible_pages(20, 20, 5).unwrap(),
            vec![Page(1), Ellipsis(Start), Page(17), Page(18), Page(19), Page(20)]
        );
        assert_eq!(
            visible_pages(18, 20, 5).unwrap(),
            vec![Page(1), Ellipsis(Start), Page(17), Page(18), Page(19), Page(20)]
        );
    }

    #[test]
    fn test_window_minimum_size() {
        assert_eq!(
            visible_pages(5, 10, 3).unwrap(),
            vec![Page(1), Ellipsis(Start), Page(5), Ellipsis(End), Page(10)]
        );
        assert_eq!(
            visible_pages(1, 4, 3).unwrap(),
            vec![Page(1), Page(2), Ellipsis(End), Page(4)]
        );
    }

    #[test]
    fn test_window_rejects_small_max_visible() {
        assert_eq!(
            visible_pages(1, 10, 2),
            Err(Error::InvalidMaxVisible { max_visible: 2 })
        );
        assert!(visible_pages(1, 10, 0).is_err());
    }

    #[test]
    fn test_window_current_past_last_page() {
        assert_eq!(
            visible_pages(usize::MAX, 10, 5).unwrap(),
            visible_pages(10, 10, 5).unwrap()
        );
        assert_eq!(
            visible_pages(25, 20, 5).unwrap(),
            vec![Page(1), Ellipsis(Start), Page(17), Page(18), Page(19), Page(20)]
        );
    }

    #[test]
    fn test_window_invariants_for_large_totals() {
        for max_visible in 3..=9 {
            for total in (max_visible + 1)..=40 {
                for current in 1..=total {
                    let entries = visible_pages(current, total, max_visible).unwrap();
                    assert_eq!(entries.first(), Some(&Page(1)));
                    assert_eq!(entries.last(), Some(&Page(total)));

                    let ellipses = entries.iter().filter(|e| e.is_ellipsis()).count();
                    assert!(ellipses <= 2);

                    let pages: Vec<usize> = entries.iter().filter_map(|e| e.page()).collect();
                    let unique: HashSet<usize> = pages.iter().copied().collect();
                    assert_eq!(unique.len(), pages.len(), "duplicates in {entries:?}");
                    assert!(pages.windows(2).all(|w| w[0] < w[1]));
                    assert!(pages.len() <= max_visible);

                    // Idempotent for identical inputs.
                    assert_eq!(entries, visible_pages(current, total, max_visible).unwrap());
                }
            }
        }
    }

    #[test]
    fn test_total_pages_and_display_range() {
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(display_range(3, 25, 10), DisplayRange { start: 21, end: 25 });
        assert_eq!(display_range(1, 25, 10), DisplayRange { start: 1, end: 10 });
        assert_eq!(display_range(1, 0, 10), DisplayRange { start: 0, end: 0 });
    }

    #[test]
    fn test_navigation_requests() {
        let mut p = Model::new();
        p.sync(1, 50, 10);
        assert!(!p.can_go_previous());
        assert!(p.can_go_next());
        assert_eq!(p.go_to_previous(), None);
        assert_eq!(p.go_to_first(), None);
        assert_eq!(p.go_to_next(), Some(PageRequest::Page(2)));
        assert_eq!(p.go_to_last(), Some(PageRequest::Page(5)));

        p.sync(5, 50, 10);
        assert!(!p.can_go_next());
        assert_eq!(p.go_to_next(), None);
        assert_eq!(p.go_to_last(), None);
        assert_eq!(p.go_to_previous(), Some(PageRequest::Page(4)));
        assert_eq!(p.go_to_first(), Some(PageRequest::Page(1)));
    }

    #[test]
    fn test_go_to_page_ignores_invalid_targets() {
        let mut p = Model::new();
        p.sync(2, 50, 10);
        assert_eq!(p.go_to_page(0), None);
        assert_eq!(p.go_to_page(6), None);
        assert_eq!(p.go_to_page(2), None);
        assert_eq!(p.go_to_page(4), Some(PageRequest::Page(4)));
    }

    #[test]
    fn test_disabled_suppresses_everything() {
        let mut p = Model::new().with_disabled(true);
        p.sync(3, 100, 10);
        assert!(!p.can_go_previous());
        assert!(!p.can_go_next());
        assert_eq!(p.go_to_page(5), None);
        assert_eq!(p.go_to_first(), None);
        assert_eq!(p.go_to_last(), None);
        assert_eq!(p.change_page_size(25), None);
        assert_eq!(p.update(&key(KeyCode::Right)), None);
        assert_eq!(p.update(&key(KeyCode::Char('+'))), None);
    }

    #[test]
    fn test_page_size_cycling() {
        let mut p = Model::new();
        p.sync(1, 100, 10);
        assert_eq!(p.next_page_size(), Some(PageRequest::PageSize(25)));
        assert_eq!(p.prev_page_size(), Some(PageRequest::PageSize(5)));

        p.sync(1, 100, 100);
        assert_eq!(p.next_page_size(), None);
        p.sync(1, 100, 5);
        assert_eq!(p.prev_page_size(), None);
    }

    #[test]
    fn test_update_key_bindings() {
        let mut p = Model::new();
        p.sync(3, 100, 10);
        assert_eq!(p.update(&key(KeyCode::Left)), Some(PageRequest::Page(2)));
        assert_eq!(p.update(&key(KeyCode::Char('l'))), Some(PageRequest::Page(4)));
        assert_eq!(p.update(&key(KeyCode::Home)), Some(PageRequest::Page(1)));
        assert_eq!(p.update(&key(KeyCode::End)), Some(PageRequest::Page(10)));
        assert_eq!(p.update(&key(KeyCode::Char('-'))), Some(PageRequest::PageSize(5)));
        assert_eq!(p.update(&key(KeyCode::Char('x'))), None);

        let not_a_key: Msg = Box::new(42u32);
        assert_eq!(p.update(&not_a_key), None);
    }

    #[test]
    fn test_config_validation() {
        assert!(Model::new().with_max_visible(3).is_ok());
        assert_eq!(
            Model::new().with_max_visible(1).unwrap_err(),
            Error::InvalidMaxVisible { max_visible: 1 }
        );
        assert_eq!(
            Model::new().with_page_size_options(vec![]).unwrap_err(),
            Error::EmptyPageSizeOptions
        );

        let mut p = Model::new();
        assert!(p.set_max_visible(2).is_err());
        assert_eq!(p.max_visible(), 5);
    }

    #[test]
    fn test_views() {
        let mut p = Model::new();
        p.sync(10, 200, 10);
        assert_eq!(strip(&p.info_view()), "Showing 91-100 of 200");
        assert_eq!(strip(&p.nav_view()), "«« « 1 … 9 [10] 11 … 20 » »»");
        assert_eq!(strip(&p.page_size_view()), "Rows per page: 5 [10] 25 50 100");

        p.sync(1, 0, 10);
        assert_eq!(p.info_view(), "No data");
        assert_eq!(strip(&p.nav_view()), "«« « [1] » »»");

        let view = strip(&p.view());
        assert_eq!(view.lines().count(), 3);
        p.show_info = false;
        p.show_page_size_selector = false;
        assert_eq!(strip(&p.view()).lines().count(), 1);
    }
}
