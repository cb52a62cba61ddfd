//! Styles for the list view.
//!
//! All colors are adaptive so the list reads well on light and dark
//! terminals.
//!
//! ```rust
//! use roster_widgets::list::ListStyles;
//! use lipgloss_extras::prelude::*;
//!
//! let mut styles = ListStyles::default();
//! styles.title = Style::new()
//!     .foreground(AdaptiveColor { Light: "#1a1a1a", Dark: "#ffffff" })
//!     .bold(true);
//! ```

use lipgloss_extras::prelude::*;

/// Placeholder rendered for absent cell values.
pub const MISSING_VALUE: &str = "-";

/// Styling for every element of the list view.
#[derive(Debug, Clone)]
pub struct ListStyles {
    /// The list title.
    pub title: Style,
    /// "Showing N of M results" while a search is active.
    pub search_info: Style,
    /// Table header row.
    pub header: Style,
    /// Table body rows.
    pub row: Style,
    /// Row numbers.
    pub row_number: Style,
    /// Empty-state message.
    pub no_items: Style,
    /// Wrapper around the paginator output.
    pub pagination: Style,
}

impl Default for ListStyles {
    fn default() -> Self {
        let subdued_color = AdaptiveColor {
            Light: "#9B9B9B",
            Dark: "#5C5C5C",
        };

        Self {
            title: Style::new()
                .background(Color::from("62"))
                .foreground(Color::from("230"))
                .padding(0, 1, 0, 1),
            search_info: Style::new().foreground(subdued_color.clone()),
            header: Style::new().bold(true),
            row: Style::new(),
            row_number: Style::new().foreground(subdued_color),
            no_items: Style::new().foreground(AdaptiveColor {
                Light: "#909090",
                Dark: "#626262",
            }),
            pagination: Style::new(),
        }
    }
}
