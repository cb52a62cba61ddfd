//! Configuration for list views and their pagination controls.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Page size used when a view is first entered.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Number of page buttons shown before the window collapses into ellipses.
pub const DEFAULT_MAX_VISIBLE_PAGES: usize = 5;

/// Smallest window that can still show first, last and one middle page.
pub const MIN_MAX_VISIBLE_PAGES: usize = 3;

/// Configuration for a list view.
///
/// Every field has a default, so a partial JSON document is enough:
///
/// ```rust
/// use roster_widgets::config::ListConfig;
///
/// let config: ListConfig = serde_json::from_str(r#"{ "default_page_size": 25 }"#).unwrap();
/// assert_eq!(config.default_page_size, 25);
/// assert_eq!(config.max_visible_pages, 5);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListConfig {
    /// Page size restored whenever the view is (re-)entered.
    #[serde(default = "default_page_size")]
    pub default_page_size: usize,

    /// Choices offered by the page-size selector.
    #[serde(default = "default_page_size_options")]
    pub page_size_options: Vec<usize>,

    /// Maximum number of page entries in the page window (at least 3).
    #[serde(default = "default_max_visible_pages")]
    pub max_visible_pages: usize,

    /// Show the "Showing a-b of n" line.
    #[serde(default = "default_true")]
    pub show_info: bool,

    /// Show the rows-per-page selector.
    #[serde(default = "default_true")]
    pub show_page_size_selector: bool,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_page_size_options() -> Vec<usize> {
    vec![5, 10, 25, 50]
}

fn default_max_visible_pages() -> usize {
    DEFAULT_MAX_VISIBLE_PAGES
}

fn default_true() -> bool {
    true
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
            page_size_options: default_page_size_options(),
            max_visible_pages: default_max_visible_pages(),
            show_info: true,
            show_page_size_selector: true,
        }
    }
}

impl ListConfig {
    /// Checks the configuration for values the components cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.default_page_size == 0 {
            return Err(Error::InvalidPageSize { size: 0 });
        }
        if self.max_visible_pages < MIN_MAX_VISIBLE_PAGES {
            return Err(Error::InvalidMaxVisible {
                max_visible: self.max_visible_pages,
            });
        }
        if self.page_size_options.is_empty() {
            return Err(Error::EmptyPageSizeOptions);
        }
        if let Some(&size) = self.page_size_options.iter().find(|&&s| s == 0) {
            return Err(Error::InvalidPageSize { size });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = ListConfig::default();
        assert_eq!(config.default_page_size, 10);
        assert_eq!(config.page_size_options, vec![5, 10, 25, 50]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = ListConfig {
            max_visible_pages: 2,
            ..ListConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(Error::InvalidMaxVisible { max_visible: 2 })
        );

        let config = ListConfig {
            default_page_size: 0,
            ..ListConfig::default()
        };
        assert_eq!(config.validate(), Err(Error::InvalidPageSize { size: 0 }));

        let config = ListConfig {
            page_size_options: vec![],
            ..ListConfig::default()
        };
        assert_eq!(config.validate(), Err(Error::EmptyPageSizeOptions));

        let config = ListConfig {
            page_size_options: vec![5, 0],
            ..ListConfig::default()
        };
        assert_eq!(config.validate(), Err(Error::InvalidPageSize { size: 0 }));
    }

    #[test]
    fn test_deserialize_empty_object_uses_defaults() {
        let config: ListConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ListConfig::default());
    }
}
