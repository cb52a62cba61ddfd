//! Error types for list and pagination configuration.
//!
//! Most invalid inputs in this crate are silently ignored (out-of-range page
//! targets, missing searchable fields). The conditions below are the ones a
//! caller can actually get wrong when configuring a component.

use thiserror::Error;

/// Errors returned by list and paginator configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Page size must be at least one.
    #[error("Invalid page size: {size} (must be at least 1)")]
    InvalidPageSize { size: usize },

    /// The page window needs room for the first page, the last page and one
    /// page in between.
    #[error("Invalid max visible pages: {max_visible} (must be at least 3)")]
    InvalidMaxVisible { max_visible: usize },

    /// The page-size selector needs at least one option.
    #[error("Page size options cannot be empty")]
    EmptyPageSizeOptions,

    /// No record with the given id exists in the collection.
    #[error("Record not found: {id}")]
    RecordNotFound { id: String },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            Error::InvalidPageSize { size: 0 }.to_string(),
            "Invalid page size: 0 (must be at least 1)"
        );
        assert_eq!(
            Error::InvalidMaxVisible { max_visible: 2 }.to_string(),
            "Invalid max visible pages: 2 (must be at least 3)"
        );
        assert!(Error::RecordNotFound { id: "7".into() }
            .to_string()
            .contains('7'));
    }
}
