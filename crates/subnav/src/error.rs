//! Navigation configuration errors.

use thiserror::Error;

/// Errors raised while loading or validating navigation configuration.
///
/// Malformed-entry variants carry the index of the offending entry (and the
/// child index for submenu links) so the author can fix the data directly.
#[derive(Debug, Error)]
pub enum NavigationError {
    #[error("malformed navigation entry at index {index}: missing or empty `{field}`")]
    MissingField { index: usize, field: &'static str },

    #[error(
        "malformed navigation entry at index {index}: submenu link {child} has missing or empty `{field}`"
    )]
    MissingSubmenuField {
        index: usize,
        child: usize,
        field: &'static str,
    },

    #[error("malformed navigation entry at index {index}: unknown marker '{marker}'")]
    UnknownMarker { index: usize, marker: String },

    #[error("malformed navigation entry at index {index}: has both `url` and `submenu`")]
    AmbiguousEntry { index: usize },

    #[error("malformed navigation entry at index {index}: submenu must contain at least one link")]
    EmptySubmenu { index: usize },

    #[error(
        "malformed navigation entry at index {index}: submenu link {child} must not nest another submenu"
    )]
    NestedSubmenu { index: usize, child: usize },

    #[error("unsupported navigation file format: '{0}'")]
    UnsupportedFormat(String),

    #[error("failed to read navigation file")]
    Io(#[from] std::io::Error),

    #[error("failed to parse navigation YAML")]
    Yaml(#[from] serde_yml::Error),

    #[error("failed to parse navigation JSON")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using NavigationError.
pub type NavigationResult<T> = Result<T, NavigationError>;
