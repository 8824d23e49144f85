//! Error types.

use thiserror::Error;

/// Touch sequence errors. These indicate caller misuse, not runtime conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TouchError {
    #[error("Touch set is empty")]
    EmptyTouches,
    #[error("No drag in progress: touches_began was not called")]
    NotBegan,
}

/// Layout configuration errors.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("Invalid layout: {0}")]
    Invalid(String),
    #[error("Layout parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type for touch handling.
pub type TouchResult<T> = Result<T, TouchError>;

/// Result type for layout operations.
pub type LayoutResult<T> = Result<T, LayoutError>;
