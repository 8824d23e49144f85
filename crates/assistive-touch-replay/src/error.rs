//! Replay errors.

use assistive_touch_core::{LayoutError, TouchError};
use thiserror::Error;

/// Errors raised while loading or running a gesture script.
#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Script parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Layout(#[from] LayoutError),
    #[error("Event {index}: {source}")]
    Touch {
        index: usize,
        #[source]
        source: TouchError,
    },
}

/// Result type for replay operations.
pub type ReplayResult<T> = Result<T, ReplayError>;
