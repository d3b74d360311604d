//! Error types for session management

use thiserror::Error;

/// Session errors
#[derive(Debug, Error)]
pub enum SessionError {
    /// Queue has no items to navigate
    #[error("Queue is empty")]
    QueueEmpty,

    /// Catalog lookup miss
    #[error("Unknown catalog item: {0}")]
    UnknownItem(String),

    /// Engine load or initialization failure
    #[error("Engine error: {0}")]
    Engine(String),
}

/// Result type for session operations
pub type Result<T> = std::result::Result<T, SessionError>;
