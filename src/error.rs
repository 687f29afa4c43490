//! Error types for pullstream
//!
//! Nothing in here ever crosses the `Source` boundary: exhaustion is not an
//! error, and an absent stream degrades to a default value. These errors
//! cover the surfaces around the pipeline (configuration and feeding a
//! channel-backed source).

/// Main error type for pullstream operations
#[derive(Debug, thiserror::Error)]
pub enum StreamError {
    /// A configuration value is out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
    /// The consuming side of a channel-backed stream has been dropped
    #[error("Channel closed: the consuming stream is gone")]
    ChannelClosed,
    /// Configuration could not be parsed
    #[error("Configuration parse error: {0}")]
    Config(#[from] serde_json::Error),
}

impl<T> From<tokio::sync::mpsc::error::SendError<T>> for StreamError {
    fn from(_: tokio::sync::mpsc::error::SendError<T>) -> Self {
        StreamError::ChannelClosed
    }
}

/// Result type for pullstream operations
pub type StreamResult<T> = Result<T, StreamError>;
