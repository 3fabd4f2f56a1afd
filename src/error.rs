//! Error types for the roomwatch crate

use thiserror::Error;

/// Result type for roomwatch operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for roomwatch operations
///
/// One variant per fatal failure class. Underlying transport and parse
/// errors are folded into the variant of the stage they occurred in, so
/// the entry points can report which stage aborted the run.
#[derive(Debug, Error)]
pub enum Error {
    /// Missing or invalid configuration, detected before any network call
    #[error("Configuration error: {0}")]
    Config(String),

    /// Failed to fetch the monitored page
    #[error("Fetch error: {0}")]
    Fetch(String),

    /// The AI summarization call itself failed
    #[error("Summarization error: {0}")]
    Summarize(String),

    /// The push notification could not be delivered
    #[error("Notification error: {0}")]
    Notify(String),
}
