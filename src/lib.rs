//! # roomwatch - room vacancy monitoring
//!
//! This crate watches a single webpage for room vacancies. Each invocation
//! fetches the page, normalizes it to plain text, asks the Anthropic
//! Messages API to extract structured vacancy data, compares the result
//! against the previously persisted snapshot, and pushes a Pushover
//! notification when something meaningful changed.
//!
//! ## Pipeline
//!
//! - [`fetcher`]: one HTTP GET for the raw page markup
//! - [`content`]: strip non-content markup, collapse visible text
//! - [`summarizer`]: AI extraction into a [`record::VacancyRecord`],
//!   degrading to a heuristic fallback on unparseable replies
//! - [`state`]: load/save the single JSON snapshot
//! - [`diff`]: decide whether the new record warrants a notification
//! - [`notifier`]: format and deliver the push notification
//! - [`watcher`]: sequence the above once per invocation
//!
//! ## Example
//!
//! ```rust,no_run
//! use roomwatch::watcher::RoomWatch;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let watch = RoomWatch::from_env()?;
//!     let record = watch.run().await?;
//!     println!("{} vacancies", record.vacancy_count);
//!     Ok(())
//! }
//! ```

mod error;

pub mod config;
pub mod content;
pub mod diff;
pub mod fetcher;
pub mod notifier;
pub mod record;
pub mod state;
pub mod summarizer;
pub mod watcher;

pub use error::{Error, Result};

/// Re-export of the most commonly used types
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::record::{RoomEntry, VacancyRecord};
    pub use crate::watcher::{InvocationResponse, RoomWatch};
}
