//! Run orchestration
//!
//! One invocation is one strictly linear pass: fetch, normalize,
//! summarize, load snapshot, detect change, notify if changed, save
//! snapshot. External scheduling (a daily trigger) invokes this once;
//! nothing here loops.

use serde::Serialize;
use serde_json::json;
use tracing::{error, info};

use crate::config::Config;
use crate::content;
use crate::diff::has_changes;
use crate::error::Result;
use crate::fetcher::PageFetcher;
use crate::notifier::Notifier;
use crate::record::VacancyRecord;
use crate::state::SnapshotStore;
use crate::summarizer::{AnthropicClient, Summarizer};

/// The vacancy monitor, wired from configuration
pub struct RoomWatch {
    config: Config,
    fetcher: PageFetcher,
    summarizer: Summarizer,
    store: SnapshotStore,
    notifier: Notifier,
}

impl RoomWatch {
    /// Create a monitor from validated configuration
    pub fn new(config: Config) -> Self {
        let fetcher = PageFetcher::default();
        let summarizer = Summarizer::new(AnthropicClient::with_api_key(&config.claude_api_key));
        let store = SnapshotStore::new(&config.state_file);
        let notifier = Notifier::new(
            &config.pushover_token,
            &config.pushover_user,
            &config.target_url,
        );

        Self {
            config,
            fetcher,
            summarizer,
            store,
            notifier,
        }
    }

    /// Create a monitor from environment variables
    pub fn from_env() -> Result<Self> {
        Config::from_env().map(Self::new)
    }

    #[cfg(test)]
    pub(crate) fn with_components(
        config: Config,
        fetcher: PageFetcher,
        summarizer: Summarizer,
        store: SnapshotStore,
        notifier: Notifier,
    ) -> Self {
        Self {
            config,
            fetcher,
            summarizer,
            store,
            notifier,
        }
    }

    /// Execute one monitoring pass
    ///
    /// A fetch or summarization failure aborts before any record exists,
    /// so nothing is notified or saved. A notification failure still saves
    /// the new snapshot before the error propagates, so the next run
    /// compares against what was actually observed.
    pub async fn run(&self) -> Result<VacancyRecord> {
        info!("Starting RoomWatch check");

        let html = self.fetcher.fetch(&self.config.target_url).await?;
        let page_text = content::extract_text(&html);

        let mut record = self.summarizer.summarize(&page_text).await?;

        let previous = self.store.load().await;

        let notify_outcome = if has_changes(&record, previous.as_ref()) {
            info!("Changes detected - sending notification");
            self.notifier.send(&record).await
        } else {
            info!("No changes - skipping notification");
            Ok(())
        };

        self.store.save(&mut record).await;
        notify_outcome?;

        info!("RoomWatch check completed successfully");
        Ok(record)
    }

    /// Execute one pass and wrap the outcome as an invocation response
    ///
    /// This is the request-handler trigger shape: the run outcome is
    /// conveyed in the payload rather than as an error.
    pub async fn invoke(&self) -> InvocationResponse {
        match self.run().await {
            Ok(record) => InvocationResponse::success(&record),
            Err(e) => {
                error!("RoomWatch check failed: {}", e);
                InvocationResponse::failure(&e.to_string())
            }
        }
    }
}

/// HTTP-style response for request-handler invocations
#[derive(Debug, Clone, Serialize)]
pub struct InvocationResponse {
    /// 200 on success, 500 on failure
    #[serde(rename = "statusCode")]
    pub status_code: u16,

    /// JSON-encoded message plus either the result record or an error
    pub body: String,
}

impl InvocationResponse {
    /// Build the success response around the produced record
    pub fn success(record: &VacancyRecord) -> Self {
        Self {
            status_code: 200,
            body: json!({
                "message": "RoomWatch executed successfully",
                "result": record,
            })
            .to_string(),
        }
    }

    /// Build the failure response carrying the error text
    pub fn failure(error: &str) -> Self {
        Self {
            status_code: 500,
            body: json!({
                "message": "RoomWatch execution failed",
                "error": error,
            })
            .to_string(),
        }
    }
}
