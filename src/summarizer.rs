//! Vacancy summarization via the Anthropic Messages API
//!
//! This module turns normalized page text into a [`VacancyRecord`]. It
//! submits a single extraction prompt to the Messages API and parses the
//! reply, degrading to a heuristic fallback record when the reply is not
//! the requested JSON. Only a failed service call is an error; a messy
//! reply never is.

mod client;
mod extraction;
mod types;

pub use client::AnthropicClient;
pub use extraction::{Extraction, FALLBACK_NOTE};
pub use types::{ContentBlock, Message, MessagesRequest, MessagesResponse};

use tracing::info;

use crate::error::{Error, Result};
use crate::record::VacancyRecord;

/// Model used for extraction
const MODEL: &str = "claude-3-5-sonnet-20241022";

/// Maximum tokens requested for the reply
const MAX_TOKENS: u32 = 1024;

/// Extracts structured vacancy data from page text
#[derive(Debug, Clone)]
pub struct Summarizer {
    client: AnthropicClient,
    model: String,
}

impl Summarizer {
    /// Create a summarizer with the default model
    pub fn new(client: AnthropicClient) -> Self {
        Self {
            client,
            model: MODEL.to_string(),
        }
    }

    /// Analyze page content and produce a vacancy record
    ///
    /// The content is truncated to a fixed prefix before being sent, to
    /// bound request size. Fails only if the API call itself fails or the
    /// reply carries no text at all.
    pub async fn summarize(&self, content: &str) -> Result<VacancyRecord> {
        info!("Analyzing content with Claude AI");

        let prompt = extraction::build_prompt(content);
        let response = self
            .client
            .create_message(&self.model, MAX_TOKENS, &prompt)
            .await?;

        let reply = response.text().ok_or_else(|| {
            Error::Summarize("Model response contained no text content".to_string())
        })?;

        let record = extraction::parse_reply(reply).into_record();
        info!(
            "Claude analysis complete: {} vacancies found",
            record.vacancy_count
        );
        Ok(record)
    }
}
