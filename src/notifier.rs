//! Push notifications via Pushover
//!
//! Formats a vacancy record into a title and message and delivers it with
//! a single form-encoded POST. Only called once change detection has
//! signalled a significant change, so a fully-formed record is always in
//! hand.

use std::time::Duration;

use reqwest::Client;
use tracing::{error, info};

use crate::error::{Error, Result};
use crate::record::VacancyRecord;

/// Request timeout for the notification POST in seconds
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Pushover truncates messages beyond this length
const MAX_MESSAGE_CHARS: usize = 1024;

/// At most this many rooms are itemized in the message body
const MAX_ROOMS_LISTED: usize = 5;

/// Sends push notifications for significant vacancy changes
#[derive(Debug, Clone)]
pub struct Notifier {
    client: Client,
    base_url: String,
    token: String,
    user: String,
    target_url: String,
}

#[cfg(test)]
impl Notifier {
    /// Set the base URL (for testing only)
    pub fn set_base_url(&mut self, url: String) {
        self.base_url = url;
    }
}

impl Notifier {
    /// Create a notifier for the given Pushover credentials
    ///
    /// `target_url` is attached to every notification as a deep link back
    /// to the monitored page.
    pub fn new(
        token: impl Into<String>,
        user: impl Into<String>,
        target_url: impl Into<String>,
    ) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: "https://api.pushover.net".to_string(),
            token: token.into(),
            user: user.into(),
            target_url: target_url.into(),
        }
    }

    /// Format and deliver a notification for the given record
    pub async fn send(&self, record: &VacancyRecord) -> Result<()> {
        info!("Sending push notification");

        let (title, message) = build_notification(record);
        let priority = if record.has_vacancies { "1" } else { "0" };

        let params = [
            ("token", self.token.as_str()),
            ("user", self.user.as_str()),
            ("title", title.as_str()),
            ("message", message.as_str()),
            ("priority", priority),
            ("url", self.target_url.as_str()),
            ("url_title", "View Vacancies"),
        ];

        let url = format!("{}/1/messages.json", self.base_url);
        let response = self
            .client
            .post(&url)
            .form(&params)
            .send()
            .await
            .map_err(|e| Error::Notify(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Failed to send notification: {} - {}", status, body);
            return Err(Error::Notify(format!(
                "Push service returned status {}: {}",
                status, body
            )));
        }

        info!("Notification sent successfully");
        Ok(())
    }
}

/// Build the notification title and message for a record
///
/// The message is truncated to the push service's length limit without
/// splitting a UTF-8 character.
fn build_notification(record: &VacancyRecord) -> (String, String) {
    if record.has_vacancies {
        let title = "\u{1F3E0} Room Vacancies Detected!".to_string();
        let mut message = format!("{}\n\n", record.summary);

        if !record.rooms.is_empty() {
            message.push_str("Available rooms:\n");
            for room in record.rooms.iter().take(MAX_ROOMS_LISTED) {
                let id = if room.room.is_empty() {
                    "N/A"
                } else {
                    room.room.as_str()
                };
                let details = if room.details.is_empty() {
                    "No details"
                } else {
                    room.details.as_str()
                };
                message.push_str(&format!("- {}: {}\n", id, details));
            }
        }

        if !record.notes.is_empty() {
            message.push_str(&format!("\n{}", record.notes));
        }

        (title, truncate_chars(&message, MAX_MESSAGE_CHARS))
    } else {
        let title = "Room Watch Update".to_string();
        let message = format!("No vacancies currently available.\n\n{}", record.summary);
        (title, truncate_chars(&message, MAX_MESSAGE_CHARS))
    }
}

fn truncate_chars(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => s[..idx].to_string(),
        None => s.to_string(),
    }
}
