//! Wire types for the Anthropic Messages API

use serde::{Deserialize, Serialize};

/// Request body for the messages endpoint
#[derive(Debug, Serialize)]
pub struct MessagesRequest {
    /// Model to generate with
    pub model: String,

    /// Maximum tokens in the reply
    pub max_tokens: u32,

    /// Conversation turns; a single user turn for extraction
    pub messages: Vec<Message>,
}

/// A single conversation turn
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// The role of the turn ("user" or "assistant")
    pub role: String,

    /// The text of the turn
    pub content: String,
}

impl Message {
    /// Create a user turn
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Response body from the messages endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct MessagesResponse {
    /// Content blocks of the reply
    pub content: Vec<ContentBlock>,

    /// Reason generation stopped
    #[serde(default)]
    pub stop_reason: Option<String>,
}

impl MessagesResponse {
    /// Text of the first text block, if any
    pub fn text(&self) -> Option<&str> {
        self.content.iter().find_map(|block| match block {
            ContentBlock::Text { text } => Some(text.as_str()),
            ContentBlock::Other => None,
        })
    }
}

/// A block of reply content
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    /// Plain text
    Text {
        /// The text itself
        text: String,
    },

    /// Any block type this client does not consume
    #[serde(other)]
    Other,
}
