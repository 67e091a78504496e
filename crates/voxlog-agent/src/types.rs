// SPDX-FileCopyrightText: 2026 Voxlog Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Wire types for the hosted agent service API.
//!
//! These proxy the vendor's thread/message/run resources; only the fields
//! this client reads are modeled, everything else is ignored on
//! deserialization.

use serde::{Deserialize, Serialize};

use voxlog_core::RunStatus;

/// Response to thread and run creation calls: the new resource's id.
#[derive(Debug, Deserialize)]
pub struct CreatedResource {
    pub id: String,
}

/// Request body appending a user message to a thread.
#[derive(Debug, Serialize)]
pub struct NewMessageRequest<'a> {
    pub role: &'static str,
    pub content: &'a str,
}

/// Request body starting a run with the pre-configured assistant.
#[derive(Debug, Serialize)]
pub struct NewRunRequest<'a> {
    pub assistant_id: &'a str,
}

/// Response to a run status check.
#[derive(Debug, Deserialize)]
pub struct RunStatusResponse {
    pub status: RunStatus,
}

/// Response listing a thread's messages, newest first.
#[derive(Debug, Deserialize)]
pub struct MessageListResponse {
    pub data: Vec<ThreadMessage>,
}

/// One message in a thread.
#[derive(Debug, Deserialize)]
pub struct ThreadMessage {
    pub role: String,
    #[serde(default)]
    pub content: Vec<MessageContentBlock>,
}

impl ThreadMessage {
    /// The first text block's value, if the message carries any text.
    pub fn first_text(&self) -> Option<&str> {
        self.content
            .iter()
            .find_map(|block| block.text.as_ref())
            .map(|t| t.value.as_str())
    }
}

/// One content block of a message. Non-text blocks deserialize with
/// `text: None` and are skipped.
#[derive(Debug, Deserialize)]
pub struct MessageContentBlock {
    #[serde(default)]
    pub text: Option<TextContent>,
}

/// Text payload of a content block.
#[derive(Debug, Deserialize)]
pub struct TextContent {
    pub value: String,
}

/// Error body returned by the agent service on non-2xx responses.
#[derive(Debug, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorDetail,
}

/// Vendor error detail: a machine code and a human message.
#[derive(Debug, Deserialize)]
pub struct ApiErrorDetail {
    #[serde(default)]
    pub code: Option<String>,
    pub message: String,
}
