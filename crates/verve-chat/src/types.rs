// SPDX-FileCopyrightText: 2026 Verve Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Chat backend wire types.

use serde::{Deserialize, Serialize};

/// A role/content pair in the backend conversation format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WireMessage {
    pub role: String,
    pub content: String,
}

/// Request body for the chat completion endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct CompletionRequest {
    /// Conversation messages.
    pub messages: Vec<WireMessage>,

    /// User id owning the conversation, when the identity carries one.
    #[serde(rename = "userId", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

/// Response contract: the minimal shape required to extract assistant text.
///
/// All fields are lenient on deserialization; shape enforcement happens in
/// [`crate::validate::extract_content`] so that a missing `message` or
/// `content` classifies as `InvalidFormat` rather than a parse failure.
#[derive(Debug, Clone, Deserialize)]
pub struct ResponsePayload {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

/// One completion choice.
#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    #[serde(default)]
    pub message: Option<ChoiceMessage>,
}

/// The message inside a completion choice.
#[derive(Debug, Clone, Deserialize)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

/// JSON error body returned by the backend on non-2xx status.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
}
