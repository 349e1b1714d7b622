// SPDX-FileCopyrightText: 2026 Verve Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types shared across the Verve pipeline crates.

use chrono::{DateTime, Utc};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Sentinel user id recorded against demo-mode exchanges.
pub const DEMO_USER_ID: &str = "demo-user";

/// Who authored a chat message.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// A single chat message.
///
/// Immutable once created. The timestamp is set by whichever side produces
/// the message: the caller for user messages, the pipeline for assistant
/// messages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    /// Creates a user message stamped with the current time.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }

    /// Creates an assistant message stamped with the current time.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }
}

/// The resolved authentication context for one pipeline call.
///
/// Exactly one identity is active per call. Demo identities never reach
/// the network layer -- the orchestrator routes them to the demo responder.
#[derive(Debug, Clone)]
pub enum Identity {
    /// A live authenticated session with its bearer token.
    Authenticated {
        session_token: SecretString,
        user_id: String,
    },
    /// No session -- requests go out with the public fallback credential only.
    Anonymous,
    /// Synthetic demo identity with the well-known sentinel user id.
    Demo,
}

impl Identity {
    /// The user id to record history under, if the identity carries one.
    ///
    /// Authenticated sessions use their own id, demo mode uses the
    /// [`DEMO_USER_ID`] sentinel, and anonymous calls carry none.
    pub fn user_id(&self) -> Option<&str> {
        match self {
            Identity::Authenticated { user_id, .. } => Some(user_id),
            Identity::Anonymous => None,
            Identity::Demo => Some(DEMO_USER_ID),
        }
    }

    /// True for the synthetic demo identity.
    pub fn is_demo(&self) -> bool {
        matches!(self, Identity::Demo)
    }

    /// Bearer token for the Authorization header, when authenticated.
    pub fn session_token(&self) -> Option<&SecretString> {
        match self {
            Identity::Authenticated { session_token, .. } => Some(session_token),
            _ => None,
        }
    }
}

/// One user/assistant exchange as recorded in the history store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub user_id: String,
    pub message: String,
    pub response: String,
}

/// A live session as reported by the session provider.
#[derive(Debug, Clone)]
pub struct SessionHandle {
    pub access_token: SecretString,
    pub user_id: String,
}
