// SPDX-FileCopyrightText: 2026 Verve Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Verve coaching pipeline.

use thiserror::Error;

/// Umbrella error for configuration, storage, and wiring failures.
#[derive(Debug, Error)]
pub enum VerveError {
    /// Configuration errors (invalid TOML, missing required fields, type mismatches).
    #[error("configuration error: {0}")]
    Config(String),

    /// Storage backend errors (database connection, query failure, migration).
    #[error("storage error: {source}")]
    Storage {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

/// Classified failures of the chat request pipeline.
///
/// Intermediate retry attempts are handled inside the dispatcher and never
/// surface individually; callers of `send_chat_message` only ever see the
/// terminal outcome. The taxonomy exists for diagnostics and logging -- the
/// UI renders a single generic failure state regardless of variant.
#[derive(Debug, Error)]
pub enum ChatError {
    /// Transport-level failure -- no response was received.
    #[error("network error: {source}")]
    Network {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Non-2xx, non-429 response from the chat backend.
    #[error("chat backend returned HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The backend signalled rate limiting (HTTP 429) until the retry
    /// budget ran out.
    #[error("rate limited by chat backend")]
    RateLimited,

    /// Well-formed HTTP success whose payload fails the response contract.
    /// Never retried -- retrying cannot fix malformed backend output.
    #[error("invalid response format: {0}")]
    InvalidFormat(String),

    /// Terminal wrapper surfaced to callers after retry exhaustion,
    /// preserving the last underlying cause.
    #[error("failed to send message after retries")]
    DeliveryFailed {
        #[source]
        source: Box<ChatError>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn delivery_failed_preserves_cause() {
        let err = ChatError::DeliveryFailed {
            source: Box::new(ChatError::Http {
                status: 500,
                body: "internal".into(),
            }),
        };
        assert_eq!(err.to_string(), "failed to send message after retries");
        let cause = err.source().expect("cause should be preserved");
        assert!(cause.to_string().contains("HTTP 500"));
    }

    #[test]
    fn http_error_message_includes_status_and_body() {
        let err = ChatError::Http {
            status: 503,
            body: "overloaded".into(),
        };
        assert_eq!(
            err.to_string(),
            "chat backend returned HTTP 503: overloaded"
        );
    }

    #[test]
    fn verve_error_wraps_storage_source() {
        let err = VerveError::Storage {
            source: Box::new(std::io::Error::other("disk full")),
        };
        assert!(err.to_string().contains("disk full"));
    }
}
