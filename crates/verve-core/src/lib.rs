// SPDX-FileCopyrightText: 2026 Verve Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Verve coaching pipeline.
//!
//! This crate provides the error types, chat/identity types, and trait
//! seams used throughout the Verve workspace. The pipeline crates build
//! on these definitions; collaborator implementations live in their own
//! crates.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::{ChatError, VerveError};
pub use traits::{HistoryStore, SessionProvider};
pub use types::{ChatMessage, HistoryRecord, Identity, Role, SessionHandle, DEMO_USER_ID};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_error_has_all_variants() {
        // Verify all 5 pipeline error variants exist and can be constructed.
        let _network = ChatError::Network {
            source: Box::new(std::io::Error::other("refused")),
        };
        let _http = ChatError::Http {
            status: 500,
            body: "oops".into(),
        };
        let _rate_limited = ChatError::RateLimited;
        let _invalid = ChatError::InvalidFormat("no choices".into());
        let _delivery = ChatError::DeliveryFailed {
            source: Box::new(ChatError::RateLimited),
        };
    }

    #[test]
    fn trait_objects_are_send_and_sync() {
        fn _assert_send_sync<T: Send + Sync + ?Sized>() {}
        _assert_send_sync::<dyn SessionProvider>();
        _assert_send_sync::<dyn HistoryStore>();
    }
}
