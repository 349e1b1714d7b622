// SPDX-FileCopyrightText: 2026 Verve Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Append-only store of chat exchanges.

use async_trait::async_trait;

use crate::error::VerveError;
use crate::types::HistoryRecord;

/// Durable, append-only record of user/assistant exchanges.
///
/// The pipeline is a writer only and invokes `append` fire-and-forget:
/// failures must be absorbed by the caller so that chat usability never
/// degrades because audit logging is unavailable.
#[async_trait]
pub trait HistoryStore: Send + Sync {
    /// Appends one exchange record.
    async fn append(&self, record: &HistoryRecord) -> Result<(), VerveError>;
}
