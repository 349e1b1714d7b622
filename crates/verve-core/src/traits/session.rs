// SPDX-FileCopyrightText: 2026 Verve Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Read-only view of the current authentication state.

use async_trait::async_trait;

use crate::types::SessionHandle;

/// Source of truth for the caller's current session and demo-mode flag.
///
/// The pipeline only ever reads through this trait; concurrent
/// `send_chat_message` calls never mutate session state.
#[async_trait]
pub trait SessionProvider: Send + Sync {
    /// Returns the live session, if one exists.
    async fn current_session(&self) -> Option<SessionHandle>;

    /// Whether the caller is explicitly in demo mode.
    async fn demo_mode(&self) -> bool;
}
