// SPDX-FileCopyrightText: 2026 Verve Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory session provider with fixed state.
//!
//! Backs the CLI (credentials come from config) and tests. Richer
//! deployments implement [`SessionProvider`] over their own auth state.

use async_trait::async_trait;
use secrecy::SecretString;
use verve_core::{SessionHandle, SessionProvider};

/// A session provider whose state is fixed at construction.
pub struct StaticSessions {
    session: Option<SessionHandle>,
    demo: bool,
}

impl StaticSessions {
    /// A provider reporting a live authenticated session.
    pub fn authenticated(token: &str, user_id: &str) -> Self {
        Self {
            session: Some(SessionHandle {
                access_token: SecretString::from(token.to_string()),
                user_id: user_id.to_string(),
            }),
            demo: false,
        }
    }

    /// A provider with no session and demo mode off.
    pub fn anonymous() -> Self {
        Self {
            session: None,
            demo: false,
        }
    }

    /// A provider with demo mode on.
    pub fn demo() -> Self {
        Self {
            session: None,
            demo: true,
        }
    }

    /// Turns demo mode on, keeping any configured session.
    pub fn into_demo(mut self) -> Self {
        self.demo = true;
        self
    }
}

#[async_trait]
impl SessionProvider for StaticSessions {
    async fn current_session(&self) -> Option<SessionHandle> {
        self.session.clone()
    }

    async fn demo_mode(&self) -> bool {
        self.demo
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn authenticated_provider_reports_session() {
        let provider = StaticSessions::authenticated("tok", "user-1");
        let handle = provider.current_session().await.unwrap();
        assert_eq!(handle.user_id, "user-1");
        assert!(!provider.demo_mode().await);
    }

    #[tokio::test]
    async fn anonymous_provider_reports_nothing() {
        let provider = StaticSessions::anonymous();
        assert!(provider.current_session().await.is_none());
        assert!(!provider.demo_mode().await);
    }

    #[tokio::test]
    async fn demo_provider_reports_demo_mode() {
        let provider = StaticSessions::demo();
        assert!(provider.demo_mode().await);
    }
}
