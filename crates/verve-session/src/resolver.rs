// SPDX-FileCopyrightText: 2026 Verve Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Resolves the identity attached to outgoing chat requests.

use std::sync::Arc;

use tracing::debug;
use verve_core::{Identity, SessionProvider};

/// Determines the current identity for one pipeline call.
///
/// Resolution always succeeds with a usable identity: demo mode
/// short-circuits everything, a live session yields an authenticated
/// identity, and the worst case is the anonymous public credential with
/// no user id.
pub struct SessionResolver {
    sessions: Arc<dyn SessionProvider>,
}

impl SessionResolver {
    /// Creates a resolver over the given session provider.
    pub fn new(sessions: Arc<dyn SessionProvider>) -> Self {
        Self { sessions }
    }

    /// Resolves the identity for the current call.
    pub async fn resolve(&self) -> Identity {
        if self.sessions.demo_mode().await {
            debug!("demo mode active, resolved demo identity");
            return Identity::Demo;
        }

        match self.sessions.current_session().await {
            Some(handle) => {
                debug!(user_id = %handle.user_id, "resolved authenticated identity");
                Identity::Authenticated {
                    session_token: handle.access_token,
                    user_id: handle.user_id,
                }
            }
            None => {
                debug!("no live session, resolved anonymous identity");
                Identity::Anonymous
            }
        }
    }
}
