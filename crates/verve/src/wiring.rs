// SPDX-FileCopyrightText: 2026 Verve Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Builds the chat pipeline from loaded configuration.

use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use verve_chat::ChatClient;
use verve_config::model::VerveConfig;
use verve_core::{HistoryStore, SessionProvider, VerveError};
use verve_demo::DemoResponder;
use verve_history::SqliteHistory;
use verve_pipeline::ChatPipeline;
use verve_session::{SessionResolver, StaticSessions};

/// Assembles a [`ChatPipeline`] from configuration.
///
/// `force_demo` (the `--demo` flag) overrides the configured demo setting.
/// Session credentials come from `[api]`; with no token configured the
/// pipeline runs anonymously against the public endpoint.
pub async fn build_pipeline(
    config: &VerveConfig,
    force_demo: bool,
) -> Result<ChatPipeline, VerveError> {
    let demo_mode = force_demo || config.demo.enabled;

    let sessions: Arc<dyn SessionProvider> = if demo_mode {
        info!("demo mode active, replies will be simulated");
        Arc::new(StaticSessions::demo())
    } else {
        match (&config.api.session_token, &config.api.user_id) {
            (Some(token), Some(user_id)) => {
                Arc::new(StaticSessions::authenticated(token, user_id))
            }
            _ => {
                info!("no session configured, running anonymously");
                Arc::new(StaticSessions::anonymous())
            }
        }
    };

    let resolver = SessionResolver::new(sessions);
    let responder = Arc::new(DemoResponder::new(Duration::from_millis(
        config.demo.response_delay_ms,
    )));
    let client = Arc::new(ChatClient::new(&config.api)?);
    let history: Arc<dyn HistoryStore> =
        Arc::new(SqliteHistory::open(&config.storage.database_path).await?);

    Ok(ChatPipeline::new(resolver, responder, client, history))
}
