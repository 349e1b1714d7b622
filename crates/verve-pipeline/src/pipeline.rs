// SPDX-FileCopyrightText: 2026 Verve Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-call pipeline that turns a user message into an assistant reply.
//!
//! Each `send_chat_message` call moves through phases:
//! Idle -> Resolving -> (Simulating | Dispatching -> Validating) ->
//! Persisting -> Done, or ends in Failed. Persisting is fire-and-forget
//! and never gates completion.

use std::sync::Arc;

use tracing::{debug, warn};

use verve_chat::{extract_content, ChatClient};
use verve_core::{ChatError, ChatMessage, HistoryRecord, HistoryStore};
use verve_demo::DemoResponder;
use verve_session::SessionResolver;

/// Phases of one `send_chat_message` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelinePhase {
    /// No work started.
    Idle,
    /// Determining the identity for this call.
    Resolving,
    /// Producing a simulated reply (demo identity only).
    Simulating,
    /// Sending the request through the retrying dispatcher.
    Dispatching,
    /// Enforcing the response contract.
    Validating,
    /// Fire-and-forget history write in flight.
    Persisting,
    /// Assistant reply delivered.
    Done,
    /// Terminal error surfaced to the caller.
    Failed,
}

impl std::fmt::Display for PipelinePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PipelinePhase::Idle => write!(f, "idle"),
            PipelinePhase::Resolving => write!(f, "resolving"),
            PipelinePhase::Simulating => write!(f, "simulating"),
            PipelinePhase::Dispatching => write!(f, "dispatching"),
            PipelinePhase::Validating => write!(f, "validating"),
            PipelinePhase::Persisting => write!(f, "persisting"),
            PipelinePhase::Done => write!(f, "done"),
            PipelinePhase::Failed => write!(f, "failed"),
        }
    }
}

/// Composes session resolution, demo simulation, dispatch, validation,
/// and history persistence into the single public chat operation.
///
/// The pipeline holds no per-call state: concurrent `send_chat_message`
/// calls each own their phase and retry bookkeeping, and the shared
/// collaborators are only ever read.
pub struct ChatPipeline {
    resolver: SessionResolver,
    responder: Arc<DemoResponder>,
    client: Arc<ChatClient>,
    history: Arc<dyn HistoryStore>,
}

impl ChatPipeline {
    /// Creates a pipeline over the given collaborators.
    pub fn new(
        resolver: SessionResolver,
        responder: Arc<DemoResponder>,
        client: Arc<ChatClient>,
        history: Arc<dyn HistoryStore>,
    ) -> Self {
        Self {
            resolver,
            responder,
            client,
            history,
        }
    }

    /// Sends one user message and returns the assistant reply.
    ///
    /// Resolves identity, then either simulates (demo) or dispatches and
    /// validates (live). Dispatcher exhaustion surfaces as
    /// [`ChatError::DeliveryFailed`] with the last underlying cause;
    /// contract violations surface as [`ChatError::InvalidFormat`]. The
    /// exchange is persisted fire-and-forget when the identity carries a
    /// user id -- persistence failures are logged and swallowed, never
    /// surfaced.
    pub async fn send_chat_message(&self, message: &str) -> Result<ChatMessage, ChatError> {
        // Transition: Idle -> Resolving
        let mut phase = PipelinePhase::Resolving;
        debug!(phase = %phase, "resolving identity");
        let identity = self.resolver.resolve().await;

        let content = if identity.is_demo() {
            // Transition: Resolving -> Simulating
            phase = PipelinePhase::Simulating;
            debug!(phase = %phase, "demo identity, simulating reply");
            self.responder.simulate(message).await
        } else {
            // Transition: Resolving -> Dispatching
            phase = PipelinePhase::Dispatching;
            debug!(phase = %phase, "dispatching to chat backend");
            let payload = self
                .client
                .dispatch(message, &identity)
                .await
                .map_err(|err| match err {
                    // Malformed 2xx bodies are contract violations, not
                    // delivery failures.
                    err @ ChatError::InvalidFormat(_) => err,
                    other => ChatError::DeliveryFailed {
                        source: Box::new(other),
                    },
                })?;

            // Transition: Dispatching -> Validating
            phase = PipelinePhase::Validating;
            debug!(phase = %phase, "validating response payload");
            extract_content(payload)?
        };

        // Transition: -> Persisting (fire-and-forget, does not gate Done)
        if let Some(user_id) = identity.user_id() {
            phase = PipelinePhase::Persisting;
            debug!(phase = %phase, user_id, "recording exchange");
            let record = HistoryRecord {
                user_id: user_id.to_string(),
                message: message.to_string(),
                response: content.clone(),
            };
            let history = Arc::clone(&self.history);
            tokio::spawn(async move {
                if let Err(err) = history.append(&record).await {
                    warn!(error = %err, "history append failed, exchange not recorded");
                }
            });
        }

        // Transition: -> Done
        phase = PipelinePhase::Done;
        debug!(phase = %phase, "assistant reply ready");
        Ok(ChatMessage::assistant(content))
    }
}
