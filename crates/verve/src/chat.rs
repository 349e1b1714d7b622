// SPDX-FileCopyrightText: 2026 Verve Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `verve chat` command implementation.
//!
//! Sends one message through the pipeline and prints the assistant reply.

use colored::Colorize;
use tracing::warn;
use verve_config::model::VerveConfig;
use verve_core::VerveError;

use crate::wiring;

/// Runs the one-shot `verve chat <message>` command.
pub async fn run_chat(
    config: &VerveConfig,
    force_demo: bool,
    message: &str,
) -> Result<(), VerveError> {
    let pipeline = wiring::build_pipeline(config, force_demo).await?;

    match pipeline.send_chat_message(message).await {
        Ok(reply) => {
            println!("{}", reply.content);
            Ok(())
        }
        Err(err) => {
            // The taxonomy is for logs; users get one generic message.
            warn!(error = %err, "chat pipeline failed");
            eprintln!("{}", "Failed to send message, please try again.".red());
            Err(VerveError::Internal("message delivery failed".to_string()))
        }
    }
}
