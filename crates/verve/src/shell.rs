// SPDX-FileCopyrightText: 2026 Verve Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `verve shell` command implementation.
//!
//! Launches an interactive REPL with colored prompt and readline history.
//! Each line goes through the full chat pipeline.

use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::warn;
use verve_config::model::VerveConfig;
use verve_core::VerveError;

use crate::wiring;

/// Runs the `verve shell` interactive REPL.
pub async fn run_shell(config: &VerveConfig, force_demo: bool) -> Result<(), VerveError> {
    let pipeline = wiring::build_pipeline(config, force_demo).await?;

    let mut rl = DefaultEditor::new()
        .map_err(|e| VerveError::Internal(format!("failed to initialize readline: {e}")))?;

    println!("{}", "verve shell".bold().green());
    if force_demo || config.demo.enabled {
        println!("{}", "Running in demo mode -- replies are simulated.".yellow());
    }
    println!("Type {} to exit.\n", "/quit".yellow());

    let prompt = format!("{}> ", "verve".green());
    loop {
        match rl.readline(&prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed == "/quit" || trimmed == "/exit" {
                    break;
                }
                if trimmed.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(&line);

                match pipeline.send_chat_message(trimmed).await {
                    Ok(reply) => println!("{}\n", reply.content),
                    Err(err) => {
                        warn!(error = %err, "message delivery failed");
                        println!("{}\n", "Failed to send message, please try again.".red());
                    }
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => {
                return Err(VerveError::Internal(format!("readline error: {e}")));
            }
        }
    }

    Ok(())
}
