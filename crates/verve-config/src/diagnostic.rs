// SPDX-FileCopyrightText: 2026 Verve Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration error diagnostics rendered via miette.
//!
//! Figment parse failures and semantic validation failures are collected
//! into [`ConfigError`] values and rendered together at startup, so a bad
//! config reports every problem in one pass.

use miette::Diagnostic;
use thiserror::Error;

/// A configuration error with diagnostic metadata.
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    /// The TOML failed to parse or deserialize.
    #[error("configuration parse error: {message}")]
    #[diagnostic(
        code(verve::config::parse),
        help("check verve.toml against the documented keys")
    )]
    Parse {
        /// Figment's description of the failure, including the offending key.
        message: String,
    },

    /// A semantic constraint on a configuration value failed.
    #[error("validation error: {message}")]
    #[diagnostic(code(verve::config::validation))]
    Validation {
        /// Description of the violated constraint.
        message: String,
    },
}

/// Convert a Figment error into one [`ConfigError::Parse`] per underlying
/// failure (Figment batches deserialization errors).
pub fn figment_to_config_errors(err: figment::Error) -> Vec<ConfigError> {
    err.into_iter()
        .map(|e| ConfigError::Parse {
            message: e.to_string(),
        })
        .collect()
}

/// Render collected configuration errors to stderr.
pub fn render_errors(errors: &[ConfigError]) {
    for err in errors {
        eprintln!("error[{}]: {err}", code_of(err));
        if let Some(help) = err.help() {
            eprintln!("  help: {help}");
        }
    }
}

fn code_of(err: &ConfigError) -> String {
    err.code()
        .map(|c| c.to_string())
        .unwrap_or_else(|| "verve::config".to_string())
}
