// SPDX-FileCopyrightText: 2026 Verve Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde
//! attributes, such as well-formed endpoint URLs and non-empty paths.

use crate::diagnostic::ConfigError;
use crate::model::VerveConfig;

/// Valid log level names accepted by `agent.log_level`.
const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &VerveConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if config.agent.name.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "agent.name must not be empty".to_string(),
        });
    }

    if !LOG_LEVELS.contains(&config.agent.log_level.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "agent.log_level `{}` is not one of trace, debug, info, warn, error",
                config.agent.log_level
            ),
        });
    }

    let url = config.api.base_url.trim();
    if url.is_empty() {
        errors.push(ConfigError::Validation {
            message: "api.base_url must not be empty".to_string(),
        });
    } else if !url.starts_with("http://") && !url.starts_with("https://") {
        errors.push(ConfigError::Validation {
            message: format!("api.base_url `{url}` must start with http:// or https://"),
        });
    }

    // A live (non-demo) configuration needs the public fallback credential;
    // demo mode never touches the network.
    if !config.demo.enabled && config.api.public_key.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "api.public_key must be set when demo mode is disabled".to_string(),
        });
    }

    if config.api.session_token.is_some() && config.api.user_id.is_none() {
        errors.push(ConfigError::Validation {
            message: "api.user_id must be set when api.session_token is set".to_string(),
        });
    }

    if config.api.timeout_secs == 0 {
        errors.push(ConfigError::Validation {
            message: "api.timeout_secs must be at least 1".to_string(),
        });
    }

    if config.api.retry_base_delay_ms == 0 {
        errors.push(ConfigError::Validation {
            message: "api.retry_base_delay_ms must be at least 1".to_string(),
        });
    }

    if config.storage.database_path.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "storage.database_path must not be empty".to_string(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
