// SPDX-FileCopyrightText: 2026 Verve Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Verve coaching pipeline.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};

/// Top-level Verve configuration.
///
/// Loaded from TOML files following the XDG hierarchy, with environment
/// variable overrides. All sections are optional and default to sensible
/// values; the out-of-the-box configuration runs in demo mode.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct VerveConfig {
    /// Agent identity and logging settings.
    #[serde(default)]
    pub agent: AgentConfig,

    /// Chat backend API settings.
    #[serde(default)]
    pub api: ApiConfig,

    /// Demo (offline simulation) mode settings.
    #[serde(default)]
    pub demo: DemoConfig,

    /// History storage settings.
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Agent identity and logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AgentConfig {
    /// Display name of the coaching agent.
    #[serde(default = "default_agent_name")]
    pub name: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            name: default_agent_name(),
            log_level: default_log_level(),
        }
    }
}

fn default_agent_name() -> String {
    "verve".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Chat backend API configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ApiConfig {
    /// Chat completion endpoint URL.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Public fallback credential attached to every request.
    #[serde(default)]
    pub public_key: String,

    /// Bearer token for an authenticated session, if one exists.
    #[serde(default)]
    pub session_token: Option<String>,

    /// User id owning the authenticated session.
    #[serde(default)]
    pub user_id: Option<String>,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Base delay for exponential retry backoff, in milliseconds.
    #[serde(default = "default_retry_base_delay_ms")]
    pub retry_base_delay_ms: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            public_key: String::new(),
            session_token: None,
            user_id: None,
            timeout_secs: default_timeout_secs(),
            retry_base_delay_ms: default_retry_base_delay_ms(),
        }
    }
}

fn default_base_url() -> String {
    "https://api.verve.health/functions/v1/chat".to_string()
}

fn default_timeout_secs() -> u64 {
    60
}

fn default_retry_base_delay_ms() -> u64 {
    1000
}

/// Demo (offline simulation) mode configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DemoConfig {
    /// Whether demo mode is active. On by default so the CLI works with
    /// no backend configured.
    #[serde(default = "default_demo_enabled")]
    pub enabled: bool,

    /// Artificial reply delay in milliseconds, matching the latency feel
    /// of the live network path.
    #[serde(default = "default_response_delay_ms")]
    pub response_delay_ms: u64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            enabled: default_demo_enabled(),
            response_delay_ms: default_response_delay_ms(),
        }
    }
}

fn default_demo_enabled() -> bool {
    true
}

fn default_response_delay_ms() -> u64 {
    1000
}

/// History storage configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    /// Path to the SQLite history database.
    #[serde(default = "default_database_path")]
    pub database_path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
        }
    }
}

fn default_database_path() -> String {
    "verve.db".to_string()
}
