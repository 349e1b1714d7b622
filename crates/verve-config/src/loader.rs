// SPDX-FileCopyrightText: 2026 Verve Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./verve.toml` > `~/.config/verve/verve.toml` > `/etc/verve/verve.toml`
//! with environment variable overrides via `VERVE_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::VerveConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/verve/verve.toml` (system-wide)
/// 3. `~/.config/verve/verve.toml` (user XDG config)
/// 4. `./verve.toml` (local directory)
/// 5. `VERVE_*` environment variables
pub fn load_config() -> Result<VerveConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(VerveConfig::default()))
        .merge(Toml::file("/etc/verve/verve.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("verve/verve.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("verve.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env vars).
///
/// Used for testing and explicit config specification.
pub fn load_config_from_str(toml_content: &str) -> Result<VerveConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(VerveConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<VerveConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(VerveConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` NOT `Env::split("_")` to avoid ambiguity with
/// underscore-containing key names: `VERVE_API_PUBLIC_KEY` must map to
/// `api.public_key`, not `api.public.key`.
fn env_provider() -> Env {
    Env::prefixed("VERVE_").map(|key| {
        // `key` is the lowercased env var name with prefix stripped.
        // Example: VERVE_API_PUBLIC_KEY -> "api_public_key"
        let key_str = key.as_str();
        let mapped = key_str
            .replacen("agent_", "agent.", 1)
            .replacen("api_", "api.", 1)
            .replacen("demo_", "demo.", 1)
            .replacen("storage_", "storage.", 1);
        mapped.into()
    })
}
