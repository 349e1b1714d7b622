// SPDX-FileCopyrightText: 2026 Verve Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Session resolution for the Verve coaching pipeline.
//!
//! Provides [`SessionResolver`], which turns the read-only session
//! provider state into the [`verve_core::Identity`] attached to one
//! pipeline call, and [`StaticSessions`], the in-memory provider used by
//! the CLI and tests.

pub mod resolver;
pub mod static_sessions;

pub use resolver::SessionResolver;
pub use static_sessions::StaticSessions;
