// SPDX-FileCopyrightText: 2026 Verve Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQLite persistence layer for Verve chat history.
//!
//! Provides WAL-mode SQLite storage with embedded migrations and a
//! single-writer concurrency model via `tokio-rusqlite`. The store is
//! append-only from the pipeline's perspective.

pub mod database;
pub mod migrations;
pub mod store;

pub use database::Database;
pub use store::SqliteHistory;
