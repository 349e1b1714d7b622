// SPDX-FileCopyrightText: 2026 Verve Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trait seams implemented by pluggable collaborators.

pub mod history;
pub mod session;

pub use history::HistoryStore;
pub use session::SessionProvider;
