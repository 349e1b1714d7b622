// SPDX-FileCopyrightText: 2026 Verve Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Pipeline orchestrator for the Verve coaching product.
//!
//! Exposes [`ChatPipeline::send_chat_message`], the single operation UI
//! callers use: it either resolves with an assistant
//! [`verve_core::ChatMessage`] or fails with one of the
//! [`verve_core::ChatError`] kinds.

pub mod pipeline;

pub use pipeline::{ChatPipeline, PipelinePhase};
