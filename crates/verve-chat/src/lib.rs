// SPDX-FileCopyrightText: 2026 Verve Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Chat backend client for the Verve coaching pipeline.
//!
//! This crate owns the network half of the pipeline: [`ChatClient`] builds
//! and sends completion requests with the retry/backoff state machine, and
//! [`extract_content`] enforces the response contract.

pub mod client;
pub mod types;
pub mod validate;

pub use client::ChatClient;
pub use types::{CompletionRequest, ResponsePayload, WireMessage};
pub use validate::extract_content;
