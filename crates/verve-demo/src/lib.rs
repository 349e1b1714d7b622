// SPDX-FileCopyrightText: 2026 Verve Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Demo response engine for the Verve coaching pipeline.
//!
//! Provides [`DemoResponder`], the network-free simulation path used when
//! the resolved identity is the demo sentinel.

pub mod engine;

pub use engine::DemoResponder;
