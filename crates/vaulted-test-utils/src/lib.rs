// SPDX-FileCopyrightText: 2026 Vaulted Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test doubles for Vaulted.
//!
//! - [`MemoryStore`] - in-memory `Store` + `LegacyStore` with per-name failure injection
//! - [`ScriptedPrompt`] - `Prompt` that replays queued answers and records what was asked
//! - [`StaticDetector`] - `MfaDetector` with a fixed answer

pub mod detector;
pub mod memory_store;
pub mod scripted_prompt;

pub use detector::StaticDetector;
pub use memory_store::MemoryStore;
pub use scripted_prompt::ScriptedPrompt;
