// SPDX-FileCopyrightText: 2026 Vaulted Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Command implementations behind the `vaulted` binary.
//!
//! Each command takes its store and output stream explicitly so it can run
//! against [`vaulted_store::FileStore`] in production and an in-memory store
//! in tests.

pub mod commands;
pub mod logging;
