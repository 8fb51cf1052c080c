// SPDX-FileCopyrightText: 2026 Vaulted Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Collaborator traits consumed by the editor and batch operations.

pub mod mfa;
pub mod prompt;
pub mod region;
pub mod store;

pub use mfa::MfaDetector;
pub use prompt::Prompt;
pub use region::RegionSet;
pub use store::{LegacyStore, Store};
