// SPDX-FileCopyrightText: 2026 Vaulted Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for Vaulted.
//!
//! Provides the error taxonomy, the vault data model, and the collaborator
//! traits (store, prompt, MFA detection, region lookup) that the editor and
//! the batch commands are written against.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::{BatchFailure, VaultedError};
pub use traits::{LegacyStore, MfaDetector, Prompt, RegionSet, Store};
pub use types::{
    AwsKey, LegacyEnvironment, Vault, VaultMetadata, DEFAULT_SESSION_DURATION,
    MAX_TEMP_CRED_DURATION,
};
