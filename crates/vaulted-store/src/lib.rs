// SPDX-FileCopyrightText: 2026 Vaulted Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! AES-256-GCM encrypted file store for Vaulted.
//!
//! Each vault is sealed independently: a fresh Argon2id salt derives the
//! key from the vault's password, and the JSON-encoded vault is encrypted
//! with AES-256-GCM under a fresh nonce. The same envelope protects the
//! legacy single-file vault read during `vaulted upgrade`.

pub mod crypto;
pub mod envelope;
pub mod kdf;
pub mod password;
pub mod store;

pub use password::{PasswordSource, PASSWORD_ENV_VAR};
pub use store::{validate_name, FileStore};
