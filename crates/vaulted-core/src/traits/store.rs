// SPDX-FileCopyrightText: 2026 Vaulted Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Persistence boundary for named vaults.

use std::collections::BTreeMap;

use secrecy::SecretString;

use crate::error::VaultedError;
use crate::types::{LegacyEnvironment, Vault, VaultMetadata};

/// Encrypts, persists, and enumerates named vaults.
///
/// Implementations source passwords themselves (environment, TTY) except in
/// [`Store::seal_vault_with_password`]. Locking against concurrent writers
/// of the same name is the implementation's concern.
pub trait Store {
    /// Decrypt and load the named vault.
    fn open_vault(&self, name: &str) -> Result<(Vault, VaultMetadata), VaultedError>;

    /// Encrypt and persist `vault` under `name` with a newly acquired password.
    fn seal_vault(&self, vault: &Vault, name: &str) -> Result<(), VaultedError>;

    /// Encrypt and persist `vault` under `name` with the given password.
    fn seal_vault_with_password(
        &self,
        vault: &Vault,
        name: &str,
        password: &SecretString,
    ) -> Result<(), VaultedError>;

    /// Names of every stored vault, in no particular order.
    fn list_vaults(&self) -> Result<Vec<String>, VaultedError>;

    /// Permanently delete the named vault.
    fn remove_vault(&self, name: &str) -> Result<(), VaultedError>;

    /// Legacy-format decoding, if this store supports it.
    fn legacy(&self) -> Option<&dyn LegacyStore> {
        None
    }
}

/// Decoding of the deprecated single-file vault format.
pub trait LegacyStore {
    /// Decode every legacy environment, returning them with the shared password.
    fn open_legacy_vault(
        &self,
    ) -> Result<(BTreeMap<String, LegacyEnvironment>, SecretString), VaultedError>;
}
