// SPDX-FileCopyrightText: 2026 Vaulted Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory store with failure injection.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};

use secrecy::SecretString;
use vaulted_core::{LegacyEnvironment, LegacyStore, Store, Vault, VaultMetadata, VaultedError};

/// Password recorded for vaults sealed through [`Store::seal_vault`].
pub const DEFAULT_PASSWORD: &str = "memory-store-password";

/// A `Store` backed by a map.
///
/// Names registered with [`MemoryStore::fail_seal`] or
/// [`MemoryStore::fail_remove`] fail those calls with a store error.
/// Every call is recorded in order for assertions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    vaults: RefCell<BTreeMap<String, (Vault, SecretString)>>,
    legacy: Option<(BTreeMap<String, LegacyEnvironment>, SecretString)>,
    failing_seals: BTreeSet<String>,
    failing_removes: BTreeSet<String>,
    calls: RefCell<Vec<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a vault sealed with [`DEFAULT_PASSWORD`].
    pub fn with_vault(self, name: &str, vault: Vault) -> Self {
        self.vaults.borrow_mut().insert(
            name.to_string(),
            (vault, SecretString::from(DEFAULT_PASSWORD)),
        );
        self
    }

    /// Enable legacy decoding with these environments and shared password.
    pub fn with_legacy<I>(mut self, environments: I, password: &str) -> Self
    where
        I: IntoIterator<Item = (String, LegacyEnvironment)>,
    {
        self.legacy = Some((
            environments.into_iter().collect(),
            SecretString::from(password.to_string()),
        ));
        self
    }

    pub fn fail_seal(mut self, name: &str) -> Self {
        self.failing_seals.insert(name.to_string());
        self
    }

    pub fn fail_remove(mut self, name: &str) -> Self {
        self.failing_removes.insert(name.to_string());
        self
    }

    /// Current contents of a vault, if present.
    pub fn vault(&self, name: &str) -> Option<Vault> {
        self.vaults.borrow().get(name).map(|(v, _)| v.clone())
    }

    /// Password a vault was last sealed with.
    pub fn password(&self, name: &str) -> Option<SecretString> {
        self.vaults.borrow().get(name).map(|(_, p)| p.clone())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.vaults.borrow().contains_key(name)
    }

    /// Calls made so far, formatted as `<operation>:<name>`.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, op: &str, name: &str) {
        self.calls.borrow_mut().push(format!("{op}:{name}"));
    }

    fn injected(op: &str, name: &str) -> VaultedError {
        VaultedError::Store {
            message: format!("injected {op} failure for {name}"),
            source: None,
        }
    }
}

impl Store for MemoryStore {
    fn open_vault(&self, name: &str) -> Result<(Vault, VaultMetadata), VaultedError> {
        self.record("open", name);
        self.vaults
            .borrow()
            .get(name)
            .map(|(vault, password)| {
                (
                    vault.clone(),
                    VaultMetadata {
                        password: password.clone(),
                    },
                )
            })
            .ok_or_else(|| VaultedError::VaultNotFound(name.to_string()))
    }

    fn seal_vault(&self, vault: &Vault, name: &str) -> Result<(), VaultedError> {
        self.seal_vault_with_password(vault, name, &SecretString::from(DEFAULT_PASSWORD))
    }

    fn seal_vault_with_password(
        &self,
        vault: &Vault,
        name: &str,
        password: &SecretString,
    ) -> Result<(), VaultedError> {
        self.record("seal", name);
        if self.failing_seals.contains(name) {
            return Err(Self::injected("seal", name));
        }
        self.vaults
            .borrow_mut()
            .insert(name.to_string(), (vault.clone(), password.clone()));
        Ok(())
    }

    fn list_vaults(&self) -> Result<Vec<String>, VaultedError> {
        Ok(self.vaults.borrow().keys().cloned().collect())
    }

    fn remove_vault(&self, name: &str) -> Result<(), VaultedError> {
        self.record("remove", name);
        if self.failing_removes.contains(name) {
            return Err(Self::injected("remove", name));
        }
        self.vaults
            .borrow_mut()
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| VaultedError::VaultNotFound(name.to_string()))
    }

    fn legacy(&self) -> Option<&dyn LegacyStore> {
        self.legacy.as_ref().map(|_| self as &dyn LegacyStore)
    }
}

impl LegacyStore for MemoryStore {
    fn open_legacy_vault(
        &self,
    ) -> Result<(BTreeMap<String, LegacyEnvironment>, SecretString), VaultedError> {
        self.legacy
            .clone()
            .ok_or_else(|| VaultedError::Internal("no legacy vault configured".to_string()))
    }
}
