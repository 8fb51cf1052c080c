// SPDX-FileCopyrightText: 2026 Vaulted Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Directory-backed vault store: one encrypted file per vault.

use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use vaulted_config::model::{StoreConfig, VaultConfig};
use vaulted_core::{LegacyEnvironment, LegacyStore, Store, Vault, VaultMetadata, VaultedError};

use crate::envelope::Envelope;
use crate::kdf::KdfParams;
use crate::password::PasswordSource;

/// File extension of sealed vaults.
pub const VAULT_EXTENSION: &str = "vault";

/// Encrypted vault files under a single directory, plus the legacy vault file.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
    legacy_path: PathBuf,
    kdf: KdfParams,
    passwords: PasswordSource,
}

impl FileStore {
    pub fn new(store: &StoreConfig, vault: &VaultConfig) -> Self {
        Self {
            dir: store.path.clone(),
            legacy_path: store.legacy_path.clone(),
            kdf: KdfParams::from(vault),
            passwords: PasswordSource::Interactive,
        }
    }

    /// Replace the password source.
    pub fn with_passwords(mut self, passwords: PasswordSource) -> Self {
        self.passwords = passwords;
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Whether a vault with this name exists.
    pub fn contains(&self, name: &str) -> Result<bool, VaultedError> {
        Ok(self.vault_path(name)?.exists())
    }

    fn vault_path(&self, name: &str) -> Result<PathBuf, VaultedError> {
        validate_name(name)?;
        Ok(self.dir.join(format!("{name}.{VAULT_EXTENSION}")))
    }

    fn write_envelope(&self, path: &Path, envelope: &Envelope) -> Result<(), VaultedError> {
        fs::create_dir_all(&self.dir)
            .map_err(|e| VaultedError::store("failed to create vault directory", e))?;
        write_atomic(path, &envelope.to_bytes()?)
            .map_err(|e| VaultedError::store("failed to write vault", e))
    }
}

impl Store for FileStore {
    fn open_vault(&self, name: &str) -> Result<(Vault, VaultMetadata), VaultedError> {
        let path = self.vault_path(name)?;
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(VaultedError::VaultNotFound(name.to_string()));
            }
            Err(e) => return Err(VaultedError::store("failed to read vault", e)),
        };

        let envelope = Envelope::from_bytes(&bytes)?;
        let password = self.passwords.existing(&format!("Password for `{name}`: "))?;
        let vault = envelope.open(&password)?;
        debug!(name = %name, "vault opened");
        Ok((vault, VaultMetadata { password }))
    }

    fn seal_vault(&self, vault: &Vault, name: &str) -> Result<(), VaultedError> {
        validate_name(name)?;
        let password = self.passwords.new_password(name)?;
        self.seal_vault_with_password(vault, name, &password)
    }

    fn seal_vault_with_password(
        &self,
        vault: &Vault,
        name: &str,
        password: &SecretString,
    ) -> Result<(), VaultedError> {
        let path = self.vault_path(name)?;
        let envelope = Envelope::seal(vault, password, self.kdf)?;
        self.write_envelope(&path, &envelope)?;
        info!(name = %name, "vault sealed");
        Ok(())
    }

    fn list_vaults(&self) -> Result<Vec<String>, VaultedError> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(VaultedError::store("failed to list vaults", e)),
        };

        let mut names = Vec::new();
        for entry in entries {
            let path = entry
                .map_err(|e| VaultedError::store("failed to list vaults", e))?
                .path();
            if path.extension().and_then(|e| e.to_str()) != Some(VAULT_EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str())
                && validate_name(stem).is_ok()
            {
                names.push(stem.to_string());
            }
        }
        Ok(names)
    }

    fn remove_vault(&self, name: &str) -> Result<(), VaultedError> {
        let path = self.vault_path(name)?;
        match fs::remove_file(&path) {
            Ok(()) => {
                info!(name = %name, "vault removed");
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(VaultedError::VaultNotFound(name.to_string()))
            }
            Err(e) => Err(VaultedError::store("failed to remove vault", e)),
        }
    }

    fn legacy(&self) -> Option<&dyn LegacyStore> {
        Some(self)
    }
}

/// Plaintext layout of the legacy single-file vault.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct LegacyVaultFile {
    #[serde(default)]
    pub environments: BTreeMap<String, LegacyEnvironment>,
}

impl LegacyStore for FileStore {
    fn open_legacy_vault(
        &self,
    ) -> Result<(BTreeMap<String, LegacyEnvironment>, SecretString), VaultedError> {
        let bytes = fs::read(&self.legacy_path).map_err(|e| {
            VaultedError::store(
                format!("failed to read legacy vault {}", self.legacy_path.display()),
                e,
            )
        })?;
        let envelope = Envelope::from_bytes(&bytes)?;
        let password = self.passwords.existing("Legacy vault password: ")?;
        let file: LegacyVaultFile = envelope.open(&password)?;
        debug!(count = file.environments.len(), "legacy vault decoded");
        Ok((file.environments, password))
    }
}

impl FileStore {
    /// Write the legacy vault file in the format [`LegacyStore`] decodes.
    pub fn write_legacy_vault(
        &self,
        environments: BTreeMap<String, LegacyEnvironment>,
        password: &SecretString,
    ) -> Result<(), VaultedError> {
        let envelope = Envelope::seal(&LegacyVaultFile { environments }, password, self.kdf)?;
        if let Some(parent) = self.legacy_path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| VaultedError::store("failed to create legacy vault directory", e))?;
        }
        write_atomic(&self.legacy_path, &envelope.to_bytes()?)
            .map_err(|e| VaultedError::store("failed to write legacy vault", e))
    }
}

/// Vault names double as file names.
pub fn validate_name(name: &str) -> Result<(), VaultedError> {
    let valid = !name.is_empty()
        && !name.starts_with('.')
        && !name.contains(['/', '\\', '\0']);
    if valid {
        Ok(())
    } else {
        Err(VaultedError::InvalidVaultName(name.to_string()))
    }
}

/// Write to a sibling temp file, then rename over the target.
fn write_atomic(path: &Path, contents: &[u8]) -> io::Result<()> {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    let written = write_synced(&tmp, contents).and_then(|()| fs::rename(&tmp, path));
    if written.is_err() {
        let _ = fs::remove_file(&tmp);
    }
    written
}

fn write_synced(path: &Path, contents: &[u8]) -> io::Result<()> {
    let mut options = fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }
    let mut file = options.open(path)?;
    file.write_all(contents)?;
    file.sync_all()
}
