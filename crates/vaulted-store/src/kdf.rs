// SPDX-FileCopyrightText: 2026 Vaulted Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Argon2id key derivation.

use serde::{Deserialize, Serialize};
use vaulted_config::model::VaultConfig;
use vaulted_core::VaultedError;
use zeroize::Zeroizing;

/// Salt length in bytes.
pub const SALT_LEN: usize = 16;

/// Argon2id cost parameters, stored in each vault file so that vaults sealed
/// under older settings stay readable after the config changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KdfParams {
    pub memory_cost: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl From<&VaultConfig> for KdfParams {
    fn from(config: &VaultConfig) -> Self {
        Self {
            memory_cost: config.kdf_memory_cost,
            iterations: config.kdf_iterations,
            parallelism: config.kdf_parallelism,
        }
    }
}

impl KdfParams {
    /// Derive a 32-byte key, zeroed on drop.
    pub fn derive_key(
        &self,
        password: &[u8],
        salt: &[u8; SALT_LEN],
    ) -> Result<Zeroizing<[u8; 32]>, VaultedError> {
        let params =
            argon2::Params::new(self.memory_cost, self.iterations, self.parallelism, Some(32))
                .map_err(|e| VaultedError::Crypto(format!("invalid Argon2id parameters: {e}")))?;
        let argon2 =
            argon2::Argon2::new(argon2::Algorithm::Argon2id, argon2::Version::V0x13, params);

        let mut output = Zeroizing::new([0u8; 32]);
        argon2
            .hash_password_into(password, salt, output.as_mut())
            .map_err(|e| VaultedError::Crypto(format!("Argon2id key derivation failed: {e}")))?;
        Ok(output)
    }
}

/// A random salt.
pub fn generate_salt() -> Result<[u8; SALT_LEN], VaultedError> {
    let mut salt = [0u8; SALT_LEN];
    crate::crypto::fill_random(&mut salt)?;
    Ok(salt)
}
