// SPDX-FileCopyrightText: 2026 Vaulted Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! On-disk encrypted envelope shared by vault files and the legacy vault.
//!
//! ```json
//! {"version":1,"kdf":{"memory_cost":65536,"iterations":3,"parallelism":4},
//!  "salt":"<hex>","nonce":"<hex>","ciphertext":"<hex>"}
//! ```

use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use vaulted_core::VaultedError;
use zeroize::Zeroizing;

use crate::crypto::{self, NONCE_LEN};
use crate::kdf::{self, KdfParams, SALT_LEN};

/// Current envelope format version.
pub const ENVELOPE_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope {
    pub version: u32,
    pub kdf: KdfParams,
    pub salt: String,
    pub nonce: String,
    pub ciphertext: String,
}

impl Envelope {
    /// Serialize `payload` as JSON and encrypt it under `password`.
    pub fn seal<T: Serialize>(
        payload: &T,
        password: &SecretString,
        params: KdfParams,
    ) -> Result<Self, VaultedError> {
        let plaintext = Zeroizing::new(serde_json::to_vec(payload)?);
        let salt = kdf::generate_salt()?;
        let key = params.derive_key(password.expose_secret().as_bytes(), &salt)?;
        let (ciphertext, nonce) = crypto::seal(&key, &plaintext)?;

        Ok(Self {
            version: ENVELOPE_VERSION,
            kdf: params,
            salt: hex::encode(salt),
            nonce: hex::encode(nonce),
            ciphertext: hex::encode(ciphertext),
        })
    }

    /// Decrypt and deserialize the payload.
    pub fn open<T: DeserializeOwned>(&self, password: &SecretString) -> Result<T, VaultedError> {
        if self.version != ENVELOPE_VERSION {
            return Err(VaultedError::Serialization(format!(
                "unsupported vault format version {}",
                self.version
            )));
        }

        let salt: [u8; SALT_LEN] = decode_fixed(&self.salt, "salt")?;
        let nonce: [u8; NONCE_LEN] = decode_fixed(&self.nonce, "nonce")?;
        let ciphertext = decode(&self.ciphertext, "ciphertext")?;

        let key = self
            .kdf
            .derive_key(password.expose_secret().as_bytes(), &salt)?;
        let plaintext = Zeroizing::new(crypto::open(&key, &nonce, &ciphertext)?);
        Ok(serde_json::from_slice(&plaintext)?)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, VaultedError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, VaultedError> {
        Ok(serde_json::to_vec_pretty(self)?)
    }
}

fn decode(field: &str, what: &str) -> Result<Vec<u8>, VaultedError> {
    hex::decode(field).map_err(|e| VaultedError::Serialization(format!("corrupted {what}: {e}")))
}

fn decode_fixed<const N: usize>(field: &str, what: &str) -> Result<[u8; N], VaultedError> {
    decode(field, what)?.try_into().map_err(|_| {
        VaultedError::Serialization(format!("corrupted {what} (expected {N} bytes)"))
    })
}
