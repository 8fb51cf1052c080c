// SPDX-FileCopyrightText: 2026 Vaulted Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! AES-256-GCM seal/open.
//!
//! Every [`seal`] draws a fresh 96-bit nonce from the system CSPRNG.

use ring::aead::{Aad, LessSafeKey, Nonce, UnboundKey, AES_256_GCM};
use ring::rand::{SecureRandom, SystemRandom};
use vaulted_core::VaultedError;

/// Nonce length in bytes.
pub const NONCE_LEN: usize = 12;

fn cipher(key: &[u8; 32]) -> Result<LessSafeKey, VaultedError> {
    UnboundKey::new(&AES_256_GCM, key)
        .map(LessSafeKey::new)
        .map_err(|_| VaultedError::Crypto("failed to create AES-256-GCM key".to_string()))
}

/// Fill `buf` from the system CSPRNG.
pub fn fill_random(buf: &mut [u8]) -> Result<(), VaultedError> {
    SystemRandom::new()
        .fill(buf)
        .map_err(|_| VaultedError::Crypto("system random generator failed".to_string()))
}

/// Encrypt `plaintext`, returning `(ciphertext_with_tag, nonce)`.
pub fn seal(key: &[u8; 32], plaintext: &[u8]) -> Result<(Vec<u8>, [u8; NONCE_LEN]), VaultedError> {
    let mut nonce = [0u8; NONCE_LEN];
    fill_random(&mut nonce)?;

    let mut in_out = plaintext.to_vec();
    cipher(key)?
        .seal_in_place_append_tag(Nonce::assume_unique_for_key(nonce), Aad::empty(), &mut in_out)
        .map_err(|_| VaultedError::Crypto("AES-256-GCM encryption failed".to_string()))?;
    Ok((in_out, nonce))
}

/// Decrypt `ciphertext` (with its appended 16-byte tag).
///
/// A wrong key and tampered data are indistinguishable and both fail here.
pub fn open(
    key: &[u8; 32],
    nonce: &[u8; NONCE_LEN],
    ciphertext: &[u8],
) -> Result<Vec<u8>, VaultedError> {
    let mut in_out = ciphertext.to_vec();
    let plaintext = cipher(key)?
        .open_in_place(Nonce::assume_unique_for_key(*nonce), Aad::empty(), &mut in_out)
        .map_err(|_| {
            VaultedError::Crypto("incorrect password or corrupted vault".to_string())
        })?;
    Ok(plaintext.to_vec())
}
