// SPDX-FileCopyrightText: 2026 Vaulted Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Password acquisition via the VAULTED_PASSWORD environment variable or a TTY prompt.

use std::io::IsTerminal;

use secrecy::{ExposeSecret, SecretString};
use vaulted_core::VaultedError;

/// The environment variable consulted before prompting.
pub const PASSWORD_ENV_VAR: &str = "VAULTED_PASSWORD";

/// Where a store gets passwords from.
#[derive(Debug, Clone, Default)]
pub enum PasswordSource {
    /// `VAULTED_PASSWORD` if set and non-empty, otherwise a TTY prompt.
    #[default]
    Interactive,
    /// Always the same password. Used by tests and scripted callers.
    Fixed(SecretString),
}

impl PasswordSource {
    /// Password for an existing vault.
    pub fn existing(&self, prompt: &str) -> Result<SecretString, VaultedError> {
        match self {
            Self::Fixed(password) => Ok(password.clone()),
            Self::Interactive => {
                if let Some(password) = from_env() {
                    return Ok(password);
                }
                require_terminal()?;
                non_empty(read_tty(prompt)?)
            }
        }
    }

    /// A new password, confirmed when typed interactively.
    pub fn new_password(&self, vault_name: &str) -> Result<SecretString, VaultedError> {
        match self {
            Self::Fixed(password) => Ok(password.clone()),
            Self::Interactive => {
                if let Some(password) = from_env() {
                    return Ok(password);
                }
                require_terminal()?;
                let first = read_tty(&format!("New password for `{vault_name}`: "))?;
                let second = read_tty("Confirm password: ")?;
                if first.expose_secret() != second.expose_secret() {
                    return Err(VaultedError::Crypto("passwords do not match".to_string()));
                }
                non_empty(first)
            }
        }
    }
}

fn from_env() -> Option<SecretString> {
    std::env::var(PASSWORD_ENV_VAR)
        .ok()
        .filter(|p| !p.is_empty())
        .map(SecretString::from)
}

fn require_terminal() -> Result<(), VaultedError> {
    if std::io::stdin().is_terminal() {
        Ok(())
    } else {
        Err(VaultedError::Crypto(format!(
            "no password provided. Set {PASSWORD_ENV_VAR} or run interactively."
        )))
    }
}

fn read_tty(prompt: &str) -> Result<SecretString, VaultedError> {
    rpassword::prompt_password(prompt)
        .map(SecretString::from)
        .map_err(|e| VaultedError::Prompt(format!("failed to read password: {e}")))
}

fn non_empty(password: SecretString) -> Result<SecretString, VaultedError> {
    if password.expose_secret().is_empty() {
        Err(VaultedError::Crypto("empty password not allowed".to_string()))
    } else {
        Ok(password)
    }
}
