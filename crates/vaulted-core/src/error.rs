// SPDX-FileCopyrightText: 2026 Vaulted Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types shared by every Vaulted crate.

use thiserror::Error;

/// Largest process exit status that survives on every platform.
const MAX_EXIT_CODE: usize = 255;

/// The primary error type used across the store, menus, and commands.
#[derive(Debug, Error)]
pub enum VaultedError {
    /// Configuration errors (invalid TOML, bad values).
    #[error("configuration error: {0}")]
    Config(String),

    /// Persistence failures reported by a store (filesystem, encoding).
    #[error("{message}")]
    Store {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The named vault does not exist in the store.
    #[error("vault `{0}` does not exist")]
    VaultNotFound(String),

    /// The vault name cannot be used as a store key.
    #[error("invalid vault name `{0}`")]
    InvalidVaultName(String),

    /// Encryption, decryption, or key derivation failed.
    #[error("{0}")]
    Crypto(String),

    /// The prompt channel failed for a reason other than user cancellation.
    #[error("prompt error: {0}")]
    Prompt(String),

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Serialization or deserialization of vault contents failed.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// The user cancelled at a prompt. Not a failure; in-progress edits are discarded.
    #[error("Aborted by user. Vault unchanged.")]
    UserAbort,

    /// A batch operation finished with one or more failed items.
    #[error(transparent)]
    Batch(#[from] BatchFailure),

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl VaultedError {
    /// Wrap any error as a store failure with a short context message.
    pub fn store<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Store {
            message: format!("{}: {source}", message.into()),
            source: Some(Box::new(source)),
        }
    }

    /// Whether this error is the user-cancellation signal.
    pub fn is_user_abort(&self) -> bool {
        matches!(self, Self::UserAbort)
    }

    /// Process exit status for this error.
    ///
    /// Batch failures exit with their failure count; everything else exits 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Batch(failure) => failure.exit_code(),
            _ => 1,
        }
    }
}

impl From<serde_json::Error> for VaultedError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e.to_string())
    }
}

/// Composite outcome of a batch operation with partial failures.
///
/// Carries the human-readable message separately from the machine-readable
/// failure count, which becomes the process exit status.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct BatchFailure {
    /// Summary printed to the user.
    pub message: String,
    /// Number of items that failed.
    pub failures: usize,
}

impl BatchFailure {
    pub fn new(message: impl Into<String>, failures: usize) -> Self {
        Self {
            message: message.into(),
            failures,
        }
    }

    /// The failure count as an exit status, capped at 255.
    pub fn exit_code(&self) -> i32 {
        self.failures.min(MAX_EXIT_CODE) as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_abort_message_matches_cli_output() {
        assert_eq!(
            VaultedError::UserAbort.to_string(),
            "Aborted by user. Vault unchanged."
        );
        assert!(VaultedError::UserAbort.is_user_abort());
        assert!(!VaultedError::Internal("x".into()).is_user_abort());
    }

    #[test]
    fn batch_failure_carries_count_as_exit_code() {
        let err: VaultedError = BatchFailure::new("Vault could not be removed", 3).into();
        assert_eq!(err.to_string(), "Vault could not be removed");
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn batch_exit_code_is_capped() {
        assert_eq!(BatchFailure::new("many", 300).exit_code(), 255);
        assert_eq!(BatchFailure::new("edge", 255).exit_code(), 255);
    }

    #[test]
    fn non_batch_errors_exit_one() {
        assert_eq!(VaultedError::VaultNotFound("prod".into()).exit_code(), 1);
        assert_eq!(VaultedError::UserAbort.exit_code(), 1);
    }

    #[test]
    fn store_helper_includes_source_message() {
        let io = std::io::Error::other("disk full");
        let err = VaultedError::store("failed to write vault", io);
        assert_eq!(err.to_string(), "failed to write vault: disk full");
    }
}
