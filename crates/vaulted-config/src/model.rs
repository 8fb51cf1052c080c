// SPDX-FileCopyrightText: 2026 Vaulted Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs.
//!
//! All structs use `#[serde(deny_unknown_fields)]` so that a misspelled key
//! is reported at startup instead of being silently ignored.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Top-level Vaulted configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct VaultedConfig {
    /// Where vaults live on disk.
    #[serde(default)]
    pub store: StoreConfig,

    /// Encryption and new-vault defaults.
    #[serde(default)]
    pub vault: VaultConfig,

    /// AWS editor behavior.
    #[serde(default)]
    pub aws: AwsConfig,

    /// Logging.
    #[serde(default)]
    pub log: LogConfig,
}

/// Vault storage locations.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StoreConfig {
    /// Directory holding one encrypted file per vault.
    #[serde(default = "default_store_path")]
    pub path: PathBuf,

    /// The deprecated single-file vault read by `vaulted upgrade`.
    #[serde(default = "default_legacy_path")]
    pub legacy_path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_store_path(),
            legacy_path: default_legacy_path(),
        }
    }
}

fn default_store_path() -> PathBuf {
    dirs::data_dir()
        .map(|d| d.join("vaulted"))
        .unwrap_or_else(|| PathBuf::from(".vaulted-store"))
}

fn default_legacy_path() -> PathBuf {
    dirs::home_dir()
        .map(|d| d.join(".vaulted"))
        .unwrap_or_else(|| PathBuf::from(".vaulted"))
}

/// Key derivation parameters and new-vault defaults.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct VaultConfig {
    /// Argon2id memory cost in KiB (default: 65536 = 64 MiB).
    #[serde(default = "default_kdf_memory_cost")]
    pub kdf_memory_cost: u32,

    /// Argon2id iteration count (default: 3).
    #[serde(default = "default_kdf_iterations")]
    pub kdf_iterations: u32,

    /// Argon2id parallelism lanes (default: 4).
    #[serde(default = "default_kdf_parallelism")]
    pub kdf_parallelism: u32,

    /// Session duration for newly created vaults, in seconds.
    #[serde(default = "default_duration_secs")]
    pub default_duration_secs: u64,
}

impl VaultConfig {
    pub fn default_duration(&self) -> Duration {
        Duration::from_secs(self.default_duration_secs)
    }
}

impl Default for VaultConfig {
    fn default() -> Self {
        Self {
            kdf_memory_cost: default_kdf_memory_cost(),
            kdf_iterations: default_kdf_iterations(),
            kdf_parallelism: default_kdf_parallelism(),
            default_duration_secs: default_duration_secs(),
        }
    }
}

fn default_kdf_memory_cost() -> u32 {
    65536
}

fn default_kdf_iterations() -> u32 {
    3
}

fn default_kdf_parallelism() -> u32 {
    4
}

fn default_duration_secs() -> u64 {
    vaulted_core::DEFAULT_SESSION_DURATION.as_secs()
}

/// AWS editor settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AwsConfig {
    /// Region identifiers accepted in addition to the built-in list.
    #[serde(default)]
    pub extra_regions: Vec<String>,

    /// Query the AWS CLI for MFA devices when a key is added.
    #[serde(default = "default_true")]
    pub detect_mfa: bool,

    /// AWS CLI executable used for MFA detection.
    #[serde(default = "default_cli_path")]
    pub cli_path: String,
}

impl Default for AwsConfig {
    fn default() -> Self {
        Self {
            extra_regions: Vec::new(),
            detect_mfa: true,
            cli_path: default_cli_path(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_cli_path() -> String {
    "aws".to_string()
}

/// Logging settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LogConfig {
    /// Default level when `RUST_LOG` is unset (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}
