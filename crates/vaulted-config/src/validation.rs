// SPDX-FileCopyrightText: 2026 Vaulted Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Semantic checks that serde attributes cannot express.

use crate::diagnostic::ConfigError;
use crate::model::VaultedConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration, collecting every error.
pub fn validate_config(config: &VaultedConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();
    let mut fail = |message: String| errors.push(ConfigError::Validation { message });

    if config.store.path.as_os_str().is_empty() {
        fail("store.path must not be empty".to_string());
    }

    if config.vault.kdf_memory_cost < 32768 {
        fail(format!(
            "vault.kdf_memory_cost must be at least 32768 (32 MiB), got {}",
            config.vault.kdf_memory_cost
        ));
    }

    if config.vault.kdf_iterations < 2 {
        fail(format!(
            "vault.kdf_iterations must be at least 2, got {}",
            config.vault.kdf_iterations
        ));
    }

    if config.vault.kdf_parallelism < 1 {
        fail(format!(
            "vault.kdf_parallelism must be at least 1, got {}",
            config.vault.kdf_parallelism
        ));
    }

    if config.vault.default_duration_secs == 0 {
        fail("vault.default_duration_secs must be greater than 0".to_string());
    }

    if config.aws.cli_path.trim().is_empty() {
        fail("aws.cli_path must not be empty".to_string());
    }

    if !LOG_LEVELS.contains(&config.log.level.as_str()) {
        fail(format!(
            "log.level `{}` is not one of {}",
            config.log.level,
            LOG_LEVELS.join(", ")
        ));
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}
