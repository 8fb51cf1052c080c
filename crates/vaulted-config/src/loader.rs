// SPDX-FileCopyrightText: 2026 Vaulted Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Figment-based loader.
//!
//! Merge order, later overriding earlier: compiled defaults,
//! `/etc/vaulted/vaulted.toml`, `<config_dir>/vaulted/vaulted.toml`,
//! `./vaulted.toml`, then `VAULTED_*` environment variables.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::VaultedConfig;

/// System-wide config file.
pub const SYSTEM_CONFIG_PATH: &str = "/etc/vaulted/vaulted.toml";

/// Config file name looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "vaulted.toml";

/// Per-user config file under the platform config directory.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("vaulted").join(LOCAL_CONFIG_FILE))
}

/// Load configuration from the standard hierarchy with env var overrides.
pub fn load_config() -> Result<VaultedConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no files, no env).
pub fn load_config_from_str(toml_content: &str) -> Result<VaultedConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(VaultedConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from one explicit file with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<VaultedConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(VaultedConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// The full layered Figment, before extraction.
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(VaultedConfig::default()))
        .merge(Toml::file(SYSTEM_CONFIG_PATH))
        .merge(Toml::file(user_config_path().unwrap_or_default()))
        .merge(Toml::file(LOCAL_CONFIG_FILE))
        .merge(env_provider())
}

/// `VAULTED_<SECTION>_<KEY>` environment overrides.
///
/// Sections are mapped explicitly because keys themselves contain
/// underscores: `VAULTED_VAULT_KDF_MEMORY_COST` must become
/// `vault.kdf_memory_cost`, not `vault.kdf.memory.cost`.
///
/// `VAULTED_PASSWORD` and `VAULTED_ENV` are runtime inputs, not config keys,
/// and are ignored here.
fn env_provider() -> Env {
    Env::prefixed("VAULTED_")
        .ignore(&["password", "env"])
        .map(|key| {
            let key = key.as_str().to_ascii_lowercase();
            SECTIONS
                .iter()
                .find_map(|section| {
                    key.strip_prefix(section)
                        .and_then(|rest| rest.strip_prefix('_'))
                        .map(|field| format!("{section}.{field}"))
                })
                .unwrap_or(key)
                .into()
        })
}

const SECTIONS: [&str; 4] = ["store", "vault", "aws", "log"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_overrides_nested_keys() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("VAULTED_VAULT_KDF_ITERATIONS", "5");
            jail.set_env("VAULTED_AWS_CLI_PATH", "/opt/aws/bin/aws");
            jail.set_env("VAULTED_PASSWORD", "not-a-config-key");
            jail.set_env("VAULTED_ENV", "prod");
            let config = load_config()?;
            assert_eq!(config.vault.kdf_iterations, 5);
            assert_eq!(config.aws.cli_path, "/opt/aws/bin/aws");
            Ok(())
        });
    }

    #[test]
    fn env_overrides_every_section() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("VAULTED_STORE_PATH", "/srv/vaults");
            jail.set_env("VAULTED_STORE_LEGACY_PATH", "/srv/legacy.vault");
            jail.set_env("VAULTED_VAULT_DEFAULT_DURATION_SECS", "7200");
            jail.set_env("VAULTED_AWS_DETECT_MFA", "false");
            jail.set_env("VAULTED_LOG_LEVEL", "trace");
            let config = load_config()?;
            assert_eq!(config.store.path, PathBuf::from("/srv/vaults"));
            assert_eq!(config.store.legacy_path, PathBuf::from("/srv/legacy.vault"));
            assert_eq!(config.vault.default_duration_secs, 7200);
            assert!(!config.aws.detect_mfa);
            assert_eq!(config.log.level, "trace");
            Ok(())
        });
    }

    #[test]
    fn env_override_wins_over_explicit_file() {
        figment::Jail::expect_with(|jail| {
            jail.create_file("custom.toml", "[log]\nlevel = \"debug\"\n")?;
            jail.set_env("VAULTED_LOG_LEVEL", "error");
            let config = load_config_from_path(Path::new("custom.toml"))?;
            assert_eq!(config.log.level, "error");
            Ok(())
        });
    }

    #[test]
    fn local_file_is_merged() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(LOCAL_CONFIG_FILE, "[log]\nlevel = \"debug\"\n")?;
            let config = load_config()?;
            assert_eq!(config.log.level, "debug");
            Ok(())
        });
    }
}
