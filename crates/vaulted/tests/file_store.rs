// SPDX-FileCopyrightText: 2026 Vaulted Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Commands against the real encrypted file store.

use std::collections::BTreeMap;

use secrecy::SecretString;
use tempfile::TempDir;
use vaulted::commands::{list, remove, upgrade};
use vaulted_config::model::{StoreConfig, VaultConfig};
use vaulted_core::{LegacyEnvironment, Store, Vault, DEFAULT_SESSION_DURATION};
use vaulted_store::{FileStore, PasswordSource};

fn file_store(password: &str) -> (FileStore, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let store_config = StoreConfig {
        path: dir.path().join("vaults"),
        legacy_path: dir.path().join("legacy.vault"),
    };
    let vault_config = VaultConfig {
        kdf_memory_cost: 32768,
        kdf_iterations: 2,
        kdf_parallelism: 1,
        ..VaultConfig::default()
    };
    let store = FileStore::new(&store_config, &vault_config)
        .with_passwords(PasswordSource::Fixed(SecretString::from(password.to_string())));
    (store, dir)
}

#[test]
fn upgrade_then_list_and_remove() {
    let (store, _dir) = file_store("legacy-pw");
    let mut staging = LegacyEnvironment::default();
    staging.vars.insert("API_URL".into(), "https://staging".into());
    store
        .write_legacy_vault(
            BTreeMap::from([
                ("staging".to_string(), staging.clone()),
                ("prod".to_string(), LegacyEnvironment::default()),
            ]),
            &SecretString::from("legacy-pw"),
        )
        .unwrap();
    store.seal_vault(&Vault::default(), "prod").unwrap();

    let mut out = Vec::new();
    upgrade::run(&store, DEFAULT_SESSION_DURATION, &mut out).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "prod: skipped (vault already exists)\nstaging: upgraded\n"
    );

    let (opened, _) = store.open_vault("staging").unwrap();
    assert_eq!(opened.vars, staging.vars);

    let mut out = Vec::new();
    list::run(&store, Some("staging"), &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "prod\nstaging (active)\n");

    let mut out = Vec::new();
    let err = remove::run(
        &store,
        &["staging".to_string(), "missing".to_string()],
        &mut out,
    )
    .unwrap_err();
    assert_eq!(err.exit_code(), 1);
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "missing: vault `missing` does not exist\n"
    );
    assert!(!store.contains("staging").unwrap());
}

#[test]
fn upgrade_without_legacy_file_fails_before_sealing() {
    let (store, _dir) = file_store("pw");
    let mut out = Vec::new();
    let err = upgrade::run(&store, DEFAULT_SESSION_DURATION, &mut out).unwrap_err();
    assert_eq!(err.exit_code(), 1);
    assert!(out.is_empty());
    assert!(store.list_vaults().unwrap().is_empty());
}
