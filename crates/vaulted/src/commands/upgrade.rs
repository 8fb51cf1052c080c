// SPDX-FileCopyrightText: 2026 Vaulted Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `vaulted upgrade`: migrate the legacy single-file vault.
//!
//! Each legacy environment becomes its own vault sealed under the legacy
//! password. Names that already exist are skipped, never overwritten.

use std::collections::BTreeSet;
use std::io::Write;
use std::time::Duration;

use tracing::{debug, info};
use vaulted_core::{BatchFailure, Store, Vault, VaultedError};

/// Message of the composite error when any environment fails to migrate.
pub const UPGRADE_FAILED: &str = "Upgrade failed";

pub fn run(
    store: &dyn Store,
    default_duration: Duration,
    out: &mut dyn Write,
) -> Result<(), VaultedError> {
    let legacy = store.legacy().ok_or_else(|| {
        VaultedError::Internal("this store cannot read legacy vaults".to_string())
    })?;
    let (environments, password) = legacy.open_legacy_vault()?;

    let existing: BTreeSet<String> = store.list_vaults()?.into_iter().collect();
    debug!(
        legacy = environments.len(),
        existing = existing.len(),
        "starting upgrade"
    );

    let mut failures = 0;
    for (name, environment) in environments {
        if existing.contains(&name) {
            writeln!(out, "{name}: skipped (vault already exists)")?;
            continue;
        }

        let vault = Vault {
            vars: environment.vars,
            ..Vault::with_duration(default_duration)
        };
        match store.seal_vault_with_password(&vault, &name, &password) {
            Ok(()) => writeln!(out, "{name}: upgraded")?,
            Err(e) => {
                failures += 1;
                writeln!(out, "{name}: {e}")?;
            }
        }
    }

    if failures > 0 {
        return Err(BatchFailure::new(UPGRADE_FAILED, failures).into());
    }
    info!("legacy vault upgraded");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use vaulted_core::DEFAULT_SESSION_DURATION;
    use vaulted_test_utils::MemoryStore;

    #[test]
    fn store_without_legacy_support_is_an_error() {
        let mut out = Vec::new();
        let err = run(&MemoryStore::new(), DEFAULT_SESSION_DURATION, &mut out).unwrap_err();
        assert!(err.to_string().contains("legacy"));
        assert_eq!(err.exit_code(), 1);
        assert!(out.is_empty());
    }

    #[test]
    fn empty_legacy_vault_succeeds() {
        let store = MemoryStore::new().with_legacy([], "legacy-pw");
        let mut out = Vec::new();
        run(&store, DEFAULT_SESSION_DURATION, &mut out).unwrap();
        assert!(out.is_empty());
    }
}
