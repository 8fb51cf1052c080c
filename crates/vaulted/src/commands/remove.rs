// SPDX-FileCopyrightText: 2026 Vaulted Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `vaulted rm <names...>`: best-effort bulk removal.

use std::io::Write;

use tracing::debug;
use vaulted_core::{BatchFailure, Store, VaultedError};

/// Message of the composite error when any removal fails.
pub const REMOVE_FAILED: &str = "Vault could not be removed";

/// Remove every named vault, printing `<name>: <error>` for each failure.
///
/// Every name is attempted. With `n` failures the result is a
/// [`BatchFailure`] whose exit code is `n`.
pub fn run(store: &dyn Store, names: &[String], out: &mut dyn Write) -> Result<(), VaultedError> {
    let mut failures = 0;
    for name in names {
        match store.remove_vault(name) {
            Ok(()) => debug!(name = %name, "removed"),
            Err(e) => {
                failures += 1;
                writeln!(out, "{name}: {e}")?;
            }
        }
    }

    if failures > 0 {
        return Err(BatchFailure::new(REMOVE_FAILED, failures).into());
    }
    Ok(())
}
