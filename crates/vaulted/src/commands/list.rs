// SPDX-FileCopyrightText: 2026 Vaulted Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::io::Write;

use vaulted_core::{Store, VaultedError};

/// Names the vault the current shell session was spawned from.
pub const ACTIVE_ENV_VAR: &str = "VAULTED_ENV";

/// Print vault names sorted, marking `active` with ` (active)`.
pub fn run(store: &dyn Store, active: Option<&str>, out: &mut dyn Write) -> Result<(), VaultedError> {
    let mut names = store.list_vaults()?;
    names.sort();
    for name in names {
        if Some(name.as_str()) == active {
            writeln!(out, "{name} (active)")?;
        } else {
            writeln!(out, "{name}")?;
        }
    }
    Ok(())
}
