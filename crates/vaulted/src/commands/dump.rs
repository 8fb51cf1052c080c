// SPDX-FileCopyrightText: 2026 Vaulted Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::io::Write;

use vaulted_core::{Store, VaultedError};

/// Print a vault as pretty JSON, in the format `load` accepts.
pub fn run(store: &dyn Store, name: &str, out: &mut dyn Write) -> Result<(), VaultedError> {
    let (vault, _) = store.open_vault(name)?;
    serde_json::to_writer_pretty(&mut *out, &vault)?;
    writeln!(out)?;
    Ok(())
}
