// SPDX-FileCopyrightText: 2026 Vaulted Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::io::Write;

use vaulted_core::VaultedError;

pub fn run(out: &mut dyn Write) -> Result<(), VaultedError> {
    writeln!(out, "vaulted v{}", env!("CARGO_PKG_VERSION"))?;
    Ok(())
}
