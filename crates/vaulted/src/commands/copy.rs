// SPDX-FileCopyrightText: 2026 Vaulted Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use vaulted_core::{Store, VaultedError};

/// Open `old` and seal its contents as `new` with a freshly chosen password.
pub fn run(store: &dyn Store, old: &str, new: &str) -> Result<(), VaultedError> {
    let (vault, _) = store.open_vault(old)?;
    store.seal_vault(&vault, new)
}
