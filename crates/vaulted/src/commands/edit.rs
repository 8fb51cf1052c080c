// SPDX-FileCopyrightText: 2026 Vaulted Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `vaulted add|edit <name>`: interactive editing session.

use std::io::Write;
use std::time::Duration;

use tracing::{debug, info};
use vaulted_core::{MfaDetector, Prompt, RegionSet, Store, Vault, VaultedError};
use vaulted_menu::{Menu, VaultMenu};

/// Interactive collaborators for an editing session.
pub struct Session<'a> {
    pub prompt: &'a mut dyn Prompt,
    pub detector: &'a dyn MfaDetector,
    pub regions: &'a dyn RegionSet,
    pub out: &'a mut dyn Write,
}

/// Open `name` (or start an empty vault), run the editor, and seal the result.
///
/// An opened vault is re-sealed under the password it was opened with; a new
/// vault asks the store for a fresh password. A user abort anywhere in the
/// editor returns [`VaultedError::UserAbort`] without touching the store.
pub fn run(
    store: &dyn Store,
    name: &str,
    default_duration: Duration,
    session: Session<'_>,
) -> Result<(), VaultedError> {
    let (mut vault, password) = match store.open_vault(name) {
        Ok((vault, metadata)) => (vault, Some(metadata.password)),
        Err(VaultedError::VaultNotFound(_)) => {
            debug!(name = %name, "starting new vault");
            (Vault::with_duration(default_duration), None)
        }
        Err(e) => return Err(e),
    };

    let exit = {
        let mut menu = Menu::new(
            &mut vault,
            session.prompt,
            session.detector,
            session.regions,
            session.out,
        );
        VaultMenu::new(&mut menu).handler()?
    };
    debug!(?exit, "editor finished");

    match password {
        Some(password) => store.seal_vault_with_password(&vault, name, &password)?,
        None => store.seal_vault(&vault, name)?,
    }
    info!(name = %name, "vault saved");
    Ok(())
}
