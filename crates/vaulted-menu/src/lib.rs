// SPDX-FileCopyrightText: 2026 Vaulted Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Interactive editor for Vaulted vaults.
//!
//! [`VaultMenu`] edits variables and the session duration and hands off to
//! [`AwsMenu`] for the AWS credential sub-record. Both run against a shared
//! [`Menu`] context so they can be driven by scripted input in tests.

pub mod aws;
pub mod duration;
pub mod mfa;
pub mod printer;
pub mod prompt;
pub mod regions;
pub mod vault_menu;

use std::io::Write;

use vaulted_core::{MfaDetector, Prompt, RegionSet, Vault};

pub use aws::{AwsCommand, AwsMenu};
pub use mfa::{detect_mfa, AwsCliDetector, DisabledDetector};
pub use prompt::ReadlinePrompt;
pub use regions::KnownRegions;
pub use vault_menu::{VaultCommand, VaultMenu};

/// How an editor loop ended without error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuExit {
    /// Return to the parent menu.
    Back,
    /// The user confirmed quitting; the caller should persist the vault.
    SaveAndExit,
}

/// State shared by every menu level during one editing session.
pub struct Menu<'a> {
    pub vault: &'a mut Vault,
    /// Whether secrets are displayed in clear.
    pub show_secrets: bool,
    pub(crate) prompt: &'a mut dyn Prompt,
    pub(crate) detector: &'a dyn MfaDetector,
    pub(crate) regions: &'a dyn RegionSet,
    pub(crate) out: &'a mut dyn Write,
}

impl<'a> Menu<'a> {
    pub fn new(
        vault: &'a mut Vault,
        prompt: &'a mut dyn Prompt,
        detector: &'a dyn MfaDetector,
        regions: &'a dyn RegionSet,
        out: &'a mut dyn Write,
    ) -> Self {
        Self {
            vault,
            show_secrets: false,
            prompt,
            detector,
            regions,
            out,
        }
    }
}

/// Result of handling one command inside a menu loop.
pub(crate) enum Step {
    Continue,
    Exit(MenuExit),
}
