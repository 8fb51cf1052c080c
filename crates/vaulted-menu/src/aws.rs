// SPDX-FileCopyrightText: 2026 Vaulted Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Editor for a vault's AWS credential sub-record.
//!
//! Every loop iteration re-renders the key and reads one command. Adding a
//! key snapshots the previous [`AwsKey`] and restores it if MFA detection is
//! aborted, so the vault never holds a half-entered key. MFA and role edits
//! write a single field of an existing key directly.

use std::str::FromStr;

use strum::EnumString;
use tracing::debug;
use vaulted_core::{AwsKey, VaultedError, MAX_TEMP_CRED_DURATION};

use crate::duration::format_duration;
use crate::mfa::detect_mfa;
use crate::{printer, Menu, MenuExit, Step};

const PROMPT_WITH_KEY: &str = "Edit AWS key [k,m,r,R,t,S,D,b]: ";
const PROMPT_WITHOUT_KEY: &str = "Edit AWS key [k,R,b]: ";
const KEY_REQUIRED: &str = "Must associate an AWS key with the vault first";

const HELP: &[(&str, &str)] = &[
    ("k,key", "Key"),
    ("m,mfa", "MFA"),
    ("r,role", "Role"),
    ("R,region", "Region"),
    ("t,temp", "Substitute with temporary credentials"),
    ("S,show", "Show/Hide Secrets"),
    ("D,delete", "Delete"),
    ("?,help", "Help"),
    ("b,back", "Back"),
    ("q,quit", "Quit"),
];

/// AWS editor commands. Aliases are case-sensitive: `r` is role, `R` is region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
pub enum AwsCommand {
    #[strum(serialize = "k", serialize = "add", serialize = "key", serialize = "keys")]
    Key,
    #[strum(serialize = "m", serialize = "mfa")]
    Mfa,
    #[strum(serialize = "r", serialize = "role")]
    Role,
    #[strum(serialize = "R", serialize = "region")]
    Region,
    #[strum(serialize = "t", serialize = "temp", serialize = "temporary")]
    Temp,
    #[strum(serialize = "S", serialize = "show", serialize = "hide")]
    ShowHide,
    #[strum(serialize = "D", serialize = "delete", serialize = "remove")]
    Delete,
    #[strum(serialize = "?", serialize = "help")]
    Help,
    #[strum(serialize = "b", serialize = "back")]
    Back,
    #[strum(serialize = "q", serialize = "quit", serialize = "exit")]
    Quit,
}

/// The AWS key editing loop over a borrowed [`Menu`].
pub struct AwsMenu<'m, 'a> {
    menu: &'m mut Menu<'a>,
}

impl<'m, 'a> AwsMenu<'m, 'a> {
    pub fn new(menu: &'m mut Menu<'a>) -> Self {
        Self { menu }
    }

    /// Run until the user goes back or confirms quitting.
    ///
    /// Prompt failures, including a user abort outside the MFA and
    /// temporary-credential flows, end the loop with an error.
    pub fn handler(&mut self) -> Result<MenuExit, VaultedError> {
        loop {
            self.print()?;
            let prompt = if self.menu.vault.aws_key.is_some() {
                PROMPT_WITH_KEY
            } else {
                PROMPT_WITHOUT_KEY
            };
            let input = self.menu.prompt.read_menu(prompt)?;
            let Ok(command) = AwsCommand::from_str(&input) else {
                writeln!(self.menu.out, "{}", printer::error("Command not recognized"))?;
                continue;
            };
            debug!(?command, "aws menu command");

            if let Step::Exit(exit) = self.dispatch(command)? {
                return Ok(exit);
            }
        }
    }

    fn dispatch(&mut self, command: AwsCommand) -> Result<Step, VaultedError> {
        match command {
            AwsCommand::Key => self.add_key(),
            AwsCommand::Mfa => self.edit_mfa(),
            AwsCommand::Role => self.edit_role(),
            AwsCommand::Region => self.edit_region(),
            AwsCommand::Temp => self.toggle_temp(),
            AwsCommand::ShowHide => {
                self.menu.show_secrets = !self.menu.show_secrets;
                Ok(Step::Continue)
            }
            AwsCommand::Delete => self.delete_key(),
            AwsCommand::Help => {
                write!(self.menu.out, "{}", printer::help(HELP))?;
                Ok(Step::Continue)
            }
            AwsCommand::Back => Ok(Step::Exit(MenuExit::Back)),
            AwsCommand::Quit => confirm_quit(&mut *self.menu),
        }
    }

    fn print(&mut self) -> Result<(), VaultedError> {
        let rendered =
            printer::render_aws_key(&*self.menu.vault, self.menu.show_secrets, self.menu.regions);
        write!(self.menu.out, "{rendered}")?;
        Ok(())
    }

    fn key_required(&mut self) -> Result<Step, VaultedError> {
        writeln!(self.menu.out, "{}", printer::error(KEY_REQUIRED))?;
        Ok(Step::Continue)
    }

    fn add_key(&mut self) -> Result<Step, VaultedError> {
        writeln!(
            self.menu.out,
            "{}",
            printer::warning(
                "Note: For increased security, Vaulted defaults to substituting your credentials with temporary credentials."
            )
        )?;
        writeln!(
            self.menu.out,
            "{}\n",
            printer::warning("      The key specified here may not match the key in your spawned session.")
        )?;

        let id = self.menu.prompt.read_value("Key ID: ")?;
        let secret = self.menu.prompt.read_value("Secret: ")?;

        let snapshot = self.menu.vault.aws_key.clone();
        let mut key = snapshot.clone().unwrap_or_default();
        key.id = id;
        key.secret = secret;
        self.menu.vault.aws_key = Some(key.clone());

        match detect_mfa(
            &key,
            &mut *self.menu.prompt,
            self.menu.detector,
            &mut *self.menu.out,
        ) {
            Ok(Some(mfa)) => {
                if let Some(key) = self.menu.vault.aws_key.as_mut() {
                    key.mfa = mfa;
                }
            }
            Ok(None) => {}
            Err(e) => {
                self.menu.vault.aws_key = snapshot;
                if e.is_user_abort() {
                    debug!("key entry aborted, previous key restored");
                    return Ok(Step::Continue);
                }
                return Err(e);
            }
        }

        self.enforce_temp_cred_ceiling()?;
        Ok(Step::Continue)
    }

    /// Clamp the duration if a newly created key turned substitution on.
    fn enforce_temp_cred_ceiling(&mut self) -> Result<(), VaultedError> {
        if self.menu.vault.substitutes_temp_creds() && self.menu.vault.clamp_to_temp_cred_ceiling()
        {
            writeln!(
                self.menu.out,
                "{}",
                printer::warning(&format!(
                    "Vault duration adjusted to {} (the maximum when using temporary creds).",
                    format_duration(MAX_TEMP_CRED_DURATION)
                ))
            )?;
        }
        Ok(())
    }

    fn edit_mfa(&mut self) -> Result<Step, VaultedError> {
        let Some(key) = self.menu.vault.aws_key.as_mut() else {
            return self.key_required();
        };
        let previous = std::mem::take(&mut key.mfa);
        let key = key.clone();

        let detected = detect_mfa(
            &key,
            &mut *self.menu.prompt,
            self.menu.detector,
            &mut *self.menu.out,
        );
        let entered = match detected {
            Ok(Some(mfa)) => Ok(mfa),
            Ok(None) => self.menu.prompt.read_value("MFA ARN or serial number: "),
            Err(e) => Err(e),
        };

        match entered {
            Ok(mfa) => {
                self.set_mfa(mfa);
                Ok(Step::Continue)
            }
            Err(e) => {
                self.set_mfa(previous);
                if e.is_user_abort() {
                    Ok(Step::Continue)
                } else {
                    Err(e)
                }
            }
        }
    }

    fn set_mfa(&mut self, mfa: String) {
        if let Some(key) = self.menu.vault.aws_key.as_mut() {
            key.mfa = mfa;
        }
    }

    fn edit_role(&mut self) -> Result<Step, VaultedError> {
        if self.menu.vault.aws_key.is_none() {
            return self.key_required();
        }
        let role = self.menu.prompt.read_value("Role ARN: ")?;
        if let Some(key) = self.menu.vault.aws_key.as_mut() {
            key.role = role;
        }
        Ok(Step::Continue)
    }

    fn edit_region(&mut self) -> Result<Step, VaultedError> {
        let region = self.menu.prompt.read_value("Region: ")?;

        if region.is_empty() {
            if let Some(key) = self.menu.vault.aws_key.as_mut() {
                key.region = None;
            }
            return Ok(Step::Continue);
        }

        if !self.menu.regions.contains(&region) {
            writeln!(self.menu.out, "\n{}", printer::unknown_region_warning(&region))?;
        }
        match self.menu.vault.aws_key.as_mut() {
            Some(key) => key.region = Some(region),
            None => self.menu.vault.aws_key = Some(AwsKey::with_region(region)),
        }
        self.enforce_temp_cred_ceiling()?;
        Ok(Step::Continue)
    }

    fn toggle_temp(&mut self) -> Result<Step, VaultedError> {
        let Some(forgo) = self
            .menu
            .vault
            .aws_key
            .as_ref()
            .map(|key| !key.forgo_temp_cred_generation)
        else {
            return self.key_required();
        };

        if !forgo && self.menu.vault.duration > MAX_TEMP_CRED_DURATION {
            writeln!(
                self.menu.out,
                "{}",
                printer::warning(&format!(
                    "Proceeding will adjust your vault duration to {} (the maximum when using temporary creds).",
                    format_duration(MAX_TEMP_CRED_DURATION)
                ))
            )?;
            let confirm = match self.menu.prompt.read_prompt("Do you wish to proceed? (y/n): ") {
                Ok(answer) => answer,
                Err(e) if e.is_user_abort() => String::new(),
                Err(e) => return Err(e),
            };
            if confirm != "y" {
                writeln!(self.menu.out, "Temporary credentials not enabled.")?;
                return Ok(Step::Continue);
            }
            self.menu.vault.duration = MAX_TEMP_CRED_DURATION;
        }

        if let Some(key) = self.menu.vault.aws_key.as_mut() {
            key.forgo_temp_cred_generation = forgo;
        }
        Ok(Step::Continue)
    }

    fn delete_key(&mut self) -> Result<Step, VaultedError> {
        if self.menu.vault.aws_key.is_none() {
            return self.key_required();
        }
        let answer = self.menu.prompt.read_value("Delete your AWS key? (y/n): ")?;
        if answer == "y" {
            self.menu.vault.aws_key = None;
        }
        Ok(Step::Continue)
    }
}

/// Ask before leaving the editor with the save-and-exit signal.
pub(crate) fn confirm_quit(menu: &mut Menu<'_>) -> Result<Step, VaultedError> {
    let answer = menu
        .prompt
        .read_value("Are you sure you wish to save and exit the vault? (y/n): ")?;
    if answer == "y" {
        Ok(Step::Exit(MenuExit::SaveAndExit))
    } else {
        Ok(Step::Continue)
    }
}
