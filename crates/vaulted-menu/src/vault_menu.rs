// SPDX-FileCopyrightText: 2026 Vaulted Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Top-level vault editor: variables, session duration, and the AWS submenu.

use std::str::FromStr;

use strum::EnumString;
use tracing::debug;
use vaulted_core::{VaultedError, MAX_TEMP_CRED_DURATION};

use crate::aws::{confirm_quit, AwsMenu};
use crate::duration::{format_duration, parse_duration};
use crate::{printer, Menu, MenuExit, Step};

const PROMPT: &str = "Edit vault [a,D,d,A,S,?,q]: ";

const HELP: &[(&str, &str)] = &[
    ("a,add", "Add/set a variable"),
    ("D,delete", "Delete a variable"),
    ("d,duration", "Session duration"),
    ("A,aws", "AWS key"),
    ("S,show", "Show/Hide Secrets"),
    ("?,help", "Help"),
    ("q,quit", "Save and exit"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
pub enum VaultCommand {
    #[strum(serialize = "a", serialize = "add", serialize = "s", serialize = "set")]
    SetVar,
    #[strum(serialize = "D", serialize = "delete", serialize = "remove")]
    DeleteVar,
    #[strum(serialize = "d", serialize = "duration")]
    Duration,
    #[strum(serialize = "A", serialize = "aws")]
    Aws,
    #[strum(serialize = "S", serialize = "show", serialize = "hide")]
    ShowHide,
    #[strum(serialize = "?", serialize = "help")]
    Help,
    #[strum(serialize = "q", serialize = "quit", serialize = "exit")]
    Quit,
}

pub struct VaultMenu<'m, 'a> {
    menu: &'m mut Menu<'a>,
}

impl<'m, 'a> VaultMenu<'m, 'a> {
    pub fn new(menu: &'m mut Menu<'a>) -> Self {
        Self { menu }
    }

    /// Run until the user confirms quitting, here or from the AWS submenu.
    pub fn handler(&mut self) -> Result<MenuExit, VaultedError> {
        loop {
            let rendered = printer::render_vault(
                &*self.menu.vault,
                self.menu.show_secrets,
                self.menu.regions,
            );
            write!(self.menu.out, "{rendered}")?;

            let input = self.menu.prompt.read_menu(PROMPT)?;
            let Ok(command) = VaultCommand::from_str(&input) else {
                writeln!(self.menu.out, "{}", printer::error("Command not recognized"))?;
                continue;
            };
            debug!(?command, "vault menu command");

            let step = match command {
                VaultCommand::SetVar => self.set_var()?,
                VaultCommand::DeleteVar => self.delete_var()?,
                VaultCommand::Duration => self.edit_duration()?,
                VaultCommand::Aws => match AwsMenu::new(&mut *self.menu).handler()? {
                    MenuExit::Back => Step::Continue,
                    MenuExit::SaveAndExit => Step::Exit(MenuExit::SaveAndExit),
                },
                VaultCommand::ShowHide => {
                    self.menu.show_secrets = !self.menu.show_secrets;
                    Step::Continue
                }
                VaultCommand::Help => {
                    write!(self.menu.out, "{}", printer::help(HELP))?;
                    Step::Continue
                }
                VaultCommand::Quit => confirm_quit(&mut *self.menu)?,
            };
            if let Step::Exit(exit) = step {
                return Ok(exit);
            }
        }
    }

    fn set_var(&mut self) -> Result<Step, VaultedError> {
        let name = self.menu.prompt.read_value("Name: ")?;
        if name.is_empty() {
            writeln!(self.menu.out, "{}", printer::error("Variable name cannot be empty"))?;
            return Ok(Step::Continue);
        }
        let value = self.menu.prompt.read_value("Value: ")?;
        self.menu.vault.vars.insert(name, value);
        Ok(Step::Continue)
    }

    fn delete_var(&mut self) -> Result<Step, VaultedError> {
        if self.menu.vault.vars.is_empty() {
            writeln!(self.menu.out, "{}", printer::error("No variables to delete"))?;
            return Ok(Step::Continue);
        }
        let name = self.menu.prompt.read_value("Variable to delete: ")?;
        if self.menu.vault.vars.remove(&name).is_none() {
            writeln!(
                self.menu.out,
                "{}",
                printer::error(&format!("Variable `{name}` not found"))
            )?;
        }
        Ok(Step::Continue)
    }

    fn edit_duration(&mut self) -> Result<Step, VaultedError> {
        let input = self
            .menu
            .prompt
            .read_value("Duration (e.g. 15m, 2h, 1h30m): ")?;
        let Some(duration) = parse_duration(&input) else {
            writeln!(self.menu.out, "{}", printer::error("Invalid duration"))?;
            return Ok(Step::Continue);
        };
        if duration.is_zero() {
            writeln!(self.menu.out, "{}", printer::error("Duration must be greater than zero"))?;
            return Ok(Step::Continue);
        }
        if self.menu.vault.substitutes_temp_creds() && duration > MAX_TEMP_CRED_DURATION {
            writeln!(
                self.menu.out,
                "{}",
                printer::error(&format!(
                    "Duration cannot exceed {} while substituting temporary credentials",
                    format_duration(MAX_TEMP_CRED_DURATION)
                ))
            )?;
            return Ok(Step::Continue);
        }
        self.menu.vault.duration = duration;
        Ok(Step::Continue)
    }
}
