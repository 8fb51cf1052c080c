// SPDX-FileCopyrightText: 2026 Vaulted Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Line-oriented user input.

use crate::error::VaultedError;

/// Blocking single-line input from the operator.
///
/// Every method returns [`VaultedError::UserAbort`] when the user cancels
/// (interrupt or end of input) and another error variant for real I/O failures.
pub trait Prompt {
    /// Read a field value.
    fn read_value(&mut self, prompt: &str) -> Result<String, VaultedError>;

    /// Read a menu command.
    fn read_menu(&mut self, prompt: &str) -> Result<String, VaultedError>;

    /// Read an answer to a yes/no style question.
    fn read_prompt(&mut self, prompt: &str) -> Result<String, VaultedError>;
}

impl<P: Prompt + ?Sized> Prompt for &mut P {
    fn read_value(&mut self, prompt: &str) -> Result<String, VaultedError> {
        (**self).read_value(prompt)
    }

    fn read_menu(&mut self, prompt: &str) -> Result<String, VaultedError> {
        (**self).read_menu(prompt)
    }

    fn read_prompt(&mut self, prompt: &str) -> Result<String, VaultedError> {
        (**self).read_prompt(prompt)
    }
}
