// SPDX-FileCopyrightText: 2026 Vaulted Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Terminal line input backed by rustyline.

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use vaulted_core::{Prompt, VaultedError};

/// Reads lines from the controlling terminal.
///
/// Ctrl+C and Ctrl+D surface as [`VaultedError::UserAbort`]. Menu commands
/// are kept in history; field values and confirmations are not.
pub struct ReadlinePrompt {
    editor: DefaultEditor,
}

impl ReadlinePrompt {
    pub fn new() -> Result<Self, VaultedError> {
        let editor = DefaultEditor::new()
            .map_err(|e| VaultedError::Prompt(format!("failed to initialize readline: {e}")))?;
        Ok(Self { editor })
    }

    fn read_line(&mut self, prompt: &str, remember: bool) -> Result<String, VaultedError> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                let trimmed = line.trim().to_string();
                if remember && !trimmed.is_empty() {
                    let _ = self.editor.add_history_entry(trimmed.as_str());
                }
                Ok(trimmed)
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Err(VaultedError::UserAbort),
            Err(e) => Err(VaultedError::Prompt(e.to_string())),
        }
    }
}

impl Prompt for ReadlinePrompt {
    fn read_value(&mut self, prompt: &str) -> Result<String, VaultedError> {
        self.read_line(prompt, false)
    }

    fn read_menu(&mut self, prompt: &str) -> Result<String, VaultedError> {
        self.read_line(prompt, true)
    }

    fn read_prompt(&mut self, prompt: &str) -> Result<String, VaultedError> {
        self.read_line(prompt, false)
    }
}
