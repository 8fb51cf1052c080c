// SPDX-FileCopyrightText: 2026 Vaulted Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Scripted prompt adapter.

use std::collections::VecDeque;

use vaulted_core::{Prompt, VaultedError};

#[derive(Debug, Clone)]
enum Reply {
    Line(String),
    Abort,
    Fail(String),
}

/// Replays queued replies in order.
///
/// Running out of replies behaves like end of input and yields
/// [`VaultedError::UserAbort`].
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    replies: VecDeque<Reply>,
    asked: Vec<String>,
}

impl ScriptedPrompt {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue each line as a normal answer.
    pub fn lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut prompt = Self::new();
        for line in lines {
            prompt = prompt.line(line);
        }
        prompt
    }

    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.replies.push_back(Reply::Line(line.into()));
        self
    }

    /// Queue a user cancellation (Ctrl-C).
    pub fn abort(mut self) -> Self {
        self.replies.push_back(Reply::Abort);
        self
    }

    /// Queue a prompt-channel failure.
    pub fn fail(mut self, message: impl Into<String>) -> Self {
        self.replies.push_back(Reply::Fail(message.into()));
        self
    }

    /// Every prompt string shown so far, in order.
    pub fn asked(&self) -> &[String] {
        &self.asked
    }

    /// Replies not yet consumed.
    pub fn remaining(&self) -> usize {
        self.replies.len()
    }

    fn next(&mut self, prompt: &str) -> Result<String, VaultedError> {
        self.asked.push(prompt.to_string());
        match self.replies.pop_front() {
            Some(Reply::Line(line)) => Ok(line),
            Some(Reply::Abort) | None => Err(VaultedError::UserAbort),
            Some(Reply::Fail(message)) => Err(VaultedError::Prompt(message)),
        }
    }
}

impl Prompt for ScriptedPrompt {
    fn read_value(&mut self, prompt: &str) -> Result<String, VaultedError> {
        self.next(prompt)
    }

    fn read_menu(&mut self, prompt: &str) -> Result<String, VaultedError> {
        self.next(prompt)
    }

    fn read_prompt(&mut self, prompt: &str) -> Result<String, VaultedError> {
        self.next(prompt)
    }
}
