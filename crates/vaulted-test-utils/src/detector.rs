// SPDX-FileCopyrightText: 2026 Vaulted Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fixed-answer MFA detector.

use std::cell::Cell;

use vaulted_core::{AwsKey, MfaDetector, VaultedError};

/// Returns the same device list (or failure) on every call.
#[derive(Debug, Default)]
pub struct StaticDetector {
    devices: Vec<String>,
    failure: Option<String>,
    calls: Cell<usize>,
}

impl StaticDetector {
    /// Reports no devices.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn devices<I, S>(devices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            devices: devices.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Detection always fails with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            failure: Some(message.into()),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl MfaDetector for StaticDetector {
    fn list_mfa_devices(&self, _key: &AwsKey) -> Result<Vec<String>, VaultedError> {
        self.calls.set(self.calls.get() + 1);
        match &self.failure {
            Some(message) => Err(VaultedError::Internal(message.clone())),
            None => Ok(self.devices.clone()),
        }
    }
}
