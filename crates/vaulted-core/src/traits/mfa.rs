// SPDX-FileCopyrightText: 2026 Vaulted Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! MFA device discovery.

use crate::error::VaultedError;
use crate::types::AwsKey;

/// Looks up the MFA devices associated with an AWS key.
pub trait MfaDetector {
    /// Device ARNs or serial numbers visible to `key`.
    ///
    /// An error means detection could not run; callers fall back to manual entry.
    fn list_mfa_devices(&self, key: &AwsKey) -> Result<Vec<String>, VaultedError>;
}
