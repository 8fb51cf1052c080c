// SPDX-FileCopyrightText: 2026 Vaulted Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! MFA device auto-detection.
//!
//! [`detect_mfa`] asks a [`MfaDetector`] which devices the key can see and
//! lets the user pick one. [`AwsCliDetector`] shells out to the AWS CLI.

use std::io::Write;
use std::process::Command;

use serde::Deserialize;
use tracing::{debug, warn};
use vaulted_core::{AwsKey, MfaDetector, Prompt, VaultedError};

use crate::printer;

/// Run the detection sub-flow for `key`.
///
/// Returns `Ok(Some(device))` when the user picked a device, `Ok(None)` when
/// there was nothing to pick or the user declined, and
/// `Err(VaultedError::UserAbort)` when the user cancelled. Detection failures
/// are reported to `out` and yield `Ok(None)`.
pub fn detect_mfa(
    key: &AwsKey,
    prompt: &mut dyn Prompt,
    detector: &dyn MfaDetector,
    out: &mut dyn Write,
) -> Result<Option<String>, VaultedError> {
    let devices = match detector.list_mfa_devices(key) {
        Ok(devices) => devices,
        Err(e) => {
            warn!(error = %e, "MFA detection failed");
            writeln!(out, "{}", printer::note(&format!("Could not detect MFA devices: {e}")))?;
            return Ok(None);
        }
    };
    debug!(count = devices.len(), "MFA devices detected");

    match devices.as_slice() {
        [] => {
            writeln!(out, "{}", printer::note("No MFA devices found for this key."))?;
            Ok(None)
        }
        [device] => {
            let answer = prompt.read_prompt(&format!("Use MFA device {device}? (y/n): "))?;
            Ok((answer == "y").then(|| device.clone()))
        }
        many => {
            writeln!(out, "Found MFA devices:")?;
            for (i, device) in many.iter().enumerate() {
                writeln!(out, "  {}) {device}", i + 1)?;
            }
            let choice = prompt.read_value("Choose an MFA device (blank to skip): ")?;
            Ok(choice
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|i| many.get(i))
                .cloned())
        }
    }
}

/// Lists MFA devices with `aws iam list-mfa-devices`, authenticating as the key.
#[derive(Debug, Clone)]
pub struct AwsCliDetector {
    cli_path: String,
}

impl AwsCliDetector {
    pub fn new(cli_path: impl Into<String>) -> Self {
        Self {
            cli_path: cli_path.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ListMfaDevicesOutput {
    #[serde(rename = "MFADevices", default)]
    mfa_devices: Vec<MfaDevice>,
}

#[derive(Debug, Deserialize)]
struct MfaDevice {
    #[serde(rename = "SerialNumber")]
    serial_number: String,
}

impl MfaDetector for AwsCliDetector {
    fn list_mfa_devices(&self, key: &AwsKey) -> Result<Vec<String>, VaultedError> {
        if key.id.is_empty() || key.secret.is_empty() {
            return Err(VaultedError::Internal(
                "key ID and secret are required for MFA detection".to_string(),
            ));
        }

        let mut command = Command::new(&self.cli_path);
        command
            .args(["iam", "list-mfa-devices", "--output", "json"])
            .env("AWS_ACCESS_KEY_ID", &key.id)
            .env("AWS_SECRET_ACCESS_KEY", &key.secret)
            .env_remove("AWS_SESSION_TOKEN")
            .env_remove("AWS_SECURITY_TOKEN")
            .env_remove("AWS_PROFILE");
        if let Some(region) = key.region() {
            command.env("AWS_REGION", region);
        }

        let output = command.output().map_err(|e| {
            VaultedError::Internal(format!("failed to run `{}`: {e}", self.cli_path))
        })?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(VaultedError::Internal(format!(
                "`{}` exited with {}: {}",
                self.cli_path,
                output.status,
                stderr.trim()
            )));
        }

        parse_devices(&output.stdout)
    }
}

fn parse_devices(stdout: &[u8]) -> Result<Vec<String>, VaultedError> {
    let parsed: ListMfaDevicesOutput = serde_json::from_slice(stdout)?;
    Ok(parsed
        .mfa_devices
        .into_iter()
        .map(|d| d.serial_number)
        .collect())
}

/// Used when detection is turned off in configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledDetector;

impl MfaDetector for DisabledDetector {
    fn list_mfa_devices(&self, _key: &AwsKey) -> Result<Vec<String>, VaultedError> {
        Err(VaultedError::Internal("MFA detection is disabled".to_string()))
    }
}
