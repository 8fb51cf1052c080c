// SPDX-FileCopyrightText: 2026 Vaulted Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Vault data model: environment variables, AWS credentials, session duration.

use std::collections::BTreeMap;
use std::time::Duration;

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Session duration ceiling while temporary credentials are substituted.
pub const MAX_TEMP_CRED_DURATION: Duration = Duration::from_secs(36 * 60 * 60);

/// Session duration used when a vault does not specify one.
pub const DEFAULT_SESSION_DURATION: Duration = Duration::from_secs(60 * 60);

/// A named bundle of environment variables plus optional AWS credentials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vault {
    /// Environment variables injected into spawned sessions.
    #[serde(default)]
    pub vars: BTreeMap<String, String>,

    /// AWS credential sub-record. Absent means no AWS integration at all.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aws_key: Option<AwsKey>,

    /// Session duration, persisted as whole seconds.
    #[serde(default = "default_duration", with = "duration_secs")]
    pub duration: Duration,
}

impl Default for Vault {
    fn default() -> Self {
        Self::with_duration(DEFAULT_SESSION_DURATION)
    }
}

impl Vault {
    /// An empty vault with the given session duration.
    pub fn with_duration(duration: Duration) -> Self {
        Self {
            vars: BTreeMap::new(),
            aws_key: None,
            duration,
        }
    }

    /// Whether temporary credentials will be generated for this vault.
    pub fn substitutes_temp_creds(&self) -> bool {
        self.aws_key
            .as_ref()
            .is_some_and(AwsKey::substitutes_temp_creds)
    }

    /// Clamp the duration to [`MAX_TEMP_CRED_DURATION`]. Returns true if it changed.
    pub fn clamp_to_temp_cred_ceiling(&mut self) -> bool {
        if self.duration > MAX_TEMP_CRED_DURATION {
            self.duration = MAX_TEMP_CRED_DURATION;
            true
        } else {
            false
        }
    }
}

/// AWS credential sub-record of a [`Vault`].
///
/// Debug output redacts the secret.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AwsKey {
    /// Access key id.
    #[serde(default)]
    pub id: String,

    /// Secret access key.
    #[serde(default)]
    pub secret: String,

    /// MFA device ARN or serial. Empty means unconfigured.
    #[serde(default)]
    pub mfa: String,

    /// Role ARN to assume. Empty means none.
    #[serde(default)]
    pub role: String,

    /// Region. `None` or empty means global.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    /// When true, the long-lived key is exported as-is instead of being
    /// substituted with temporary session credentials.
    #[serde(default)]
    pub forgo_temp_cred_generation: bool,
}

impl std::fmt::Debug for AwsKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AwsKey")
            .field("id", &self.id)
            .field("secret", &"[REDACTED]")
            .field("mfa", &self.mfa)
            .field("role", &self.role)
            .field("region", &self.region)
            .field("forgo_temp_cred_generation", &self.forgo_temp_cred_generation)
            .finish()
    }
}

impl AwsKey {
    /// A key holding only a region.
    pub fn with_region(region: impl Into<String>) -> Self {
        Self {
            region: Some(region.into()),
            ..Self::default()
        }
    }

    /// Inverse of `forgo_temp_cred_generation`, which is what the UI shows.
    pub fn substitutes_temp_creds(&self) -> bool {
        !self.forgo_temp_cred_generation
    }

    /// The configured region, treating an empty string as unset.
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref().filter(|r| !r.is_empty())
    }
}

/// One environment from the legacy single-file vault.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyEnvironment {
    #[serde(default)]
    pub vars: BTreeMap<String, String>,
}

/// Store-side information returned alongside an opened vault.
#[derive(Debug, Clone)]
pub struct VaultMetadata {
    /// Password the vault was opened with, reused when re-sealing after an edit.
    pub password: SecretString,
}

fn default_duration() -> Duration {
    DEFAULT_SESSION_DURATION
}

mod duration_secs {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(d.as_secs())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        u64::deserialize(d).map(Duration::from_secs)
    }
}
