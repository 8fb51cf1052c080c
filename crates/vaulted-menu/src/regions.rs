// SPDX-FileCopyrightText: 2026 Vaulted Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Known AWS region identifiers, used only for display warnings.

use std::collections::BTreeSet;

use vaulted_core::RegionSet;

/// Regions across the commercial, China, GovCloud, and ISO partitions.
const BUILTIN_REGIONS: &[&str] = &[
    "af-south-1",
    "ap-east-1",
    "ap-northeast-1",
    "ap-northeast-2",
    "ap-northeast-3",
    "ap-south-1",
    "ap-south-2",
    "ap-southeast-1",
    "ap-southeast-2",
    "ap-southeast-3",
    "ap-southeast-4",
    "ap-southeast-5",
    "ap-southeast-7",
    "ca-central-1",
    "ca-west-1",
    "cn-north-1",
    "cn-northwest-1",
    "eu-central-1",
    "eu-central-2",
    "eu-north-1",
    "eu-south-1",
    "eu-south-2",
    "eu-west-1",
    "eu-west-2",
    "eu-west-3",
    "il-central-1",
    "me-central-1",
    "me-south-1",
    "mx-central-1",
    "sa-east-1",
    "us-east-1",
    "us-east-2",
    "us-gov-east-1",
    "us-gov-west-1",
    "us-iso-east-1",
    "us-iso-west-1",
    "us-isob-east-1",
    "us-west-1",
    "us-west-2",
];

/// The built-in region list plus any configured extras.
#[derive(Debug, Clone)]
pub struct KnownRegions {
    regions: BTreeSet<String>,
}

impl Default for KnownRegions {
    fn default() -> Self {
        Self::builtin()
    }
}

impl KnownRegions {
    pub fn builtin() -> Self {
        Self {
            regions: BUILTIN_REGIONS.iter().map(|r| r.to_string()).collect(),
        }
    }

    /// Add regions that AWS launched after this list was written.
    pub fn with_extra<I, S>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.regions.extend(extra.into_iter().map(Into::into));
        self
    }
}

impl RegionSet for KnownRegions {
    fn contains(&self, region: &str) -> bool {
        self.regions.contains(region)
    }
}
