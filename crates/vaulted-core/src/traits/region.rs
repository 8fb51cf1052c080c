// SPDX-FileCopyrightText: 2026 Vaulted Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Known provider region lookup.

/// A queryable set of valid region identifiers.
///
/// Only used for display warnings; unknown regions are never rejected.
pub trait RegionSet {
    fn contains(&self, region: &str) -> bool;
}
