// SPDX-FileCopyrightText: 2026 Vaulted Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! One module per subcommand.

pub mod copy;
pub mod dump;
pub mod edit;
pub mod list;
pub mod load;
pub mod remove;
pub mod upgrade;
pub mod version;
