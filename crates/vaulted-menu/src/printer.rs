// SPDX-FileCopyrightText: 2026 Vaulted Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Rendering of vault and AWS key state for the editor.
//!
//! Everything here is a pure function of its inputs. Colors come from
//! `colored` and are dropped automatically when output is not a terminal.

use colored::Colorize;
use vaulted_core::{RegionSet, Vault};

use crate::duration::format_duration;

/// Placeholder shown in place of secrets while they are hidden.
pub const HIDDEN: &str = "<hidden>";

const MFA_WARNING: &str = " (warning: some APIs will not function without MFA (e.g. IAM))";

/// A red single-line message, e.g. a failed precondition.
pub fn error(message: &str) -> String {
    message.red().to_string()
}

/// A yellow single-line message.
pub fn warning(message: &str) -> String {
    message.yellow().to_string()
}

/// A muted informational line.
pub fn note(message: &str) -> String {
    message.dimmed().to_string()
}

/// Help table, one `command - description` row per entry.
pub fn help(entries: &[(&str, &str)]) -> String {
    let width = entries.iter().map(|(c, _)| c.len()).max().unwrap_or(0);
    let mut out = String::new();
    for (command, description) in entries {
        out.push_str(&format!(
            "{} - {description}\n",
            format!("{command:>width$}").cyan()
        ));
    }
    out
}

/// The AWS key section.
///
/// Shows `[Empty]` when no key exists. The secret is masked unless
/// `show_secrets` is set. Unknown regions are flagged but still shown.
pub fn render_aws_key(vault: &Vault, show_secrets: bool, regions: &dyn RegionSet) -> String {
    let mut out = format!("\n{}\n", "AWS Key:".bold());

    let Some(key) = vault.aws_key.as_ref() else {
        out.push_str(&format!("  {}\n", "[Empty]".dimmed()));
        return out;
    };

    out.push_str(&format!("  Key ID: {}\n", key.id));
    let secret = if show_secrets {
        key.secret.as_str().normal()
    } else {
        HIDDEN.dimmed()
    };
    out.push_str(&format!("  Secret: {secret}\n"));

    if key.mfa.is_empty() {
        let mut line = format!("  MFA: {}", "<not configured>".dimmed());
        if key.substitutes_temp_creds() {
            line.push_str(&MFA_WARNING.yellow().to_string());
        }
        out.push_str(&line);
        out.push('\n');
    } else {
        out.push_str(&format!("  MFA: {}\n", key.mfa));
    }

    if !key.role.is_empty() {
        out.push_str(&format!("  Role: {}\n", key.role));
    }

    out.push_str(&format!(
        "  Substitute with temporary credentials: {}\n",
        key.substitutes_temp_creds()
    ));

    match key.region() {
        None => out.push_str(&format!("  Region: {}\n", "<global>".dimmed())),
        Some(region) if regions.contains(region) => {
            out.push_str(&format!("  Region: {region}\n"));
        }
        Some(region) => out.push_str(&format!(
            "  Region: {region}{}\n",
            " (unrecognized region)".yellow()
        )),
    }

    out
}

/// The full vault: variables, duration, and the AWS key section.
pub fn render_vault(vault: &Vault, show_secrets: bool, regions: &dyn RegionSet) -> String {
    let mut out = format!("\n{}\n", "Variables:".bold());
    if vault.vars.is_empty() {
        out.push_str(&format!("  {}\n", "[Empty]".dimmed()));
    }
    for (name, value) in &vault.vars {
        let value = if show_secrets {
            value.as_str().normal()
        } else {
            HIDDEN.dimmed()
        };
        out.push_str(&format!("  {name}: {value}\n"));
    }

    out.push_str(&format!(
        "\n{} {}\n",
        "Duration:".bold(),
        format_duration(vault.duration)
    ));
    out.push_str(&render_aws_key(vault, show_secrets, regions));
    out
}

/// Warning for a region outside the known set.
pub fn unknown_region_warning(region: &str) -> String {
    warning(&format!(
        "WARNING: {region} doesn't appear to be a valid region."
    ))
}
