// SPDX-FileCopyrightText: 2026 Vaulted Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Vaulted - encrypted vaults of environment variables and AWS credentials.

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use colored::Colorize;
use vaulted::commands::{copy, dump, edit, list, load, remove, upgrade, version};
use vaulted::logging::init_tracing;
use vaulted_config::VaultedConfig;
use vaulted_core::{MfaDetector, Store, VaultedError};
use vaulted_menu::{AwsCliDetector, DisabledDetector, KnownRegions, ReadlinePrompt};
use vaulted_store::FileStore;

/// Vaulted - encrypted vaults of environment variables and AWS credentials.
#[derive(Parser, Debug)]
#[command(name = "vaulted", version, about, long_about = None)]
struct Cli {
    /// Read configuration from this file instead of the default locations.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// List vaults.
    #[command(alias = "ls")]
    List,
    /// Create a vault and open it in the editor.
    Add { name: String },
    /// Open a vault in the editor.
    Edit { name: String },
    /// Remove vaults. Exits with the number of vaults that could not be removed.
    #[command(alias = "remove")]
    Rm {
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Copy a vault to a new name.
    #[command(alias = "copy")]
    Cp { old: String, new: String },
    /// Seal a JSON vault read from stdin.
    Load { name: String },
    /// Print a vault as JSON.
    Dump { name: String },
    /// Migrate the legacy vault file. Exits with the number of failed vaults.
    Upgrade,
    /// Print the version.
    Version,
}

fn main() {
    let cli = Cli::parse();

    let loaded = match cli.config.as_deref() {
        Some(path) => vaulted_config::load_and_validate_path(path),
        None => vaulted_config::load_and_validate(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(errors) => {
            vaulted_config::render_errors(&errors);
            std::process::exit(1);
        }
    };
    init_tracing(&config.log.level);

    if let Err(e) = run(cli.command, &config) {
        if e.is_user_abort() {
            eprintln!("{e}");
            return;
        }
        eprintln!("{}: {e}", "error".red());
        std::process::exit(e.exit_code());
    }
}

fn run(command: Commands, config: &VaultedConfig) -> Result<(), VaultedError> {
    let store = FileStore::new(&config.store, &config.vault);
    let mut out = std::io::stdout();

    match command {
        Commands::List => {
            let active = std::env::var(list::ACTIVE_ENV_VAR).ok();
            list::run(&store, active.as_deref(), &mut out)
        }
        Commands::Add { name } | Commands::Edit { name } => {
            edit_vault(&store, &name, config, &mut out)
        }
        Commands::Rm { names } => remove::run(&store, &names, &mut out),
        Commands::Cp { old, new } => copy::run(&store, &old, &new),
        Commands::Load { name } => load::run(&store, &name, &mut std::io::stdin().lock()),
        Commands::Dump { name } => dump::run(&store, &name, &mut out),
        Commands::Upgrade => upgrade::run(&store, config.vault.default_duration(), &mut out),
        Commands::Version => version::run(&mut out),
    }
}

fn edit_vault(
    store: &dyn Store,
    name: &str,
    config: &VaultedConfig,
    out: &mut dyn Write,
) -> Result<(), VaultedError> {
    let mut prompt = ReadlinePrompt::new()?;
    let detector: Box<dyn MfaDetector> = if config.aws.detect_mfa {
        Box::new(AwsCliDetector::new(config.aws.cli_path.clone()))
    } else {
        Box::new(DisabledDetector)
    };
    let regions = KnownRegions::builtin().with_extra(config.aws.extra_regions.iter().cloned());

    edit::run(
        store,
        name,
        config.vault.default_duration(),
        edit::Session {
            prompt: &mut prompt,
            detector: detector.as_ref(),
            regions: &regions,
            out,
        },
    )
}
