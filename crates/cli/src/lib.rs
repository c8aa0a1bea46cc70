use anyhow::{Context, Result};

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::{
    commands::{
        CheckArgs, ConfigArgs, MigrateArgs, handle_check, handle_config, handle_migrate,
    },
    options::FormatOptions,
};
pub mod commands;
mod context;
pub mod logging;
pub mod options;
pub mod prompter;
mod rewriters;

pub use prompter::UserCancelled;

#[derive(Parser, Debug)]
#[command(
    name = "mcmigrate",
    author,
    version,
    about = "Migrate Gradle build scripts and properties of Minecraft mods to a new game version",
    help_template = "{name} {version}\n{about}\n\n{usage-heading} {usage}\n\n{all-args}"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[arg(short, long)]
    current: Option<String>,

    #[arg(short, long)]
    target: Option<String>,

    #[arg(short, long)]
    path: Option<PathBuf>,

    #[arg(short, long, default_value = "false")]
    dry_run: bool,

    #[arg(short, long, default_value = "false")]
    yes: bool,

    #[arg(long, default_value = "stdout")]
    format: FormatOptions,

    /// Log every rewrite decision to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Migrate(MigrateArgs),
    Check(CheckArgs),
    Config(ConfigArgs),
}

/// # Errors
/// Returns error if the selected command fails.
pub async fn main(args: &[String]) -> Result<()> {
    let cli = Cli::parse_from(args);
    logging::init_logging(cli.verbose);
    if let Some(command) = cli.command {
        match command {
            Commands::Migrate(args) => handle_migrate(&args).await?,
            Commands::Check(args) => handle_check(&args).await?,
            Commands::Config(args) => handle_config(&args).await?,
        }
    } else {
        handle_migrate(&MigrateArgs {
            current: cli
                .current
                .context("--current is required when no subcommand is given")?,
            target: cli
                .target
                .context("--target is required when no subcommand is given")?,
            path: cli.path,
            dry_run: cli.dry_run,
            yes: cli.yes,
            format: cli.format,
        })
        .await?;
    }
    Ok(())
}
