use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use futures::future::join_all;
use mcmigrate_core::{FileChange, MigrationParams};
use mcmigrate_utils::{display_change, display_occurrence};

use crate::{
    context::CommandContext,
    options::FormatOptions,
    prompter::{InquirePrompter, Prompter},
};

#[derive(Args, Debug)]
#[command(about = "Migrate build files to a new game version")]
pub struct MigrateArgs {
    /// Version the build files currently reference
    #[arg(short, long)]
    pub current: String,

    /// Version to migrate to
    #[arg(short, long)]
    pub target: String,

    /// Directory to migrate, defaults to the enclosing git work tree
    #[arg(short, long)]
    pub path: Option<PathBuf>,

    #[arg(short, long)]
    pub dry_run: bool,

    #[arg(short, long)]
    pub yes: bool,

    #[arg(long, default_value = "stdout")]
    pub format: FormatOptions,
}

/// Migrate build scripts and properties files
///
/// # Errors
/// Returns error if the versions are invalid, discovery fails or a file cannot be written.
pub async fn handle_migrate(args: &MigrateArgs) -> Result<()> {
    handle_migrate_with_prompter(args, &InquirePrompter).await
}

/// # Errors
/// Returns error if the versions are invalid, discovery fails, the prompt is cancelled
/// or a file cannot be written.
pub async fn handle_migrate_with_prompter(
    args: &MigrateArgs,
    prompter: &dyn Prompter,
) -> Result<()> {
    let params = MigrationParams::new(&args.current, &args.target)?;
    if params.is_noop() {
        tracing::warn!(
            version = params.current(),
            "current and target versions are identical"
        );
        args.format.print("No changes", "[]");
        return Ok(());
    }

    let context = CommandContext::new(args.path.as_deref()).await?;
    let changes = context
        .plan(&params)
        .await?
        .into_iter()
        .filter(FileChange::is_changed)
        .collect::<Vec<_>>();

    if changes.is_empty() {
        args.format.print("No changes", "[]");
        return Ok(());
    }

    if let FormatOptions::Stdout = args.format {
        println!(
            "Migrating {} -> {} in {}",
            params.current().red(),
            params.target().green(),
            context.root.display()
        );
        for change in &changes {
            println!("{}", display_change(change));
            for occurrence in change.replacements() {
                println!("{}", display_occurrence(occurrence));
            }
        }
    }

    if args.dry_run {
        match args.format {
            FormatOptions::Stdout => {
                println!("Dry run, no files will be changed");
            }
            FormatOptions::Json => {
                println!("{}", serde_json::to_string_pretty(&changes)?);
            }
        }
        return Ok(());
    }

    let confirm = if args.yes || args.format == FormatOptions::Json {
        true
    } else {
        prompter.confirm("Apply these changes?")?
    };
    if !confirm {
        args.format.print("Migration cancelled", "[]");
        return Ok(());
    }

    join_all(changes.iter().map(|change| change.apply()))
        .await
        .into_iter()
        .collect::<Result<Vec<_>>>()?;

    match args.format {
        FormatOptions::Stdout => {
            println!("Updated {} files", changes.len());
        }
        FormatOptions::Json => {
            println!("{}", serde_json::to_string_pretty(&changes)?);
        }
    }
    Ok(())
}
