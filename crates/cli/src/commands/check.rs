use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use mcmigrate_core::MigrationParams;
use mcmigrate_utils::{display_change, display_occurrence};

use crate::{context::CommandContext, options::FormatOptions};

#[derive(Args, Debug)]
#[command(about = "List every occurrence of the current version without writing")]
pub struct CheckArgs {
    #[arg(short, long)]
    pub current: String,

    #[arg(short, long)]
    pub target: String,

    #[arg(short, long)]
    pub path: Option<PathBuf>,

    #[arg(long, default_value = "stdout")]
    pub format: FormatOptions,
}

/// Report what a migration would touch, including rejected occurrences
///
/// # Errors
/// Returns error if the versions are invalid or discovery fails.
pub async fn handle_check(args: &CheckArgs) -> Result<()> {
    let params = MigrationParams::new(&args.current, &args.target)?;
    let context = CommandContext::new(args.path.as_deref()).await?;
    let changes = context
        .plan(&params)
        .await?
        .into_iter()
        .filter(|change| !change.occurrences().is_empty())
        .collect::<Vec<_>>();

    match args.format {
        FormatOptions::Stdout => {
            if changes.is_empty() {
                println!("No occurrences of {} found", params.current());
                return Ok(());
            }
            let count = changes
                .iter()
                .map(|change| change.occurrences().len())
                .sum::<usize>();
            println!(
                "Found {count} occurrences of {} in {} files",
                params.current(),
                changes.len()
            );
            for change in &changes {
                println!("{}", display_change(change));
                for occurrence in change.occurrences() {
                    println!("{}", display_occurrence(occurrence));
                }
            }
        }
        FormatOptions::Json => {
            println!("{}", serde_json::to_string_pretty(&changes)?);
        }
    }
    Ok(())
}
