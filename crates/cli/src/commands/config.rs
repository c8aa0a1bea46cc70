use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use mcmigrate_utils::{get_mcmigrate_config, resolve_root};

use crate::context::CommandContext;

#[derive(Args, Debug)]
#[command(about = "Show the effective mcmigrate configuration")]
pub struct ConfigArgs {
    #[arg(short, long)]
    pub path: Option<PathBuf>,
}

/// Display mcmigrate configuration
///
/// # Errors
/// Returns error if the root cannot be resolved or reading the configuration fails.
pub async fn handle_config(args: &ConfigArgs) -> Result<()> {
    let current_dir = CommandContext::current_dir()?;
    let root = resolve_root(args.path.as_deref(), &current_dir)?;
    let config = get_mcmigrate_config(&root).await?;
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}
