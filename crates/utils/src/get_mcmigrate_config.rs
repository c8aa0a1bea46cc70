use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use mcmigrate_core::Config;
use tokio::fs::read_to_string;

#[must_use]
pub fn get_mcmigrate_dir(root: &Path) -> PathBuf {
    root.join(".mcmigrate")
}

/// Loads `.mcmigrate/config.json` under `root`, or the defaults when it is absent.
///
/// # Errors
/// Returns error if the file exists but cannot be read or parsed.
pub async fn get_mcmigrate_config(root: &Path) -> Result<Config> {
    let config_file = get_mcmigrate_dir(root).join("config.json");
    if !config_file.is_file() {
        return Ok(Config::default());
    }
    let content = read_to_string(&config_file)
        .await
        .context(format!("Failed to read {}", config_file.display()))?;
    serde_json::from_str(&content).context(format!("Invalid config - {}", config_file.display()))
}
