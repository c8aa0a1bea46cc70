use serde::{Deserialize, Serialize};

/// Loaded from `.mcmigrate/config.json`, selects which files each rewriter visits.
///
/// Every field is optional in the file; missing fields fall back to the
/// standard Gradle file names.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Glob patterns for files to leave alone (e.g., "run/**")
    #[serde(default)]
    pub ignore: Vec<String>,

    /// Glob patterns selecting Groovy build scripts
    #[serde(default = "default_build_scripts")]
    pub build_scripts: Vec<String>,

    /// Glob patterns selecting properties files
    #[serde(default = "default_properties")]
    pub properties: Vec<String>,
}

fn default_build_scripts() -> Vec<String> {
    vec!["**/build.gradle".to_string()]
}

fn default_properties() -> Vec<String> {
    vec!["**/gradle.properties".to_string()]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ignore: Vec::new(),
            build_scripts: default_build_scripts(),
            properties: default_properties(),
        }
    }
}
