use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// File shape handled by a rewriter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SourceKind {
    BuildScript,
    Properties,
}

impl Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::BuildScript => "Groovy".green().bold(),
                Self::Properties => "Properties".blue().bold(),
            }
        )
    }
}
