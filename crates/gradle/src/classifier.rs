use mcmigrate_core::MigrationError;
use regex::Regex;

/// Case-insensitive tokens marking a string as belonging to the modding toolchain.
pub const ECOSYSTEM_TOKENS: [&str; 6] = [
    "minecraft",
    "forge",
    "neoforge",
    "fabric",
    "quilt",
    "official",
];

/// Decides whether a string containing the current version actually refers to it.
///
/// Checks run in order and short-circuit: substring presence, exact match,
/// ecosystem tokens, a `net.minecraft...:<version>` coordinate, and finally a
/// version sitting after a colon, optionally quoted.
#[derive(Debug, Clone)]
pub struct VersionClassifier {
    current: String,
    minecraft_coordinate: Regex,
    trailing_coordinate: Regex,
}

impl VersionClassifier {
    /// # Errors
    /// Returns `EmptyVersion` for an empty version, or `InvalidClassifier` if a
    /// pattern fails to compile.
    pub fn new(current: &str) -> Result<Self, MigrationError> {
        if current.is_empty() {
            return Err(MigrationError::EmptyVersion { role: "current" });
        }
        let version = regex::escape(current);
        Ok(Self {
            current: current.to_string(),
            minecraft_coordinate: Regex::new(&format!(r"net\.minecraft[\w.]*:{version}"))?,
            trailing_coordinate: Regex::new(&format!(r#":['"]?{version}['"]?"#))?,
        })
    }

    #[must_use]
    pub fn current(&self) -> &str {
        &self.current
    }

    #[must_use]
    pub fn minecraft_coordinate(&self) -> &Regex {
        &self.minecraft_coordinate
    }

    #[must_use]
    pub fn trailing_coordinate(&self) -> &Regex {
        &self.trailing_coordinate
    }

    #[must_use]
    pub fn is_version_reference(&self, text: &str) -> bool {
        if !text.contains(&self.current) {
            return false;
        }
        // a bare version assignment needs no context
        if text == self.current {
            return true;
        }
        contains_ecosystem_token(text)
            || self.minecraft_coordinate.is_match(text)
            || self.trailing_coordinate.is_match(text)
    }
}

#[must_use]
pub fn contains_ecosystem_token(text: &str) -> bool {
    let lower = text.to_lowercase();
    ECOSYSTEM_TOKENS.iter().any(|token| lower.contains(token))
}

/// One-shot form of [`VersionClassifier::is_version_reference`].
///
/// An empty `current` never matches.
#[must_use]
pub fn is_version_reference(text: &str, current: &str) -> bool {
    VersionClassifier::new(current).is_ok_and(|classifier| classifier.is_version_reference(text))
}
