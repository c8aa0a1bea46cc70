//! # mcmigrate-gradle
//!
//! Groovy build script support for mcmigrate.
//!
//! Scans `build.gradle` files for string literals, decides with a small
//! allow-list heuristic whether each one refers to the game version, and
//! rewrites accepted literals in place while keeping their quote style.

pub mod classifier;
pub mod literal_rewriter;
pub mod rewriter;
pub mod scanner;

pub use classifier::{ECOSYSTEM_TOKENS, VersionClassifier, is_version_reference};
pub use literal_rewriter::{LiteralRewrite, rewrite_literal};
pub use rewriter::{GroovyBuildRewriter, rewrite_build_script};
pub use scanner::scan_literals;
