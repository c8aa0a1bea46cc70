//! # mcmigrate-properties
//!
//! `gradle.properties` support for mcmigrate. Every entry whose value contains
//! the current version is rewritten, regardless of its key; comments, blank
//! lines and separators are preserved byte for byte.

pub mod entry_rewriter;
pub mod rewriter;
pub mod scanner;

pub use entry_rewriter::rewrite_entry;
pub use rewriter::{GradlePropertiesRewriter, rewrite_properties};
pub use scanner::scan_entries;
