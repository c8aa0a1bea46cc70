//! # mcmigrate-core
//!
//! Shared types for mcmigrate: migration parameters, the literal and property
//! nodes the rewriters operate on, byte-span edits, per-file change reports,
//! and the [`SourceRewriter`] trait every file format implements.

pub mod config;
pub mod error;
pub mod file_change;
pub mod literal;
pub mod occurrence;
pub mod params;
pub mod property_entry;
pub mod quote_style;
pub mod source_kind;
pub mod source_rewriter;
pub mod text_edit;

pub use config::Config;
pub use error::MigrationError;
pub use file_change::FileChange;
pub use literal::{Literal, LiteralValue};
pub use occurrence::{Occurrence, OccurrenceKind};
pub use params::MigrationParams;
pub use property_entry::PropertyEntry;
pub use quote_style::QuoteStyle;
pub use source_kind::SourceKind;
pub use source_rewriter::{SourceFile, SourceRewriter, SourceSet};
pub use text_edit::{TextEdit, apply_edits, line_number};
