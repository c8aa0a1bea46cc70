use colored::Colorize;
use mcmigrate_core::{FileChange, Occurrence, OccurrenceKind};

/// One-line summary of a planned file change.
#[must_use]
pub fn display_change(change: &FileChange) -> String {
    let updated = change.replacements().count();
    let skipped = change.skipped().count();
    let mut summary = format!(
        "{} {}: {}",
        change.kind(),
        change.relative_path().display().to_string().bold(),
        format!("{updated} updated").green()
    );
    if skipped > 0 {
        summary.push_str(&format!(", {}", format!("{skipped} skipped").yellow()));
    }
    summary
}

/// A single occurrence, indented for listing under its file.
#[must_use]
pub fn display_occurrence(occurrence: &Occurrence) -> String {
    let location = match &occurrence.kind {
        OccurrenceKind::Literal => format!("L{}", occurrence.line),
        OccurrenceKind::Property { key } => format!("L{} {key}", occurrence.line),
    };
    match &occurrence.after {
        Some(after) => format!(
            "  {}: {} -> {}",
            location.dimmed(),
            occurrence.before.red(),
            after.green()
        ),
        None => format!(
            "  {}: {} {}",
            location.dimmed(),
            occurrence.before,
            "(not a version reference)".yellow()
        ),
    }
}
