use std::ops::Range;

use crate::MigrationError;

/// A verified byte-span replacement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEdit {
    pub range: Range<usize>,
    pub expected: String,
    pub replacement: String,
}

impl TextEdit {
    #[must_use]
    pub fn new(range: Range<usize>, expected: &str, replacement: &str) -> Self {
        Self {
            range,
            expected: expected.to_string(),
            replacement: replacement.to_string(),
        }
    }
}

/// Splices `edits` into `content`, leaving every other byte untouched.
///
/// # Errors
/// Returns `EditMismatch` if the text under an edit is not what it expects, and
/// `OverlappingEdits` if two edits share bytes.
pub fn apply_edits(content: &str, edits: &[TextEdit]) -> Result<String, MigrationError> {
    let mut ordered = edits.iter().collect::<Vec<_>>();
    ordered.sort_by_key(|edit| edit.range.start);

    let mut result = String::with_capacity(content.len());
    let mut cursor = 0;
    for edit in ordered {
        let Range { start, end } = edit.range;
        if start < cursor {
            return Err(MigrationError::OverlappingEdits { start });
        }
        let found = content.get(start..end);
        if found != Some(edit.expected.as_str()) {
            return Err(MigrationError::EditMismatch {
                start,
                end,
                expected: edit.expected.clone(),
                found: found.unwrap_or_default().to_string(),
            });
        }
        result.push_str(&content[cursor..start]);
        result.push_str(&edit.replacement);
        cursor = end;
    }
    result.push_str(&content[cursor..]);
    Ok(result)
}

/// 1-based line number of the byte at `offset`.
#[must_use]
pub fn line_number(content: &str, offset: usize) -> usize {
    let offset = offset.min(content.len());
    content.as_bytes()[..offset]
        .iter()
        .filter(|&&b| b == b'\n')
        .count()
        + 1
}
