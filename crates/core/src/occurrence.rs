use serde::Serialize;

/// Node that carried the current version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "type")]
pub enum OccurrenceKind {
    Literal,
    Property { key: String },
}

/// A node whose text contains the current version.
///
/// `after` holds the rewritten source text, or `None` when the node was left
/// alone because it did not look like a version reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Occurrence {
    pub line: usize,
    pub kind: OccurrenceKind,
    pub before: String,
    pub after: Option<String>,
}

impl Occurrence {
    #[must_use]
    pub fn replaced(line: usize, kind: OccurrenceKind, before: &str, after: &str) -> Self {
        Self {
            line,
            kind,
            before: before.to_string(),
            after: Some(after.to_string()),
        }
    }

    #[must_use]
    pub fn skipped(line: usize, kind: OccurrenceKind, before: &str) -> Self {
        Self {
            line,
            kind,
            before: before.to_string(),
            after: None,
        }
    }

    #[must_use]
    pub fn is_replaced(&self) -> bool {
        self.after.is_some()
    }
}
