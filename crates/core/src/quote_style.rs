use serde::{Deserialize, Serialize};

/// Delimiter of a Groovy string literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum QuoteStyle {
    Single,
    Double,
    TripleSingle,
    TripleDouble,
}

impl QuoteStyle {
    /// Reads the delimiter from the first characters of a literal's source rendering.
    ///
    /// Returns `None` when the rendering does not start with a quote character.
    #[must_use]
    pub fn detect(value_source: &str) -> Option<Self> {
        if value_source.starts_with("'''") {
            Some(Self::TripleSingle)
        } else if value_source.starts_with("\"\"\"") {
            Some(Self::TripleDouble)
        } else if value_source.starts_with('\'') {
            Some(Self::Single)
        } else if value_source.starts_with('"') {
            Some(Self::Double)
        } else {
            None
        }
    }

    #[must_use]
    pub const fn delimiter(&self) -> &'static str {
        match self {
            Self::Single => "'",
            Self::Double => "\"",
            Self::TripleSingle => "'''",
            Self::TripleDouble => "\"\"\"",
        }
    }

    #[must_use]
    pub const fn quote_char(&self) -> char {
        match self {
            Self::Single | Self::TripleSingle => '\'',
            Self::Double | Self::TripleDouble => '"',
        }
    }

    /// Double-quoted strings interpolate `$` expressions.
    #[must_use]
    pub const fn is_interpolating(&self) -> bool {
        matches!(self, Self::Double | Self::TripleDouble)
    }

    #[must_use]
    pub const fn is_multiline(&self) -> bool {
        matches!(self, Self::TripleSingle | Self::TripleDouble)
    }

    /// Renders `value` as a complete literal in this style.
    #[must_use]
    pub fn render(&self, value: &str) -> String {
        let delimiter = self.delimiter();
        format!("{delimiter}{}{delimiter}", self.escape(value))
    }

    /// Escapes `value` for use between this style's delimiters.
    #[must_use]
    pub fn escape(&self, value: &str) -> String {
        let quote = self.quote_char();
        let mut escaped = String::with_capacity(value.len());
        for ch in value.chars() {
            match ch {
                '\\' => escaped.push_str("\\\\"),
                c if c == quote => {
                    escaped.push('\\');
                    escaped.push(c);
                }
                '$' if self.is_interpolating() => escaped.push_str("\\$"),
                '\n' if !self.is_multiline() => escaped.push_str("\\n"),
                '\r' if !self.is_multiline() => escaped.push_str("\\r"),
                '\t' if !self.is_multiline() => escaped.push_str("\\t"),
                c => escaped.push(c),
            }
        }
        escaped
    }
}
