use std::ops::Range;

use crate::QuoteStyle;

/// Decoded value of a build-script literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LiteralValue {
    Text(String),
    Number(String),
}

impl LiteralValue {
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Number(_) => None,
        }
    }
}

/// A literal located in a build script.
///
/// `value_source` is the literal exactly as written, delimiters included, and
/// always decodes to `value`. Text fragments of an interpolated string have no
/// delimiters of their own; `enclosing` then names the style of the string they
/// live in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Literal {
    value: LiteralValue,
    value_source: String,
    enclosing: Option<QuoteStyle>,
    span: Range<usize>,
}

impl Literal {
    #[must_use]
    pub fn new(value: LiteralValue, value_source: String, span: Range<usize>) -> Self {
        Self {
            value,
            value_source,
            enclosing: None,
            span,
        }
    }

    /// A text fragment between interpolations of a double-quoted string.
    #[must_use]
    pub fn fragment(
        value: String,
        value_source: String,
        enclosing: QuoteStyle,
        span: Range<usize>,
    ) -> Self {
        Self {
            value: LiteralValue::Text(value),
            value_source,
            enclosing: Some(enclosing),
            span,
        }
    }

    #[must_use]
    pub fn value(&self) -> &LiteralValue {
        &self.value
    }

    #[must_use]
    pub fn value_source(&self) -> &str {
        &self.value_source
    }

    #[must_use]
    pub fn enclosing(&self) -> Option<QuoteStyle> {
        self.enclosing
    }

    /// Byte range of `value_source` in the scanned document.
    #[must_use]
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// Moves the span by `offset` bytes, for literals scanned from a slice of a document.
    #[must_use]
    pub fn with_offset(mut self, offset: usize) -> Self {
        self.span = self.span.start + offset..self.span.end + offset;
        self
    }

    /// Returns a copy holding `value` as text with the given source rendering.
    #[must_use]
    pub fn with_rendering(&self, value: String, value_source: String) -> Self {
        Self {
            value: LiteralValue::Text(value),
            value_source,
            enclosing: self.enclosing,
            span: self.span.clone(),
        }
    }

    /// Returns a copy holding `value` as text, re-rendered in the original quote style.
    ///
    /// The style is taken from the first characters of the current rendering and
    /// falls back to double quotes. Fragments are re-escaped without delimiters.
    #[must_use]
    pub fn with_text_value(&self, value: String) -> Self {
        let value_source = match self.enclosing {
            Some(style) => style.escape(&value),
            None => QuoteStyle::detect(&self.value_source)
                .unwrap_or(QuoteStyle::Double)
                .render(&value),
        };
        self.with_rendering(value, value_source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_text() {
        assert_eq!(LiteralValue::Text("1.20.1".into()).as_text(), Some("1.20.1"));
        assert_eq!(LiteralValue::Number("1.8".into()).as_text(), None);
    }

    #[test]
    fn test_with_text_value_keeps_single_quotes() {
        let literal = Literal::new(
            LiteralValue::Text("net.minecraft:server:1.20.1".into()),
            "'net.minecraft:server:1.20.1'".into(),
            10..39,
        );
        let updated = literal.with_text_value("net.minecraft:server:1.21".into());
        assert_eq!(updated.value_source(), "'net.minecraft:server:1.21'");
        assert_eq!(updated.value().as_text(), Some("net.minecraft:server:1.21"));
        assert_eq!(updated.span(), 10..39);
    }

    #[test]
    fn test_with_text_value_defaults_to_double_quotes() {
        let literal = Literal::new(LiteralValue::Text("1.20.1".into()), "1.20.1".into(), 0..6);
        let updated = literal.with_text_value("1.21".into());
        assert_eq!(updated.value_source(), "\"1.21\"");
    }

    #[test]
    fn test_with_offset_moves_span() {
        let literal = Literal::new(LiteralValue::Text("1.20.1".into()), "'1.20.1'".into(), 2..10)
            .with_offset(30);
        assert_eq!(literal.span(), 32..40);
        assert_eq!(literal.value_source(), "'1.20.1'");
    }

    #[test]
    fn test_with_rendering_keeps_span_and_enclosing() {
        let literal = Literal::fragment("a".into(), "a".into(), QuoteStyle::Double, 4..5);
        let updated = literal.with_rendering("b\\".into(), "b\\\\".into());
        assert_eq!(updated.value().as_text(), Some("b\\"));
        assert_eq!(updated.value_source(), "b\\\\");
        assert_eq!(updated.span(), 4..5);
        assert_eq!(updated.enclosing(), Some(QuoteStyle::Double));
    }

    #[test]
    fn test_with_text_value_fragment_has_no_delimiters() {
        let literal = Literal::fragment(
            "net.minecraftforge:forge:1.20.1-".into(),
            "net.minecraftforge:forge:1.20.1-".into(),
            QuoteStyle::Double,
            5..37,
        );
        let updated = literal.with_text_value("net.minecraftforge:forge:1.21-".into());
        assert_eq!(updated.value_source(), "net.minecraftforge:forge:1.21-");
        assert_eq!(updated.enclosing(), Some(QuoteStyle::Double));
    }
}
