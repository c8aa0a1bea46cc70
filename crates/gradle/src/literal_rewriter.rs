use mcmigrate_core::{Literal, QuoteStyle};

use crate::{classifier::VersionClassifier, scanner::decode};

/// Outcome of offering one literal to [`rewrite_literal`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LiteralRewrite {
    /// Not text, or the current version does not occur in it.
    Unchanged,
    /// Contains the current version but is not judged a version reference.
    Rejected,
    Updated(Literal),
}

/// Replaces every occurrence of the current version in a text literal that the
/// classifier accepts, keeping the literal's quote style.
#[must_use]
pub fn rewrite_literal(
    literal: &Literal,
    classifier: &VersionClassifier,
    target: &str,
) -> LiteralRewrite {
    let Some(value) = literal.value().as_text() else {
        return LiteralRewrite::Unchanged;
    };
    if !value.contains(classifier.current()) {
        return LiteralRewrite::Unchanged;
    }
    if !classifier.is_version_reference(value) {
        return LiteralRewrite::Rejected;
    }
    let updated = value.replace(classifier.current(), target);
    if updated == value {
        return LiteralRewrite::Unchanged;
    }
    match rewrite_source(literal, classifier.current(), target, &updated) {
        Some(source) => LiteralRewrite::Updated(literal.with_rendering(updated, source)),
        None => LiteralRewrite::Updated(literal.with_text_value(updated)),
    }
}

/// Replaces `current` in the literal as written, so escapes elsewhere keep their spelling.
///
/// Returns `None` when the edited text would not decode to `updated` or the target
/// needs escaping; the literal is then re-rendered from its value.
fn rewrite_source(literal: &Literal, current: &str, target: &str, updated: &str) -> Option<String> {
    let style = literal
        .enclosing()
        .or_else(|| QuoteStyle::detect(literal.value_source()))?;
    if style.escape(target) != target {
        return None;
    }
    let source = literal.value_source().replace(current, target);
    let body = match literal.enclosing() {
        Some(_) => source.as_str(),
        None => source
            .strip_prefix(style.delimiter())?
            .strip_suffix(style.delimiter())?,
    };
    (decode(body) == updated).then_some(source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mcmigrate_core::{LiteralValue, QuoteStyle};
    use rstest::rstest;

    fn text(value: &str, source: &str) -> Literal {
        Literal::new(
            LiteralValue::Text(value.to_string()),
            source.to_string(),
            0..source.len(),
        )
    }

    fn rewrite(literal: &Literal, current: &str, target: &str) -> LiteralRewrite {
        let classifier = VersionClassifier::new(current).unwrap();
        rewrite_literal(literal, &classifier, target)
    }

    #[rstest]
    #[case("net.minecraft:server:1.20.1", "'net.minecraft:server:1.20.1'", "'net.minecraft:server:1.21'")]
    #[case("1.20.1", "'1.20.1'", "'1.21'")]
    #[case("1.20.1", "\"1.20.1\"", "\"1.21\"")]
    #[case("official_1.20.1", "'official_1.20.1'", "'official_1.21'")]
    #[case("net.neoforged:neoforge:1.20.1-47.1.0", "'net.neoforged:neoforge:1.20.1-47.1.0'", "'net.neoforged:neoforge:1.21-47.1.0'")]
    #[case("1.20.1", "'''1.20.1'''", "'''1.21'''")]
    fn test_rewrite_keeps_quote_style(
        #[case] value: &str,
        #[case] source: &str,
        #[case] expected: &str,
    ) {
        match rewrite(&text(value, source), "1.20.1", "1.21") {
            LiteralRewrite::Updated(updated) => {
                assert_eq!(updated.value_source(), expected);
                assert_eq!(
                    updated.value().as_text(),
                    Some(value.replace("1.20.1", "1.21").as_str())
                );
            }
            other => panic!("Expected Updated, got {other:?}"),
        }
    }

    #[test]
    fn test_rewrite_replaces_every_occurrence() {
        let literal = text("minecraft-1.20.1+1.20.1", "'minecraft-1.20.1+1.20.1'");
        match rewrite(&literal, "1.20.1", "1.21") {
            LiteralRewrite::Updated(updated) => {
                assert_eq!(updated.value_source(), "'minecraft-1.21+1.21'");
            }
            other => panic!("Expected Updated, got {other:?}"),
        }
    }

    #[test]
    fn test_rewrite_without_quotes_defaults_to_double() {
        let literal = text("1.20.1", "1.20.1");
        match rewrite(&literal, "1.20.1", "1.21") {
            LiteralRewrite::Updated(updated) => assert_eq!(updated.value_source(), "\"1.21\""),
            other => panic!("Expected Updated, got {other:?}"),
        }
    }

    #[test]
    fn test_rewrite_fragment() {
        let literal = Literal::fragment(
            "net.minecraftforge:forge:1.20.1-".to_string(),
            "net.minecraftforge:forge:1.20.1-".to_string(),
            QuoteStyle::Double,
            10..42,
        );
        match rewrite(&literal, "1.20.1", "1.21") {
            LiteralRewrite::Updated(updated) => {
                assert_eq!(updated.value_source(), "net.minecraftforge:forge:1.21-");
                assert_eq!(updated.span(), 10..42);
            }
            other => panic!("Expected Updated, got {other:?}"),
        }
    }

    #[rstest]
    #[case(r"'minecraft \u0041 1.20.1'", r"'minecraft \u0041 1.21'")]
    #[case(r#""forge \'q\' 1.20.1""#, r#""forge \'q\' 1.21""#)]
    #[case(r"'minecraft\t1.20.1'", r"'minecraft\t1.21'")]
    fn test_rewrite_keeps_unrelated_escapes(#[case] source: &str, #[case] expected: &str) {
        let body = &source[1..source.len() - 1];
        let literal = text(&decode(body), source);
        match rewrite(&literal, "1.20.1", "1.21") {
            LiteralRewrite::Updated(updated) => assert_eq!(updated.value_source(), expected),
            other => panic!("Expected Updated, got {other:?}"),
        }
    }

    #[test]
    fn test_rewrite_escaped_version_is_re_rendered() {
        // the second occurrence is only visible after decoding
        let source = r"'minecraft 1.20.1 \u0031.20.1'";
        let literal = text("minecraft 1.20.1 1.20.1", source);
        match rewrite(&literal, "1.20.1", "1.21") {
            LiteralRewrite::Updated(updated) => {
                assert_eq!(updated.value_source(), "'minecraft 1.21 1.21'");
            }
            other => panic!("Expected Updated, got {other:?}"),
        }
    }

    #[test]
    fn test_rewrite_target_needing_escape_is_re_rendered() {
        let literal = text("minecraft 1.20.1", "'minecraft 1.20.1'");
        match rewrite(&literal, "1.20.1", "it's") {
            LiteralRewrite::Updated(updated) => {
                assert_eq!(updated.value_source(), r"'minecraft it\'s'");
                assert_eq!(updated.value().as_text(), Some("minecraft it's"));
            }
            other => panic!("Expected Updated, got {other:?}"),
        }
    }

    #[test]
    fn test_unrelated_literal_is_unchanged() {
        let literal = text("com.example:lib:1.0.0", "'com.example:lib:1.0.0'");
        assert_eq!(rewrite(&literal, "1.20.1", "1.21"), LiteralRewrite::Unchanged);
    }

    #[test]
    fn test_incidental_match_is_rejected() {
        let literal = text("lib-1.20.1.jar", "'lib-1.20.1.jar'");
        assert_eq!(rewrite(&literal, "1.20.1", "1.21"), LiteralRewrite::Rejected);
    }

    #[test]
    fn test_number_literal_is_unchanged() {
        let literal = Literal::new(LiteralValue::Number("1.20".into()), "1.20".into(), 0..4);
        assert_eq!(rewrite(&literal, "1.20", "1.21"), LiteralRewrite::Unchanged);
    }

    #[test]
    fn test_same_versions_are_unchanged() {
        let literal = text("1.20.1", "'1.20.1'");
        assert_eq!(rewrite(&literal, "1.20.1", "1.20.1"), LiteralRewrite::Unchanged);
    }

    #[test]
    fn test_rewrite_is_idempotent() {
        let literal = text("net.minecraft:server:1.20.1", "'net.minecraft:server:1.20.1'");
        let LiteralRewrite::Updated(once) = rewrite(&literal, "1.20.1", "1.21") else {
            panic!("Expected Updated");
        };
        assert_eq!(rewrite(&once, "1.20.1", "1.21"), LiteralRewrite::Unchanged);
    }
}
