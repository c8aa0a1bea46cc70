use std::ops::Range;

use mcmigrate_core::{Literal, LiteralValue, QuoteStyle};

/// Yields the string and number literals of a Groovy build script in source order.
///
/// Comments are skipped. Double-quoted strings that interpolate are split into
/// their text fragments, and literals inside `${...}` expressions are yielded
/// in place. Slashy strings are not recognised and unterminated strings are
/// dropped.
#[must_use]
pub fn scan_literals(content: &str) -> Vec<Literal> {
    let bytes = content.as_bytes();
    let mut literals = Vec::new();
    let mut i = 0;
    if content.starts_with("#!") {
        i = line_end(bytes, 0);
    }
    while i < bytes.len() {
        match bytes[i] {
            b'/' if bytes.get(i + 1) == Some(&b'/') => i = line_end(bytes, i),
            b'/' if bytes.get(i + 1) == Some(&b'*') => i = block_comment_end(bytes, i + 2),
            b'\'' | b'"' => i = scan_string(content, i, &mut literals),
            b'0'..=b'9' => i = scan_number(content, i, &mut literals),
            b if is_ident_byte(b) => i = skip_ident(bytes, i),
            _ => i += 1,
        }
    }
    literals
}

fn is_ident_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'$' || b >= 0x80
}

fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

fn skip_ident(bytes: &[u8], mut i: usize) -> usize {
    while i < bytes.len() && is_ident_byte(bytes[i]) {
        i += 1;
    }
    i
}

fn line_end(bytes: &[u8], from: usize) -> usize {
    bytes[from..]
        .iter()
        .position(|&b| b == b'\n')
        .map_or(bytes.len(), |offset| from + offset)
}

fn block_comment_end(bytes: &[u8], from: usize) -> usize {
    bytes[from.min(bytes.len())..]
        .windows(2)
        .position(|pair| pair == b"*/")
        .map_or(bytes.len(), |offset| from + offset + 2)
}

fn skip_digits(bytes: &[u8], mut i: usize) -> usize {
    while i < bytes.len() && (bytes[i].is_ascii_digit() || bytes[i] == b'_') {
        i += 1;
    }
    i
}

fn scan_number(content: &str, start: usize, out: &mut Vec<Literal>) -> usize {
    let bytes = content.as_bytes();
    let mut end = skip_digits(bytes, start);
    while bytes.get(end) == Some(&b'.') && bytes.get(end + 1).is_some_and(u8::is_ascii_digit) {
        end = skip_digits(bytes, end + 1);
    }
    // type suffixes and hex digits
    while end < bytes.len() && (bytes[end].is_ascii_alphanumeric() || bytes[end] == b'_') {
        end += 1;
    }
    let source = &content[start..end];
    out.push(Literal::new(
        LiteralValue::Number(source.to_string()),
        source.to_string(),
        start..end,
    ));
    end
}

fn scan_string(content: &str, start: usize, out: &mut Vec<Literal>) -> usize {
    let bytes = content.as_bytes();
    let Some(style) = QuoteStyle::detect(&content[start..]) else {
        return start + 1;
    };
    let delimiter = style.delimiter().as_bytes();
    let body_start = start + delimiter.len();

    let mut fragments: Vec<Range<usize>> = Vec::new();
    let mut nested: Vec<Literal> = Vec::new();
    let mut fragment_start = body_start;
    let mut interpolated = false;
    let mut j = body_start;
    loop {
        if j >= bytes.len() {
            return bytes.len();
        }
        if bytes[j..].starts_with(delimiter) {
            break;
        }
        match bytes[j] {
            b'\\' => j += 2,
            b'\n' if !style.is_multiline() => return j,
            b'$' if style.is_interpolating() => {
                let end = interpolation_end(bytes, j);
                if bytes.get(j + 1) == Some(&b'{') && bytes[end - 1] == b'}' {
                    let expression = j + 2..end - 1;
                    nested.extend(
                        scan_literals(&content[expression.clone()])
                            .into_iter()
                            .map(|literal| literal.with_offset(expression.start)),
                    );
                }
                if end > j + 1 {
                    interpolated = true;
                    if fragment_start < j {
                        fragments.push(fragment_start..j);
                    }
                    fragment_start = end;
                }
                j = end;
            }
            _ => j += 1,
        }
    }
    let body_end = j;
    let end = body_end + delimiter.len();

    if interpolated {
        if fragment_start < body_end {
            fragments.push(fragment_start..body_end);
        }
        let mut pieces = fragments
            .into_iter()
            .map(|range| {
                let raw = &content[range.clone()];
                Literal::fragment(decode(raw), raw.to_string(), style, range)
            })
            .chain(nested)
            .collect::<Vec<_>>();
        pieces.sort_by_key(|literal| literal.span().start);
        out.extend(pieces);
    } else {
        out.push(Literal::new(
            LiteralValue::Text(decode(&content[body_start..body_end])),
            content[start..end].to_string(),
            start..end,
        ));
    }
    end
}

/// End of the `$name.path` or `${...}` expression starting at `dollar`, or
/// `dollar + 1` when the `$` does not start one.
fn interpolation_end(bytes: &[u8], dollar: usize) -> usize {
    match bytes.get(dollar + 1) {
        Some(b'{') => {
            let mut depth = 0usize;
            let mut k = dollar + 1;
            while k < bytes.len() {
                match bytes[k] {
                    b'{' => depth += 1,
                    b'}' => {
                        depth -= 1;
                        if depth == 0 {
                            return k + 1;
                        }
                    }
                    b'\'' | b'"' => {
                        k = skip_quoted(bytes, k);
                        continue;
                    }
                    _ => {}
                }
                k += 1;
            }
            bytes.len()
        }
        Some(&b) if is_ident_start(b) => {
            let mut k = skip_path_segment(bytes, dollar + 1);
            while bytes.get(k) == Some(&b'.') && bytes.get(k + 1).is_some_and(|&b| is_ident_start(b))
            {
                k = skip_path_segment(bytes, k + 1);
            }
            k
        }
        _ => dollar + 1,
    }
}

fn skip_path_segment(bytes: &[u8], mut i: usize) -> usize {
    while i < bytes.len() && (bytes[i].is_ascii_alphanumeric() || bytes[i] == b'_') {
        i += 1;
    }
    i
}

fn skip_quoted(bytes: &[u8], open: usize) -> usize {
    let quote = bytes[open];
    let mut k = open + 1;
    while k < bytes.len() {
        match bytes[k] {
            b'\\' => k += 2,
            b if b == quote => return k + 1,
            _ => k += 1,
        }
    }
    bytes.len()
}

/// Decodes Groovy escape sequences. Unknown escapes are kept verbatim.
pub(crate) fn decode(raw: &str) -> String {
    let mut decoded = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\\' {
            decoded.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => decoded.push('\n'),
            Some('r') => decoded.push('\r'),
            Some('t') => decoded.push('\t'),
            Some('b') => decoded.push('\u{8}'),
            Some('f') => decoded.push('\u{c}'),
            Some(c @ ('\\' | '\'' | '"' | '$')) => decoded.push(c),
            Some('\n') => {}
            Some('u') => {
                let hex = chars.clone().take(4).collect::<String>();
                let unicode = (hex.len() == 4)
                    .then(|| u32::from_str_radix(&hex, 16).ok())
                    .flatten()
                    .and_then(char::from_u32);
                match unicode {
                    Some(ch) => {
                        decoded.push(ch);
                        for _ in 0..4 {
                            chars.next();
                        }
                    }
                    None => decoded.push_str("\\u"),
                }
            }
            Some(other) => {
                decoded.push('\\');
                decoded.push(other);
            }
            None => decoded.push('\\'),
        }
    }
    decoded
}
