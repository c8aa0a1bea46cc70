use mcmigrate_core::PropertyEntry;

/// Yields the key/value entries of a `.properties` document in source order.
///
/// Follows the `java.util.Properties` line rules for comments, separators and
/// backslash continuations, but keeps keys and values raw: escapes are not
/// decoded and continuation markers stay inside the value.
#[must_use]
pub fn scan_entries(content: &str) -> Vec<PropertyEntry> {
    let bytes = content.as_bytes();
    let lines = physical_lines(content);
    let mut entries = Vec::new();

    let mut idx = 0;
    while idx < lines.len() {
        let (start, end) = lines[idx];
        let first = skip_whitespace(bytes, start, end);
        if first == end || matches!(bytes[first], b'#' | b'!') {
            idx += 1;
            continue;
        }

        let mut last = idx;
        while last + 1 < lines.len() && continues(&bytes[lines[last].0..lines[last].1]) {
            last += 1;
        }
        let logical_end = lines[last].1;

        let key_end = key_end(bytes, first, logical_end);
        let mut value_start = skip_whitespace(bytes, key_end, logical_end);
        if value_start < logical_end && matches!(bytes[value_start], b'=' | b':') {
            value_start = skip_whitespace(bytes, value_start + 1, logical_end);
        }

        let key = &content[first..key_end];
        if !key.is_empty() {
            entries.push(PropertyEntry::new(
                key.to_string(),
                content[value_start..logical_end].to_string(),
                value_start..logical_end,
            ));
        }
        idx = last + 1;
    }
    entries
}

/// Byte ranges of each line without its terminator.
fn physical_lines(content: &str) -> Vec<(usize, usize)> {
    let bytes = content.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    for segment in content.split_inclusive('\n') {
        let next = start + segment.len();
        let mut end = next;
        if segment.ends_with('\n') {
            end -= 1;
            if end > start && bytes[end - 1] == b'\r' {
                end -= 1;
            }
        }
        lines.push((start, end));
        start = next;
    }
    lines
}

fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\x0c')
}

fn skip_whitespace(bytes: &[u8], mut i: usize, end: usize) -> usize {
    while i < end && is_whitespace(bytes[i]) {
        i += 1;
    }
    i
}

/// A line continues onto the next when it ends in an odd number of backslashes.
fn continues(line: &[u8]) -> bool {
    line.iter().rev().take_while(|&&b| b == b'\\').count() % 2 == 1
}

fn key_end(bytes: &[u8], start: usize, end: usize) -> usize {
    let mut i = start;
    while i < end {
        match bytes[i] {
            b'\\' => i += 2,
            b'=' | b':' => break,
            b if is_whitespace(b) => break,
            _ => i += 1,
        }
    }
    i.min(end)
}
