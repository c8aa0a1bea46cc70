use std::ops::Range;

/// One key/value entry of a properties file.
///
/// `value` is the raw text after the separator; escapes are not decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyEntry {
    key: String,
    value: String,
    value_span: Range<usize>,
}

impl PropertyEntry {
    #[must_use]
    pub fn new(key: String, value: String, value_span: Range<usize>) -> Self {
        Self {
            key,
            value,
            value_span,
        }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Byte range of the raw value in the scanned document.
    #[must_use]
    pub fn value_span(&self) -> Range<usize> {
        self.value_span.clone()
    }

    #[must_use]
    pub fn with_value(&self, value: String) -> Self {
        Self {
            key: self.key.clone(),
            value,
            value_span: self.value_span.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_value_keeps_key_and_span() {
        let entry = PropertyEntry::new("minecraft_version".into(), "1.20.1".into(), 18..24);
        let updated = entry.with_value("1.21".into());
        assert_eq!(updated.key(), "minecraft_version");
        assert_eq!(updated.value(), "1.21");
        assert_eq!(updated.value_span(), 18..24);
    }
}
