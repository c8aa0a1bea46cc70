use mcmigrate_core::PropertyEntry;

/// Replaces every occurrence of `current` in the entry's value, whatever its key.
///
/// Returns `None` when the value does not change.
#[must_use]
pub fn rewrite_entry(entry: &PropertyEntry, current: &str, target: &str) -> Option<PropertyEntry> {
    if current.is_empty() || !entry.value().contains(current) {
        return None;
    }
    let updated = entry.value().replace(current, target);
    (updated != entry.value()).then(|| entry.with_value(updated))
}
