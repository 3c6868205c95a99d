// src/query.rs
//
// Lottery facet + free-text filter over a category subset.
// Stable: output keeps input order. A non-match is just a smaller result.

use crate::record::Record;

/// Filter `subset` by exact lottery (when non-empty) and by case-insensitive
/// substring over all field values (when `search_text` is non-empty).
pub fn apply<'a>(subset: &[&'a Record], selected_lottery: &str, search_text: &str) -> Vec<&'a Record> {
    let needle = search_text.to_lowercase();
    subset
        .iter()
        .copied()
        .filter(|r| matches(r, selected_lottery, &needle))
        .collect()
}

/// Row predicate behind `apply`. `needle` must already be lower-case.
pub fn matches(record: &Record, selected_lottery: &str, needle: &str) -> bool {
    if !selected_lottery.is_empty() && record.lottery != selected_lottery {
        return false;
    }
    needle.is_empty() || record.search_text().contains(needle)
}
