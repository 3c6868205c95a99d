// src/facets.rs
//
// Options for the lottery selector: distinct non-empty `lottery` values of a
// subset, sorted, accent-insensitive. The "all lotteries" choice is the empty selector
// and is never part of the list; callers prepend it.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use crate::core::sanitize::fold_diacritics;
use crate::record::Record;

pub fn derive<'a, I>(records: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a Record>,
{
    let distinct: BTreeSet<&str> = records
        .into_iter()
        .map(|r| r.lottery.as_str())
        .filter(|l| !l.is_empty())
        .collect();

    let mut out: Vec<String> = distinct.into_iter().map(String::from).collect();
    out.sort_by(|a, b| locale_cmp(a, b));
    out
}

/// Accent- and case-insensitive first, then raw bytes so the order is total.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    fold_diacritics(a)
        .cmp(&fold_diacritics(b))
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accented_names_sort_with_their_base_letter() {
        let mut v = vec!["Zulia", "Ávila", "Anzoátegui", "ávila"];
        v.sort_by(|a, b| locale_cmp(a, b));
        assert_eq!(v, vec!["Anzoátegui", "Ávila", "ávila", "Zulia"]);
    }

    #[test]
    fn equal_strings_compare_equal() {
        assert_eq!(locale_cmp("TRIPLE FÁCIL", "TRIPLE FÁCIL"), Ordering::Equal);
    }
}
