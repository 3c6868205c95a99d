// src/store.rs
//
// Owner of the dataset for the current feed load. The dataset is only ever
// replaced wholesale (`set_all` / `clear`); everything else reads.

use crate::record::Record;

#[derive(Clone, Debug, Default)]
pub struct RecordStore {
    records: Vec<Record>,
}

impl RecordStore {
    pub fn new() -> Self { Self::default() }

    /// Replace the dataset with a freshly parsed one.
    pub fn set_all(&mut self, records: Vec<Record>) {
        self.records = records;
    }

    /// Drop everything (failed load).
    pub fn clear(&mut self) {
        self.records = Vec::new();
    }

    pub fn all(&self) -> &[Record] { &self.records }
    pub fn len(&self) -> usize { self.records.len() }
    pub fn is_empty(&self) -> bool { self.records.is_empty() }
    pub fn get(&self, ix: usize) -> Option<&Record> { self.records.get(ix) }

    /// Records of one category, dataset order.
    pub fn for_category(&self, category: &str) -> Vec<&Record> {
        self.records.iter().filter(|r| r.category == category).collect()
    }

    /// Same filter as `for_category`, as row positions into `all()`.
    pub fn category_indices(&self, category: &str) -> Vec<usize> {
        self.records
            .iter()
            .enumerate()
            .filter(|(_, r)| r.category == category)
            .map(|(ix, _)| ix)
            .collect()
    }

    /// Distinct categories, first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for r in &self.records {
            if !out.contains(&r.category.as_str()) {
                out.push(&r.category);
            }
        }
        out
    }
}
