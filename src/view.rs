// src/view.rs
//
// ViewState: owns the dataset and the query, and keeps the derived outputs
// (facet options + result rows) current. Every mutator recomputes eagerly,
// so readers never see stale output and there is no separate refresh step.
//
// Derived sets are row positions into the store (no cloned records).

use crate::config::consts::DEFAULT_CATEGORY;
use crate::facets;
use crate::query;
use crate::record::Record;
use crate::store::RecordStore;

/// The only state that survives between renders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryState {
    pub active_category: String,
    /// Empty = all lotteries.
    pub selected_lottery: String,
    pub search_text: String,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            active_category: s!(DEFAULT_CATEGORY),
            selected_lottery: s!(),
            search_text: s!(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Counts {
    /// Rows in the result set.
    pub filtered: usize,
    /// Rows in the whole dataset, all categories.
    pub total: usize,
}

#[derive(Clone, Debug, Default)]
pub struct ViewState {
    store: RecordStore,
    query: QueryState,
    subset_ix: Vec<usize>,
    row_ix: Vec<usize>,
    facets: Vec<String>,
}

impl ViewState {
    pub fn new() -> Self { Self::default() }

    /// Start on a given category instead of the default one.
    pub fn with_category(category: &str) -> Self {
        let mut v = Self::new();
        v.set_category(category);
        v
    }

    /* ---------- mutators ---------- */

    /// Completed parse: replace the dataset. The query is kept.
    pub fn load(&mut self, records: Vec<Record>) {
        self.store.set_all(records);
        self.recompute_subset();
        logd!(
            "View: dataset replaced total={} subset={} filtered={}",
            self.store.len(), self.subset_ix.len(), self.row_ix.len()
        );
    }

    /// Failed load: empty dataset, empty outputs.
    pub fn clear(&mut self) {
        self.store.clear();
        self.recompute_subset();
    }

    /// Switch category. Always resets lottery and search, even for the
    /// category that is already active.
    pub fn set_category(&mut self, category: &str) {
        self.query.active_category = s!(category);
        self.query.selected_lottery.clear();
        self.query.search_text.clear();
        self.recompute_subset();
    }

    pub fn set_selected_lottery(&mut self, lottery: &str) {
        self.query.selected_lottery = s!(lottery);
        self.recompute_rows();
    }

    pub fn set_search_text(&mut self, text: &str) {
        self.query.search_text = s!(text);
        self.recompute_rows();
    }

    /* ---------- readers ---------- */

    pub fn query(&self) -> &QueryState { &self.query }
    pub fn store(&self) -> &RecordStore { &self.store }
    pub fn facet_options(&self) -> &[String] { &self.facets }

    /// Filtered records, dataset order.
    pub fn result_set(&self) -> Vec<&Record> {
        self.row_ix.iter().filter_map(|&ix| self.store.get(ix)).collect()
    }

    /// Positions of the result set in `store().all()`.
    pub fn result_indices(&self) -> &[usize] { &self.row_ix }

    pub fn counts(&self) -> Counts {
        Counts { filtered: self.row_ix.len(), total: self.store.len() }
    }

    /* ---------- recompute ---------- */

    fn recompute_subset(&mut self) {
        self.subset_ix = self.store.category_indices(&self.query.active_category);
        self.facets = facets::derive(self.subset_ix.iter().filter_map(|&ix| self.store.get(ix)));
        self.recompute_rows();
    }

    fn recompute_rows(&mut self) {
        let needle = self.query.search_text.to_lowercase();
        let lottery = self.query.selected_lottery.as_str();
        let store = &self.store;
        self.row_ix = self
            .subset_ix
            .iter()
            .copied()
            .filter(|&ix| store.get(ix).is_some_and(|r| query::matches(r, lottery, &needle)))
            .collect();
    }
}
