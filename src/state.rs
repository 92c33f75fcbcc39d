use std::sync::Arc;

use crate::data::aggregate;
use crate::data::filter::filtered_indices;
use crate::data::model::PaperTable;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering. The dataset handle is
/// created once at startup and read-only thereafter; everything else is a
/// derived view recomputed when the year selection changes.
pub struct AppState {
    /// The loaded, featured dataset.
    pub table: Arc<PaperTable>,

    /// Current inclusive year selection, `None` when no record has a
    /// parseable year (the filter control is then disabled).
    pub selected_range: Option<(i32, i32)>,

    /// Indices of records passing the current year filter (cached).
    pub visible_indices: Vec<usize>,

    // Cached aggregates over `visible_indices`.
    pub yearly: Vec<(i32, usize)>,
    pub top_journals: Vec<(String, usize)>,
    pub title_words: Vec<(String, usize)>,
    pub top_sources: Vec<(String, usize)>,

    /// Status message shown in the top bar.
    pub status_message: Option<String>,
}

impl AppState {
    /// Build the initial state. The default selection is the full observed
    /// year range; an upstream version defaulted to a hardcoded (2020, 2021)
    /// window, which breaks on datasets that do not cover those years.
    pub fn new(table: Arc<PaperTable>) -> Self {
        let mut state = AppState {
            selected_range: table.year_bounds,
            table,
            visible_indices: Vec::new(),
            yearly: Vec::new(),
            top_journals: Vec::new(),
            title_words: Vec::new(),
            top_sources: Vec::new(),
            status_message: None,
        };
        state.refilter();
        state
    }

    /// Update the selection, clamped to the observed bounds and reordered so
    /// min ≤ max. Recomputes the cached views only when the selection
    /// actually changed.
    pub fn set_range(&mut self, min_year: i32, max_year: i32) {
        let Some((lo, hi)) = self.table.year_bounds else {
            return;
        };
        let min = min_year.clamp(lo, hi);
        let max = max_year.clamp(lo, hi);
        let range = (min.min(max), min.max(max));
        if self.selected_range != Some(range) {
            self.selected_range = Some(range);
            self.refilter();
        }
    }

    /// Recompute the filtered index set and all four aggregates.
    pub fn refilter(&mut self) {
        let Some((min, max)) = self.selected_range else {
            self.visible_indices.clear();
            self.yearly.clear();
            self.top_journals.clear();
            self.title_words.clear();
            self.top_sources.clear();
            self.status_message = Some("no record has a parseable publish date".to_string());
            return;
        };
        self.visible_indices = filtered_indices(&self.table, min, max);
        self.yearly = aggregate::yearly_counts(&self.table, &self.visible_indices);
        self.top_journals = aggregate::top_journals(&self.table, &self.visible_indices);
        self.title_words = aggregate::title_word_frequencies(&self.table, &self.visible_indices);
        self.top_sources = aggregate::top_sources(&self.table, &self.visible_indices);
        self.status_message = self
            .visible_indices
            .is_empty()
            .then(|| "no papers in the selected year range".to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::PaperRecord;

    fn record(year: Option<i32>, title: Option<&str>) -> PaperRecord {
        PaperRecord {
            title: title.map(str::to_string),
            abstract_text: None,
            journal: None,
            source: None,
            publish_time: None,
            year,
            abstract_word_count: 0,
        }
    }

    #[test]
    fn default_selection_is_full_observed_range() {
        let table = Arc::new(PaperTable::from_records(vec![
            record(Some(2018), Some("A")),
            record(Some(2021), Some("B")),
            record(None, Some("C")),
        ]));
        let state = AppState::new(table);
        assert_eq!(state.selected_range, Some((2018, 2021)));
        // Absent-year record excluded even at the widest selection.
        assert_eq!(state.visible_indices, vec![0, 1]);
    }

    #[test]
    fn set_range_clamps_and_reorders() {
        let table = Arc::new(PaperTable::from_records(vec![
            record(Some(2019), None),
            record(Some(2020), None),
            record(Some(2021), None),
        ]));
        let mut state = AppState::new(table);

        state.set_range(2025, 1990);
        assert_eq!(state.selected_range, Some((2019, 2021)));

        state.set_range(2021, 2020);
        assert_eq!(state.selected_range, Some((2020, 2021)));
        assert_eq!(state.visible_indices, vec![1, 2]);
        assert_eq!(state.yearly, vec![(2020, 1), (2021, 1)]);
    }

    #[test]
    fn dataset_without_years_disables_filtering() {
        let table = Arc::new(PaperTable::from_records(vec![record(None, Some("A"))]));
        let mut state = AppState::new(Arc::clone(&table));
        assert_eq!(state.selected_range, None);
        assert!(state.visible_indices.is_empty());

        // set_range is a no-op without observed bounds.
        state.set_range(2020, 2021);
        assert_eq!(state.selected_range, None);
    }

    #[test]
    fn word_frequencies_follow_selection() {
        let table = Arc::new(PaperTable::from_records(vec![
            record(Some(2020), Some("viral dynamics")),
            record(Some(2021), None),
        ]));
        let mut state = AppState::new(Arc::clone(&table));
        assert!(!state.title_words.is_empty());

        // Narrow to the title-less year → word cloud input becomes empty.
        state.set_range(2021, 2021);
        assert!(state.title_words.is_empty());
    }
}
