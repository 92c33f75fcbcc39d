use std::collections::HashMap;

use super::model::{PaperRecord, PaperTable};

// ---------------------------------------------------------------------------
// Aggregations over the filtered record set
// ---------------------------------------------------------------------------
// All four reducers are pure functions over (table, selected indices) and
// never mutate their input. Each one tolerates absent fields by skipping the
// record rather than erroring.

/// How many entries the top-N aggregates return at most.
pub const TOP_N: usize = 10;

/// Records-per-year counts, ordered by year ascending. Records without a
/// derived year never reach this function (the filter already dropped them),
/// but they are skipped here too so the reducer stands on its own.
pub fn yearly_counts(table: &PaperTable, indices: &[usize]) -> Vec<(i32, usize)> {
    let mut counts: HashMap<i32, usize> = HashMap::new();
    for &i in indices {
        if let Some(year) = table.records[i].year {
            *counts.entry(year).or_insert(0) += 1;
        }
    }
    let mut out: Vec<(i32, usize)> = counts.into_iter().collect();
    out.sort_by_key(|&(year, _)| year);
    out
}

/// Top journals by frequency over the selection.
pub fn top_journals(table: &PaperTable, indices: &[usize]) -> Vec<(String, usize)> {
    top_counts(table, indices, |rec| rec.journal.as_deref())
}

/// Top source identifiers by frequency over the selection.
pub fn top_sources(table: &PaperTable, indices: &[usize]) -> Vec<(String, usize)> {
    top_counts(table, indices, |rec| rec.source.as_deref())
}

/// Count distinct values of one column, drop missing values, and keep the
/// `TOP_N` highest counts. Ties keep first-encountered order: the counting
/// pass preserves encounter order and the sort is stable on count alone.
fn top_counts<'a, F>(table: &'a PaperTable, indices: &[usize], column: F) -> Vec<(String, usize)>
where
    F: Fn(&'a PaperRecord) -> Option<&'a str>,
{
    let mut order: Vec<(String, usize)> = Vec::new();
    let mut slot: HashMap<&'a str, usize> = HashMap::new();

    for &i in indices {
        let Some(value) = column(&table.records[i]) else {
            continue;
        };
        match slot.get(value) {
            Some(&at) => order[at].1 += 1,
            None => {
                slot.insert(value, order.len());
                order.push((value.to_string(), 1));
            }
        }
    }

    order.sort_by(|a, b| b.1.cmp(&a.1));
    order.truncate(TOP_N);
    order
}

// ---------------------------------------------------------------------------
// Title word frequencies (word-cloud input)
// ---------------------------------------------------------------------------

/// Common English words excluded from the title cloud, mirroring the stopword
/// filtering a word-cloud layout applies to free text.
const STOPWORDS: &[&str] = &[
    "the", "and", "for", "with", "from", "that", "this", "are", "was", "were", "will", "has",
    "have", "had", "its", "not", "but", "can", "our", "their", "during", "into", "between",
    "among", "after", "before", "about", "against", "using", "use", "based", "towards", "toward",
    "via", "due", "than", "then", "them", "they", "when", "what", "which", "while", "who", "how",
    "all", "any", "both", "each", "more", "most", "other", "some", "such", "only", "own", "same",
    "does", "did", "also", "may", "might", "could", "should", "would", "been", "being", "over",
    "under", "out", "off", "new", "non", "per",
];

/// Word frequencies of the concatenated non-missing titles, sorted by count
/// descending with the same stable first-encounter tie-break as the top-N
/// reducers. Tokens are lowercased, stripped of surrounding punctuation, and
/// dropped when shorter than three characters or on the stopword list.
///
/// An empty result means the word-cloud panel is skipped entirely.
pub fn title_word_frequencies(table: &PaperTable, indices: &[usize]) -> Vec<(String, usize)> {
    let blob: String = indices
        .iter()
        .filter_map(|&i| table.records[i].title.as_deref())
        .collect::<Vec<_>>()
        .join(" ");

    let mut order: Vec<(String, usize)> = Vec::new();
    let mut slot: HashMap<String, usize> = HashMap::new();

    for token in blob.split_whitespace() {
        let word = token
            .trim_matches(|c: char| !c.is_alphanumeric())
            .to_lowercase();
        if word.len() < 3 || STOPWORDS.contains(&word.as_str()) {
            continue;
        }
        match slot.get(&word) {
            Some(&at) => order[at].1 += 1,
            None => {
                slot.insert(word.clone(), order.len());
                order.push((word, 1));
            }
        }
    }

    order.sort_by(|a, b| b.1.cmp(&a.1));
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{PaperRecord, PaperTable};

    fn record(
        year: Option<i32>,
        journal: Option<&str>,
        source: Option<&str>,
        title: Option<&str>,
    ) -> PaperRecord {
        PaperRecord {
            title: title.map(str::to_string),
            abstract_text: None,
            journal: journal.map(str::to_string),
            source: source.map(str::to_string),
            publish_time: None,
            year,
            abstract_word_count: 0,
        }
    }

    fn all_indices(table: &PaperTable) -> Vec<usize> {
        (0..table.len()).collect()
    }

    #[test]
    fn yearly_counts_ascending() {
        let table = PaperTable::from_records(vec![
            record(Some(2021), None, None, None),
            record(Some(2020), None, None, None),
            record(Some(2020), None, None, None),
            record(None, None, None, None),
        ]);
        let idx = crate::data::filter::filtered_indices(&table, 2020, 2021);
        assert_eq!(yearly_counts(&table, &idx), vec![(2020, 2), (2021, 1)]);
    }

    #[test]
    fn top_journals_drop_missing_and_count() {
        let table = PaperTable::from_records(vec![
            record(Some(2020), Some("Nature"), None, None),
            record(Some(2020), Some("Nature"), None, None),
            record(Some(2020), Some("Cell"), None, None),
            record(Some(2020), None, None, None),
        ]);
        let idx = all_indices(&table);
        assert_eq!(
            top_journals(&table, &idx),
            vec![("Nature".to_string(), 2), ("Cell".to_string(), 1)]
        );
    }

    #[test]
    fn top_counts_cap_at_ten_with_stable_ties() {
        let journals: Vec<String> = (0..15).map(|i| format!("J{i:02}")).collect();
        let records = journals
            .iter()
            .map(|j| record(Some(2020), Some(j), None, None))
            .collect();
        let table = PaperTable::from_records(records);
        let idx = all_indices(&table);

        let top = top_journals(&table, &idx);
        assert_eq!(top.len(), TOP_N);
        // All counts equal → first-encounter order preserved.
        let names: Vec<&str> = top.iter().map(|(n, _)| n.as_str()).collect();
        let expected: Vec<&str> = journals[..TOP_N].iter().map(String::as_str).collect();
        assert_eq!(names, expected);
        assert!(top.iter().all(|&(_, c)| c == 1));
    }

    #[test]
    fn top_counts_sorted_descending() {
        let table = PaperTable::from_records(vec![
            record(Some(2020), None, Some("PMC"), None),
            record(Some(2020), None, Some("Elsevier"), None),
            record(Some(2020), None, Some("PMC"), None),
            record(Some(2020), None, Some("PMC"), None),
            record(Some(2020), None, Some("Elsevier"), None),
            record(Some(2020), None, Some("WHO"), None),
        ]);
        let idx = all_indices(&table);
        assert_eq!(
            top_sources(&table, &idx),
            vec![
                ("PMC".to_string(), 3),
                ("Elsevier".to_string(), 2),
                ("WHO".to_string(), 1)
            ]
        );
    }

    #[test]
    fn title_words_lowercased_and_stopword_filtered() {
        let table = PaperTable::from_records(vec![
            record(Some(2020), None, None, Some("Viral Transmission and the Host")),
            record(Some(2020), None, None, Some("transmission, viral dynamics")),
        ]);
        let idx = all_indices(&table);
        let words = title_word_frequencies(&table, &idx);
        assert_eq!(words[0], ("viral".to_string(), 2));
        assert_eq!(words[1], ("transmission".to_string(), 2));
        assert!(!words.iter().any(|(w, _)| w == "the" || w == "and"));
    }

    #[test]
    fn all_titles_missing_gives_empty_frequencies() {
        let table = PaperTable::from_records(vec![
            record(Some(2020), Some("Nature"), None, None),
            record(Some(2021), Some("Cell"), None, None),
        ]);
        let idx = all_indices(&table);
        assert!(title_word_frequencies(&table, &idx).is_empty());
    }

    #[test]
    fn aggregates_ignore_unselected_records() {
        let table = PaperTable::from_records(vec![
            record(Some(2019), Some("Lancet"), None, None),
            record(Some(2020), Some("Nature"), None, None),
        ]);
        let idx = vec![1];
        assert_eq!(yearly_counts(&table, &idx), vec![(2020, 1)]);
        assert_eq!(top_journals(&table, &idx), vec![("Nature".to_string(), 1)]);
    }
}
