use serde::Deserialize;

// ---------------------------------------------------------------------------
// RawRecord – one row as it appears in the input file
// ---------------------------------------------------------------------------

/// One undecorated row of the metadata file. Every column is optional; the
/// `csv` and `serde_json` deserializers both map empty/absent cells to `None`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRecord {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(rename = "abstract", default)]
    pub abstract_text: Option<String>,
    #[serde(default)]
    pub journal: Option<String>,
    #[serde(rename = "source_x", default)]
    pub source: Option<String>,
    #[serde(default)]
    pub publish_time: Option<String>,
}

// ---------------------------------------------------------------------------
// PaperRecord – a row after feature derivation
// ---------------------------------------------------------------------------

/// One paper with its derived features attached. Never mutated after load.
#[derive(Debug, Clone)]
pub struct PaperRecord {
    pub title: Option<String>,
    pub abstract_text: Option<String>,
    pub journal: Option<String>,
    pub source: Option<String>,
    /// Raw publish date text, kept for the preview tables.
    pub publish_time: Option<String>,
    /// Calendar year of the parsed publish date, absent when unparsable.
    pub year: Option<i32>,
    /// Whitespace-token count of the abstract (missing abstract → 0).
    pub abstract_word_count: usize,
}

// ---------------------------------------------------------------------------
// PaperTable – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full featured dataset with its observed year bounds precomputed.
#[derive(Debug, Clone)]
pub struct PaperTable {
    /// All papers (rows).
    pub records: Vec<PaperRecord>,
    /// Observed (min, max) derived year, `None` when no row has a year.
    pub year_bounds: Option<(i32, i32)>,
}

impl PaperTable {
    /// Build the table and its year bounds from featured records.
    pub fn from_records(records: Vec<PaperRecord>) -> Self {
        let mut bounds: Option<(i32, i32)> = None;
        for year in records.iter().filter_map(|r| r.year) {
            bounds = Some(match bounds {
                Some((lo, hi)) => (lo.min(year), hi.max(year)),
                None => (year, year),
            });
        }
        PaperTable {
            records,
            year_bounds: bounds,
        }
    }

    /// Number of papers.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_with_year(year: Option<i32>) -> PaperRecord {
        PaperRecord {
            title: None,
            abstract_text: None,
            journal: None,
            source: None,
            publish_time: None,
            year,
            abstract_word_count: 0,
        }
    }

    #[test]
    fn year_bounds_span_observed_years() {
        let table = PaperTable::from_records(vec![
            record_with_year(Some(2019)),
            record_with_year(None),
            record_with_year(Some(2021)),
            record_with_year(Some(2020)),
        ]);
        assert_eq!(table.year_bounds, Some((2019, 2021)));
        assert_eq!(table.len(), 4);
    }

    #[test]
    fn year_bounds_absent_when_no_year_parses() {
        let table =
            PaperTable::from_records(vec![record_with_year(None), record_with_year(None)]);
        assert_eq!(table.year_bounds, None);
        assert!(!table.is_empty());
    }
}
