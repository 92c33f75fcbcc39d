use super::model::PaperTable;

// ---------------------------------------------------------------------------
// Year-range filter
// ---------------------------------------------------------------------------

/// Return indices of records whose derived year is present and falls inside
/// `[min_year, max_year]`, inclusive on both ends. Records without a year are
/// excluded. Pure and idempotent: re-filtering the result with the same
/// bounds selects the same records.
pub fn filtered_indices(table: &PaperTable, min_year: i32, max_year: i32) -> Vec<usize> {
    table
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| matches!(rec.year, Some(y) if y >= min_year && y <= max_year))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{PaperRecord, PaperTable};

    fn table_with_years(years: &[Option<i32>]) -> PaperTable {
        let records = years
            .iter()
            .map(|&year| PaperRecord {
                title: None,
                abstract_text: None,
                journal: None,
                source: None,
                publish_time: None,
                year,
                abstract_word_count: 0,
            })
            .collect();
        PaperTable::from_records(records)
    }

    #[test]
    fn bounds_are_inclusive_and_absent_years_excluded() {
        let table = table_with_years(&[
            Some(2019),
            Some(2020),
            Some(2020),
            Some(2021),
            None,
        ]);
        let idx = filtered_indices(&table, 2020, 2021);
        assert_eq!(idx, vec![1, 2, 3]);
    }

    #[test]
    fn filtering_is_idempotent() {
        let table = table_with_years(&[Some(2018), Some(2020), None, Some(2022)]);
        let once = filtered_indices(&table, 2019, 2021);

        // Build a table from only the selected records and filter again.
        let subset = PaperTable::from_records(
            once.iter().map(|&i| table.records[i].clone()).collect(),
        );
        let twice = filtered_indices(&subset, 2019, 2021);
        assert_eq!(twice.len(), once.len());
        assert_eq!(twice, (0..once.len()).collect::<Vec<_>>());
    }

    #[test]
    fn empty_range_selects_nothing() {
        let table = table_with_years(&[Some(2015), Some(2016)]);
        assert!(filtered_indices(&table, 2020, 2021).is_empty());
    }
}
