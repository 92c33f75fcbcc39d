use chrono::{Datelike, NaiveDate};

use super::model::{PaperRecord, RawRecord};

// ---------------------------------------------------------------------------
// Feature derivation: raw row → featured row
// ---------------------------------------------------------------------------

/// Date formats tried in order when parsing `publish_time`. The CORD-19 dump
/// mixes ISO dates with datetimes and a few prose-style variants.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%Y-%m-%d %H:%M:%S",
    "%b %d, %Y",
    "%d %b %Y",
    "%Y %b %d",
];

/// Attach the derived columns (year, abstract word count) to a raw row.
/// Pure; run once per record at load time.
pub fn derive(raw: RawRecord) -> PaperRecord {
    let year = raw.publish_time.as_deref().and_then(parse_year);
    let abstract_word_count = word_count(raw.abstract_text.as_deref());

    PaperRecord {
        title: raw.title,
        abstract_text: raw.abstract_text,
        journal: raw.journal,
        source: raw.source,
        publish_time: raw.publish_time,
        year,
        abstract_word_count,
    }
}

/// Lenient "parse-or-absent" year extraction. Tries each known date format,
/// then a year-month prefix, then a bare year. Returns `None` on failure
/// rather than erroring; callers treat absence as "excluded from this view".
pub fn parse_year(text: &str) -> Option<i32> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(text, fmt) {
            return Some(date.year());
        }
    }

    // "2020-04" — year-month without a day.
    if let Some((y, m)) = text.split_once('-') {
        if let (Ok(year), Ok(month)) = (y.parse::<i32>(), m.parse::<u32>()) {
            if NaiveDate::from_ymd_opt(year, month, 1).is_some() {
                return Some(year);
            }
        }
    }

    // Bare year, e.g. "2020". Four digits keeps "20" or "202004" out.
    if text.len() == 4 {
        if let Ok(year) = text.parse::<i32>() {
            return Some(year);
        }
    }

    None
}

/// Whitespace-token count of an abstract; missing text counts as empty.
pub fn word_count(text: Option<&str>) -> usize {
    text.unwrap_or("").split_whitespace().count()
}
