use std::path::Path;
use std::sync::Arc;

use anyhow::{anyhow, bail, Context, Result};
use arrow::array::{Array, AsArray};
use arrow::datatypes::DataType;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use thiserror::Error;

use super::features;
use super::model::{PaperTable, RawRecord};

// ---------------------------------------------------------------------------
// Error taxonomy
// ---------------------------------------------------------------------------

/// Whole-dataset failures. Both variants are fatal at startup; per-record
/// problems (bad dates, missing fields) never surface here, they degrade to
/// absent values inside the records.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("dataset unavailable at '{path}': {source}")]
    Unavailable {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed dataset: {0:#}")]
    Malformed(#[from] anyhow::Error),
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the paper metadata file and derive per-record features. Dispatch by
/// extension.
///
/// Supported formats:
/// * `.csv`     – header row with the conventional column names (recommended)
/// * `.json`    – `[{ "title": ..., "abstract": ..., ... }, ...]`
/// * `.parquet` – flat Utf8 columns with the same names
///
/// Expected columns: `title`, `abstract`, `journal`, `source_x`,
/// `publish_time`. A missing column leaves that field absent on every
/// record; a missing file is fatal.
pub fn load_dataset(path: &Path) -> Result<PaperTable, DataError> {
    let file = std::fs::File::open(path).map_err(|source| DataError::Unavailable {
        path: path.display().to_string(),
        source,
    })?;

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let raw = match ext.as_str() {
        "csv" => load_csv(file)?,
        "json" => load_json(file)?,
        "parquet" | "pq" => load_parquet(file)?,
        other => return Err(anyhow!("unsupported file extension: .{other}").into()),
    };

    let records = raw
        .into_iter()
        .map(normalize_blanks)
        .map(features::derive)
        .collect();
    Ok(PaperTable::from_records(records))
}

/// Whitespace-only cells count as missing, whichever loader produced them.
fn normalize_blanks(mut raw: RawRecord) -> RawRecord {
    for field in [
        &mut raw.title,
        &mut raw.abstract_text,
        &mut raw.journal,
        &mut raw.source,
        &mut raw.publish_time,
    ] {
        if field.as_deref().is_some_and(|s| s.trim().is_empty()) {
            *field = None;
        }
    }
    raw
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with column names. Columns beyond the conventional
/// five are ignored; empty cells deserialize to `None`.
fn load_csv(file: std::fs::File) -> Result<Vec<RawRecord>> {
    let mut reader = csv::Reader::from_reader(file);
    let mut raw = Vec::new();
    for (row_no, result) in reader.deserialize::<RawRecord>().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        raw.push(record);
    }
    Ok(raw)
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Records-oriented JSON: a top-level array of objects keyed by the
/// conventional column names. Unknown keys are ignored.
fn load_json(file: std::fs::File) -> Result<Vec<RawRecord>> {
    let reader = std::io::BufReader::new(file);
    let raw: Vec<RawRecord> =
        serde_json::from_reader(reader).context("parsing records-oriented JSON")?;
    Ok(raw)
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Parquet with flat string columns. Works with files written by Pandas
/// (`df.to_parquet()`) as well as this crate's own `generate_sample` binary.
fn load_parquet(file: std::fs::File) -> Result<Vec<RawRecord>> {
    let builder =
        ParquetRecordBatchReaderBuilder::try_new(file).context("reading parquet metadata")?;
    let reader = builder.build().context("building parquet reader")?;

    let mut raw = Vec::new();

    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        let schema = batch.schema();

        let col = |name: &str| schema.index_of(name).ok().map(|i| batch.column(i).clone());
        let title = col("title");
        let abstract_text = col("abstract");
        let journal = col("journal");
        let source = col("source_x");
        let publish_time = col("publish_time");

        for row in 0..batch.num_rows() {
            raw.push(RawRecord {
                title: opt_string_at(title.as_ref(), row)?,
                abstract_text: opt_string_at(abstract_text.as_ref(), row)?,
                journal: opt_string_at(journal.as_ref(), row)?,
                source: opt_string_at(source.as_ref(), row)?,
                publish_time: opt_string_at(publish_time.as_ref(), row)?,
            });
        }
    }

    Ok(raw)
}

/// Extract an optional string cell from a Utf8/LargeUtf8 column, treating an
/// absent column like an all-null one.
fn opt_string_at(col: Option<&Arc<dyn Array>>, row: usize) -> Result<Option<String>> {
    let Some(col) = col else {
        return Ok(None);
    };
    if col.is_null(row) {
        return Ok(None);
    }
    match col.data_type() {
        DataType::Utf8 => Ok(Some(col.as_string::<i32>().value(row).to_string())),
        DataType::LargeUtf8 => Ok(Some(col.as_string::<i64>().value(row).to_string())),
        other => bail!("expected Utf8 column, got {other:?}"),
    }
}
