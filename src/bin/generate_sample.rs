//! Writes a small deterministic sample dataset in both CSV and Parquet so
//! the explorer can be tried without downloading the real metadata file.

use std::sync::Arc;

use arrow::array::{ArrayRef, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;

struct SampleRow {
    cord_uid: String,
    title: String,
    abstract_text: String,
    journal: String,
    source: String,
    publish_time: String,
}

const TOPICS: &[&str] = &[
    "Transmission dynamics",
    "Spike protein structure",
    "Vaccine efficacy",
    "Clinical outcomes",
    "Genomic surveillance",
    "Antibody response",
];

const CONTEXTS: &[&str] = &[
    "in hospitalized patients",
    "across urban populations",
    "under containment measures",
    "in longitudinal cohorts",
];

const JOURNALS: &[&str] = &[
    "Nature",
    "The Lancet",
    "Cell",
    "BMJ",
    "PLoS ONE",
    "", // some rows have no journal
];

const SOURCES: &[&str] = &["PMC", "Elsevier", "WHO", "medrxiv", "biorxiv"];

/// Mix of formats the lenient date parser accepts, plus a couple it
/// deliberately cannot, so absent-year handling shows up in the UI.
const DATES: &[&str] = &[
    "2019-11-03",
    "2020-01-15",
    "2020-04-17",
    "2020/07/02",
    "Apr 17, 2020",
    "2020-09",
    "2021-02-11",
    "2021",
    "2022-03-30",
    "",
    "date unknown",
];

fn build_rows(n: usize) -> Vec<SampleRow> {
    (0..n)
        .map(|i| {
            let topic = TOPICS[i % TOPICS.len()];
            let context = CONTEXTS[(i / TOPICS.len()) % CONTEXTS.len()];
            let words = 20 + (i * 7) % 80;
            SampleRow {
                cord_uid: format!("sample{i:04}"),
                title: if i % 17 == 0 {
                    String::new() // occasional missing title
                } else {
                    format!("{topic} of SARS-CoV-2 {context}")
                },
                abstract_text: std::iter::repeat("lorem")
                    .take(words)
                    .collect::<Vec<_>>()
                    .join(" "),
                journal: JOURNALS[(i * 3) % JOURNALS.len()].to_string(),
                source: SOURCES[(i * 5) % SOURCES.len()].to_string(),
                publish_time: DATES[(i * 7) % DATES.len()].to_string(),
            }
        })
        .collect()
}

fn write_csv(rows: &[SampleRow], path: &str) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record([
        "cord_uid",
        "title",
        "abstract",
        "journal",
        "source_x",
        "publish_time",
    ])?;
    for row in rows {
        writer.write_record([
            &row.cord_uid,
            &row.title,
            &row.abstract_text,
            &row.journal,
            &row.source,
            &row.publish_time,
        ])?;
    }
    writer.flush()?;
    Ok(())
}

fn write_parquet(rows: &[SampleRow], path: &str) -> anyhow::Result<()> {
    let column = |f: fn(&SampleRow) -> &str| -> ArrayRef {
        Arc::new(StringArray::from(
            rows.iter()
                .map(|r| {
                    let v = f(r);
                    (!v.is_empty()).then_some(v)
                })
                .collect::<Vec<_>>(),
        ))
    };

    let schema = Arc::new(Schema::new(vec![
        Field::new("cord_uid", DataType::Utf8, true),
        Field::new("title", DataType::Utf8, true),
        Field::new("abstract", DataType::Utf8, true),
        Field::new("journal", DataType::Utf8, true),
        Field::new("source_x", DataType::Utf8, true),
        Field::new("publish_time", DataType::Utf8, true),
    ]));

    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            column(|r| &r.cord_uid),
            column(|r| &r.title),
            column(|r| &r.abstract_text),
            column(|r| &r.journal),
            column(|r| &r.source),
            column(|r| &r.publish_time),
        ],
    )?;

    let file = std::fs::File::create(path)?;
    let mut writer = ArrowWriter::try_new(file, schema, None)?;
    writer.write(&batch)?;
    writer.close()?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let rows = build_rows(500);
    write_csv(&rows, "metadata.csv")?;
    write_parquet(&rows, "metadata.parquet")?;
    println!(
        "Wrote {} sample papers to metadata.csv and metadata.parquet",
        rows.len()
    );
    Ok(())
}
