/// Data layer: core types, loading, feature derivation, filtering,
/// aggregation.
///
/// Architecture:
/// ```text
///  metadata.csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → RawRecord rows (fatal on missing file)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ features  │  derive year + abstract word count → PaperTable
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  inclusive year range → selected indices
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ aggregate  │  yearly counts, top journals/sources, title words
///   └───────────┘
/// ```
pub mod aggregate;
pub mod features;
pub mod filter;
pub mod loader;
pub mod model;
