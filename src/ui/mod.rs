/// Presentation layer: panel layout and chart rendering. Nothing in here
/// computes aggregates; it only formats what `AppState` has already cached.
pub mod charts;
pub mod panels;
