use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::model::PaperRecord;
use crate::state::AppState;
use crate::ui::charts;

/// Rows shown in the head / filtered previews.
const PREVIEW_ROWS: usize = 5;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top bar: title, record counts, status message.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.heading("CORD-19 Data Explorer");
        ui.separator();
        ui.label(format!(
            "{} papers loaded, {} in selection",
            state.table.len(),
            state.visible_indices.len()
        ));
        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Left side panel – year range filter
// ---------------------------------------------------------------------------

/// Render the filter panel. The sliders are bound to the observed year
/// bounds; the selection defaults to the full range.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    let Some((lo, hi)) = state.table.year_bounds else {
        ui.label("No record has a parseable publish date; year filtering is unavailable.");
        return;
    };

    let (mut min_sel, mut max_sel) = state.selected_range.unwrap_or((lo, hi));

    ui.strong("Publication year");
    ui.add_space(2.0);
    let changed_min = ui
        .add(egui::Slider::new(&mut min_sel, lo..=hi).text("from"))
        .changed();
    let changed_max = ui
        .add(egui::Slider::new(&mut max_sel, lo..=hi).text("to"))
        .changed();

    if changed_min || changed_max {
        state.set_range(min_sel, max_sel);
    }

    ui.add_space(6.0);
    ui.label(format!("Observed range: {lo}–{hi}"));
}

// ---------------------------------------------------------------------------
// Central panel – the dashboard page
// ---------------------------------------------------------------------------

/// Render the whole dashboard page, top to bottom: overview + head preview,
/// the four chart panels, the filtered preview, static notes.
pub fn central_page(ui: &mut Ui, state: &AppState) {
    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            overview_section(ui, state);
            ui.separator();

            ui.heading("Analysis & Visualizations");
            charts::yearly_chart(ui, state);
            ui.add_space(8.0);
            charts::journals_chart(ui, state);
            ui.add_space(8.0);
            charts::word_cloud(ui, state);
            ui.add_space(8.0);
            charts::sources_chart(ui, state);
            ui.separator();

            filtered_section(ui, state);
            ui.separator();
            notes_section(ui);
        });
}

fn overview_section(ui: &mut Ui, state: &AppState) {
    ui.heading("Dataset Overview");
    ui.label("Simple exploration of COVID-19 research papers (metadata file).");
    ui.label(format!("Shape: {} rows × 7 columns", state.table.len()));
    ui.add_space(4.0);

    let head: Vec<&PaperRecord> = state.table.records.iter().take(PREVIEW_ROWS).collect();
    ui.push_id("head_preview", |ui: &mut Ui| {
        record_table(ui, &head);
    });
}

fn filtered_section(ui: &mut Ui, state: &AppState) {
    ui.heading("Sample of Filtered Data");
    let head: Vec<&PaperRecord> = state
        .visible_indices
        .iter()
        .take(PREVIEW_ROWS)
        .map(|&i| &state.table.records[i])
        .collect();
    if head.is_empty() {
        ui.label("No records in the selected year range.");
        return;
    }
    ui.push_id("filtered_preview", |ui: &mut Ui| {
        record_table(ui, &head);
    });
}

fn notes_section(ui: &mut Ui) {
    ui.heading("Notes");
    ui.label("• Data loaded from the metadata file of the CORD-19 dataset.");
    ui.label("• Cleaned and prepared basic features (year, abstract word count).");
    ui.label("• Visualized trends over time, top journals, title keywords, and sources.");
    ui.label("• The year filter allows focused exploration.");
}

// ---------------------------------------------------------------------------
// Record preview table
// ---------------------------------------------------------------------------

fn record_table(ui: &mut Ui, rows: &[&PaperRecord]) {
    TableBuilder::new(ui)
        .striped(true)
        .column(Column::remainder().at_least(160.0)) // title
        .column(Column::auto()) // journal
        .column(Column::auto()) // source
        .column(Column::auto()) // publish_time
        .column(Column::auto()) // year
        .column(Column::auto()) // abstract words
        .header(20.0, |mut header| {
            for name in [
                "title",
                "journal",
                "source_x",
                "publish_time",
                "year",
                "abstract_word_count",
            ] {
                header.col(|ui| {
                    ui.strong(name);
                });
            }
        })
        .body(|mut body| {
            for rec in rows {
                body.row(18.0, |mut row| {
                    row.col(|ui| {
                        ui.label(truncate(rec.title.as_deref().unwrap_or("—"), 80));
                    });
                    row.col(|ui| {
                        ui.label(rec.journal.as_deref().unwrap_or("—"));
                    });
                    row.col(|ui| {
                        ui.label(rec.source.as_deref().unwrap_or("—"));
                    });
                    row.col(|ui| {
                        ui.label(rec.publish_time.as_deref().unwrap_or("—"));
                    });
                    row.col(|ui| {
                        ui.label(
                            rec.year
                                .map(|y| y.to_string())
                                .unwrap_or_else(|| "—".to_string()),
                        );
                    });
                    row.col(|ui| {
                        ui.label(rec.abstract_word_count.to_string());
                    });
                });
            }
        });
}

/// Shorten long cell text so one title cannot blow up the preview layout.
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{cut}…")
}
