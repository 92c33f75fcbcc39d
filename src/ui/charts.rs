use eframe::egui::{RichText, Ui};
use egui_plot::{Bar, BarChart, Plot};

use crate::color;
use crate::state::AppState;
use crate::ui::panels::truncate;

const CHART_HEIGHT: f32 = 240.0;
/// Words shown in the title cloud.
const CLOUD_WORDS: usize = 60;

/// One palette hue per bar chart.
fn accent(chart: usize) -> eframe::egui::Color32 {
    color::generate_palette(3)[chart % 3]
}

// ---------------------------------------------------------------------------
// Publications by year (vertical bars)
// ---------------------------------------------------------------------------

pub fn yearly_chart(ui: &mut Ui, state: &AppState) {
    ui.strong("Publications by Year");
    if state.yearly.is_empty() {
        ui.label("No publications in the selected range.");
        return;
    }

    let bars: Vec<Bar> = state
        .yearly
        .iter()
        .map(|&(year, count)| {
            Bar::new(year as f64, count as f64)
                .width(0.7)
                .name(year.to_string())
        })
        .collect();

    Plot::new("yearly_plot")
        .height(CHART_HEIGHT)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_boxed_zoom(false)
        .x_axis_label("Year")
        .y_axis_label("Count")
        .x_axis_formatter(|mark, _range| format!("{}", mark.value as i64))
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).color(accent(0)).name("papers"));
        });
}

// ---------------------------------------------------------------------------
// Top journals (horizontal bars)
// ---------------------------------------------------------------------------

pub fn journals_chart(ui: &mut Ui, state: &AppState) {
    ui.strong("Top Journals Publishing COVID-19 Research");
    if state.top_journals.is_empty() {
        ui.label("No journal information in the selected range.");
        return;
    }

    // Highest count on top: argument positions run downwards from n-1.
    let n = state.top_journals.len();
    let bars: Vec<Bar> = state
        .top_journals
        .iter()
        .enumerate()
        .map(|(i, (name, count))| {
            Bar::new((n - 1 - i) as f64, *count as f64)
                .width(0.7)
                .name(name.clone())
        })
        .collect();

    // Position-indexed labels: bar k carries journal n-1-k.
    let labels: Vec<String> = state
        .top_journals
        .iter()
        .rev()
        .map(|(name, _)| truncate(name, 28))
        .collect();

    Plot::new("journals_plot")
        .height(CHART_HEIGHT)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_boxed_zoom(false)
        .x_axis_label("Number of Papers")
        .y_axis_formatter(move |mark, _range| axis_name(&labels, mark.value))
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(
                BarChart::new(bars)
                    .horizontal()
                    .color(accent(1))
                    .name("journals"),
            );
        });
}

// ---------------------------------------------------------------------------
// Top sources (vertical bars, truncated labels)
// ---------------------------------------------------------------------------

pub fn sources_chart(ui: &mut Ui, state: &AppState) {
    ui.strong("Publications by Source");
    if state.top_sources.is_empty() {
        ui.label("No source information in the selected range.");
        return;
    }

    let bars: Vec<Bar> = state
        .top_sources
        .iter()
        .enumerate()
        .map(|(i, (name, count))| {
            Bar::new(i as f64, *count as f64).width(0.7).name(name.clone())
        })
        .collect();

    // Position-indexed labels: bar i carries source i.
    let labels: Vec<String> = state
        .top_sources
        .iter()
        .map(|(name, _)| truncate(name, 12))
        .collect();

    Plot::new("sources_plot")
        .height(CHART_HEIGHT)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_boxed_zoom(false)
        .y_axis_label("Count")
        .x_axis_formatter(move |mark, _range| axis_name(&labels, mark.value))
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).color(accent(2)).name("sources"));
        });
}

/// Map an axis position back to the label of the bar sitting there.
/// Positions between bars (fractional grid marks) render as empty ticks.
fn axis_name(labels: &[String], value: f64) -> String {
    let rounded = value.round();
    if (value - rounded).abs() > 1e-6 || rounded < 0.0 {
        return String::new();
    }
    labels.get(rounded as usize).cloned().unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Title word cloud
// ---------------------------------------------------------------------------

/// Render the title word cloud: the most frequent title words laid out in a
/// wrapping row, sized by frequency. Omitted entirely when there is no title
/// text in the selection.
pub fn word_cloud(ui: &mut Ui, state: &AppState) {
    if state.title_words.is_empty() {
        return;
    }

    ui.strong("Title Word Cloud");

    let words = &state.title_words[..state.title_words.len().min(CLOUD_WORDS)];
    let max_count = words.first().map(|&(_, c)| c).unwrap_or(1) as f32;

    ui.horizontal_wrapped(|ui: &mut Ui| {
        ui.spacing_mut().item_spacing.x = 10.0;
        for (i, (word, count)) in words.iter().enumerate() {
            let scale = (*count as f32 / max_count).sqrt();
            let size = 12.0 + scale * 26.0;
            ui.label(
                RichText::new(word)
                    .size(size)
                    .color(color::word_color(i)),
            )
            .on_hover_text(format!("{count}×"));
        }
    });
}

#[cfg(test)]
mod tests {
    use super::axis_name;

    #[test]
    fn axis_name_maps_integer_positions() {
        let labels = vec!["first".to_string(), "second".to_string()];
        assert_eq!(axis_name(&labels, 0.0), "first");
        assert_eq!(axis_name(&labels, 1.0), "second");
    }

    #[test]
    fn axis_name_blank_between_and_outside_bars() {
        let labels = vec!["only".to_string()];
        assert_eq!(axis_name(&labels, 0.5), "");
        assert_eq!(axis_name(&labels, -1.0), "");
        assert_eq!(axis_name(&labels, 3.0), "");
    }
}
