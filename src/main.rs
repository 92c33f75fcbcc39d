mod app;
mod color;
mod data;
mod state;
mod ui;

use std::path::Path;
use std::sync::Arc;

use eframe::egui;

use app::PaperExplorerApp;
use state::AppState;

/// Fixed relative path of the input dataset. Column names are fixed by
/// convention, not configurable.
const METADATA_PATH: &str = "metadata.csv";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // The dataset is loaded exactly once, before the window opens. A missing
    // or unreadable file aborts the run with no partial rendering.
    let table = data::loader::load_dataset(Path::new(METADATA_PATH)).map_err(|e| {
        log::error!("startup load failed: {e}");
        e
    })?;
    log::info!(
        "loaded {} papers, year bounds {:?}",
        table.len(),
        table.year_bounds
    );

    let state = AppState::new(Arc::new(table));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "CORD-19 Data Explorer",
        options,
        Box::new(|_cc| Ok(Box::new(PaperExplorerApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {e}"))
}
