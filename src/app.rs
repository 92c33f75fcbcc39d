use eframe::egui;

use crate::state::AppState;
use crate::ui::panels;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct PaperExplorerApp {
    pub state: AppState,
}

impl PaperExplorerApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for PaperExplorerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: title and counts ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Left side panel: year range filter ----
        egui::SidePanel::left("filter_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: the dashboard page ----
        egui::CentralPanel::default().show(ctx, |ui| {
            panels::central_page(ui, &self.state);
        });
    }
}
