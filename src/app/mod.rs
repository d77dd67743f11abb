//! Distance Game dashboard
//!
//! Scatter plot of the players with nearest-neighbor circles, plus the
//! standings table. Runs in the browser via eframe.

mod chart;
mod header;
mod table;

use eframe::egui;
use tracing::info;

use crate::core::{parse_csv, Standings, SAMPLE_DATA_CSV};
use crate::scatter::HoverState;
use crate::theme::{colors, dashboard_visuals};

/// Distance Game App
pub struct GameApp {
    /// Ranked players for the loaded dataset
    pub(crate) standings: Standings,
    /// Point under the pointer, updated every frame by the chart
    pub(crate) hover: HoverState,
}

impl GameApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        cc.egui_ctx.set_visuals(dashboard_visuals());

        let mut app = Self {
            standings: Standings::default(),
            hover: HoverState::None,
        };
        app.load_csv(SAMPLE_DATA_CSV);
        app
    }

    /// Replace the current dataset with one parsed from CSV text
    pub fn load_csv(&mut self, text: &str) {
        info!("Loading inline CSV data");
        self.standings = Standings::from_rows(&parse_csv(text));
        self.hover = HoverState::None;

        match self.standings.winner_rival() {
            Some((rival, distance)) => info!(
                players = self.standings.len(),
                rival = %rival.name,
                distance,
                "Dataset loaded"
            ),
            None => info!(players = self.standings.len(), "Dataset loaded"),
        }
    }
}

impl eframe::App for GameApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(colors::BG_PRIMARY).inner_margin(12.0))
            .show(ctx, |ui| {
                self.render_header(ui);

                ui.add_space(8.0);

                egui::ScrollArea::vertical().show(ui, |ui| {
                    let side = ui.available_width().min(640.0);
                    ui.allocate_ui(egui::vec2(side, side), |ui| {
                        self.render_chart(ui);
                    });

                    ui.add_space(12.0);

                    self.render_table(ui);
                });
            });
    }
}
