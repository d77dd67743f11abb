//! Title bar with the current winner

use eframe::egui;
use crate::theme::colors;
use super::GameApp;

impl GameApp {
    pub(crate) fn render_header(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new("Distance Game")
                    .color(colors::TEXT_PRIMARY)
                    .size(20.0),
            );

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    egui::RichText::new(format!("{} players", self.standings.len()))
                        .color(colors::TEXT_MUTED),
                );

                if let Some(winner) = self.standings.winner() {
                    ui.label(egui::RichText::new("/").color(colors::TEXT_MUTED));
                    ui.label(
                        egui::RichText::new(format!(
                            "Winner: {} ({:.2})",
                            winner.name, winner.nearest_distance
                        ))
                        .color(colors::WINNER),
                    );
                }
            });
        });
    }
}
