//! Standings table: rank, name, position, distance to nearest

use eframe::egui;
use crate::theme::colors;
use super::GameApp;

const COLUMNS: &[&str] = &["Rank", "Name", "X", "Y", "Nearest"];

impl GameApp {
    pub(crate) fn render_table(&self, ui: &mut egui::Ui) {
        ui.label(
            egui::RichText::new("Standings")
                .color(colors::TEXT_MUTED)
                .size(14.0),
        );

        egui::Grid::new("standings")
            .striped(true)
            .num_columns(COLUMNS.len())
            .spacing(egui::vec2(24.0, 6.0))
            .show(ui, |ui| {
                for &title in COLUMNS {
                    ui.label(egui::RichText::new(title).color(colors::TEXT_SECONDARY).strong());
                }
                ui.end_row();

                for (index, row) in self.standings.table_rows().into_iter().enumerate() {
                    let highlighted = index == 0 || self.hover.index() == Some(index);
                    let color = if index == 0 {
                        colors::WINNER
                    } else if highlighted {
                        colors::PLAYER
                    } else {
                        colors::TEXT_PRIMARY
                    };

                    ui.label(egui::RichText::new(row.rank.to_string()).color(color));
                    ui.label(egui::RichText::new(row.name).color(color));
                    ui.label(egui::RichText::new(row.x.to_string()).color(color).monospace());
                    ui.label(egui::RichText::new(row.y.to_string()).color(color).monospace());
                    ui.label(egui::RichText::new(row.nearest).color(color).monospace());
                    ui.end_row();
                }
            });
    }
}
