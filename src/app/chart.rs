//! Scatter plot of the field with name labels and nearest-neighbor circles

use eframe::egui;
use egui_plot::{Line, LineStyle, Plot, PlotPoint, PlotPoints, Points, Text};
use tracing::trace;

use crate::core::{FIELD_MAX, FIELD_MIN};
use crate::scatter::{hit_test, overlays, HoverState, OverlayStyle};
use crate::theme::colors::{self, with_alpha};
use super::GameApp;

/// Pointer distance (data units) that still counts as hovering a point
const HIT_TOLERANCE: f64 = 1.2;
/// Vertical gap between a point and its name label (data units)
const NAME_OFFSET: f64 = 1.6;

impl GameApp {
    pub(crate) fn render_chart(&mut self, ui: &mut egui::Ui) {
        let points = self.standings.points();
        let circles = overlays(&self.standings, self.hover);

        let tooltips: Vec<([f64; 2], String)> = points
            .iter()
            .map(|p| ([p.x, p.y], p.tooltip_lines().join("\n")))
            .collect();

        let others: Vec<[f64; 2]> = points.iter().skip(1).map(|p| [p.x, p.y]).collect();

        let response = Plot::new("distance_chart")
            .data_aspect(1.0)
            .view_aspect(1.0)
            .show_grid(true)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .allow_boxed_zoom(false)
            .allow_double_click_reset(false)
            .show_background(false)
            .include_x(FIELD_MIN)
            .include_x(FIELD_MAX)
            .include_y(FIELD_MIN)
            .include_y(FIELD_MAX)
            .label_formatter(move |name, value| {
                if name.is_empty() {
                    return String::new();
                }
                tooltips
                    .iter()
                    .find(|(pos, _)| pos[0] == value.x && pos[1] == value.y)
                    .map(|(_, text)| text.clone())
                    .unwrap_or_default()
            })
            .show(ui, |plot_ui| {
                plot_ui.points(
                    Points::new(PlotPoints::from(others))
                        .name("Players")
                        .color(with_alpha(colors::PLAYER, colors::PLAYER_FILL_ALPHA))
                        .radius(8.0)
                        .filled(true),
                );

                if let Some(winner) = points.first() {
                    plot_ui.points(
                        Points::new(PlotPoints::from(vec![[winner.x, winner.y]]))
                            .name(format!("Winner: {}", winner.name))
                            .color(with_alpha(colors::WINNER, colors::WINNER_FILL_ALPHA))
                            .radius(12.0)
                            .filled(true),
                    );
                }

                for p in points {
                    plot_ui.text(
                        Text::new(
                            PlotPoint::new(p.x, p.y + NAME_OFFSET),
                            egui::RichText::new(&p.name).strong().size(12.0),
                        )
                        .color(colors::TEXT_PRIMARY)
                        .anchor(egui::Align2::CENTER_BOTTOM),
                    );
                }

                for circle in &circles {
                    let (color, width, dash, label_offset, label_size) = match circle.style {
                        OverlayStyle::Winner => (
                            with_alpha(colors::WINNER, colors::WINNER_CIRCLE_ALPHA),
                            3.0_f32,
                            5.0,
                            1.5,
                            14.0,
                        ),
                        OverlayStyle::Hovered => (
                            with_alpha(colors::PLAYER, colors::PLAYER_CIRCLE_ALPHA),
                            2.0_f32,
                            3.0,
                            1.1,
                            12.0,
                        ),
                    };

                    plot_ui.line(
                        Line::new(PlotPoints::from(circle.outline(96)))
                            .color(color)
                            .width(width)
                            .style(LineStyle::Dashed { length: dash }),
                    );

                    let [lx, ly] = circle.label_anchor(label_offset);
                    plot_ui.text(
                        Text::new(
                            PlotPoint::new(lx, ly),
                            egui::RichText::new(&circle.label).strong().size(label_size),
                        )
                        .color(color)
                        .anchor(egui::Align2::CENTER_TOP),
                    );
                }

                plot_ui.pointer_coordinate()
            });

        let hit = if response.response.hovered() {
            response
                .inner
                .and_then(|pos| hit_test(&self.standings, [pos.x, pos.y], HIT_TOLERANCE))
        } else {
            None
        };

        if hit.is_some() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
        }

        let hover = HoverState::from_hit(hit);
        if hover != self.hover {
            trace!(?hover, "Hover changed");
            self.hover = hover;
        }
    }
}
