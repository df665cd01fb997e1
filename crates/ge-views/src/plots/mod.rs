//! Chart rendering views

pub mod colors;

mod cartesian;
mod pie;

use egui::{Rect, Ui};
use ge_core::{ChartConfig, ChartType, Dataset};

/// Renders the configured chart inside a white card and remembers the
/// card's on-screen rect, which doubles as the export render target.
pub struct ChartView {
    last_rect: Option<Rect>,
}

impl Default for ChartView {
    fn default() -> Self {
        Self::new()
    }
}

impl ChartView {
    pub fn new() -> Self {
        Self { last_rect: None }
    }

    /// Screen rect of the most recently rendered chart container.
    pub fn render_target(&self) -> Option<Rect> {
        self.last_rect
    }

    pub fn ui(&mut self, ui: &mut Ui, dataset: &Dataset, config: &ChartConfig) {
        let frame = egui::Frame::none()
            .fill(egui::Color32::WHITE)
            .rounding(egui::Rounding::same(8.0))
            .inner_margin(egui::Margin::same(16.0));

        let response = frame.show(ui, |ui| {
            ui.set_min_size(ui.available_size());
            ui.vertical_centered(|ui| {
                ui.heading(&config.title);
            });
            ui.add_space(8.0);
            match config.chart_type {
                ChartType::Pie => pie::show(ui, dataset),
                _ => cartesian::show(ui, dataset, config),
            }
        });

        self.last_rect = Some(response.response.rect);
    }
}
