//! User interface panels for the graph editor
//!
//! This crate provides the egui-based editing surfaces: the data grid,
//! the label configuration bar and the chart type selector.

pub mod chart_selector;
pub mod config_panel;
pub mod data_panel;
pub mod theme;

pub use chart_selector::chart_type_selector;
pub use config_panel::config_panel;
pub use data_panel::data_panel;
pub use theme::apply_theme;

use egui::Ui;

/// Show a surfaced, recoverable error in the toolbar's error color.
pub fn error_banner(ui: &mut Ui, message: &str) {
    ui.colored_label(ui.visuals().error_fg_color, message);
}
