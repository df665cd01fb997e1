//! Chart type selector

use egui::Ui;
use ge_core::{AppState, ChartType, Command};

/// Five mutually exclusive chart modes as a row of selectable buttons.
pub fn chart_type_selector(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        for chart_type in ChartType::ALL {
            let selected = state.chart.chart_type == chart_type;
            if ui.selectable_label(selected, chart_type.label()).clicked() && !selected {
                state.apply(Command::SetChartType(chart_type));
            }
        }
    });
}
