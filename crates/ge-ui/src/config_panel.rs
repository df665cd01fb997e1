//! Chart label configuration

use egui::{RichText, TextEdit, Ui};
use ge_core::{AppState, Command};

pub fn config_panel(ui: &mut Ui, state: &mut AppState) {
    let mut commands: Vec<Command> = Vec::new();

    ui.horizontal(|ui| {
        labelled_input(ui, "Chart Title", 192.0, &state.chart.title, |text| {
            commands.push(Command::SetTitle(text));
        });
        labelled_input(ui, "X Axis Label", 128.0, &state.chart.x_label, |text| {
            commands.push(Command::SetXLabel(text));
        });
        labelled_input(ui, "Y Axis Label", 128.0, &state.chart.y_label, |text| {
            commands.push(Command::SetYLabel(text));
        });
    });

    for command in commands {
        state.apply(command);
    }
}

fn labelled_input(
    ui: &mut Ui,
    label: &str,
    width: f32,
    value: &str,
    mut on_change: impl FnMut(String),
) {
    ui.vertical(|ui| {
        ui.label(RichText::new(label).small().weak());
        let mut text = value.to_owned();
        let response = ui.add(
            TextEdit::singleline(&mut text)
                .id_source(("config_input", label))
                .desired_width(width),
        );
        if response.changed() {
            on_change(text);
        }
    });
}
