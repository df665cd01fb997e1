//! Data grid editor
//!
//! A spreadsheet-like table over the dataset: header cells rename
//! columns, body cells edit values, and the trailing controls add or
//! delete rows and columns. Widget interactions are collected as
//! commands and applied once the frame's table pass is done.

use egui::{TextEdit, Ui};
use egui_extras::{Column, TableBuilder};
use ge_core::{AppState, Command, NAME_COLUMN};

pub fn data_panel(ui: &mut Ui, state: &mut AppState) {
    let columns = state.dataset.columns();
    let row_count = state.dataset.row_count();

    // Rename commits must land before a new header claims the editing
    // slot, matching the blur-before-focus order of the grid.
    let mut rename_ends: Vec<Command> = Vec::new();
    let mut rename_starts: Vec<Command> = Vec::new();
    let mut commands: Vec<Command> = Vec::new();

    let text_height = egui::TextStyle::Body.resolve(ui.style()).size * 1.8;

    egui::ScrollArea::horizontal().show(ui, |ui| {
        let mut builder = TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .min_scrolled_height(0.0)
            .vscroll(true);

        for _ in &columns {
            builder = builder.column(Column::initial(110.0).at_least(70.0).clip(true));
        }
        builder = builder.column(Column::exact(28.0));

        builder
            .header(26.0, |mut header| {
                for column in &columns {
                    header.col(|ui| {
                        header_cell(
                            ui,
                            state,
                            column,
                            &mut rename_ends,
                            &mut rename_starts,
                            &mut commands,
                        );
                    });
                }
                header.col(|_ui| {});
            })
            .body(|mut body| {
                for row in 0..row_count {
                    body.row(text_height, |mut table_row| {
                        for column in &columns {
                            table_row.col(|ui| {
                                value_cell(ui, state, row, column, &mut commands);
                            });
                        }
                        table_row.col(|ui| {
                            if ui.small_button("🗑").on_hover_text("Delete row").clicked() {
                                commands.push(Command::DeleteRow(row));
                            }
                        });
                    });
                }
            });
    });

    ui.add_space(8.0);
    ui.horizontal(|ui| {
        if ui.button("➕ Add Row").clicked() {
            commands.push(Command::AddRow);
        }
        if ui.button("➕ Add Column").clicked() {
            commands.push(Command::AddColumn);
        }
    });

    for command in rename_ends.into_iter().chain(rename_starts).chain(commands) {
        state.apply(command);
    }
}

/// A column header: a rename text edit plus the delete button for
/// everything except the protected `name` column.
fn header_cell(
    ui: &mut Ui,
    state: &AppState,
    column: &str,
    rename_ends: &mut Vec<Command>,
    rename_starts: &mut Vec<Command>,
    commands: &mut Vec<Command>,
) {
    let editing = state.rename.is_editing(column);
    let mut text = if editing {
        state.rename.buffer().unwrap_or_default().to_owned()
    } else {
        column.to_owned()
    };

    let deletable = column != NAME_COLUMN;
    let reserve = if deletable { 26.0 } else { 0.0 };
    let response = ui.add(
        TextEdit::singleline(&mut text)
            .id_source(("column_header", column))
            .desired_width((ui.available_width() - reserve).max(40.0)),
    );

    if response.gained_focus() {
        rename_starts.push(Command::StartRename(column.to_owned()));
    }
    if response.changed() {
        commands.push(Command::UpdateRenameBuffer(text.clone()));
    }
    if response.lost_focus() {
        if ui.input(|input| input.key_pressed(egui::Key::Escape)) {
            rename_ends.push(Command::CancelRename);
        } else {
            rename_ends.push(Command::CommitRename);
        }
    }

    if deletable && ui.small_button("🗑").on_hover_text("Delete column").clicked() {
        commands.push(Command::DeleteColumn(column.to_owned()));
    }
}

/// A body cell bound to the dataset; edits coerce through `SetCell`.
fn value_cell(ui: &mut Ui, state: &AppState, row: usize, column: &str, commands: &mut Vec<Command>) {
    let mut text = state
        .dataset
        .value(row, column)
        .map(|value| value.display())
        .unwrap_or_default();
    let response = ui.add(
        TextEdit::singleline(&mut text)
            .id_source(("cell", row, column))
            .desired_width(f32::INFINITY),
    );
    if response.changed() {
        commands.push(Command::SetCell {
            row,
            column: column.to_owned(),
            value: text,
        });
    }
}
