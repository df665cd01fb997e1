//! Editor commands
//!
//! Discrete, named mutations over [`AppState`]. The UI translates widget
//! interactions into commands and applies them at the end of the frame,
//! so each mutation stays independently testable.

use tracing::debug;

use crate::config::ChartType;
use crate::state::AppState;

/// A single mutation of the application state.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    AddRow,
    DeleteRow(usize),
    AddColumn,
    DeleteColumn(String),
    StartRename(String),
    UpdateRenameBuffer(String),
    CommitRename,
    CancelRename,
    SetCell {
        row: usize,
        column: String,
        value: String,
    },
    SetChartType(ChartType),
    SetTitle(String),
    SetXLabel(String),
    SetYLabel(String),
    ClearError,
}

impl AppState {
    /// Apply one command, running it to completion.
    pub fn apply(&mut self, command: Command) {
        debug!(?command, "applying command");
        match command {
            Command::AddRow => self.dataset.add_row(),
            Command::DeleteRow(index) => self.dataset.delete_row(index),
            Command::AddColumn => {
                self.dataset.add_column();
            }
            Command::DeleteColumn(name) => self.dataset.delete_column(&name),
            Command::StartRename(column) => self.start_rename(&column),
            Command::UpdateRenameBuffer(text) => self.rename.update_buffer(&text),
            Command::CommitRename => self.commit_rename(),
            Command::CancelRename => self.rename.cancel(),
            Command::SetCell { row, column, value } => {
                self.dataset.set_cell(row, &column, &value)
            }
            Command::SetChartType(chart_type) => self.chart.chart_type = chart_type,
            Command::SetTitle(title) => self.chart.title = title,
            Command::SetXLabel(label) => self.chart.x_label = label,
            Command::SetYLabel(label) => self.chart.y_label = label,
            Command::ClearError => self.clear_error(),
        }
    }
}
