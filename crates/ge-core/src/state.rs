//! Application state
//!
//! Single owner of the dataset, the chart configuration, the transient
//! rename editor and the surfaced error message. Every mutation flows
//! through the named commands in [`crate::command`].

use tracing::{debug, warn};

use crate::config::ChartConfig;
use crate::dataset::Dataset;
use crate::rename::RenameState;

/// The main application state.
pub struct AppState {
    /// The editable dataset backing every chart mode.
    pub dataset: Dataset,

    /// Chart type and label configuration.
    pub chart: ChartConfig,

    /// Transient column-rename editor.
    pub rename: RenameState,

    /// User-visible, recoverable error. Cleared on the next export attempt.
    pub error_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            dataset: Dataset::seed(),
            chart: ChartConfig::default(),
            rename: RenameState::Idle,
            error_message: None,
        }
    }

    /// Begin editing a column header. An edit of a different column still
    /// in flight is committed first, the way a focus change would.
    pub fn start_rename(&mut self, column: &str) {
        if !self.rename.is_editing(column) {
            self.commit_rename();
            self.rename.start(column);
        }
    }

    /// Apply the pending rename when its guard passes; clears the editing
    /// state either way. A rename into an existing column is discarded.
    pub fn commit_rename(&mut self) {
        if let Some((old, new)) = self.rename.take_commit() {
            if self.dataset.rename_column(&old, &new) {
                debug!(from = %old, to = %new, "renamed column");
            } else {
                warn!(from = %old, to = %new, "discarded rename into existing column");
            }
        }
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error_message = Some(message.into());
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }
}
