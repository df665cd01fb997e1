//! Core state for the graph editor
//!
//! This crate provides the dataset model, the editor commands and the
//! chart configuration. It is pure state management with no UI
//! dependencies.

pub mod command;
pub mod config;
pub mod dataset;
pub mod rename;
pub mod state;

// Re-export commonly used types
pub use command::Command;
pub use config::{ChartConfig, ChartType};
pub use dataset::{CellValue, Dataset, Row, NAME_COLUMN};
pub use rename::RenameState;
pub use state::AppState;
