//! Chart views for the graph editor
//!
//! Series derivation, the egui chart renderers and the image export
//! boundary. Everything here is a pure function of the core state; the
//! external charting machinery (`egui_plot`, the painter) does the actual
//! drawing.

pub mod export;
pub mod plots;
pub mod series;

pub use export::{export_file_name, ExportError};
pub use plots::ChartView;
pub use series::{
    cartesian_series, category_labels, pie_slices, series_names, slice_label, stacked_series,
    PieSlice, SeriesData,
};
