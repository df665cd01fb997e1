//! Series derivation
//!
//! Pure functions of the dataset and configuration, recomputed on every
//! render. Every column except `name` is one series; the pie mode
//! collapses each series into a single summed slice.

use egui::Color32;
use ge_core::{CellValue, Dataset, NAME_COLUMN};

use crate::plots::colors::series_color;

/// One plottable series: points are `[row index, value]`.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesData {
    pub name: String,
    pub color: Color32,
    pub points: Vec<[f64; 2]>,
}

/// One pie slice: a series summed over all rows.
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub name: String,
    pub total: f64,
    pub color: Color32,
}

/// All column names except `name`, in column order.
pub fn series_names(dataset: &Dataset) -> Vec<String> {
    dataset
        .columns()
        .into_iter()
        .filter(|column| column != NAME_COLUMN)
        .collect()
}

/// Per-row category labels, in row order.
pub fn category_labels(dataset: &Dataset) -> Vec<String> {
    dataset
        .rows()
        .iter()
        .map(|row| {
            row.get(NAME_COLUMN)
                .map(CellValue::display)
                .unwrap_or_default()
        })
        .collect()
}

/// Raw series values for the line and bar modes.
pub fn cartesian_series(dataset: &Dataset) -> Vec<SeriesData> {
    series_names(dataset)
        .into_iter()
        .enumerate()
        .map(|(index, name)| {
            let points = dataset
                .rows()
                .iter()
                .enumerate()
                .map(|(row, values)| {
                    let value = values.get(&name).map(CellValue::as_f64).unwrap_or(0.0);
                    [row as f64, value]
                })
                .collect();
            SeriesData {
                color: series_color(index),
                name,
                points,
            }
        })
        .collect()
}

/// Cumulative series values: every series shares one stack, so each point
/// carries the sum of itself and every series before it. Used by the
/// stacked area mode.
pub fn stacked_series(dataset: &Dataset) -> Vec<SeriesData> {
    let mut series = cartesian_series(dataset);
    for index in 1..series.len() {
        for point in 0..series[index].points.len() {
            let below = series[index - 1].points[point][1];
            series[index].points[point][1] += below;
        }
    }
    series
}

/// Per-series totals with their assigned colors. Non-numeric cells count
/// as zero; an empty dataset yields no slices.
pub fn pie_slices(dataset: &Dataset) -> Vec<PieSlice> {
    if dataset.is_empty() {
        return Vec::new();
    }
    series_names(dataset)
        .into_iter()
        .enumerate()
        .map(|(index, name)| {
            let total = dataset
                .rows()
                .iter()
                .map(|row| row.get(&name).map(CellValue::as_f64).unwrap_or(0.0))
                .sum();
            PieSlice {
                total,
                color: series_color(index),
                name,
            }
        })
        .collect()
}

/// Slice label text: the series name and its share of the grand total,
/// rounded to the nearest whole percent.
pub fn slice_label(slice: &PieSlice, grand_total: f64) -> String {
    let percent = if grand_total > 0.0 {
        (slice.total / grand_total * 100.0).round()
    } else {
        0.0
    };
    format!("{}: {}%", slice.name, percent)
}
