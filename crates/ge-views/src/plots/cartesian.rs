//! Cartesian chart modes: line, bar, stacked bar and stacked area

use egui::Ui;
use egui_plot::{Bar, BarChart, Legend, Line, Plot, PlotPoints};
use ge_core::{ChartConfig, ChartType, Dataset};

use crate::series::{cartesian_series, category_labels, stacked_series};

const LINE_WIDTH: f32 = 2.0;
/// Fraction of a category slot covered by a bar group.
const GROUP_WIDTH: f64 = 0.8;

pub(crate) fn show(ui: &mut Ui, dataset: &Dataset, config: &ChartConfig) {
    let axis_labels = category_labels(dataset);
    let hover_labels = axis_labels.clone();

    let plot = Plot::new("chart_plot")
        .legend(Legend::default())
        .show_grid(true)
        .x_axis_label(&config.x_label)
        .y_axis_label(&config.y_label)
        .x_axis_formatter(move |x, _max_chars, _range| category_tick(&axis_labels, x))
        .label_formatter(move |name, point| {
            let category = category_tick(&hover_labels, point.x);
            if name.is_empty() {
                format!("{category}\n{:.1}", point.y)
            } else {
                format!("{name}\n{category}: {:.1}", point.y)
            }
        });

    let chart_type = config.chart_type;
    plot.show(ui, |plot_ui| match chart_type {
        ChartType::Line => {
            for series in cartesian_series(dataset) {
                plot_ui.line(
                    Line::new(PlotPoints::new(series.points))
                        .color(series.color)
                        .width(LINE_WIDTH)
                        .name(series.name),
                );
            }
        }
        ChartType::Bar => {
            let series = cartesian_series(dataset);
            let count = series.len().max(1);
            let bar_width = GROUP_WIDTH / count as f64;
            for (index, series) in series.iter().enumerate() {
                let offset = (index as f64 + 0.5) * bar_width - GROUP_WIDTH / 2.0;
                let bars: Vec<Bar> = series
                    .points
                    .iter()
                    .map(|point| Bar::new(point[0] + offset, point[1]).width(bar_width * 0.9))
                    .collect();
                plot_ui.bar_chart(BarChart::new(bars).color(series.color).name(&series.name));
            }
        }
        ChartType::StackedBar => {
            let mut charts: Vec<BarChart> = Vec::new();
            for series in cartesian_series(dataset) {
                let bars: Vec<Bar> = series
                    .points
                    .iter()
                    .map(|point| Bar::new(point[0], point[1]).width(GROUP_WIDTH * 0.9))
                    .collect();
                let chart = {
                    let below: Vec<&BarChart> = charts.iter().collect();
                    BarChart::new(bars)
                        .color(series.color)
                        .name(&series.name)
                        .stack_on(&below)
                };
                charts.push(chart);
            }
            for chart in charts {
                plot_ui.bar_chart(chart);
            }
        }
        ChartType::Area => {
            // Cumulative values, drawn topmost first so every fill stays
            // visible under the ones above it.
            for series in stacked_series(dataset).into_iter().rev() {
                plot_ui.line(
                    Line::new(PlotPoints::new(series.points))
                        .color(series.color)
                        .width(LINE_WIDTH)
                        .fill(0.0)
                        .name(series.name),
                );
            }
        }
        // The pie mode never reaches the cartesian path.
        ChartType::Pie => {}
    });
}

/// Axis tick text: the category label at integer positions, nothing
/// between them.
fn category_tick(labels: &[String], x: f64) -> String {
    let rounded = x.round();
    if (x - rounded).abs() > 1e-6 || rounded < 0.0 {
        return String::new();
    }
    labels.get(rounded as usize).cloned().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_ticks_only_on_integers() {
        let labels = vec!["Jan".to_owned(), "Feb".to_owned()];
        assert_eq!(category_tick(&labels, 0.0), "Jan");
        assert_eq!(category_tick(&labels, 1.0), "Feb");
        assert_eq!(category_tick(&labels, 0.5), "");
        assert_eq!(category_tick(&labels, -1.0), "");
        assert_eq!(category_tick(&labels, 7.0), "");
    }
}
