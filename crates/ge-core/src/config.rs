//! Chart configuration
//!
//! The selected chart type plus the display-only label texts. Labels carry
//! no relationship to the dataset.

use serde::{Deserialize, Serialize};

/// The five mutually exclusive rendering modes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChartType {
    #[default]
    Line,
    Bar,
    StackedBar,
    Area,
    Pie,
}

impl ChartType {
    pub const ALL: [ChartType; 5] = [
        ChartType::Line,
        ChartType::Bar,
        ChartType::StackedBar,
        ChartType::Area,
        ChartType::Pie,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ChartType::Line => "Line",
            ChartType::Bar => "Bar",
            ChartType::StackedBar => "Stacked Bar",
            ChartType::Area => "Area",
            ChartType::Pie => "Pie",
        }
    }
}

/// Chart type selection and label texts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    pub chart_type: ChartType,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            chart_type: ChartType::Line,
            title: "Chart Title".to_owned(),
            x_label: "X Axis".to_owned(),
            y_label: "Y Axis".to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ChartConfig::default();
        assert_eq!(config.chart_type, ChartType::Line);
        assert_eq!(config.title, "Chart Title");
        assert_eq!(config.x_label, "X Axis");
        assert_eq!(config.y_label, "Y Axis");
    }

    #[test]
    fn test_chart_type_tags() {
        assert_eq!(
            serde_json::to_string(&ChartType::StackedBar).unwrap(),
            "\"stackedBar\""
        );
        assert_eq!(
            serde_json::from_str::<ChartType>("\"pie\"").unwrap(),
            ChartType::Pie
        );
    }

    #[test]
    fn test_all_lists_every_mode() {
        assert_eq!(ChartType::ALL.len(), 5);
        assert_eq!(ChartType::StackedBar.label(), "Stacked Bar");
    }
}
