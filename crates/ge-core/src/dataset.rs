//! Tabular dataset model
//!
//! A dataset is an ordered sequence of rows, each an insertion-ordered
//! mapping from column name to cell value. Every row carries the identical
//! column set, and the `name` column always holds the category label shown
//! on the X axis.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The protected category column present in every row.
pub const NAME_COLUMN: &str = "name";

/// A single cell: free text for the `name` column, numeric everywhere else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Text(String),
    Number(f64),
}

impl CellValue {
    /// Numeric view of the cell. Text parses as `f64`; anything
    /// unparseable counts as zero.
    pub fn as_f64(&self) -> f64 {
        match self {
            CellValue::Number(value) => *value,
            CellValue::Text(text) => text.trim().parse().unwrap_or(0.0),
        }
    }

    /// Text shown in the grid. Integral numbers drop the decimal point.
    pub fn display(&self) -> String {
        match self {
            CellValue::Text(text) => text.clone(),
            CellValue::Number(value) if value.fract() == 0.0 && value.is_finite() => {
                format!("{}", *value as i64)
            }
            CellValue::Number(value) => format!("{value}"),
        }
    }
}

/// One record: column name to value, in column order.
pub type Row = IndexMap<String, CellValue>;

/// Ordered collection of rows; row order is the X-axis category order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    rows: Vec<Row>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// The dataset every session starts from.
    pub fn seed() -> Self {
        let mut dataset = Dataset::new();
        for (name, series1, series2) in [
            ("Jan", 400.0, 240.0),
            ("Feb", 300.0, 139.0),
            ("Mar", 200.0, 980.0),
            ("Apr", 278.0, 390.0),
            ("May", 189.0, 480.0),
        ] {
            let mut row = Row::new();
            row.insert(NAME_COLUMN.to_owned(), CellValue::Text(name.to_owned()));
            row.insert("series1".to_owned(), CellValue::Number(series1));
            row.insert("series2".to_owned(), CellValue::Number(series2));
            dataset.rows.push(row);
        }
        dataset
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The ordered column set, derived from the first row. An empty dataset
    /// still reports the protected `name` column.
    pub fn columns(&self) -> Vec<String> {
        match self.rows.first() {
            Some(row) => row.keys().cloned().collect(),
            None => vec![NAME_COLUMN.to_owned()],
        }
    }

    pub fn value(&self, row: usize, column: &str) -> Option<&CellValue> {
        self.rows.get(row).and_then(|row| row.get(column))
    }

    /// Append a row with a synthesized label and zeroed series values.
    pub fn add_row(&mut self) {
        let label = format!("Row {}", self.rows.len() + 1);
        let mut row = Row::new();
        for column in self.columns() {
            let value = if column == NAME_COLUMN {
                CellValue::Text(label.clone())
            } else {
                CellValue::Number(0.0)
            };
            row.insert(column, value);
        }
        self.rows.push(row);
    }

    /// Remove the row at `index`; out of range is a no-op.
    pub fn delete_row(&mut self, index: usize) {
        if index < self.rows.len() {
            self.rows.remove(index);
        }
    }

    /// Append a generated `series{N}` column to every row, zero-filled.
    /// N starts at the current column count and is bumped past any name
    /// already in use, so the operation always succeeds.
    pub fn add_column(&mut self) -> String {
        let columns = self.columns();
        let mut n = columns.len();
        let mut name = format!("series{n}");
        while columns.iter().any(|column| *column == name) {
            n += 1;
            name = format!("series{n}");
        }
        for row in &mut self.rows {
            row.insert(name.clone(), CellValue::Number(0.0));
        }
        name
    }

    /// Remove a column from every row. The `name` column and unknown
    /// columns are left alone.
    pub fn delete_column(&mut self, name: &str) {
        if name == NAME_COLUMN {
            return;
        }
        for row in &mut self.rows {
            row.shift_remove(name);
        }
    }

    /// Apply a committed rename to every row, keeping the column position
    /// and per-row values. Returns `false` (dataset untouched) when `old`
    /// is unknown or `new` would collide with another column.
    pub fn rename_column(&mut self, old: &str, new: &str) -> bool {
        let columns = self.columns();
        if !columns.iter().any(|column| column == old) {
            return false;
        }
        if columns.iter().any(|column| column == new && column != old) {
            return false;
        }
        for row in &mut self.rows {
            *row = row
                .iter()
                .map(|(key, value)| {
                    let key = if key == old { new.to_owned() } else { key.clone() };
                    (key, value.clone())
                })
                .collect();
        }
        true
    }

    /// Set the value at (row, column). The `name` column stores the raw
    /// string verbatim; every other column coerces to a number, falling
    /// back to zero when the input does not parse. Unknown rows or columns
    /// are a no-op.
    pub fn set_cell(&mut self, row: usize, column: &str, raw: &str) {
        let Some(row) = self.rows.get_mut(row) else {
            return;
        };
        let Some(cell) = row.get_mut(column) else {
            return;
        };
        *cell = if column == NAME_COLUMN {
            CellValue::Text(raw.to_owned())
        } else {
            CellValue::Number(raw.trim().parse().unwrap_or(0.0))
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_shape() {
        let dataset = Dataset::seed();
        assert_eq!(dataset.row_count(), 5);
        assert_eq!(dataset.columns(), vec!["name", "series1", "series2"]);
        assert_eq!(
            dataset.value(0, NAME_COLUMN),
            Some(&CellValue::Text("Jan".to_owned()))
        );
        assert_eq!(dataset.value(2, "series2"), Some(&CellValue::Number(980.0)));
    }

    #[test]
    fn test_add_row_appends_defaults() {
        let mut dataset = Dataset::seed();
        dataset.add_row();
        assert_eq!(dataset.row_count(), 6);
        assert_eq!(
            dataset.value(5, NAME_COLUMN),
            Some(&CellValue::Text("Row 6".to_owned()))
        );
        assert_eq!(dataset.value(5, "series1"), Some(&CellValue::Number(0.0)));
        assert_eq!(dataset.value(5, "series2"), Some(&CellValue::Number(0.0)));
    }

    #[test]
    fn test_add_row_on_empty_dataset() {
        let mut dataset = Dataset::new();
        dataset.add_row();
        assert_eq!(dataset.columns(), vec!["name"]);
        assert_eq!(
            dataset.value(0, NAME_COLUMN),
            Some(&CellValue::Text("Row 1".to_owned()))
        );
    }

    #[test]
    fn test_delete_row_keeps_order() {
        let mut dataset = Dataset::seed();
        dataset.delete_row(1);
        assert_eq!(dataset.row_count(), 4);
        let labels: Vec<String> = dataset
            .rows()
            .iter()
            .map(|row| row[NAME_COLUMN].display())
            .collect();
        assert_eq!(labels, vec!["Jan", "Mar", "Apr", "May"]);
    }

    #[test]
    fn test_delete_row_out_of_range_is_noop() {
        let mut dataset = Dataset::seed();
        let before = dataset.clone();
        dataset.delete_row(99);
        assert_eq!(dataset, before);
    }

    #[test]
    fn test_add_column_uniform() {
        let mut dataset = Dataset::seed();
        let name = dataset.add_column();
        assert_eq!(name, "series3");
        for row in dataset.rows() {
            assert_eq!(row.len(), 4);
            assert_eq!(row["series3"], CellValue::Number(0.0));
        }
        assert_eq!(dataset.columns(), vec!["name", "series1", "series2", "series3"]);
    }

    #[test]
    fn test_add_column_skips_taken_names() {
        let mut dataset = Dataset::seed();
        assert!(dataset.rename_column("series2", "series3"));
        let name = dataset.add_column();
        assert_eq!(name, "series4");
        assert_eq!(dataset.columns(), vec!["name", "series1", "series3", "series4"]);
    }

    #[test]
    fn test_delete_column_everywhere() {
        let mut dataset = Dataset::seed();
        dataset.delete_column("series1");
        assert_eq!(dataset.row_count(), 5);
        for row in dataset.rows() {
            assert!(!row.contains_key("series1"));
            assert_eq!(row.len(), 2);
        }
    }

    #[test]
    fn test_delete_name_column_is_noop() {
        let mut dataset = Dataset::seed();
        let before = dataset.clone();
        dataset.delete_column(NAME_COLUMN);
        assert_eq!(dataset, before);
    }

    #[test]
    fn test_delete_unknown_column_is_noop() {
        let mut dataset = Dataset::seed();
        let before = dataset.clone();
        dataset.delete_column("ghost");
        assert_eq!(dataset, before);
    }

    #[test]
    fn test_rename_column_preserves_values_and_order() {
        let mut dataset = Dataset::seed();
        assert!(dataset.rename_column("series1", "revenue"));
        assert_eq!(dataset.columns(), vec!["name", "revenue", "series2"]);
        assert_eq!(dataset.value(0, "revenue"), Some(&CellValue::Number(400.0)));
        assert_eq!(dataset.value(4, "revenue"), Some(&CellValue::Number(189.0)));
        assert_eq!(dataset.value(0, "series2"), Some(&CellValue::Number(240.0)));
    }

    #[test]
    fn test_rename_into_existing_column_is_rejected() {
        let mut dataset = Dataset::seed();
        let before = dataset.clone();
        assert!(!dataset.rename_column("series1", "series2"));
        assert_eq!(dataset, before);
    }

    #[test]
    fn test_rename_unknown_column_is_rejected() {
        let mut dataset = Dataset::seed();
        let before = dataset.clone();
        assert!(!dataset.rename_column("ghost", "anything"));
        assert_eq!(dataset, before);
    }

    #[test]
    fn test_set_cell_name_stores_verbatim() {
        let mut dataset = Dataset::seed();
        dataset.set_cell(0, NAME_COLUMN, "  January  ");
        assert_eq!(
            dataset.value(0, NAME_COLUMN),
            Some(&CellValue::Text("  January  ".to_owned()))
        );
    }

    #[test]
    fn test_set_cell_parses_numbers() {
        let mut dataset = Dataset::seed();
        dataset.set_cell(0, "series1", "12.5");
        assert_eq!(dataset.value(0, "series1"), Some(&CellValue::Number(12.5)));
    }

    #[test]
    fn test_set_cell_coerces_garbage_to_zero() {
        let mut dataset = Dataset::seed();
        dataset.set_cell(0, "series1", "abc");
        assert_eq!(dataset.value(0, "series1"), Some(&CellValue::Number(0.0)));
    }

    #[test]
    fn test_set_cell_out_of_range_is_noop() {
        let mut dataset = Dataset::seed();
        let before = dataset.clone();
        dataset.set_cell(42, "series1", "7");
        dataset.set_cell(0, "ghost", "7");
        assert_eq!(dataset, before);
    }

    #[test]
    fn test_cell_value_coercion() {
        assert_eq!(CellValue::Number(3.5).as_f64(), 3.5);
        assert_eq!(CellValue::Text("42".to_owned()).as_f64(), 42.0);
        assert_eq!(CellValue::Text("Jan".to_owned()).as_f64(), 0.0);
    }

    #[test]
    fn test_cell_value_display() {
        assert_eq!(CellValue::Number(400.0).display(), "400");
        assert_eq!(CellValue::Number(12.5).display(), "12.5");
        assert_eq!(CellValue::Text("Feb".to_owned()).display(), "Feb");
    }
}
