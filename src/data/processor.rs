//! Data Processor Module
//! Column classification and per-column cell scans.

use super::Dataset;

/// A cell counts as empty when only whitespace remains after trimming.
pub fn is_blank(cell: &str) -> bool {
    cell.trim().is_empty()
}

/// Parse a trimmed, non-empty cell as a float.
pub fn parse_number(cell: &str) -> Option<f64> {
    let cell = cell.trim();
    if cell.is_empty() {
        return None;
    }
    cell.parse::<f64>().ok()
}

/// Number of empty cells in one column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingCount {
    pub column: String,
    pub count: usize,
}

/// Handles column-level scans over a dataset.
pub struct DataProcessor;

impl DataProcessor {
    /// Columns whose non-empty cells all parse as numbers, in header order.
    ///
    /// Columns with no values at all count as numeric. A dataset with no
    /// records has no numeric columns.
    pub fn numeric_columns(dataset: &Dataset) -> Vec<String> {
        if dataset.is_empty() {
            return Vec::new();
        }

        dataset
            .columns()
            .iter()
            .filter(|column| {
                dataset
                    .column_values(column)
                    .filter(|cell| !is_blank(cell))
                    .all(|cell| parse_number(cell).is_some())
            })
            .cloned()
            .collect()
    }

    /// Empty-cell counts per column in header order. Columns without
    /// empty cells are left out.
    pub fn missing_values(dataset: &Dataset) -> Vec<MissingCount> {
        dataset
            .columns()
            .iter()
            .filter_map(|column| {
                let count = dataset
                    .column_values(column)
                    .filter(|cell| is_blank(cell))
                    .count();
                (count > 0).then(|| MissingCount {
                    column: column.clone(),
                    count,
                })
            })
            .collect()
    }

    /// First column, in header order, that is not numeric.
    pub fn first_categorical_column<'a>(
        dataset: &'a Dataset,
        numeric_columns: &[String],
    ) -> Option<&'a str> {
        if dataset.is_empty() {
            return None;
        }

        dataset
            .columns()
            .iter()
            .find(|column| !numeric_columns.contains(column))
            .map(String::as_str)
    }
}
