//! Statistics Calculator Module
//! Handles descriptive statistics for numeric columns and value frequencies
//! for categorical columns.

use statrs::statistics::Statistics;
use std::collections::HashMap;

use crate::data::{is_blank, parse_number, Dataset};

/// Statistics for a single numeric column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnStats {
    pub count: usize,
    pub average: f64,
    pub min: f64,
    pub max: f64,
}

/// Most frequent value of a column and how often it occurs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyResult {
    pub value: String,
    pub occurrences: usize,
}

/// Handles statistical calculations over a dataset.
pub struct StatsCalculator;

impl StatsCalculator {
    /// Compute descriptive statistics for an array of values.
    pub fn compute_descriptive_stats(values: &[f64]) -> Option<ColumnStats> {
        if values.is_empty() {
            return None;
        }

        let min = Statistics::min(values.iter());
        let max = Statistics::max(values.iter());
        let mut average = values.iter().sum::<f64>() / values.len() as f64;

        // Rounding in the sum can land an ulp outside the observed range.
        // An overflowed sum stays infinite.
        if average.is_finite() && !min.is_nan() && !max.is_nan() {
            average = average.max(min).min(max);
        }

        Some(ColumnStats {
            count: values.len(),
            average,
            min,
            max,
        })
    }

    /// Statistics over the parseable, non-empty cells of `column`.
    /// Cells that fail to parse are skipped.
    pub fn compute_column_stats(dataset: &Dataset, column: &str) -> Option<ColumnStats> {
        let values: Vec<f64> = dataset.column_values(column).filter_map(parse_number).collect();

        let stats = Self::compute_descriptive_stats(&values);
        match &stats {
            Some(s) => tracing::debug!(
                column,
                count = s.count,
                average = s.average,
                min = s.min,
                max = s.max,
                "Computed column statistics"
            ),
            None => tracing::debug!(column, "No numeric values in column"),
        }
        stats
    }

    /// Compute statistics for every listed column, leaving out columns
    /// without values.
    pub fn compute_all_stats(
        dataset: &Dataset,
        numeric_columns: &[String],
    ) -> HashMap<String, ColumnStats> {
        numeric_columns
            .iter()
            .filter_map(|column| {
                Self::compute_column_stats(dataset, column).map(|stats| (column.clone(), stats))
            })
            .collect()
    }

    /// Most frequent non-empty (trimmed) value in `column`.
    ///
    /// Among equally frequent values the one seen first in record order wins.
    pub fn most_frequent(dataset: &Dataset, column: &str) -> Option<FrequencyResult> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        let mut first_seen: Vec<&str> = Vec::new();

        for cell in dataset.column_values(column) {
            if is_blank(cell) {
                continue;
            }
            let value = cell.trim();
            let count = counts.entry(value).or_insert_with(|| {
                first_seen.push(value);
                0
            });
            *count += 1;
        }

        let mut best: Option<(&str, usize)> = None;
        for value in first_seen {
            let count = counts[value];
            if best.map_or(true, |(_, top)| count > top) {
                best = Some((value, count));
            }
        }

        best.map(|(value, occurrences)| FrequencyResult {
            value: value.to_string(),
            occurrences,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset(columns: &[&str], rows: &[&[&str]]) -> Dataset {
        Dataset::new(
            columns.iter().map(|c| c.to_string()).collect(),
            rows.iter()
                .map(|r| r.iter().map(|v| v.to_string()).collect())
                .collect(),
        )
    }

    fn sales() -> Dataset {
        dataset(
            &["region", "amount"],
            &[&["east", "10"], &["west", "20"], &["east", ""]],
        )
    }

    #[test]
    fn test_compute_column_stats_sales() {
        let stats = StatsCalculator::compute_column_stats(&sales(), "amount").unwrap();

        assert_eq!(stats.count, 2);
        assert!((stats.average - 15.0).abs() < 1e-12);
        assert_eq!(stats.min, 10.0);
        assert_eq!(stats.max, 20.0);
    }

    #[test]
    fn test_compute_column_stats_skips_unparseable() {
        let ds = dataset(&["x"], &[&["1"], &["oops"], &["3"], &[" "]]);
        let stats = StatsCalculator::compute_column_stats(&ds, "x").unwrap();

        assert_eq!(stats.count, 2);
        assert!((stats.average - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_compute_column_stats_all_empty() {
        let ds = dataset(&["x"], &[&[""], &["  "]]);
        assert_eq!(StatsCalculator::compute_column_stats(&ds, "x"), None);
    }

    #[test]
    fn test_average_stays_within_range() {
        let values = [0.1, 0.1, 0.1];
        let stats = StatsCalculator::compute_descriptive_stats(&values).unwrap();

        assert!(stats.min <= stats.average && stats.average <= stats.max);
    }

    #[test]
    fn test_average_is_sum_over_count() {
        let values = [99.12, 14.73, 12.5, 11.47, 58.74, 92.62, 7.67, 55.03];
        let stats = StatsCalculator::compute_descriptive_stats(&values).unwrap();

        assert_eq!(stats.average, values.iter().sum::<f64>() / 8.0);
        assert_eq!(format!("{:.2}", stats.average), "43.99");
    }

    #[test]
    fn test_average_overflow_is_infinite() {
        let stats = StatsCalculator::compute_descriptive_stats(&[1e308, 1e308]).unwrap();

        assert_eq!(stats.average, f64::INFINITY);
        assert_eq!(stats.max, 1e308);
    }

    #[test]
    fn test_average_of_opposite_infinities_is_nan() {
        let stats =
            StatsCalculator::compute_descriptive_stats(&[f64::INFINITY, f64::NEG_INFINITY]).unwrap();

        assert!(stats.average.is_nan());
        assert_eq!(stats.min, f64::NEG_INFINITY);
        assert_eq!(stats.max, f64::INFINITY);
    }

    #[test]
    fn test_compute_all_stats_omits_empty_columns() {
        let ds = dataset(&["a", "b"], &[&["1", ""], &["2", ""]]);
        let numeric = vec!["a".to_string(), "b".to_string()];
        let all = StatsCalculator::compute_all_stats(&ds, &numeric);

        assert_eq!(all.len(), 1);
        assert_eq!(all["a"].count, 2);
        assert!(!all.contains_key("b"));
    }

    #[test]
    fn test_most_frequent_sales() {
        let top = StatsCalculator::most_frequent(&sales(), "region").unwrap();
        assert_eq!(
            top,
            FrequencyResult {
                value: "east".to_string(),
                occurrences: 2
            }
        );
    }

    #[test]
    fn test_most_frequent_tie_goes_to_first_seen() {
        let ds = dataset(&["c"], &[&["b"], &["a"], &["a"], &["b"]]);
        let top = StatsCalculator::most_frequent(&ds, "c").unwrap();

        assert_eq!(top.value, "b");
        assert_eq!(top.occurrences, 2);
    }

    #[test]
    fn test_most_frequent_trims_values() {
        let ds = dataset(&["c"], &[&[" x"], &["x "], &["y"]]);
        let top = StatsCalculator::most_frequent(&ds, "c").unwrap();

        assert_eq!(top.value, "x");
        assert_eq!(top.occurrences, 2);
    }

    #[test]
    fn test_most_frequent_no_values() {
        let ds = dataset(&["c"], &[&[""], &[" "]]);
        assert_eq!(StatsCalculator::most_frequent(&ds, "c"), None);
    }
}
