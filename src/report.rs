//! Text Report Generator Module
//! Renders the computed insights into a fixed-layout plain-text report.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::data::MissingCount;
use crate::stats::{ColumnStats, FrequencyResult};

/// Width of the divider lines framing the report.
const DIVIDER_WIDTH: usize = 32;

const TITLE: &str = "DATA INSIGHTS REPORT";

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Failed to write report {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Everything the report needs, computed ahead of rendering.
#[derive(Debug, Clone, Default)]
pub struct InsightReport {
    pub source_file: String,
    pub row_count: usize,
    pub numeric_columns: Vec<String>,
    pub stats: HashMap<String, ColumnStats>,
    pub categorical_column: Option<String>,
    pub top_value: Option<FrequencyResult>,
    pub missing: Vec<MissingCount>,
}

/// Report generator for insight summaries
pub struct ReportGenerator;

impl ReportGenerator {
    /// Render the report. Lines are joined with `\n` and the text carries
    /// no trailing newline.
    pub fn render(report: &InsightReport) -> String {
        let divider = "-".repeat(DIVIDER_WIDTH);
        let mut lines: Vec<String> = Vec::new();

        lines.push(TITLE.to_string());
        lines.push(divider.clone());
        lines.push(format!("Source file: {}", report.source_file));
        lines.push(format!("Total rows: {}", report.row_count));
        lines.push(String::new());

        if report.numeric_columns.is_empty() {
            lines.push("No numeric columns detected.".to_string());
        } else {
            lines.push("Numeric columns summary:".to_string());
            for column in &report.numeric_columns {
                let Some(s) = report.stats.get(column) else {
                    continue;
                };
                lines.push(format!(
                    "  {}: avg={}, min={}, max={} (n={})",
                    column,
                    format_average(s.average),
                    format_float(s.min),
                    format_float(s.max),
                    s.count
                ));
            }
        }
        lines.push(String::new());

        match (&report.categorical_column, &report.top_value) {
            (Some(column), Some(top)) => {
                lines.push(format!(
                    "Most frequent value in '{}': {} ({} occurrences)",
                    column, top.value, top.occurrences
                ));
                lines.push(String::new());
            }
            (Some(column), None) => {
                lines.push(format!(
                    "No frequent value computed for '{}' (no non-empty values).",
                    column
                ));
                lines.push(String::new());
            }
            _ => {}
        }

        if !report.missing.is_empty() {
            lines.push("Missing values:".to_string());
            for m in &report.missing {
                lines.push(format!("  {}: {}", m.column, m.count));
            }
            lines.push(String::new());
        }

        lines.push("Notes:".to_string());
        if !report.numeric_columns.is_empty() {
            lines.push("- Numeric spread suggests basic variation present.".to_string());
        }
        if let (Some(column), Some(top)) = (&report.categorical_column, &report.top_value) {
            lines.push(format!("- '{}' has a dominant category: {}.", column, top.value));
        }
        if report.missing.is_empty() {
            lines.push("- No missing values detected.".to_string());
        }
        lines.push(divider);

        lines.join("\n")
    }

    /// Render and write the report in a single call.
    pub fn write(report: &InsightReport, output_path: &Path) -> Result<(), ReportError> {
        let text = Self::render(report);
        fs::write(output_path, text).map_err(|source| ReportError::Write {
            path: output_path.to_path_buf(),
            source,
        })?;

        tracing::debug!(path = %output_path.display(), "Report written");
        Ok(())
    }
}

/// Two-decimal form of an average; non-finite values print as `nan`,
/// `inf` or `-inf`.
pub fn format_average(value: f64) -> String {
    if value.is_finite() {
        format!("{:.2}", value)
    } else {
        format_float(value)
    }
}

/// Shortest round-trip form of a float, always with a fractional part or
/// an exponent: `10.0`, `0.5`, `1e+16`, `1.5e-05`, `inf`, `nan`.
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let repr = format!("{:?}", value);
    match repr.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => repr,
    }
}
