//! CSV Data Loader Module
//! Reads a CSV file into a string-typed Dataset using Polars.

use polars::prelude::*;
use std::io::{self, Cursor};
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::Dataset;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to load CSV: {0}")]
    Csv(#[from] PolarsError),
}

/// Handles CSV file loading and keeps the last loaded dataset.
pub struct DataLoader {
    dataset: Option<Dataset>,
}

impl Default for DataLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl DataLoader {
    pub fn new() -> Self {
        Self { dataset: None }
    }

    /// Load a CSV file. Every column is read as text; nulls become "".
    ///
    /// Blank lines are skipped. The first remaining line is the header.
    pub fn load_csv(&mut self, file_path: &Path) -> Result<&Dataset, LoaderError> {
        let bytes = std::fs::read(file_path).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                LoaderError::FileNotFound {
                    path: file_path.to_path_buf(),
                }
            } else {
                LoaderError::Io {
                    path: file_path.to_path_buf(),
                    source: e,
                }
            }
        })?;

        let content = strip_blank_lines(&bytes);

        // Polars rejects input without a header line
        let dataset = if content.is_empty() {
            tracing::debug!(path = %file_path.display(), "CSV file has no lines");
            Dataset::default()
        } else {
            // The header is read as a data row so repeated names reach
            // the dataset unchanged
            let df = CsvReadOptions::default()
                .with_has_header(false)
                .with_infer_schema_length(Some(0))
                .map_parse_options(|opts| opts.with_truncate_ragged_lines(true))
                .into_reader_with_file_handle(Cursor::new(content))
                .finish()?;
            Self::to_dataset(&df)?
        };

        tracing::debug!(
            path = %file_path.display(),
            rows = dataset.row_count(),
            columns = dataset.columns().len(),
            "Loaded CSV"
        );

        let dataset: &Dataset = self.dataset.insert(dataset);
        Ok(dataset)
    }

    /// Convert a header-less, string-typed DataFrame into a dataset whose
    /// first row supplies the column names.
    fn to_dataset(df: &DataFrame) -> Result<Dataset, LoaderError> {
        let mut rows: Vec<Vec<String>> = vec![Vec::with_capacity(df.width()); df.height()];
        for column in df.get_columns() {
            let values = column.as_materialized_series().str()?;
            for (row, value) in rows.iter_mut().zip(values) {
                row.push(value.unwrap_or_default().to_string());
            }
        }

        let mut rows = rows.into_iter();
        let header = rows.next().unwrap_or_default();
        Ok(Dataset::new(header, rows.collect()))
    }
}

/// Drop empty lines that sit outside quoted fields. Every kept line ends
/// with `\n`.
fn strip_blank_lines(bytes: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(bytes.len());
    let mut in_quotes = false;

    for line in bytes.split(|b| *b == b'\n') {
        if !in_quotes && (line.is_empty() || line == b"\r") {
            continue;
        }
        out.extend_from_slice(line);
        out.push(b'\n');

        let quotes = line.iter().filter(|b| **b == b'"').count();
        if quotes % 2 == 1 {
            in_quotes = !in_quotes;
        }
    }

    out
}
