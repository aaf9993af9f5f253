//! Insights Pipeline Module
//! Loads the CSV, runs every analysis step and writes the report.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::data::{DataLoader, DataProcessor, Dataset, LoaderError};
use crate::report::{InsightReport, ReportError, ReportGenerator};
use crate::stats::StatsCalculator;

/// Default input location, relative to the program's directory.
pub const DEFAULT_INPUT_PATH: &str = "data/sales_data.csv";
/// Default report location, relative to the program's directory.
pub const DEFAULT_OUTPUT_PATH: &str = "sample_output.txt";

#[derive(Error, Debug)]
pub enum InsightsError {
    #[error(transparent)]
    Load(#[from] LoaderError),
    #[error(transparent)]
    Report(#[from] ReportError),
    #[error("Failed to write console output: {0}")]
    Console(#[from] io::Error),
}

/// Input and output locations for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsightsConfig {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl Default for InsightsConfig {
    /// Default paths sit next to the running executable, so the result does
    /// not depend on the working directory.
    fn default() -> Self {
        let base = program_dir();
        Self {
            input: base.join(DEFAULT_INPUT_PATH),
            output: base.join(DEFAULT_OUTPUT_PATH),
        }
    }
}

/// Directory holding the running executable. Falls back to the working
/// directory when it cannot be determined.
pub fn program_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_default()
}

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The input file does not exist; nothing was written.
    InputMissing { path: PathBuf },
    /// The report was written.
    Written { rows: usize, output: PathBuf },
}

/// Run every analysis step over a loaded dataset.
pub fn analyze(dataset: &Dataset, source_file: &str) -> InsightReport {
    let numeric_columns = DataProcessor::numeric_columns(dataset);
    tracing::info!(columns = ?numeric_columns, "Detected numeric columns");

    let stats = StatsCalculator::compute_all_stats(dataset, &numeric_columns);

    let categorical_column =
        DataProcessor::first_categorical_column(dataset, &numeric_columns).map(str::to_string);
    let top_value = categorical_column
        .as_deref()
        .and_then(|column| StatsCalculator::most_frequent(dataset, column));
    if let Some(column) = &categorical_column {
        tracing::info!(
            column = %column,
            top = ?top_value.as_ref().map(|t| &t.value),
            "Summarized categorical column"
        );
    }

    let missing = DataProcessor::missing_values(dataset);
    tracing::info!(columns = missing.len(), "Counted missing values");

    InsightReport {
        source_file: source_file.to_string(),
        row_count: dataset.row_count(),
        numeric_columns,
        stats,
        categorical_column,
        top_value,
        missing,
    }
}

/// Run the whole pipeline, printing progress lines to `console`.
///
/// A missing input file is reported on the console and ends the run
/// without error.
pub fn run<W: Write>(config: &InsightsConfig, console: &mut W) -> Result<RunOutcome, InsightsError> {
    if !config.input.exists() {
        writeln!(console, "File not found: {}", config.input.display())?;
        tracing::warn!(path = %config.input.display(), "Input file missing, no report produced");
        return Ok(RunOutcome::InputMissing {
            path: config.input.clone(),
        });
    }

    let mut loader = DataLoader::new();
    let dataset = loader.load_csv(&config.input)?;
    writeln!(console, "Loaded {} rows.", dataset.row_count())?;

    let report = analyze(dataset, &source_file_name(&config.input));
    ReportGenerator::write(&report, &config.output)?;
    writeln!(console, "Report written to: {}", config.output.display())?;

    Ok(RunOutcome::Written {
        rows: report.row_count,
        output: config.output.clone(),
    })
}

fn source_file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
