//! Data Insights - CSV descriptive statistics and plain-text reporting
//!
//! Loads a CSV file, classifies its columns, computes per-column statistics,
//! missing-value counts and the dominant value of the first categorical
//! column, then writes a fixed-layout text report.
//!
//! ```ignore
//! use data_insights::{run, InsightsConfig};
//!
//! let outcome = run(&InsightsConfig::default(), &mut std::io::stdout())?;
//! ```

pub mod cli;
pub mod data;
pub mod insights;
pub mod logging;
pub mod report;
pub mod stats;

pub use data::{DataLoader, DataProcessor, Dataset, LoaderError, MissingCount};
pub use insights::{analyze, run, InsightsConfig, InsightsError, RunOutcome};
pub use report::{format_average, format_float, InsightReport, ReportError, ReportGenerator};
pub use stats::{ColumnStats, FrequencyResult, StatsCalculator};
