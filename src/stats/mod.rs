//! Stats module - Descriptive statistics and value frequencies

mod calculator;

pub use calculator::{ColumnStats, FrequencyResult, StatsCalculator};
