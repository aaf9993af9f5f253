//! Command line arguments.

use std::path::PathBuf;

use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};

use crate::insights::InsightsConfig;

#[derive(Parser, Debug)]
#[command(
    name = "data-insights",
    version,
    about = "Summarize a CSV file into a plain-text insights report"
)]
pub struct Cli {
    /// CSV file to analyze [default: data/sales_data.csv next to the executable].
    #[arg(long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Where to write the text report [default: sample_output.txt next to the executable].
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Adjust log verbosity (-v for info, -vv for debug, -q to silence).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,
}

impl Cli {
    /// Run configuration, with unset paths taken from the defaults.
    pub fn config(&self) -> InsightsConfig {
        let defaults = InsightsConfig::default();
        InsightsConfig {
            input: self.input.clone().unwrap_or(defaults.input),
            output: self.output.clone().unwrap_or(defaults.output),
        }
    }
}
