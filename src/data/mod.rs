//! Data module - CSV loading and column scans

mod dataset;
mod loader;
mod processor;

pub use dataset::Dataset;
pub use loader::{DataLoader, LoaderError};
pub use processor::{is_blank, parse_number, DataProcessor, MissingCount};
