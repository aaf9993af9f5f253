//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! Diagnostics go to stderr so stdout only carries the run's console lines.
//! `RUST_LOG` takes precedence over the level chosen on the command line.

use std::io;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt, util::TryInitError,
};

/// Install the global subscriber.
pub fn init_logging(level: LevelFilter) -> Result<(), TryInitError> {
    tracing_subscriber::registry()
        .with(build_env_filter(level))
        .with(
            fmt::layer()
                .with_writer(io::stderr)
                .with_target(false)
                .compact(),
        )
        .try_init()
}

/// Our crate logs at `level`; dependencies stay at warn.
fn build_env_filter(level: LevelFilter) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = level.to_string().to_lowercase();
        EnvFilter::new(format!("warn,data_insights={level}"))
    })
}
