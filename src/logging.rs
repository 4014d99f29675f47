use anyhow::Result;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Map the number of `-v` flags to a log level. Warnings only by default.
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Install a stderr subscriber scoped to this crate. Stdout carries the heatmap only.
pub fn enable_logging(verbosity: u8) -> Result<()> {
    let filter = EnvFilter::new(format!(
        "{}={}",
        env!("CARGO_PKG_NAME").replace('-', "_"),
        level_for(verbosity),
    ));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
}
