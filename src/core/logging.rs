//! Process-wide `tracing` subscriber.
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn,app=info,report=info,roster=info,notify=info";

/// Installs the stderr subscriber; `RUST_LOG` takes precedence over the default filter.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init()
        .ok();
}
