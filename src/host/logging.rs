use tracing_subscriber::EnvFilter;

// MARK: init_logging
/// Installs the fmt subscriber. `log` records from the library and the loaded
/// module's host-side wrapper are forwarded to it. RUST_LOG overrides `level`.
pub fn init_logging(level: &str) {
    let default = format!("{level},random={level}");
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default));

    // A second call (e.g. from tests) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .try_init();
}
