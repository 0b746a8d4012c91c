use tracing_subscriber::EnvFilter;

/// Install the global subscriber. Logs go to stderr so they never mix
/// with reply text on stdout.
pub fn init(level: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
