use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (e.g. "debug").
const LOG_ENV: &str = "APPOINTMENTS_LOG";

/// Send diagnostics to stderr so they never mix with rendered output.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
