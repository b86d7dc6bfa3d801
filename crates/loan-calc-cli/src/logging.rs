use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter directive, e.g. `loan_calc_core=debug`.
pub const LOG_ENV: &str = "LOANCALC_LOG";

/// Install a stderr subscriber so stdout stays reserved for results.
pub fn init_tracing(verbose: bool) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
}
