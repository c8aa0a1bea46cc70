use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable overriding the log filter (e.g. `MCMIGRATE_LOG=mcmigrate_gradle=trace`).
pub const LOG_ENV: &str = "MCMIGRATE_LOG";

/// Installs the stderr log subscriber.
///
/// Stdout stays reserved for command output so `--format json` remains parseable.
/// Calling this more than once is harmless.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
    // fails only when a global subscriber is already set, which the first call owns
    if let Err(e) = installed {
        tracing::debug!("logging already initialised: {e}");
    }
}
