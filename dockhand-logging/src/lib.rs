use std::io;

use tracing_subscriber::EnvFilter;

/// Initializes the global tracing subscriber.
///
/// The filter comes from `DOCKHAND_LOG` (falling back to `warn`), with
/// `--debug` raising the fallback to `debug`. Diagnostics go to stderr so
/// stdout stays reserved for command output.
pub fn init_subscriber(debug: bool) {
    let fallback = if debug { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_env("DOCKHAND_LOG").unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();
}
