//! crates/cli/src/logs.rs
//!
//! Tracing bootstrap for the command-line front end. Diagnostics go to
//! standard error so digest output on standard output stays clean enough
//! to pipe into `sha*sum`-style consumers.

use tracing_subscriber::EnvFilter;

/// Installs a process-wide tracing subscriber filtered by `-v` count.
///
/// `RUST_LOG` takes precedence when set, so operators can scope targets
/// the usual way (`RUST_LOG=cli=trace hashkit ...`). Without it the
/// verbosity flag maps to `warn`, `info`, `debug`, and `trace`.
///
/// Repeated calls are tolerated: once a global subscriber exists, later
/// invocations (library callers running [`crate::run`] more than once in
/// the same process) leave it in place.
pub(crate) fn init(verbosity: u8) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let fallback = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
