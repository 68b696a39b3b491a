use std::io;

use tracing_subscriber::{EnvFilter, fmt};

/// Log level implied by the number of `-v` flags.
pub fn verbosity_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Initialize logging to stderr so diagnostics never mix with the report.
///
/// `RUST_LOG` takes precedence; otherwise the level follows `--verbose`.
pub fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity_level(verbose)));

    // A subscriber may already be installed when embedded in tests
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}
