use tracing_subscriber::{EnvFilter, fmt};

/// Initializes structured logging on stderr using `tracing-subscriber`.
///
/// Filtering follows `RUST_LOG` and defaults to `info`. Identifiers go to
/// stdout, so logs never mix with them.
pub fn init_tracing() {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
