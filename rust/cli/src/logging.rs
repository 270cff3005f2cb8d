//! Process-wide tracing setup for the `hulhe` binary.

/// Filter used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "warn,hulhe_engine=info,hulhe_cli=info";

/// Installs a fmt subscriber on stderr so stdout stays machine-readable.
///
/// Calling it twice is harmless; the second call leaves the first subscriber
/// in place.
pub fn init_logging() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::fmt;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}
