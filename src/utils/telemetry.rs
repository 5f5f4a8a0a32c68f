use tracing_subscriber::{fmt, EnvFilter};

/// Installs the global fmt subscriber. `RUST_LOG` overrides the default `info` filter.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // A subscriber may already be installed (tests, embedding binaries).
    let _ = fmt().with_env_filter(filter).with_target(false).try_init();
}
