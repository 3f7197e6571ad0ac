//! Tracing setup for binaries and hosts embedding `streamgraph`.
//!
//! Library code only emits `tracing` events; installing a subscriber is left
//! to the application. `init_default_tracing` is a convenience for the
//! bundled CLI and quick experiments.

/// Default filter when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "streamgraph=info";

/// Installs a compact stderr subscriber when the `telemetry` feature is enabled.
///
/// Returns `true` when initialization succeeds, `false` when the feature is
/// disabled or a global subscriber is already set.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_FILTER));

        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
