//! Opt-in tracing setup for hosts embedding `dashboard-charts`.
//!
//! The crate only emits `tracing` events. A host installs its own
//! subscriber, or enables the `telemetry` feature and calls one of the
//! helpers below.

/// Filter used when `RUST_LOG` is unset: crate events at `debug`, the rest at `info`.
pub const DEFAULT_FILTER: &str = "info,dashboard_charts=debug";

/// Installs a compact `fmt` subscriber filtered by `RUST_LOG`, falling back
/// to [`DEFAULT_FILTER`].
///
/// Returns `false` when the `telemetry` feature is off or a global
/// subscriber is already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_fallback(DEFAULT_FILTER)
}

/// Same as [`init_default_tracing`] with a caller-chosen fallback filter.
#[must_use]
pub fn init_tracing_with_fallback(fallback: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(fallback))
            .unwrap_or_else(|_| EnvFilter::new("info"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok()
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback;
        false
    }
}
