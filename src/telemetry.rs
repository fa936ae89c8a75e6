//! Opt-in log output for hosts embedding `chart-gesture`.
//!
//! The crate only emits `tracing` events. Gesture transitions log at `debug`,
//! per-event detail (hover lookups, drag deltas) at `trace`, and dropped
//! input at `warn`. Hosts with their own subscriber need nothing from here.

/// Directives used when `RUST_LOG` is unset: warnings from everything,
/// gesture transitions from this crate.
pub const DEFAULT_TRACING_FILTER: &str = "warn,chart_gesture=debug";

/// Installs a compact global subscriber filtered by `RUST_LOG`, falling back
/// to [`DEFAULT_TRACING_FILTER`].
///
/// Returns `false` without the `telemetry` feature or when the host already
/// installed a global subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_filter(DEFAULT_TRACING_FILTER)
}

/// Like [`init_default_tracing`] with caller-chosen fallback directives,
/// e.g. `"chart_gesture=trace"` to see every hover lookup.
#[must_use]
pub fn init_tracing_with_filter(fallback_directives: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(fallback_directives))
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_TRACING_FILTER));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_thread_names(true)
            .compact()
            .try_init()
            .is_ok()
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_directives;
        false
    }
}

#[cfg(test)]
mod tests {
    use super::init_tracing_with_filter;

    #[cfg(not(feature = "telemetry"))]
    #[test]
    fn init_is_a_no_op_without_feature() {
        assert!(!super::init_default_tracing());
        assert!(!init_tracing_with_filter("chart_gesture=trace"));
    }

    #[cfg(feature = "telemetry")]
    #[test]
    fn second_init_reports_existing_subscriber() {
        let _ = init_tracing_with_filter("not a [valid filter");
        assert!(!init_tracing_with_filter("chart_gesture=trace"));
    }
}
