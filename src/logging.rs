//! Logging initialization and configuration.
//!
//! All diagnostics go to stderr. Stdout is left untouched because the host
//! tool reads it as the hook's response channel.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when no log level is configured.
pub const DEFAULT_FILTER: &str = "moai_hooks=warn";

fn build_filter(level: Option<&str>) -> EnvFilter {
    match level {
        Some(level) if !level.is_empty() => {
            EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
        }
        _ => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
    }
}

/// Initialize the logging system.
///
/// `level` takes any `EnvFilter` directive (`debug`, `moai_hooks=trace`, ...).
/// When it is `None`, `RUST_LOG` is consulted and then [`DEFAULT_FILTER`].
///
/// # Panics
///
/// Panics if called more than once, or if another tracing subscriber
/// has already been set.
pub fn init(level: Option<&str>) {
    tracing_subscriber::registry()
        .with(build_filter(level))
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_writer(std::io::stderr),
        )
        .init();
}

/// Try to initialize the logging system.
///
/// Returns `Ok(())` if successful, or `Err` if logging has already been
/// initialized.
pub fn try_init(level: Option<&str>) -> Result<(), tracing_subscriber::util::TryInitError> {
    tracing_subscriber::registry()
        .with(build_filter(level))
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_writer(std::io::stderr),
        )
        .try_init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_init_idempotent() {
        let _ = try_init(Some("debug"));
        // Second call errors because a subscriber is already set
        let _ = try_init(None);
    }

    #[test]
    fn test_invalid_level_falls_back() {
        let filter = build_filter(Some("moai_hooks=loudest"));
        assert_eq!(filter.to_string(), DEFAULT_FILTER);
    }

    #[test]
    fn test_logging_works() {
        let _ = try_init(None);

        tracing::info!("test info message");
        tracing::warn!("test warn message");
    }
}
