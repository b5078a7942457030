//! Structured logging.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::ObservabilityConfig;

/// Filter used when `RUST_LOG` is unset: the configured level everywhere,
/// plus the HTTP layer's request spans.
pub fn default_directives(config: &ObservabilityConfig) -> String {
    format!("{},tower_http=debug", config.log_level)
}

/// Install the global subscriber, writing to stderr so command output on
/// stdout stays machine-readable.
///
/// `RUST_LOG` wins over `config.log_level`. Calling this twice is harmless;
/// the second call leaves the first subscriber in place.
pub fn init_logging(config: &ObservabilityConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(config)));

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(config.with_target),
        )
        .try_init();

    if installed.is_ok() {
        tracing::debug!(log_level = %config.log_level, "Logging initialized");
    }
}
