//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::EnvFilter;
use veridex_core::config::ObservabilityConfig;

static INIT: Once = Once::new();

/// Initialize the tracing subscriber.
///
/// Respects the `VERIDEX_LOG` environment variable for filtering
/// (e.g. `VERIDEX_LOG=veridex_pipeline=debug,veridex_stance=trace`),
/// defaulting to `info`. Idempotent; repeat calls are no-ops.
pub fn init_tracing(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env("VERIDEX_LOG").unwrap_or_else(|_| EnvFilter::new("info"));

        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_file(true)
            .with_line_number(true);

        if config.log_json {
            builder.json().init();
        } else {
            builder.init();
        }
    });
}
