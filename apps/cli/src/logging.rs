//! Logging configuration using tracing

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize logging to stderr.
///
/// Level is controlled by `GUARDRAIL_LOG` (default `warn`); `--debug`
/// sets it to `debug` before this runs.
pub fn init() {
    let env_filter =
        EnvFilter::try_from_env("GUARDRAIL_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_thread_ids(false),
        )
        .try_init();
}
