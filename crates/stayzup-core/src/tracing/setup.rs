//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize logging for StayzUp.
///
/// Reads `STAYZUP_LOG` for per-target levels, e.g.
/// `STAYZUP_LOG=stayzup_engine=debug,stayzup_storage=warn`.
/// Falls back to `stayzup=info` when unset or invalid. Safe to call repeatedly.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("STAYZUP_LOG")
            .unwrap_or_else(|_| EnvFilter::new("stayzup=info"));

        // Another subscriber may already be installed by the host application.
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
