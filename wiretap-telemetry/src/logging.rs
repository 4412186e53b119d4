//! ## wiretap-telemetry::logging
//! **Process-wide `tracing` subscriber**
//!
//! Traffic records reach the terminal through `TracingSink`, so the subscriber
//! installed here decides where they end up and how they look.

use std::sync::OnceLock;

use tracing_subscriber::{fmt, EnvFilter};
use wiretap_config::{LogFormat, TelemetryConfig};

static TRACING_INIT: OnceLock<()> = OnceLock::new();

#[derive(Clone, Debug)]
pub struct EventLogger;

impl EventLogger {
    /// Installs the global subscriber once for the process.
    ///
    /// `RUST_LOG` wins over `config.log_level`. Later calls are no-ops, and a
    /// subscriber installed by someone else is left in place.
    pub fn init(config: &TelemetryConfig) {
        TRACING_INIT.get_or_init(|| {
            let filter = EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
            let builder = fmt()
                .with_env_filter(filter)
                .with_thread_names(config.thread_names);

            let result = match config.format {
                LogFormat::Json => builder.json().try_init(),
                LogFormat::Compact => builder.compact().try_init(),
            };

            match result {
                Ok(()) => tracing::debug!(format = ?config.format, "tracing subscriber installed"),
                Err(err) => eprintln!("tracing init skipped: {err}"),
            }
        });
    }

    pub fn init_default() {
        Self::init(&TelemetryConfig::default())
    }
}
