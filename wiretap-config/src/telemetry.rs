//! Observability configuration.
//!
//! Parameters for the process-wide `tracing` subscriber:
//! - Default filter level (overridden by `RUST_LOG`)
//! - Output format

use serde::{Deserialize, Serialize};
use validator::{self, Validate};

use crate::validation;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

/// Telemetry configuration.
#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct TelemetryConfig {
    /// Filter level used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    #[validate(custom(function = validation::validate_log_level))]
    pub log_level: String,

    #[serde(default)]
    pub format: LogFormat,

    /// Include thread names in every line.
    #[serde(default = "default_true")]
    pub thread_names: bool,
}

fn default_log_level() -> String {
    "info".into()
}

fn default_true() -> bool {
    true
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            format: LogFormat::default(),
            thread_names: default_true(),
        }
    }
}
