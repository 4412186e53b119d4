//! # Wiretap Telemetry
//!
//! Crate for subscriber setup and traffic metrics.

pub mod logging;
pub mod metrics;

pub use logging::EventLogger;
pub use metrics::{MeteredHandler, MeteredSink, MetricsError, MetricsRecorder};
