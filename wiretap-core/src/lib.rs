//! # wiretap-core
//!
//! Transparent traffic logging for duplex channel pipelines.
//!
//! A [`TrafficLogger`] sits in a [`Pipeline`] and turns every event passing through
//! it into one WARN record, hex-dumping byte payloads, then hands the event on
//! untouched. It never consumes, reorders or delays traffic.
//!
//! ### Key Submodules:
//! - `events`: channel events, payload classification, channel identity
//! - `format`: pluggable message formatting (hex dump by default)
//! - `sink`: where records go (`tracing` by default)
//! - `pipeline`: minimal synchronous duplex handler chain

pub mod error;
pub mod events;
pub mod format;
pub mod pipeline;
pub mod sink;
pub mod traffic_logger;

pub mod prelude {
    pub use crate::error::*;
    pub use crate::events::*;
    pub use crate::format::*;
    pub use crate::pipeline::*;
    pub use crate::sink::*;
    pub use crate::traffic_logger::*;
}

pub use error::PipelineError;
pub use events::{ChannelId, Direction, Event, Payload, UserEvent};
pub use pipeline::{ChannelContext, ChannelHandler, Pipeline};
pub use sink::{LogRecord, LogSink, TracingSink};
pub use traffic_logger::TrafficLogger;
pub use wiretap_hexdump::ByteView;
