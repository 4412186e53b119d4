//! ## wiretap-telemetry::metrics
//! **Prometheus counters for observed traffic**
//!
//! - `wiretap_events_total{direction}`: events seen by a metered handler
//! - `wiretap_payload_bytes_total{direction}`: readable bytes of read/write payloads
//! - `wiretap_records_total`: records emitted through a metered sink
//! - `wiretap_error_records_total`: records that carried a cause

use std::sync::Arc;

use prometheus::{IntCounter, IntCounterVec, Opts, Registry};
use thiserror::Error;
use wiretap_core::events::{Direction, Event};
use wiretap_core::pipeline::{ChannelContext, ChannelHandler};
use wiretap_core::sink::{LogRecord, LogSink};

#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("metrics registration failed: {0}")]
    Registration(#[from] prometheus::Error),

    #[error("metrics output is not UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

#[derive(Debug, Clone)]
pub struct MetricsRecorder {
    pub registry: Registry,
    pub events: IntCounterVec,
    pub payload_bytes: IntCounterVec,
    pub records: IntCounter,
    pub error_records: IntCounter,
}

impl MetricsRecorder {
    pub fn new() -> Result<Self, MetricsError> {
        let registry = Registry::new();
        let events = IntCounterVec::new(
            Opts::new("wiretap_events_total", "Channel events observed"),
            &["direction"],
        )?;
        let payload_bytes = IntCounterVec::new(
            Opts::new(
                "wiretap_payload_bytes_total",
                "Readable payload bytes in observed reads and writes",
            ),
            &["direction"],
        )?;
        let records = IntCounter::new("wiretap_records_total", "Traffic records emitted")?;
        let error_records = IntCounter::new(
            "wiretap_error_records_total",
            "Traffic records carrying an error cause",
        )?;

        registry.register(Box::new(events.clone()))?;
        registry.register(Box::new(payload_bytes.clone()))?;
        registry.register(Box::new(records.clone()))?;
        registry.register(Box::new(error_records.clone()))?;

        Ok(Self {
            registry,
            events,
            payload_bytes,
            records,
            error_records,
        })
    }

    pub fn gather_metrics(&self) -> Result<String, MetricsError> {
        use prometheus::Encoder;
        let encoder = prometheus::TextEncoder::new();
        let mut buffer = Vec::<u8>::new();
        encoder.encode(&self.registry.gather(), &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }

    pub fn observe_event(&self, event: &Event) {
        let direction = direction_label(event.direction());
        self.events.with_label_values(&[direction]).inc();

        let payload = match event {
            Event::Read(payload) | Event::Write(payload) => payload,
            _ => return,
        };
        if let Some(view) = payload.as_view() {
            self.payload_bytes
                .with_label_values(&[direction])
                .inc_by(view.readable_bytes() as u64);
        }
    }

    pub fn observe_record(&self, record: &LogRecord<'_>) {
        self.records.inc();
        if record.cause.is_some() {
            self.error_records.inc();
        }
    }
}

fn direction_label(direction: Direction) -> &'static str {
    match direction {
        Direction::Inbound => "inbound",
        Direction::Outbound => "outbound",
    }
}

/// Counts every event before handing it to the wrapped handler.
pub struct MeteredHandler<H> {
    inner: H,
    metrics: MetricsRecorder,
}

impl<H: ChannelHandler> MeteredHandler<H> {
    pub fn new(inner: H, metrics: MetricsRecorder) -> Self {
        Self { inner, metrics }
    }

    pub fn inner(&self) -> &H {
        &self.inner
    }
}

impl<H: ChannelHandler> ChannelHandler for MeteredHandler<H> {
    fn handle(&self, ctx: &ChannelContext, event: Event) -> Option<Event> {
        self.metrics.observe_event(&event);
        self.inner.handle(ctx, event)
    }
}

/// Counts every record before handing it to the wrapped sink.
pub struct MeteredSink {
    inner: Arc<dyn LogSink>,
    metrics: MetricsRecorder,
}

impl MeteredSink {
    pub fn new(inner: Arc<dyn LogSink>, metrics: MetricsRecorder) -> Self {
        Self { inner, metrics }
    }
}

impl LogSink for MeteredSink {
    fn emit(&self, record: &LogRecord<'_>) {
        self.metrics.observe_record(record);
        self.inner.emit(record);
    }
}
