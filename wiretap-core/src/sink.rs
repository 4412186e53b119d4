//! ## wiretap-core::sink
//! Narrow interface between the traffic logger and whatever stores its records.
//!
//! The logger calls [`LogSink::emit`] once per event. Transport, formatting backend
//! and persistence belong to the sink.

use std::error::Error;

use parking_lot::Mutex;
use tracing::Level;

/// Severity of every traffic record. Not configurable.
pub const TRAFFIC_LEVEL: Level = Level::WARN;

/// One rendered event.
#[derive(Debug)]
pub struct LogRecord<'a> {
    /// Name of the logger that produced the record.
    pub logger: &'a str,
    pub level: Level,
    pub message: String,
    /// Error the event carried, passed separately so the sink can report its source chain.
    pub cause: Option<&'a (dyn Error + 'static)>,
}

pub trait LogSink: Send + Sync {
    fn emit(&self, record: &LogRecord<'_>);
}

/// Forwards records to `tracing` at WARN, with the cause in the `error` field.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn emit(&self, record: &LogRecord<'_>) {
        match record.cause {
            Some(cause) => {
                tracing::warn!(logger = record.logger, error = cause, "{}", record.message)
            }
            None => tracing::warn!(logger = record.logger, "{}", record.message),
        }
    }
}

/// Owned copy of a [`LogRecord`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CapturedRecord {
    pub logger: String,
    pub level: Level,
    pub message: String,
    pub cause: Option<String>,
}

/// Keeps every record in memory, in emission order.
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<CapturedRecord>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<CapturedRecord> {
        self.records.lock().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.records
            .lock()
            .iter()
            .map(|record| record.message.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    pub fn clear(&self) {
        self.records.lock().clear();
    }
}

impl LogSink for MemorySink {
    fn emit(&self, record: &LogRecord<'_>) {
        let captured = CapturedRecord {
            logger: record.logger.to_owned(),
            level: record.level,
            message: record.message.clone(),
            cause: record
                .cause
                .map(|cause| crate::format::display_or_placeholder(cause)),
        };
        self.records.lock().push(captured);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    #[traced_test]
    #[test]
    fn tracing_sink_emits_message_and_cause() {
        let cause = std::io::Error::other("connection reset");
        TracingSink.emit(&LogRecord {
            logger: "wiretap::traffic",
            level: TRAFFIC_LEVEL,
            message: "[id: 0x00000001] EXCEPTION: connection reset".into(),
            cause: Some(&cause),
        });
        assert!(logs_contain("EXCEPTION: connection reset"));
        assert!(logs_contain("WARN"));
        assert!(logs_contain("error=connection reset"));
    }

    #[test]
    fn memory_sink_keeps_order() {
        let sink = MemorySink::new();
        for message in ["first", "second"] {
            sink.emit(&LogRecord {
                logger: "test",
                level: TRAFFIC_LEVEL,
                message: message.into(),
                cause: None,
            });
        }
        assert_eq!(sink.messages(), vec!["first", "second"]);
        assert_eq!(sink.records()[0].cause, None);
    }
}
