//! ## wiretap-core::traffic_logger
//! **Pipeline stage that logs every event and passes it on unchanged**
//!
//! One WARN record per event, in arrival order, formatted as
//! `<channel> <rendered event>`. Byte payloads of reads and writes are hex dumped
//! under `RECEIVED` / `WRITE`. Errors carried by events travel as the record's
//! cause, not only as text.
//!
//! The logger holds no per-call state and is shared between pipelines through
//! an `Arc`.

use std::error::Error;
use std::fmt;
use std::net::SocketAddr;
use std::sync::Arc;

use crate::events::{ChannelId, Event, UserEvent};
use crate::format::{display_or_placeholder, HexDumpFormatter, MessageFormatter};
use crate::pipeline::{ChannelContext, ChannelHandler};
use crate::sink::{LogRecord, LogSink, TracingSink, TRAFFIC_LEVEL};

pub const DEFAULT_LOGGER_NAME: &str = "wiretap::traffic";

const RECEIVED: &str = "RECEIVED";
const WRITE: &str = "WRITE";

/// Message and cause for one event, before the channel prefix is applied.
#[derive(Debug)]
pub struct RenderedEvent<'e> {
    pub message: String,
    pub cause: Option<&'e (dyn Error + 'static)>,
}

impl<'e> RenderedEvent<'e> {
    fn text(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            cause: None,
        }
    }

    fn with_cause(message: impl Into<String>, cause: &'e (dyn Error + 'static)) -> Self {
        Self {
            message: message.into(),
            cause: Some(cause),
        }
    }
}

#[derive(Clone)]
pub struct TrafficLogger {
    name: Arc<str>,
    formatter: Arc<dyn MessageFormatter>,
    sink: Arc<dyn LogSink>,
}

impl TrafficLogger {
    /// Logger with the default name, hex dump formatting and the `tracing` sink.
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn with_name(name: impl Into<String>) -> Self {
        Self::builder().name(name).build()
    }

    pub fn builder() -> TrafficLoggerBuilder {
        TrafficLoggerBuilder::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Emits one record for `event` on `channel`.
    pub fn log(&self, channel: &ChannelId, event: &Event) {
        let rendered = self.render(event);
        let message = self.formatter.format_line(channel, &rendered.message);
        self.sink.emit(&LogRecord {
            logger: &self.name,
            level: TRAFFIC_LEVEL,
            message,
            cause: rendered.cause,
        });
    }

    /// Renders `event` without the channel prefix.
    pub fn render<'e>(&self, event: &'e Event) -> RenderedEvent<'e> {
        match event {
            Event::Registered => RenderedEvent::text("REGISTERED"),
            Event::Unregistered => RenderedEvent::text("UNREGISTERED"),
            Event::Active => RenderedEvent::text("ACTIVE"),
            Event::Inactive => RenderedEvent::text("INACTIVE"),
            Event::Flush => RenderedEvent::text("FLUSH"),
            Event::ExceptionCaught(cause) => RenderedEvent::with_cause(
                format!("EXCEPTION: {}", display_or_placeholder(&**cause)),
                &**cause,
            ),
            Event::UserEvent(user_event) => render_user_event(user_event),
            Event::Bind(local) => RenderedEvent::text(format!("BIND({local})")),
            Event::Connect { remote, local } => RenderedEvent::text(render_connect(remote, local)),
            Event::Disconnect => RenderedEvent::text("DISCONNECT()"),
            Event::Close => RenderedEvent::text("CLOSE()"),
            Event::Deregister => RenderedEvent::text("DEREGISTER()"),
            Event::Read(payload) => {
                RenderedEvent::text(self.formatter.format_payload(RECEIVED, payload))
            }
            Event::Write(payload) => {
                RenderedEvent::text(self.formatter.format_payload(WRITE, payload))
            }
        }
    }
}

fn render_user_event(user_event: &UserEvent) -> RenderedEvent<'_> {
    match user_event {
        UserEvent::Error(cause) => RenderedEvent::with_cause("Exception: ", &**cause),
        UserEvent::HandshakeCompleted { cause } => RenderedEvent {
            message: "SslHandshakeCompletionEvent: ".to_owned(),
            cause: cause
                .as_ref()
                .map(|cause| &**cause as &(dyn Error + 'static)),
        },
        UserEvent::Other(value) => {
            RenderedEvent::text(format!("USER_EVENT: {}", display_or_placeholder(value)))
        }
    }
}

fn render_connect(remote: &SocketAddr, local: &Option<SocketAddr>) -> String {
    match local {
        Some(local) => format!("CONNECT({remote}, {local})"),
        None => format!("CONNECT({remote}, null)"),
    }
}

impl Default for TrafficLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TrafficLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrafficLogger")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl ChannelHandler for TrafficLogger {
    fn handle(&self, ctx: &ChannelContext, event: Event) -> Option<Event> {
        self.log(ctx.channel(), &event);
        Some(event)
    }
}

#[derive(Default)]
pub struct TrafficLoggerBuilder {
    name: Option<String>,
    formatter: Option<Arc<dyn MessageFormatter>>,
    sink: Option<Arc<dyn LogSink>>,
}

impl TrafficLoggerBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn formatter(mut self, formatter: Arc<dyn MessageFormatter>) -> Self {
        self.formatter = Some(formatter);
        self
    }

    pub fn sink(mut self, sink: Arc<dyn LogSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    pub fn build(self) -> TrafficLogger {
        TrafficLogger {
            name: self
                .name
                .unwrap_or_else(|| DEFAULT_LOGGER_NAME.to_owned())
                .into(),
            formatter: self.formatter.unwrap_or_else(|| Arc::new(HexDumpFormatter)),
            sink: self.sink.unwrap_or_else(|| Arc::new(TracingSink)),
        }
    }
}
