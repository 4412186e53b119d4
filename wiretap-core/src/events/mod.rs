//! ## wiretap-core::events
//! **Everything that can travel through a channel pipeline**
//!
//! Events are a closed set: a handler matches on [`Event`] exhaustively, and a new
//! kind of event is a new variant the compiler makes every handler deal with.

pub mod channel;
pub mod payload;

use std::net::SocketAddr;
use std::sync::Arc;

pub use channel::ChannelId;
pub use payload::{BytesHolder, Datagram, Opaque, Payload};

/// Error carried by an exception event. Shared so forwarding never clones the error itself.
pub type Cause = Arc<dyn std::error::Error + Send + Sync + 'static>;

/// Which way an event travels through the pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// From the transport towards the application: head to tail.
    Inbound,
    /// From the application towards the transport: tail to head.
    Outbound,
}

/// A single observation on a channel.
#[derive(Clone, Debug)]
pub enum Event {
    Registered,
    Unregistered,
    Active,
    Inactive,
    ExceptionCaught(Cause),
    UserEvent(UserEvent),
    Bind(SocketAddr),
    Connect {
        remote: SocketAddr,
        local: Option<SocketAddr>,
    },
    Disconnect,
    Close,
    Deregister,
    Read(Payload),
    Write(Payload),
    Flush,
}

impl Event {
    pub fn direction(&self) -> Direction {
        match self {
            Event::Registered
            | Event::Unregistered
            | Event::Active
            | Event::Inactive
            | Event::ExceptionCaught(_)
            | Event::UserEvent(_)
            | Event::Read(_) => Direction::Inbound,
            Event::Bind(_)
            | Event::Connect { .. }
            | Event::Disconnect
            | Event::Close
            | Event::Deregister
            | Event::Write(_)
            | Event::Flush => Direction::Outbound,
        }
    }

    pub fn exception(cause: impl std::error::Error + Send + Sync + 'static) -> Self {
        Event::ExceptionCaught(Arc::new(cause))
    }

    pub fn read(payload: impl Into<Payload>) -> Self {
        Event::Read(payload.into())
    }

    pub fn write(payload: impl Into<Payload>) -> Self {
        Event::Write(payload.into())
    }
}

/// Application-defined events fired through the pipeline.
#[derive(Clone, Debug)]
pub enum UserEvent {
    /// An error delivered as an event rather than through `ExceptionCaught`.
    Error(Cause),
    /// A TLS handshake finished; `cause` is set when it failed.
    HandshakeCompleted { cause: Option<Cause> },
    Other(Opaque),
}

impl UserEvent {
    pub fn handshake_succeeded() -> Self {
        UserEvent::HandshakeCompleted { cause: None }
    }

    pub fn handshake_failed(cause: impl std::error::Error + Send + Sync + 'static) -> Self {
        UserEvent::HandshakeCompleted {
            cause: Some(Arc::new(cause)),
        }
    }
}
