//! YAML replay scenarios.
//!
//! A scenario names one channel and lists the events seen on it, in order:
//!
//! ```yaml
//! channel:
//!   id: 7
//!   local: 127.0.0.1:8080
//!   remote: 10.0.0.2:51234
//! events:
//!   - registered
//!   - active
//!   - read:
//!       text: "GET / HTTP/1.1\r\n\r\n"
//!   - write:
//!       hex: "485454502f312e3120323030204f4b0d0a"
//!   - exception: connection reset by peer
//!   - close
//! ```

use std::error::Error;
use std::fmt;
use std::net::SocketAddr;
use std::sync::Arc;

use bytes::Bytes;
use serde::Deserialize;
use thiserror::Error;
use wiretap_core::events::{ChannelId, Datagram, Event, Opaque, Payload, UserEvent};

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("invalid scenario YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("event #{index}: invalid hex payload: {source}")]
    Hex {
        index: usize,
        #[source]
        source: hex::FromHexError,
    },
}

/// Error cause carried by replayed `exception` and `user_event` entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayedError(pub String);

impl fmt::Display for ReplayedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Error for ReplayedError {}

#[derive(Debug, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub channel: ChannelSpec,
    #[serde(with = "serde_yaml::with::singleton_map_recursive")]
    pub events: Vec<ScenarioEvent>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ChannelSpec {
    #[serde(default)]
    pub id: u32,
    pub local: Option<SocketAddr>,
    pub remote: Option<SocketAddr>,
}

impl ChannelSpec {
    pub fn channel_id(&self) -> ChannelId {
        ChannelId::from_parts(self.id, self.local, self.remote)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioEvent {
    Registered,
    Unregistered,
    Active,
    Inactive,
    Exception(String),
    UserEvent(UserEventSpec),
    Bind(SocketAddr),
    Connect {
        remote: SocketAddr,
        #[serde(default)]
        local: Option<SocketAddr>,
    },
    Disconnect,
    Close,
    Deregister,
    Read(PayloadSpec),
    Write(PayloadSpec),
    Flush,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserEventSpec {
    Error(String),
    HandshakeCompleted {
        #[serde(default)]
        error: Option<String>,
    },
    Other(String),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentSpec {
    Hex(String),
    Text(String),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayloadSpec {
    Hex(String),
    Text(String),
    /// A non-byte message, logged through its text form.
    Message(String),
    Datagram {
        content: ContentSpec,
        recipient: SocketAddr,
        #[serde(default)]
        sender: Option<SocketAddr>,
    },
}

impl Scenario {
    pub fn from_yaml(source: &str) -> Result<Self, ScenarioError> {
        Ok(serde_yaml::from_str(source)?)
    }

    /// Converts every entry into a pipeline event, keeping file order.
    pub fn into_events(self) -> Result<Vec<Event>, ScenarioError> {
        self.events
            .into_iter()
            .enumerate()
            .map(|(index, event)| {
                event
                    .into_event()
                    .map_err(|source| ScenarioError::Hex { index, source })
            })
            .collect()
    }
}

impl ScenarioEvent {
    pub fn into_event(self) -> Result<Event, hex::FromHexError> {
        let event = match self {
            ScenarioEvent::Registered => Event::Registered,
            ScenarioEvent::Unregistered => Event::Unregistered,
            ScenarioEvent::Active => Event::Active,
            ScenarioEvent::Inactive => Event::Inactive,
            ScenarioEvent::Exception(message) => Event::exception(ReplayedError(message)),
            ScenarioEvent::UserEvent(spec) => Event::UserEvent(spec.into_user_event()),
            ScenarioEvent::Bind(local) => Event::Bind(local),
            ScenarioEvent::Connect { remote, local } => Event::Connect { remote, local },
            ScenarioEvent::Disconnect => Event::Disconnect,
            ScenarioEvent::Close => Event::Close,
            ScenarioEvent::Deregister => Event::Deregister,
            ScenarioEvent::Read(payload) => Event::Read(payload.into_payload()?),
            ScenarioEvent::Write(payload) => Event::Write(payload.into_payload()?),
            ScenarioEvent::Flush => Event::Flush,
        };
        Ok(event)
    }
}

impl UserEventSpec {
    fn into_user_event(self) -> UserEvent {
        match self {
            UserEventSpec::Error(message) => UserEvent::Error(Arc::new(ReplayedError(message))),
            UserEventSpec::HandshakeCompleted { error: None } => UserEvent::handshake_succeeded(),
            UserEventSpec::HandshakeCompleted {
                error: Some(message),
            } => UserEvent::handshake_failed(ReplayedError(message)),
            UserEventSpec::Other(text) => UserEvent::Other(Opaque::new(text)),
        }
    }
}

impl ContentSpec {
    fn into_bytes(self) -> Result<Bytes, hex::FromHexError> {
        match self {
            ContentSpec::Hex(digits) => Ok(Bytes::from(decode_hex(&digits)?)),
            ContentSpec::Text(text) => Ok(Bytes::from(text)),
        }
    }
}

impl PayloadSpec {
    fn into_payload(self) -> Result<Payload, hex::FromHexError> {
        let payload = match self {
            PayloadSpec::Hex(digits) => Payload::bytes(ContentSpec::Hex(digits).into_bytes()?),
            PayloadSpec::Text(text) => Payload::bytes(Bytes::from(text)),
            PayloadSpec::Message(text) => Payload::opaque(text),
            PayloadSpec::Datagram {
                content,
                recipient,
                sender,
            } => {
                let datagram = Datagram::new(content.into_bytes()?, recipient);
                Payload::holder(match sender {
                    Some(sender) => datagram.with_sender(sender),
                    None => datagram,
                })
            }
        };
        Ok(payload)
    }
}

/// Hex digits, tolerating whitespace between byte pairs.
fn decode_hex(digits: &str) -> Result<Vec<u8>, hex::FromHexError> {
    let compact: String = digits.chars().filter(|c| !c.is_whitespace()).collect();
    hex::decode(compact)
}
