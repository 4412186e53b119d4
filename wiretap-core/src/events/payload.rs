//! Message payloads, classified once when they enter the pipeline.

use std::fmt;
use std::net::SocketAddr;
use std::sync::Arc;

use bytes::Bytes;
use wiretap_hexdump::ByteView;

/// A message that wraps a byte buffer together with its own metadata.
///
/// For dumping purposes only [`BytesHolder::content`] matters.
pub trait BytesHolder: fmt::Debug + Send + Sync {
    fn content(&self) -> &ByteView;
}

/// A datagram and the addresses it travelled between.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Datagram {
    content: ByteView,
    recipient: SocketAddr,
    sender: Option<SocketAddr>,
}

impl Datagram {
    pub fn new(content: impl Into<ByteView>, recipient: SocketAddr) -> Self {
        Self {
            content: content.into(),
            recipient,
            sender: None,
        }
    }

    pub fn with_sender(mut self, sender: SocketAddr) -> Self {
        self.sender = Some(sender);
        self
    }
}

impl BytesHolder for Datagram {
    fn content(&self) -> &ByteView {
        &self.content
    }
}

/// Anything that is not byte-bearing. Logged through its `Display` impl.
#[derive(Clone)]
pub struct Opaque(Arc<dyn fmt::Display + Send + Sync>);

impl Opaque {
    pub fn new(value: impl fmt::Display + Send + Sync + 'static) -> Self {
        Self(Arc::new(value))
    }

    pub fn value(&self) -> &(dyn fmt::Display + Send + Sync) {
        self.0.as_ref()
    }
}

impl fmt::Display for Opaque {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl fmt::Debug for Opaque {
    // The wrapped Display impl may fail, so Debug never calls it.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Opaque(..)")
    }
}

/// Payload of a read or write.
#[derive(Clone, Debug)]
pub enum Payload {
    Bytes(ByteView),
    Holder(Arc<dyn BytesHolder>),
    Opaque(Opaque),
}

impl Payload {
    pub fn bytes(view: impl Into<ByteView>) -> Self {
        Payload::Bytes(view.into())
    }

    pub fn holder(holder: impl BytesHolder + 'static) -> Self {
        Payload::Holder(Arc::new(holder))
    }

    pub fn opaque(value: impl fmt::Display + Send + Sync + 'static) -> Self {
        Payload::Opaque(Opaque::new(value))
    }

    /// The byte view to dump, if this payload carries one.
    pub fn as_view(&self) -> Option<&ByteView> {
        match self {
            Payload::Bytes(view) => Some(view),
            Payload::Holder(holder) => Some(holder.content()),
            Payload::Opaque(_) => None,
        }
    }
}

impl From<ByteView> for Payload {
    fn from(view: ByteView) -> Self {
        Payload::Bytes(view)
    }
}

impl From<Bytes> for Payload {
    fn from(buf: Bytes) -> Self {
        Payload::Bytes(ByteView::new(buf))
    }
}

impl From<Vec<u8>> for Payload {
    fn from(data: Vec<u8>) -> Self {
        Payload::Bytes(ByteView::from(data))
    }
}

impl From<Datagram> for Payload {
    fn from(datagram: Datagram) -> Self {
        Payload::holder(datagram)
    }
}

impl From<Opaque> for Payload {
    fn from(value: Opaque) -> Self {
        Payload::Opaque(value)
    }
}
