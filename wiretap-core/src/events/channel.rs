//! Channel identity attached to every record.

use std::fmt;
use std::net::SocketAddr;
use std::sync::Arc;

/// Opaque, cheaply cloned identifier of the connection an event belongs to.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ChannelId(Arc<str>);

impl ChannelId {
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    /// Conventional `[id: 0x0000002a, L:/127.0.0.1:8080 - R:/10.0.0.1:5000]` form.
    /// Missing addresses are left out.
    pub fn from_parts(id: u32, local: Option<SocketAddr>, remote: Option<SocketAddr>) -> Self {
        let text = match (local, remote) {
            (Some(local), Some(remote)) => {
                format!("[id: 0x{id:08x}, L:/{local} - R:/{remote}]")
            }
            (Some(local), None) => format!("[id: 0x{id:08x}, L:/{local}]"),
            (None, Some(remote)) => format!("[id: 0x{id:08x}, R:/{remote}]"),
            (None, None) => format!("[id: 0x{id:08x}]"),
        };
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ChannelId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ChannelId {
    fn from(id: String) -> Self {
        Self::new(id)
    }
}
