//! ## wiretap-core::format
//! Message formatting strategies for the traffic logger.
//!
//! The logger decides *which* path an event takes; a [`MessageFormatter`] decides
//! what each path looks like. Swap the formatter to change the output without
//! touching classification.

use std::fmt::{self, Write};

use wiretap_hexdump::{render_view, ByteView};

use crate::events::{BytesHolder, ChannelId, Opaque, Payload};

/// Stand-in for a value whose `Display` impl reported an error.
pub const PLACEHOLDER: &str = "<unprintable>";

/// Formats `value`, falling back to [`PLACEHOLDER`] instead of panicking like `to_string` would.
pub fn display_or_placeholder<T: fmt::Display + ?Sized>(value: &T) -> String {
    let mut out = String::new();
    match write!(out, "{value}") {
        Ok(()) => out,
        Err(_) => PLACEHOLDER.to_owned(),
    }
}

pub trait MessageFormatter: Send + Sync {
    /// Renders a byte range under `label` (`RECEIVED` or `WRITE`).
    fn format_bytes(&self, label: &str, view: &ByteView) -> String;

    fn format_holder(&self, label: &str, holder: &dyn BytesHolder) -> String {
        self.format_bytes(label, holder.content())
    }

    fn format_opaque(&self, label: &str, value: &Opaque) -> String {
        format!("{label}: {}", display_or_placeholder(value))
    }

    /// Prefixes a rendered event with the channel it happened on.
    fn format_line(&self, channel: &ChannelId, message: &str) -> String {
        format!("{channel} {message}")
    }

    fn format_payload(&self, label: &str, payload: &Payload) -> String {
        match payload {
            Payload::Bytes(view) => self.format_bytes(label, view),
            Payload::Holder(holder) => self.format_holder(label, holder.as_ref()),
            Payload::Opaque(value) => self.format_opaque(label, value),
        }
    }
}

/// Default formatter: byte payloads become hex dumps.
#[derive(Debug, Default, Clone, Copy)]
pub struct HexDumpFormatter;

impl MessageFormatter for HexDumpFormatter {
    fn format_bytes(&self, label: &str, view: &ByteView) -> String {
        match render_view(label, view) {
            Ok(dump) => dump,
            Err(err) => {
                tracing::debug!(%err, label, "byte view not dumpable, logging placeholder");
                format!("{label}(<invalid byte range: {err}>)")
            }
        }
    }
}
