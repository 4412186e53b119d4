//! Property-based tests for the hex dump layout.
//!
//! These tests use proptest to verify the layout holds for arbitrary input:
//! - One data row per started group of sixteen bytes
//! - Every row has the same width as the borders
//! - Rendering is deterministic
//! - Hex and ASCII columns agree with an independent encoder

use proptest::prelude::*;
use wiretap_hexdump::dump::LINE_WIDTH;
use wiretap_hexdump::tables::{byte_to_char, byte_to_hex};
use wiretap_hexdump::{render, row_count};

const HEADER_LINES: usize = 4;

fn data_rows(dump: &str) -> Vec<&str> {
    let lines: Vec<&str> = dump.lines().collect();
    lines[HEADER_LINES..lines.len() - 1].to_vec()
}

// Strategy for payloads around a few row boundaries
fn payload_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..200)
}

#[test]
fn prop_row_count_matches_length() {
    proptest!(|(bytes in payload_strategy())| {
        let dump = render("RECEIVED", &bytes);
        let rows = data_rows(&dump);
        prop_assert_eq!(rows.len(), row_count(bytes.len()));
        prop_assert_eq!(rows.len(), (bytes.len() + 15) / 16);
    });
}

#[test]
fn prop_rows_are_fixed_width() {
    proptest!(|(bytes in payload_strategy())| {
        let dump = render("WRITE", &bytes);
        for line in dump.lines().skip(1) {
            // Header lines are indented and shorter; borders and rows are full width.
            if line.starts_with('+') || line.starts_with('|') {
                prop_assert_eq!(line.chars().count(), LINE_WIDTH);
            }
        }
        for row in data_rows(&dump) {
            let hex_column = &row[10..58];
            prop_assert_eq!(hex_column.len(), 48);
            let ascii_column: String = row.chars().skip(60).take(16).collect();
            prop_assert_eq!(ascii_column.chars().count(), 16);
            prop_assert!(row.ends_with('|'));
        }
    });
}

#[test]
fn prop_rendering_is_deterministic() {
    proptest!(|(bytes in payload_strategy())| {
        let first = render("RECEIVED", &bytes);
        let copy = bytes.clone();
        let second = render("RECEIVED", &copy);
        prop_assert_eq!(first, second);
    });
}

#[test]
fn prop_header_reports_length() {
    proptest!(|(bytes in payload_strategy())| {
        let dump = render("WRITE", &bytes);
        let expected = format!("WRITE({}B)", bytes.len());
        prop_assert_eq!(dump.lines().next(), Some(expected.as_str()));
    });
}

#[test]
fn prop_hex_column_matches_hex_encoding() {
    proptest!(|(bytes in payload_strategy())| {
        let dump = render("RECEIVED", &bytes);
        let hex: String = data_rows(&dump)
            .iter()
            .map(|row| row[10..58].replace(' ', ""))
            .collect();
        prop_assert_eq!(hex, hex::encode(&bytes));
    });
}

#[test]
fn every_byte_has_a_two_digit_group() {
    for byte in 0..=u8::MAX {
        assert_eq!(byte_to_hex(byte), format!(" {}", hex::encode([byte])));
    }
}

#[test]
fn every_byte_has_an_ascii_rendering() {
    for byte in 0..=u8::MAX {
        let expected = if (0x20..=0x7e).contains(&byte) {
            byte as char
        } else {
            '.'
        };
        assert_eq!(byte_to_char(byte), expected, "byte {byte:#04x}");
    }
}
