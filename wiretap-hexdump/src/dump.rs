//! ## wiretap-hexdump::dump
//! Renders a byte range as a labelled dump, sixteen bytes per row.
//!
//! Every data row is exactly as wide as the border lines, so dumps of different
//! lengths line up when printed one after another. Partial trailing rows are
//! padded from the precomputed tables in [`crate::tables`].

use std::fmt::Write;

use crate::error::DumpError;
use crate::tables::{byte_padding, byte_to_char, byte_to_hex, hex_padding, ROW_WIDTH};
use crate::view::ByteView;

const NEWLINE: char = '\n';
const HEADER_TOP: &str = "         +-------------------------------------------------+";
const HEADER_COLUMNS: &str = "         |  0  1  2  3  4  5  6  7  8  9  a  b  c  d  e  f |";
const BORDER: &str =
    "+--------+-------------------------------------------------+----------------+";

/// Width of a border or data row, newline excluded.
pub const LINE_WIDTH: usize = BORDER.len();

/// Number of data rows a dump of `length` bytes has.
#[inline]
pub fn row_count(length: usize) -> usize {
    length.div_ceil(ROW_WIDTH)
}

/// Renders `bytes` under `label`. Total: any slice, including an empty one, has a dump.
pub fn render(label: &str, bytes: &[u8]) -> String {
    let length = bytes.len();
    let mut dump =
        String::with_capacity((row_count(length) + 4) * (LINE_WIDTH + 1) + label.len() + 16);

    // Writing into a String cannot fail.
    let _ = write!(dump, "{label}({length}B)");
    for line in [HEADER_TOP, HEADER_COLUMNS, BORDER] {
        dump.push(NEWLINE);
        dump.push_str(line);
    }

    for (row_index, row) in bytes.chunks(ROW_WIDTH).enumerate() {
        dump.push(NEWLINE);
        push_offset(&mut dump, row_index * ROW_WIDTH);

        for &byte in row {
            dump.push_str(byte_to_hex(byte));
        }
        let partial = row.len() < ROW_WIDTH;
        if partial {
            dump.push_str(hex_padding(row.len()));
        }

        dump.push_str(" |");
        dump.extend(row.iter().map(|&byte| byte_to_char(byte)));
        if partial {
            dump.push_str(byte_padding(row.len()));
        }
        dump.push('|');
    }

    dump.push(NEWLINE);
    dump.push_str(BORDER);
    dump
}

/// Renders the readable range of `view`. Offsets start at zero at the reader index.
pub fn render_view(label: &str, view: &ByteView) -> Result<String, DumpError> {
    Ok(render(label, view.readable()?))
}

/// Appends `|xxxxxxxx|`. Offsets wrap at 32 bits.
fn push_offset(dump: &mut String, offset: usize) {
    // Forcing bit 32 always yields nine digits; the leading `1` becomes the left border.
    let start = dump.len();
    let _ = write!(dump, "{:x}|", (offset as u64 & 0xFFFF_FFFF) | 0x1_0000_0000);
    dump.replace_range(start..start + 1, "|");
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    const HEAD: &str = concat!(
        "         +-------------------------------------------------+\n",
        "         |  0  1  2  3  4  5  6  7  8  9  a  b  c  d  e  f |\n",
        "+--------+-------------------------------------------------+----------------+",
    );

    fn expected(label_line: &str, rows: &[&str]) -> String {
        let mut out = format!("{label_line}\n{HEAD}");
        for row in rows {
            out.push('\n');
            out.push_str(row);
        }
        out.push('\n');
        out.push_str(BORDER);
        out
    }

    #[test]
    fn eighteen_bytes_span_two_rows() {
        let bytes: Vec<u8> = (0x00..=0x11).collect();
        let dump = render("RECEIVED", &bytes);
        assert_eq!(
            dump,
            expected(
                "RECEIVED(18B)",
                &[
                    "|00000000| 00 01 02 03 04 05 06 07 08 09 0a 0b 0c 0d 0e 0f |................|",
                    "|00000010| 10 11                                           |..              |",
                ],
            )
        );
    }

    #[test]
    fn empty_range_has_no_data_rows() {
        let dump = render("WRITE", &[]);
        assert_eq!(dump, expected("WRITE(0B)", &[]));
        assert_eq!(dump.lines().count(), 5);
    }

    #[test]
    fn single_byte_pads_fifteen_groups() {
        let dump = render("WRITE", b"A");
        assert_eq!(
            dump,
            expected(
                "WRITE(1B)",
                &["|00000000| 41                                              |A               |"],
            )
        );
    }

    #[test]
    fn exact_multiple_has_no_partial_row() {
        let bytes = [b'x'; 32];
        let dump = render("WRITE", &bytes);
        let rows: Vec<&str> = dump.lines().skip(4).take(2).collect();
        assert_eq!(rows[0], format!("|00000000|{} |{}|", " 78".repeat(16), "x".repeat(16)));
        assert_eq!(rows[1], format!("|00000010|{} |{}|", " 78".repeat(16), "x".repeat(16)));
        assert_eq!(dump.lines().count(), 7);
    }

    #[test]
    fn printable_text_shows_in_ascii_column() {
        let dump = render("RECEIVED", b"GET / HTTP/1.1\r\nHost: example\r\n");
        assert_eq!(
            dump,
            expected(
                "RECEIVED(31B)",
                &[
                    "|00000000| 47 45 54 20 2f 20 48 54 54 50 2f 31 2e 31 0d 0a |GET / HTTP/1.1..|",
                    "|00000010| 48 6f 73 74 3a 20 65 78 61 6d 70 6c 65 0d 0a    |Host: example.. |",
                ],
            )
        );
    }

    #[test]
    fn offsets_count_past_one_byte() {
        let bytes = vec![0u8; 0x120];
        let dump = render("RECEIVED", &bytes);
        assert!(dump.contains("\n|000000f0|"));
        assert!(dump.contains("\n|00000110|"));
    }

    #[test]
    fn view_offsets_start_at_reader_index() {
        let view = ByteView::with_indices(Bytes::from_static(b"skipABC"), 4, 7);
        let dump = render_view("RECEIVED", &view).unwrap();
        assert!(dump.starts_with("RECEIVED(3B)\n"));
        assert!(dump.contains("|00000000| 41 42 43 "));
        assert!(dump.contains("|ABC             |"));
    }

    #[test]
    fn invalid_view_is_an_error() {
        let view = ByteView::with_indices(Bytes::from_static(b"abc"), 2, 1);
        assert!(matches!(
            render_view("RECEIVED", &view),
            Err(DumpError::InvertedRange { .. })
        ));
    }

    #[test]
    fn row_count_rounds_up() {
        assert_eq!(row_count(0), 0);
        assert_eq!(row_count(1), 1);
        assert_eq!(row_count(15), 1);
        assert_eq!(row_count(16), 1);
        assert_eq!(row_count(17), 2);
        assert_eq!(row_count(30), 2);
    }
}
