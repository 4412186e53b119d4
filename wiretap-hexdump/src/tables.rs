//! ## wiretap-hexdump::tables
//! Lookup tables shared by every dump. Built once and never mutated, so any
//! number of threads can read them without synchronization.

use once_cell::sync::Lazy;

/// Bytes per dump row.
pub const ROW_WIDTH: usize = 16;

/// `" 00"` through `" ff"`, indexed by byte value.
static BYTE2HEX: Lazy<[String; 256]> = Lazy::new(|| std::array::from_fn(|b| format!(" {b:02x}")));

/// Hex column padding, indexed by the number of bytes in a partial row.
static HEX_PADDING: Lazy<[String; ROW_WIDTH]> =
    Lazy::new(|| std::array::from_fn(|filled| "   ".repeat(ROW_WIDTH - filled)));

/// ASCII column padding, indexed by the number of bytes in a partial row.
static BYTE_PADDING: Lazy<[String; ROW_WIDTH]> =
    Lazy::new(|| std::array::from_fn(|filled| " ".repeat(ROW_WIDTH - filled)));

static BYTE2CHAR: [char; 256] = build_byte2char();

const fn build_byte2char() -> [char; 256] {
    let mut table = ['.'; 256];
    let mut i = 0x20;
    while i < 0x7f {
        table[i] = i as u8 as char;
        i += 1;
    }
    table
}

/// Three-character hex group for `byte`: a space and two lowercase digits.
#[inline]
pub fn byte_to_hex(byte: u8) -> &'static str {
    &BYTE2HEX[byte as usize]
}

/// Printable ASCII is kept as is, everything else becomes `.`.
#[inline]
pub fn byte_to_char(byte: u8) -> char {
    BYTE2CHAR[byte as usize]
}

/// Spaces filling the hex column after `filled` bytes of a partial row.
#[inline]
pub fn hex_padding(filled: usize) -> &'static str {
    &HEX_PADDING[filled % ROW_WIDTH]
}

/// Spaces filling the ASCII column after `filled` bytes of a partial row.
#[inline]
pub fn byte_padding(filled: usize) -> &'static str {
    &BYTE_PADDING[filled % ROW_WIDTH]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn low_values_get_a_leading_zero() {
        assert_eq!(byte_to_hex(0x00), " 00");
        assert_eq!(byte_to_hex(0x09), " 09");
        assert_eq!(byte_to_hex(0x0a), " 0a");
        assert_eq!(byte_to_hex(0x0f), " 0f");
        assert_eq!(byte_to_hex(0x10), " 10");
        assert_eq!(byte_to_hex(0xff), " ff");
    }

    #[test]
    fn control_and_high_bytes_are_dots() {
        assert_eq!(byte_to_char(b'A'), 'A');
        assert_eq!(byte_to_char(0x20), ' ');
        assert_eq!(byte_to_char(0x7e), '~');
        assert_eq!(byte_to_char(0x1f), '.');
        assert_eq!(byte_to_char(0x7f), '.');
        assert_eq!(byte_to_char(0xe9), '.');
    }

    #[test]
    fn padding_matches_missing_bytes() {
        for filled in 1..ROW_WIDTH {
            assert_eq!(hex_padding(filled).len(), (ROW_WIDTH - filled) * 3);
            assert_eq!(byte_padding(filled).len(), ROW_WIDTH - filled);
            assert!(hex_padding(filled).bytes().all(|b| b == b' '));
        }
    }
}
