//! # Wiretap Hex Dump
//!
//! Crate for rendering byte ranges as fixed-width, offset-annotated hex dumps.
//!
//! ```text
//! RECEIVED(18B)
//!          +-------------------------------------------------+
//!          |  0  1  2  3  4  5  6  7  8  9  a  b  c  d  e  f |
//! +--------+-------------------------------------------------+----------------+
//! |00000000| 00 01 02 03 04 05 06 07 08 09 0a 0b 0c 0d 0e 0f |................|
//! |00000010| 10 11                                           |..              |
//! +--------+-------------------------------------------------+----------------+
//! ```

pub mod dump;
pub mod error;
pub mod tables;
pub mod view;

pub use dump::{render, render_view, row_count};
pub use error::DumpError;
pub use view::ByteView;
