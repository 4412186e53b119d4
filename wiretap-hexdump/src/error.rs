use thiserror::Error;

/// Errors raised when a [`ByteView`](crate::ByteView) does not describe a valid range.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DumpError {
    #[error("reader index {reader_index} is past writer index {writer_index}")]
    InvertedRange {
        reader_index: usize,
        writer_index: usize,
    },
    #[error("writer index {writer_index} exceeds buffer length {capacity}")]
    OutOfBounds {
        writer_index: usize,
        capacity: usize,
    },
}
