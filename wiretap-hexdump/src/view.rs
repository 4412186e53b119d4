//! ## wiretap-hexdump::view
//! Read-only window over a shared buffer whose indices belong to the pipeline.

use bytes::Bytes;

use crate::error::DumpError;

/// A readable range `[reader_index, writer_index)` over a buffer this crate does not own.
///
/// Cloning is cheap: the underlying `Bytes` is reference counted and never copied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ByteView {
    buf: Bytes,
    reader_index: usize,
    writer_index: usize,
}

impl ByteView {
    /// Exposes the whole buffer as readable.
    pub fn new(buf: Bytes) -> Self {
        let writer_index = buf.len();
        Self {
            buf,
            reader_index: 0,
            writer_index,
        }
    }

    /// Wraps `buf` with indices supplied by the caller.
    ///
    /// The indices are not checked here; [`ByteView::readable`] reports a range
    /// that is inverted or runs past the buffer.
    pub fn with_indices(buf: Bytes, reader_index: usize, writer_index: usize) -> Self {
        Self {
            buf,
            reader_index,
            writer_index,
        }
    }

    pub fn from_static(bytes: &'static [u8]) -> Self {
        Self::new(Bytes::from_static(bytes))
    }

    #[inline]
    pub fn reader_index(&self) -> usize {
        self.reader_index
    }

    #[inline]
    pub fn writer_index(&self) -> usize {
        self.writer_index
    }

    /// The full underlying buffer, including bytes outside the readable range.
    #[inline]
    pub fn buffer(&self) -> &Bytes {
        &self.buf
    }

    /// Number of readable bytes, zero for an inverted range.
    #[inline]
    pub fn readable_bytes(&self) -> usize {
        self.writer_index.saturating_sub(self.reader_index)
    }

    /// Returns the readable bytes without consuming them.
    pub fn readable(&self) -> Result<&[u8], DumpError> {
        if self.reader_index > self.writer_index {
            return Err(DumpError::InvertedRange {
                reader_index: self.reader_index,
                writer_index: self.writer_index,
            });
        }
        if self.writer_index > self.buf.len() {
            return Err(DumpError::OutOfBounds {
                writer_index: self.writer_index,
                capacity: self.buf.len(),
            });
        }
        Ok(&self.buf[self.reader_index..self.writer_index])
    }
}

impl From<Bytes> for ByteView {
    fn from(buf: Bytes) -> Self {
        Self::new(buf)
    }
}

impl From<Vec<u8>> for ByteView {
    fn from(data: Vec<u8>) -> Self {
        Self::new(Bytes::from(data))
    }
}

impl From<&'static [u8]> for ByteView {
    fn from(bytes: &'static [u8]) -> Self {
        Self::from_static(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_buffer_is_readable() {
        let view = ByteView::from_static(b"abc");
        assert_eq!(view.readable().unwrap(), b"abc");
        assert_eq!(view.readable_bytes(), 3);
    }

    #[test]
    fn readable_respects_indices() {
        let view = ByteView::with_indices(Bytes::from_static(b"headerbody"), 6, 10);
        assert_eq!(view.readable().unwrap(), b"body");
        // Reading does not move the indices.
        assert_eq!(view.reader_index(), 6);
        assert_eq!(view.writer_index(), 10);
    }

    #[test]
    fn inverted_range_is_rejected() {
        let view = ByteView::with_indices(Bytes::from_static(b"abcd"), 3, 1);
        assert_eq!(view.readable_bytes(), 0);
        assert_eq!(
            view.readable(),
            Err(DumpError::InvertedRange {
                reader_index: 3,
                writer_index: 1
            })
        );
    }

    #[test]
    fn out_of_bounds_range_is_rejected() {
        let view = ByteView::with_indices(Bytes::from_static(b"abcd"), 0, 9);
        assert_eq!(
            view.readable(),
            Err(DumpError::OutOfBounds {
                writer_index: 9,
                capacity: 4
            })
        );
    }

    #[test]
    fn clone_shares_the_buffer() {
        let view = ByteView::from(vec![1u8, 2, 3]);
        let copy = view.clone();
        assert_eq!(view.buffer().as_ptr(), copy.buffer().as_ptr());
    }
}
