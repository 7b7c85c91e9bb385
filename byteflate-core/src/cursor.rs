//! Byte-level cursors over caller-owned buffers.
//!
//! This module provides `ReadCursor` and `WriteCursor`, the substrate every
//! Byteflate codec works on. A cursor pairs a borrowed byte span with an
//! explicit offset, so "bytes consumed so far" is a number rather than a
//! re-sliced view, and there is never any ambiguity about which view of the
//! buffer is authoritative.
//!
//! Both cursors advance monotonically from the front: no byte is read or
//! written twice, and a failed operation leaves the cursor where it was.
//!
//! # Example
//!
//! ```
//! use byteflate_core::cursor::{ReadCursor, WriteCursor};
//!
//! let source = [0xAB, 0xCD, 0xEF];
//! let mut input = ReadCursor::new(&source);
//! assert_eq!(input.take(2).unwrap(), &[0xAB, 0xCD]);
//! assert_eq!(input.consumed(), 2);
//! assert_eq!(input.remaining(), 1);
//!
//! let mut buf = [0u8; 4];
//! let mut output = WriteCursor::new(&mut buf);
//! output.put(&[1, 2, 3]).unwrap();
//! assert_eq!(output.produced(), 3);
//! ```

use crate::error::{ByteflateError, Result};

/// A read cursor over a borrowed input buffer.
///
/// Peeking never moves the cursor; taking does. Requests past the end of the
/// buffer fail with [`ByteflateError::TruncatedInput`] and leave the cursor
/// untouched.
#[derive(Debug)]
pub struct ReadCursor<'a> {
    /// The whole input buffer.
    buf: &'a [u8],
    /// Offset of the next unconsumed byte.
    pos: usize,
}

impl<'a> ReadCursor<'a> {
    /// Create a cursor at the start of `buf`.
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Number of bytes consumed so far.
    pub fn consumed(&self) -> usize {
        self.pos
    }

    /// Number of bytes not yet consumed.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Whether all input has been consumed.
    pub fn is_empty(&self) -> bool {
        self.pos == self.buf.len()
    }

    /// Look at the next `count` bytes without consuming them.
    pub fn peek(&self, count: usize) -> Result<&'a [u8]> {
        let available = self.remaining();
        if count > available {
            return Err(ByteflateError::truncated_input(count - available));
        }
        let buf = self.buf;
        Ok(&buf[self.pos..self.pos + count])
    }

    /// Consume `count` bytes previously validated with [`peek`](Self::peek).
    pub fn advance(&mut self, count: usize) {
        debug_assert!(count <= self.remaining());
        self.pos = self.buf.len().min(self.pos + count);
    }

    /// Consume and return the next `count` bytes.
    pub fn take(&mut self, count: usize) -> Result<&'a [u8]> {
        let bytes = self.peek(count)?;
        self.pos += count;
        Ok(bytes)
    }
}

/// A write cursor over a borrowed destination buffer.
///
/// Writes past the remaining space fail with
/// [`ByteflateError::DestinationTooSmall`] and write nothing; the unwritten
/// tail of the destination is never valid output.
#[derive(Debug)]
pub struct WriteCursor<'a> {
    /// The whole destination buffer.
    buf: &'a mut [u8],
    /// Offset of the next unwritten byte.
    pos: usize,
}

impl<'a> WriteCursor<'a> {
    /// Create a cursor at the start of `buf`.
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Number of bytes written so far.
    pub fn produced(&self) -> usize {
        self.pos
    }

    /// Number of bytes of destination space left.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Check that `count` bytes of space remain without writing anything.
    ///
    /// Callers that emit a multi-part record reserve the whole record up
    /// front so a record that does not fit writes nothing at all.
    pub fn ensure(&self, count: usize) -> Result<()> {
        let available = self.remaining();
        if count > available {
            return Err(ByteflateError::destination_too_small(count, available));
        }
        Ok(())
    }

    /// Append `bytes` to the destination.
    pub fn put(&mut self, bytes: &[u8]) -> Result<()> {
        self.ensure(bytes.len())?;
        self.buf[self.pos..self.pos + bytes.len()].copy_from_slice(bytes);
        self.pos += bytes.len();
        Ok(())
    }
}
