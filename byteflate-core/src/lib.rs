//! # Byteflate Core
//!
//! Core components for the Byteflate block codec.
//!
//! This crate provides the building blocks the codec layer is written
//! against:
//!
//! - [`cursor`]: byte-level read/write cursors over caller-owned buffers
//! - [`traits`]: the [`Compressor`]/[`Decompressor`] seams and the
//!   [`Outcome`] whole-call report
//! - [`error`]: error types
//!
//! ## Architecture
//!
//! Byteflate is a small layered stack:
//!
//! ```text
//! ┌────────────────────────────────────────────────┐
//! │ L2: Codec                                      │
//! │     Block framing, stored-block payload codec  │
//! ├────────────────────────────────────────────────┤
//! │ L1: Buffer substrate (this crate)              │
//! │     ReadCursor/WriteCursor, traits, errors     │
//! └────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use byteflate_core::cursor::ReadCursor;
//!
//! let data = [0x00, 0x03, 0xFF, 0xFC];
//! let mut cursor = ReadCursor::new(&data);
//! let len = u16::from_be_bytes(cursor.take(2).unwrap().try_into().unwrap());
//! assert_eq!(len, 3);
//! assert_eq!(cursor.remaining(), 2);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cursor;
pub mod error;
pub mod traits;

// Re-exports for convenience
pub use cursor::{ReadCursor, WriteCursor};
pub use error::{ByteflateError, Result};
pub use traits::{Compressor, Decompressor, Outcome};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::cursor::{ReadCursor, WriteCursor};
    pub use crate::error::{ByteflateError, Result};
    pub use crate::traits::{Compressor, Decompressor, Outcome};
}
