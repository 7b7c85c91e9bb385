//! Error types for Byteflate operations.
//!
//! This module provides the error type shared by all Byteflate crates. Every
//! failure is detected synchronously and reported through the return value;
//! nothing is retried internally and nothing is recovered from silently.

use thiserror::Error;

/// The main error type for Byteflate operations.
#[derive(Debug, Error)]
pub enum ByteflateError {
    /// A payload too large for a single stored block.
    #[error("oversized chunk: {len} bytes exceeds the {max}-byte stored block limit")]
    OversizedChunk {
        /// Length of the offending payload.
        len: usize,
        /// Largest payload a single block may carry.
        max: usize,
    },

    /// Destination buffer has insufficient remaining space.
    #[error("destination too small: need {needed} bytes, have {available}")]
    DestinationTooSmall {
        /// Number of bytes needed.
        needed: usize,
        /// Number of bytes available.
        available: usize,
    },

    /// Input ended before a header or a declared-length payload could be read.
    #[error("truncated input: expected {expected} more bytes")]
    TruncatedInput {
        /// Number of bytes that were expected but not available.
        expected: usize,
    },

    /// A stored block's NLEN field is not the bitwise complement of LEN.
    #[error("length integrity mismatch: LEN {len:#06x} vs NLEN {nlen:#06x}")]
    LengthIntegrityMismatch {
        /// Declared payload length.
        len: u16,
        /// Declared complement, which failed the `NLEN == !LEN` check.
        nlen: u16,
    },

    /// A block header selected a type with no payload codec behind it.
    #[error("unsupported block type selector {selector:#04b}")]
    UnsupportedBlockType {
        /// The 2-bit type selector from the header byte.
        selector: u8,
    },
}

/// Result type alias for Byteflate operations.
pub type Result<T> = std::result::Result<T, ByteflateError>;

impl ByteflateError {
    /// Create an oversized chunk error.
    pub fn oversized_chunk(len: usize, max: usize) -> Self {
        Self::OversizedChunk { len, max }
    }

    /// Create a destination too small error.
    pub fn destination_too_small(needed: usize, available: usize) -> Self {
        Self::DestinationTooSmall { needed, available }
    }

    /// Create a truncated input error.
    pub fn truncated_input(expected: usize) -> Self {
        Self::TruncatedInput { expected }
    }

    /// Create a length integrity mismatch error.
    pub fn length_integrity_mismatch(len: u16, nlen: u16) -> Self {
        Self::LengthIntegrityMismatch { len, nlen }
    }

    /// Create an unsupported block type error.
    pub fn unsupported_block_type(selector: u8) -> Self {
        Self::UnsupportedBlockType { selector }
    }
}
