//! # Byteflate Frame
//!
//! Byte-aligned stored-block framing codec.
//!
//! A Byteflate stream is a sequence of self-describing blocks modeled on
//! the DEFLATE bitstream: each block carries a final-block flag and a
//! 2-bit type selector in its header byte, followed by type-specific
//! payload. Unlike DEFLATE, every field is byte-aligned. Only the stored
//! (verbatim) block type has a payload codec; fixed and dynamic Huffman
//! selectors are recognized and rejected, and the [`BlockPayloadCodec`]
//! seam is where their codecs would plug in.
//!
//! ## Wire format
//!
//! ```text
//! block   := header payload
//! header  := 1 byte: final flag (bit 7), type selector (bits 6-5),
//!            reserved (bits 4-0, zero on encode, ignored on decode)
//! payload := LEN (16-bit BE) NLEN (16-bit BE, == !LEN) LEN bytes verbatim
//! ```
//!
//! ## Example
//!
//! ```rust
//! use byteflate_frame::{compress_to_vec, decompress_to_vec};
//!
//! let original = b"Hello, World!";
//! let framed = compress_to_vec(original).unwrap();
//! let restored = decompress_to_vec(&framed).unwrap();
//! assert_eq!(restored, original);
//! ```
//!
//! Inputs larger than 65535 bytes are split into multiple blocks; only the
//! last block carries the final flag, and decoding stops once it has been
//! consumed.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod block;
pub mod decode;
pub mod encode;
pub mod session;
pub mod stored;

// Re-exports
pub use block::{
    BlockHeader, BlockPayloadCodec, BlockType, decode_header, encode_header, payload_codec,
};
pub use decode::{FrameDecoder, decompress, decompress_to_vec};
pub use encode::{FrameEncoder, compress, compress_to_vec};
pub use session::Session;
pub use stored::{MAX_STORED_BLOCK, STORED_OVERHEAD, StoredBlockCodec};
