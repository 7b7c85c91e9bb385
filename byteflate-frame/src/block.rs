//! Block framing: the per-block header byte and the payload codec seam.
//!
//! Every block starts with a single self-describing byte:
//!
//! ```text
//! bit 7 (MSB)  final-block flag (1 = last block in the stream)
//! bits 6-5     block type selector
//! bits 4-0     reserved (ignored on decode, zero on encode)
//! ```
//!
//! The header and everything after it stay byte-aligned; there is no
//! bit-oriented cursor anywhere in the format.

use byteflate_core::cursor::{ReadCursor, WriteCursor};
use byteflate_core::error::Result;

use crate::stored::StoredBlockCodec;

/// Final-block flag, bit 7 of the header byte.
const FINAL_FLAG: u8 = 0b1000_0000;

/// Position of the 2-bit type selector, immediately below the final flag.
const TYPE_SHIFT: u8 = 5;

const TYPE_MASK: u8 = 0b11;

/// Block type selector carried in bits 6-5 of the header byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockType {
    /// Verbatim payload behind a LEN/NLEN prefix.
    Stored,
    /// Fixed Huffman codes. Recognized, no payload codec registered.
    FixedHuffman,
    /// Dynamic Huffman codes. Recognized, no payload codec registered.
    DynamicHuffman,
    /// Reserved selector `11`.
    Reserved,
}

impl BlockType {
    /// Map a 2-bit selector to its block type.
    pub fn from_selector(selector: u8) -> Self {
        match selector & TYPE_MASK {
            0b00 => BlockType::Stored,
            0b01 => BlockType::FixedHuffman,
            0b10 => BlockType::DynamicHuffman,
            _ => BlockType::Reserved,
        }
    }

    /// The 2-bit selector for this block type.
    pub fn selector(self) -> u8 {
        match self {
            BlockType::Stored => 0b00,
            BlockType::FixedHuffman => 0b01,
            BlockType::DynamicHuffman => 0b10,
            BlockType::Reserved => 0b11,
        }
    }
}

/// One block header: final flag plus type selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockHeader {
    /// Whether this header declares the last block of the stream.
    pub is_final: bool,
    /// The block's payload type.
    pub block_type: BlockType,
}

impl BlockHeader {
    /// Header for a stored block.
    pub fn stored(is_final: bool) -> Self {
        Self {
            is_final,
            block_type: BlockType::Stored,
        }
    }

    /// Parse a header byte. Reserved low bits are ignored.
    pub fn from_byte(byte: u8) -> Self {
        Self {
            is_final: byte & FINAL_FLAG != 0,
            block_type: BlockType::from_selector(byte >> TYPE_SHIFT),
        }
    }

    /// Encode as a header byte. Reserved low bits are always zero.
    pub fn to_byte(self) -> u8 {
        let mut byte = self.block_type.selector() << TYPE_SHIFT;
        if self.is_final {
            byte |= FINAL_FLAG;
        }
        byte
    }
}

/// Write one header byte, advancing the output cursor by exactly one byte.
pub fn encode_header(header: BlockHeader, output: &mut WriteCursor<'_>) -> Result<()> {
    output.put(&[header.to_byte()])
}

/// Read one header byte.
///
/// The input cursor advances only when the selected type has a payload
/// codec behind it; for the other selectors the header byte is left
/// unconsumed, so a failure reported by the caller keeps the pre-header
/// byte counts.
pub fn decode_header(input: &mut ReadCursor<'_>) -> Result<BlockHeader> {
    let byte = input.peek(1)?[0];
    let header = BlockHeader::from_byte(byte);
    if payload_codec(header.block_type).is_some() {
        input.advance(1);
    }
    Ok(header)
}

/// A payload codec for one block type.
///
/// The framing loops dispatch through this trait, so additional block types
/// (fixed and dynamic Huffman) plug in by registering an implementation in
/// [`payload_codec`] without touching the loops themselves.
pub trait BlockPayloadCodec {
    /// Encode one chunk as this block type's payload.
    ///
    /// Returns `(bytes_consumed, bytes_produced)`. A failed call consumes
    /// and writes nothing.
    fn encode_payload(&self, chunk: &[u8], output: &mut WriteCursor<'_>)
    -> Result<(usize, usize)>;

    /// Decode one payload, copying the recovered bytes into `output`.
    ///
    /// Returns `(bytes_consumed, bytes_produced)`. A failed call consumes
    /// and writes nothing.
    fn decode_payload(
        &self,
        input: &mut ReadCursor<'_>,
        output: &mut WriteCursor<'_>,
    ) -> Result<(usize, usize)>;
}

/// Look up the payload codec registered for a block type.
///
/// Only [`BlockType::Stored`] has an implementation today.
pub fn payload_codec(block_type: BlockType) -> Option<&'static dyn BlockPayloadCodec> {
    match block_type {
        BlockType::Stored => Some(&StoredBlockCodec),
        BlockType::FixedHuffman | BlockType::DynamicHuffman | BlockType::Reserved => None,
    }
}
