//! Stored (verbatim) block payload codec.
//!
//! A stored payload is the original bytes unmodified, wrapped with a 4-byte
//! integrity-checked length prefix:
//!
//! ```text
//! bytes 0-1   LEN, big-endian 16-bit payload length
//! bytes 2-3   NLEN, big-endian 16-bit, must equal !LEN
//! bytes 4..   LEN verbatim payload bytes
//! ```
//!
//! `NLEN` is a lightweight integrity check: a corrupted length field cannot
//! silently produce a wrong-length copy, because the complement no longer
//! matches.

use byteflate_core::cursor::{ReadCursor, WriteCursor};
use byteflate_core::error::{ByteflateError, Result};

use crate::block::BlockPayloadCodec;

/// Largest payload a single stored block can carry (LEN is 16-bit).
pub const MAX_STORED_BLOCK: usize = 65535;

/// Size of the LEN/NLEN prefix.
pub const STORED_OVERHEAD: usize = 4;

/// Payload codec for stored blocks.
#[derive(Debug, Clone, Copy, Default)]
pub struct StoredBlockCodec;

impl BlockPayloadCodec for StoredBlockCodec {
    fn encode_payload(
        &self,
        chunk: &[u8],
        output: &mut WriteCursor<'_>,
    ) -> Result<(usize, usize)> {
        if chunk.len() > MAX_STORED_BLOCK {
            return Err(ByteflateError::oversized_chunk(chunk.len(), MAX_STORED_BLOCK));
        }
        // Reserve the whole record so a block that does not fit writes nothing.
        output.ensure(STORED_OVERHEAD + chunk.len())?;

        let len = chunk.len() as u16;
        let nlen = !len;
        output.put(&len.to_be_bytes())?;
        output.put(&nlen.to_be_bytes())?;
        output.put(chunk)?;

        Ok((chunk.len(), STORED_OVERHEAD + chunk.len()))
    }

    fn decode_payload(
        &self,
        input: &mut ReadCursor<'_>,
        output: &mut WriteCursor<'_>,
    ) -> Result<(usize, usize)> {
        let prefix = input.peek(STORED_OVERHEAD)?;
        let len = u16::from_be_bytes([prefix[0], prefix[1]]);
        let nlen = u16::from_be_bytes([prefix[2], prefix[3]]);
        if nlen != !len {
            return Err(ByteflateError::length_integrity_mismatch(len, nlen));
        }

        // Validate everything before moving either cursor.
        let total = STORED_OVERHEAD + len as usize;
        let block = input.peek(total)?;
        output.put(&block[STORED_OVERHEAD..])?;
        input.advance(total);

        Ok((total, len as usize))
    }
}
