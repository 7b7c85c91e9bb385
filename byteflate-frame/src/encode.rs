//! Stream compression: split input into stored blocks.
//!
//! The encoder walks the input, cutting it into chunks of at most
//! [`MAX_STORED_BLOCK`] bytes. Every chunk becomes one block: a header byte
//! followed by the stored payload. The chunk that exhausts the input carries
//! the final-block flag; earlier chunks do not. Zero-length input still
//! produces exactly one final block with `LEN = 0`, so every stream has a
//! terminator.

use byteflate_core::error::Result;
use byteflate_core::traits::{Compressor, Outcome};

use crate::block::{BlockHeader, BlockPayloadCodec, BlockType, encode_header};
use crate::session::Session;
use crate::stored::{MAX_STORED_BLOCK, STORED_OVERHEAD, StoredBlockCodec};

/// Per-block framing overhead: header byte plus LEN/NLEN prefix.
const BLOCK_OVERHEAD: usize = 1 + STORED_OVERHEAD;

/// Stored-block stream encoder.
///
/// # Example
///
/// ```
/// use byteflate_core::Compressor;
/// use byteflate_frame::FrameEncoder;
///
/// let mut output = [0u8; 16];
/// let outcome = FrameEncoder::new().compress(&[0x01, 0x02, 0x03], &mut output);
/// let (consumed, produced) = outcome.into_counts().unwrap();
/// assert_eq!(consumed, 3);
/// assert_eq!(&output[..produced], &[0x80, 0x00, 0x03, 0xFF, 0xFC, 0x01, 0x02, 0x03]);
/// ```
#[derive(Debug, Clone)]
pub struct FrameEncoder {
    /// Largest payload emitted per block.
    block_size: usize,
}

impl FrameEncoder {
    /// Encoder splitting at the largest permitted block size (65535 bytes).
    pub fn new() -> Self {
        Self {
            block_size: MAX_STORED_BLOCK,
        }
    }

    /// Encoder splitting at `block_size` bytes per block.
    ///
    /// The size is clamped to `1..=65535`.
    pub fn with_block_size(block_size: usize) -> Self {
        Self {
            block_size: block_size.clamp(1, MAX_STORED_BLOCK),
        }
    }

    /// Worst-case compressed size for `input_len` bytes of input.
    ///
    /// Sizing the destination with this bound guarantees `compress` cannot
    /// fail with a too-small destination.
    pub fn compressed_bound(&self, input_len: usize) -> usize {
        let blocks = input_len.div_ceil(self.block_size).max(1);
        input_len + blocks * BLOCK_OVERHEAD
    }

    fn run(&self, session: &mut Session<'_>) -> Result<()> {
        while !session.stream_ended() {
            let remaining = session.input.remaining();
            let chunk_len = remaining.min(self.block_size);
            let is_final = remaining <= self.block_size;

            // Whole-block precheck: a block that does not fit writes nothing.
            session.output.ensure(BLOCK_OVERHEAD + chunk_len)?;

            encode_header(BlockHeader::stored(is_final), &mut session.output)?;
            session.block_type = Some(BlockType::Stored);
            session.is_final_block = is_final;

            let chunk = session.input.take(chunk_len)?;
            StoredBlockCodec.encode_payload(chunk, &mut session.output)?;

            if session.is_final_block {
                session.end_stream();
            }
        }
        Ok(())
    }
}

impl Default for FrameEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Compressor for FrameEncoder {
    fn compress(&mut self, input: &[u8], output: &mut [u8]) -> Outcome {
        let mut session = Session::new(input, output);
        let result = self.run(&mut session);
        Outcome {
            consumed: session.consumed(),
            produced: session.produced(),
            result,
        }
    }
}

/// Compress `input` into `output` as a stored-block stream.
///
/// Returns the [`Outcome`] with byte counts and the first error, if any.
pub fn compress(input: &[u8], output: &mut [u8]) -> Outcome {
    FrameEncoder::new().compress(input, output)
}

/// Compress `input` into a freshly allocated buffer.
pub fn compress_to_vec(input: &[u8]) -> Result<Vec<u8>> {
    let mut encoder = FrameEncoder::new();
    let mut output = vec![0u8; encoder.compressed_bound(input.len())];
    let (_, produced) = encoder.compress(input, &mut output).into_counts()?;
    output.truncate(produced);
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use byteflate_core::error::ByteflateError;

    #[test]
    fn test_compress_single_block() {
        let mut output = [0u8; 16];
        let outcome = compress(&[0x01, 0x02, 0x03], &mut output);

        let (consumed, produced) = outcome.into_counts().unwrap();
        assert_eq!(consumed, 3);
        assert_eq!(produced, 8);
        assert_eq!(
            &output[..8],
            &[0x80, 0x00, 0x03, 0xFF, 0xFC, 0x01, 0x02, 0x03]
        );
    }

    #[test]
    fn test_compress_empty_input() {
        let mut output = [0u8; 8];
        let outcome = compress(&[], &mut output);

        let (consumed, produced) = outcome.into_counts().unwrap();
        assert_eq!(consumed, 0);
        assert_eq!(produced, 5);
        assert_eq!(&output[..5], &[0x80, 0x00, 0x00, 0xFF, 0xFF]);
    }

    #[test]
    fn test_single_block_boundary() {
        let input = vec![7u8; MAX_STORED_BLOCK];
        let mut output = vec![0u8; input.len() + BLOCK_OVERHEAD];

        let (consumed, produced) = compress(&input, &mut output).into_counts().unwrap();
        assert_eq!(consumed, input.len());
        assert_eq!(produced, input.len() + BLOCK_OVERHEAD);
        // One block, final flag set.
        assert_eq!(output[0], 0x80);
    }

    #[test]
    fn test_split_past_boundary() {
        let input = vec![7u8; MAX_STORED_BLOCK + 1];
        let mut output = vec![0u8; input.len() + 2 * BLOCK_OVERHEAD];

        let (consumed, produced) = compress(&input, &mut output).into_counts().unwrap();
        assert_eq!(consumed, input.len());
        assert_eq!(produced, input.len() + 2 * BLOCK_OVERHEAD);

        // First block: non-final, full length.
        assert_eq!(output[0], 0x00);
        assert_eq!(&output[1..3], &[0xFF, 0xFF]);
        // Second block starts right after: final, one byte.
        let second = MAX_STORED_BLOCK + BLOCK_OVERHEAD;
        assert_eq!(output[second], 0x80);
        assert_eq!(&output[second + 1..second + 3], &[0x00, 0x01]);
    }

    #[test]
    fn test_destination_too_small_writes_nothing() {
        let input = [1u8, 2, 3, 4, 5];
        let mut output = [0xEEu8; 8]; // needs len + 4 = 9, plus the header byte

        let outcome = compress(&input, &mut output);
        assert!(matches!(
            outcome.result,
            Err(ByteflateError::DestinationTooSmall { .. })
        ));
        assert_eq!(outcome.consumed, 0);
        assert_eq!(outcome.produced, 0);
        assert_eq!(output, [0xEE; 8]);
    }

    #[test]
    fn test_custom_block_size() {
        let input = [1u8, 2, 3, 4, 5, 6, 7];
        let mut encoder = FrameEncoder::with_block_size(3);
        let mut output = vec![0u8; encoder.compressed_bound(input.len())];

        let (consumed, produced) = encoder.compress(&input, &mut output).into_counts().unwrap();
        assert_eq!(consumed, 7);
        // Three blocks of 3 + 3 + 1 bytes.
        assert_eq!(produced, 7 + 3 * BLOCK_OVERHEAD);
        assert_eq!(output[0], 0x00);
        assert_eq!(output[8], 0x00);
        assert_eq!(output[16], 0x80);
    }

    #[test]
    fn test_block_size_clamped() {
        let encoder = FrameEncoder::with_block_size(0);
        assert_eq!(encoder.compressed_bound(2), 2 + 2 * BLOCK_OVERHEAD);

        let encoder = FrameEncoder::with_block_size(1 << 20);
        assert_eq!(
            encoder.compressed_bound(MAX_STORED_BLOCK),
            MAX_STORED_BLOCK + BLOCK_OVERHEAD
        );
    }

    #[test]
    fn test_compress_to_vec_exact() {
        let framed = compress_to_vec(&[0x01, 0x02, 0x03]).unwrap();
        assert_eq!(framed, [0x80, 0x00, 0x03, 0xFF, 0xFC, 0x01, 0x02, 0x03]);
    }
}
