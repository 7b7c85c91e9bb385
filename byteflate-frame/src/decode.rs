//! Stream decompression: the block-framing read loop.
//!
//! The decoder reads one header per iteration, dispatches to the payload
//! codec registered for the header's type, and stops once a block carrying
//! the final flag has been fully consumed. Bytes after the final block are
//! left untouched. A stream that runs out of input before a final block is
//! seen is truncated, not merely empty.

use byteflate_core::error::{ByteflateError, Result};
use byteflate_core::traits::{Decompressor, Outcome};

use crate::block::{decode_header, payload_codec};
use crate::session::Session;

/// Stored-block stream decoder.
///
/// # Example
///
/// ```
/// use byteflate_core::Decompressor;
/// use byteflate_frame::FrameDecoder;
///
/// let framed = [0x80, 0x00, 0x03, 0xFF, 0xFC, 0x01, 0x02, 0x03];
/// let mut output = [0u8; 8];
/// let outcome = FrameDecoder::new().decompress(&framed, &mut output);
/// let (consumed, produced) = outcome.into_counts().unwrap();
/// assert_eq!(consumed, 8);
/// assert_eq!(&output[..produced], &[0x01, 0x02, 0x03]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameDecoder;

impl FrameDecoder {
    /// Create a decoder.
    pub fn new() -> Self {
        Self
    }

    fn run(&self, session: &mut Session<'_>) -> Result<()> {
        while !session.stream_ended() && !session.input.is_empty() {
            let header = decode_header(&mut session.input)?;

            let codec = payload_codec(header.block_type).ok_or_else(|| {
                ByteflateError::unsupported_block_type(header.block_type.selector())
            })?;

            session.block_type = Some(header.block_type);
            session.is_final_block = header.is_final;

            codec.decode_payload(&mut session.input, &mut session.output)?;

            if session.is_final_block {
                session.end_stream();
            }
        }

        if !session.stream_ended() {
            // Input ran out before any block declared itself final.
            return Err(ByteflateError::truncated_input(1));
        }
        Ok(())
    }
}

impl Decompressor for FrameDecoder {
    fn decompress(&mut self, input: &[u8], output: &mut [u8]) -> Outcome {
        let mut session = Session::new(input, output);
        let result = self.run(&mut session);
        Outcome {
            consumed: session.consumed(),
            produced: session.produced(),
            result,
        }
    }
}

/// Decompress a stored-block stream from `input` into `output`.
///
/// Returns the [`Outcome`] with byte counts and the first error, if any.
pub fn decompress(input: &[u8], output: &mut [u8]) -> Outcome {
    FrameDecoder::new().decompress(input, output)
}

/// Decompress a stored-block stream into a freshly allocated buffer.
pub fn decompress_to_vec(input: &[u8]) -> Result<Vec<u8>> {
    // Framing only removes bytes, so the input length bounds the output.
    let mut output = vec![0u8; input.len()];
    let (_, produced) = FrameDecoder::new()
        .decompress(input, &mut output)
        .into_counts()?;
    output.truncate(produced);
    Ok(output)
}
