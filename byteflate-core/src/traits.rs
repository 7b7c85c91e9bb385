//! Core traits for block coding operations.
//!
//! Codecs transform one caller-owned input buffer into one caller-owned
//! output buffer in a single synchronous call. The whole-call report is an
//! [`Outcome`]: byte counts are part of the contract on failure as well as
//! success, so a caller can always tell how far processing got before an
//! error surfaced.

use crate::error::Result;

/// Byte counts and final status of a whole-stream coding call.
#[derive(Debug)]
pub struct Outcome {
    /// Bytes consumed from the input buffer, including any consumed before
    /// a failure.
    pub consumed: usize,
    /// Bytes written to the output buffer, including any written before a
    /// failure. Nothing past this offset is valid output.
    pub produced: usize,
    /// `Ok(())` when the whole stream was processed, otherwise the first
    /// error encountered.
    pub result: Result<()>,
}

impl Outcome {
    /// Whether the call processed the whole stream.
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }

    /// Convert into `(consumed, produced)`, surfacing the error if any.
    pub fn into_counts(self) -> Result<(usize, usize)> {
        self.result.map(|()| (self.consumed, self.produced))
    }
}

/// A whole-buffer compressor.
pub trait Compressor {
    /// Compress `input` into `output`.
    ///
    /// Both buffers are borrowed exclusively for the duration of the call;
    /// the codec retains nothing afterwards.
    fn compress(&mut self, input: &[u8], output: &mut [u8]) -> Outcome;
}

/// A whole-buffer decompressor.
pub trait Decompressor {
    /// Decompress `input` into `output`.
    ///
    /// Both buffers are borrowed exclusively for the duration of the call;
    /// the codec retains nothing afterwards.
    fn decompress(&mut self, input: &[u8], output: &mut [u8]) -> Outcome;
}
