//! Per-call coding state.

use byteflate_core::cursor::{ReadCursor, WriteCursor};

use crate::block::BlockType;

/// Mutable state for one compress or decompress call.
///
/// A session borrows both buffers exclusively for the duration of the call
/// and has no existence beyond it. The cursors only move forward, and the
/// stream-ended latch can be set but never cleared.
#[derive(Debug)]
pub struct Session<'a> {
    /// Bytes not yet consumed.
    pub input: ReadCursor<'a>,
    /// Destination space not yet written.
    pub output: WriteCursor<'a>,
    /// Type of the block currently being processed, `None` before the
    /// first header.
    pub block_type: Option<BlockType>,
    /// Whether the most recent header declared the last block.
    pub is_final_block: bool,
    stream_ended: bool,
}

impl<'a> Session<'a> {
    /// Create a fresh session over the two buffers.
    pub fn new(input: &'a [u8], output: &'a mut [u8]) -> Self {
        Self {
            input: ReadCursor::new(input),
            output: WriteCursor::new(output),
            block_type: None,
            is_final_block: false,
            stream_ended: false,
        }
    }

    /// Bytes consumed from the input so far.
    pub fn consumed(&self) -> usize {
        self.input.consumed()
    }

    /// Bytes written to the output so far.
    pub fn produced(&self) -> usize {
        self.output.produced()
    }

    /// Whether a final block has been fully consumed or emitted.
    pub fn stream_ended(&self) -> bool {
        self.stream_ended
    }

    /// Latch the stream as ended.
    pub fn end_stream(&mut self) {
        self.stream_ended = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_session() {
        let input = [1u8, 2, 3];
        let mut buf = [0u8; 8];
        let session = Session::new(&input, &mut buf);

        assert_eq!(session.consumed(), 0);
        assert_eq!(session.produced(), 0);
        assert_eq!(session.block_type, None);
        assert!(!session.is_final_block);
        assert!(!session.stream_ended());
    }

    #[test]
    fn test_counts_track_cursors() {
        let input = [1u8, 2, 3, 4];
        let mut buf = [0u8; 8];
        let mut session = Session::new(&input, &mut buf);

        session.input.take(3).unwrap();
        session.output.put(&[9, 9]).unwrap();

        assert_eq!(session.consumed(), 3);
        assert_eq!(session.produced(), 2);
    }

    #[test]
    fn test_end_stream_latches() {
        let mut buf = [0u8; 1];
        let mut session = Session::new(&[], &mut buf);

        session.end_stream();
        assert!(session.stream_ended());
    }
}
