use bytes::{Buf, Bytes, BytesMut};
use tracing::trace;

use crate::codec::{decode_frame, expected_length, Frame, MIN_FRAME_LEN, PREAMBLE};
use crate::error::Result;

const DEFAULT_INITIAL_CAPACITY: usize = 512;

/// Configuration for the stream scanner.
#[derive(Debug, Clone)]
pub struct ScannerConfig {
    /// Initial capacity of the receive buffer. The buffer grows as needed.
    pub initial_capacity: usize,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
        }
    }
}

/// Locates frame boundaries in an accumulating receive buffer.
///
/// Frames carry no length prefix, so a frame is only complete once the
/// preamble of the *following* frame has arrived. Everything from one
/// preamble up to the next is handed out as a candidate; a trailing partial
/// frame stays buffered across calls.
#[derive(Debug)]
pub struct FrameScanner {
    buf: BytesMut,
}

impl Default for FrameScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameScanner {
    /// Create a scanner with default configuration.
    pub fn new() -> Self {
        Self::with_config(ScannerConfig::default())
    }

    /// Create a scanner with explicit configuration.
    pub fn with_config(config: ScannerConfig) -> Self {
        Self {
            buf: BytesMut::with_capacity(config.initial_capacity),
        }
    }

    /// Append newly arrived bytes.
    pub fn push(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// Number of bytes currently buffered.
    pub fn buffered(&self) -> usize {
        self.buf.len()
    }

    /// Drop everything buffered.
    pub fn clear(&mut self) {
        self.buf.clear();
    }

    /// Extract the next preamble-to-preamble candidate.
    ///
    /// Returns `None` until a second preamble is present. Bytes ahead of the
    /// first preamble are discarded.
    pub fn next_candidate(&mut self) -> Option<Bytes> {
        let start = match find_preamble(&self.buf, 0) {
            Some(start) => start,
            None => {
                // Keep a possible split preamble at the tail.
                let keep = self.buf.len().min(PREAMBLE.len() - 1);
                let skip = self.buf.len() - keep;
                if skip > 0 {
                    trace!(skipped = skip, "no preamble in buffer, discarding");
                    self.buf.advance(skip);
                }
                return None;
            }
        };

        if start > 0 {
            trace!(skipped = start, "discarding bytes ahead of preamble");
            self.buf.advance(start);
        }

        let next = find_preamble(&self.buf, PREAMBLE.len())?;
        let candidate = self.buf.split_to(next).freeze();
        trace!(
            len = candidate.len(),
            remaining = self.buf.len(),
            "candidate frame"
        );
        Some(candidate)
    }

    /// Extract a trailing frame that is complete on its own.
    ///
    /// Used once the line has gone quiet: the last frame sent has no
    /// following preamble to delimit it. The buffer must hold exactly as many
    /// bytes as the leading control byte announces; otherwise everything
    /// stays buffered. The checksum is left to [`decode_frame`].
    pub fn take_complete(&mut self) -> Option<Bytes> {
        if self.buf.len() < MIN_FRAME_LEN || self.buf[..PREAMBLE.len()] != PREAMBLE {
            return None;
        }
        if self.buf.len() != expected_length(self.buf[PREAMBLE.len()]) {
            return None;
        }
        let frame = self.buf.split().freeze();
        trace!(len = frame.len(), "complete trailing frame");
        Some(frame)
    }

    /// Extract and decode the next candidate.
    ///
    /// Corrupt candidates come back as `Some(Err(_))` and are already
    /// consumed, so the caller can keep scanning.
    pub fn next_frame(&mut self) -> Option<Result<Frame>> {
        self.next_candidate()
            .map(|candidate| decode_frame(&candidate))
    }
}

fn find_preamble(haystack: &[u8], from: usize) -> Option<usize> {
    haystack
        .get(from..)?
        .windows(PREAMBLE.len())
        .position(|window| window == PREAMBLE)
        .map(|pos| pos + from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{encode, PacketType};
    use crate::error::FrameError;

    fn single(address: u8, value: [u8; 4]) -> Bytes {
        encode(PacketType::write(false), address, &value).unwrap()
    }

    fn drain(scanner: &mut FrameScanner) -> Vec<Bytes> {
        std::iter::from_fn(|| scanner.next_candidate()).collect()
    }

    #[test]
    fn holds_frame_until_next_preamble() {
        let mut scanner = FrameScanner::new();
        scanner.push(&single(0x55, [0, 0, 0, 1]));
        assert!(scanner.next_candidate().is_none());
        assert_eq!(scanner.buffered(), 11);

        scanner.push(&PREAMBLE);
        let frame = scanner.next_frame().unwrap().unwrap();
        assert_eq!(frame.address, 0x55);
        assert_eq!(frame.value(), Some([0, 0, 0, 1]));
        assert_eq!(scanner.buffered(), 3);
    }

    #[test]
    fn extracts_consecutive_frames() {
        let mut scanner = FrameScanner::new();
        scanner.push(&single(0x01, [1, 1, 1, 1]));
        scanner.push(&single(0x02, [2, 2, 2, 2]));
        scanner.push(&single(0x03, [3, 3, 3, 3]));

        let frames: Vec<Frame> = std::iter::from_fn(|| scanner.next_frame())
            .map(|frame| frame.unwrap())
            .collect();
        assert_eq!(
            frames.iter().map(|f| f.address).collect::<Vec<_>>(),
            vec![0x01, 0x02]
        );
        assert_eq!(scanner.buffered(), 11);
    }

    #[test]
    fn skips_garbage_before_preamble() {
        let mut scanner = FrameScanner::new();
        scanner.push(&[0x00, 0xFF, b's', b'n', 0x13]);
        scanner.push(&single(0x10, [9, 9, 9, 9]));
        scanner.push(&PREAMBLE);

        let frame = scanner.next_frame().unwrap().unwrap();
        assert_eq!(frame.address, 0x10);
    }

    #[test]
    fn keeps_split_preamble_when_no_frame_started() {
        let mut scanner = FrameScanner::new();
        scanner.push(&[0xAA, 0xBB, 0xCC, b's', b'n']);
        assert!(scanner.next_candidate().is_none());
        assert_eq!(scanner.buffered(), 2);

        let wire = single(0x20, [4, 3, 2, 1]);
        scanner.push(&wire[2..]);
        scanner.push(&PREAMBLE);
        let frame = scanner.next_frame().unwrap().unwrap();
        assert_eq!(frame.address, 0x20);
    }

    #[test]
    fn empty_frame_between_preambles_is_malformed() {
        let mut scanner = FrameScanner::new();
        scanner.push(b"snpsnp");
        let candidate = scanner.next_candidate().unwrap();
        assert_eq!(candidate.as_ref(), b"snp");

        scanner.push(b"snp");
        let err = scanner.next_frame().unwrap().unwrap_err();
        assert!(matches!(
            err,
            FrameError::Malformed {
                expected: 7,
                actual: 3
            }
        ));
    }

    #[test]
    fn corrupted_frame_does_not_stall_stream() {
        let mut scanner = FrameScanner::new();
        let mut bad = single(0x30, [1, 2, 3, 4]).to_vec();
        bad[6] ^= 0x40;
        scanner.push(&bad);
        scanner.push(&single(0x31, [5, 6, 7, 8]));
        scanner.push(&PREAMBLE);

        assert!(matches!(
            scanner.next_frame(),
            Some(Err(FrameError::Checksum { .. }))
        ));
        let frame = scanner.next_frame().unwrap().unwrap();
        assert_eq!(frame.address, 0x31);
    }

    #[test]
    fn split_feeding_matches_whole_feeding() {
        let mut stream = vec![0x42, 0x00];
        for address in 0..6u8 {
            stream.extend_from_slice(&single(address, [address, 0x73, 0x6E, address]));
        }
        stream.extend_from_slice(&encode(PacketType::read(true), 0x99, &[]).unwrap());
        stream.extend_from_slice(b"snp");

        let mut whole = FrameScanner::new();
        whole.push(&stream);
        let expected = drain(&mut whole);
        assert_eq!(expected.len(), 7);

        for chunk_size in [1usize, 2, 3, 5, 7, 11, 13] {
            let mut scanner = FrameScanner::new();
            let mut got = Vec::new();
            for chunk in stream.chunks(chunk_size) {
                scanner.push(chunk);
                got.extend(drain(&mut scanner));
            }
            assert_eq!(got, expected, "chunk size {chunk_size}");
        }
    }

    #[test]
    fn takes_complete_trailing_frame() {
        let mut scanner = FrameScanner::new();
        let wire = single(0x7E, [1, 2, 3, 4]);
        scanner.push(&wire[..8]);
        assert!(scanner.next_candidate().is_none());
        assert!(scanner.take_complete().is_none());

        scanner.push(&wire[8..]);
        assert_eq!(scanner.take_complete().unwrap(), wire);
        assert_eq!(scanner.buffered(), 0);
    }

    #[test]
    fn corrupt_trailing_frame_is_taken_for_decoding() {
        let mut scanner = FrameScanner::new();
        let mut wire = single(0x7E, [1, 2, 3, 4]).to_vec();
        wire[10] ^= 0x01;
        scanner.push(&wire);
        let candidate = scanner.take_complete().unwrap();
        assert!(matches!(
            decode_frame(&candidate),
            Err(FrameError::Checksum { .. })
        ));
    }

    #[test]
    fn trailing_bytes_without_preamble_are_not_taken() {
        let mut scanner = FrameScanner::new();
        scanner.push(&[0u8; 11]);
        assert!(scanner.take_complete().is_none());
    }

    #[test]
    fn clear_drops_buffered_bytes() {
        let mut scanner = FrameScanner::new();
        scanner.push(&single(0x01, [0; 4]));
        scanner.clear();
        assert_eq!(scanner.buffered(), 0);
    }
}
