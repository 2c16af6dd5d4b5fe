//! Register frame codec and byte stream scanner.
//!
//! Every frame on the wire is laid out as:
//! - A 3-byte preamble (`"snp"`)
//! - A packet-type control byte (has-data, batch length, hidden, error)
//! - A register address
//! - 0, 4 or `4 * batch_length` payload bytes
//! - A 2-byte big-endian additive checksum
//!
//! The protocol carries no length prefix. Frames are delimited by scanning
//! from one preamble to the next, see [`FrameScanner`].

pub mod codec;
pub mod error;
pub mod scanner;

pub use codec::{
    checksum, decode_frame, encode, encode_frame, expected_length, Frame, PacketType,
    CHECKSUM_SIZE, HEADER_SIZE, MAX_BATCH_LENGTH, MIN_FRAME_LEN, PREAMBLE, SINGLE_VALUE_FRAME_LEN,
    VALUE_SIZE,
};
pub use error::{FrameError, Result};
pub use scanner::{FrameScanner, ScannerConfig};
