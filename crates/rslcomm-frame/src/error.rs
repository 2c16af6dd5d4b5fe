/// Errors that can occur during frame encoding/decoding.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FrameError {
    /// The batch length does not fit the 5-bit control byte field.
    #[error("batch length {0} exceeds maximum of 31")]
    InvalidBatchLength(u8),

    /// The payload handed to the encoder disagrees with the packet type.
    #[error("payload length {actual} does not match packet type (expected {expected})")]
    PayloadLength { expected: usize, actual: usize },

    /// The frame is too short, lacks a preamble, or its length disagrees
    /// with its control byte.
    #[error("malformed frame: expected {expected} bytes, got {actual}")]
    Malformed { expected: usize, actual: usize },

    /// The trailing checksum does not match the frame contents.
    #[error("checksum mismatch (computed 0x{computed:04x}, received 0x{received:04x})")]
    Checksum { computed: u16, received: u16 },
}

pub type Result<T> = std::result::Result<T, FrameError>;
