use bytes::{BufMut, Bytes, BytesMut};

use crate::error::{FrameError, Result};

/// Frame preamble: ASCII "snp".
pub const PREAMBLE: [u8; 3] = *b"snp";

/// Frame header: preamble (3) + packet type (1) + address (1) = 5 bytes.
pub const HEADER_SIZE: usize = 5;

/// Trailing big-endian checksum.
pub const CHECKSUM_SIZE: usize = 2;

/// Size of one register value.
pub const VALUE_SIZE: usize = 4;

/// Length of a frame without payload.
pub const MIN_FRAME_LEN: usize = HEADER_SIZE + CHECKSUM_SIZE;

/// Length of a frame carrying exactly one register value.
pub const SINGLE_VALUE_FRAME_LEN: usize = MIN_FRAME_LEN + VALUE_SIZE;

/// Largest batch the 5-bit control field can describe.
pub const MAX_BATCH_LENGTH: u8 = 31;

const HAS_DATA_BIT: u8 = 7;
const BATCH_SHIFT: u8 = 2;
const BATCH_MASK: u8 = 0x1F;
const HIDDEN_BIT: u8 = 1;
const ERROR_BIT: u8 = 0;

/// The packet-type control byte, unpacked.
///
/// ```text
/// bit  7        6..2           1        0
///      has_data batch_length   hidden   error
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PacketType {
    /// The frame carries payload bytes.
    pub has_data: bool,
    /// Number of consecutive registers carried (0 means a single value).
    pub batch_length: u8,
    /// The address refers to the hidden register space.
    pub hidden: bool,
    /// Set by the device when the command failed.
    pub error: bool,
}

impl PacketType {
    /// Packet type of a single-register read request.
    pub fn read(hidden: bool) -> Self {
        Self {
            hidden,
            ..Self::default()
        }
    }

    /// Packet type of a single-register write (one 4-byte value).
    pub fn write(hidden: bool) -> Self {
        Self {
            has_data: true,
            hidden,
            ..Self::default()
        }
    }

    /// Packet type of a batch read request for `count` consecutive registers.
    pub fn batch_read(count: u8, hidden: bool) -> Self {
        Self {
            batch_length: count,
            hidden,
            ..Self::default()
        }
    }

    /// Pack into the wire control byte.
    pub fn to_byte(self) -> Result<u8> {
        if self.batch_length > MAX_BATCH_LENGTH {
            return Err(FrameError::InvalidBatchLength(self.batch_length));
        }
        Ok((self.has_data as u8) << HAS_DATA_BIT
            | self.batch_length << BATCH_SHIFT
            | (self.hidden as u8) << HIDDEN_BIT
            | (self.error as u8) << ERROR_BIT)
    }

    /// Unpack a wire control byte. Every byte value is a valid packet type.
    pub fn from_byte(byte: u8) -> Self {
        Self {
            has_data: (byte >> HAS_DATA_BIT) & 1 == 1,
            batch_length: (byte >> BATCH_SHIFT) & BATCH_MASK,
            hidden: (byte >> HIDDEN_BIT) & 1 == 1,
            error: (byte >> ERROR_BIT) & 1 == 1,
        }
    }

    /// Payload bytes implied by this packet type.
    pub fn payload_len(self) -> usize {
        match (self.has_data, self.batch_length) {
            (false, _) => 0,
            (true, 0) => VALUE_SIZE,
            (true, n) => VALUE_SIZE * n as usize,
        }
    }

    /// Total wire length implied by this packet type.
    pub fn frame_len(self) -> usize {
        MIN_FRAME_LEN + self.payload_len()
    }
}

/// Wire length of a frame with the given control byte: 7, 11 or `7 + 4 * n`.
pub fn expected_length(control: u8) -> usize {
    PacketType::from_byte(control).frame_len()
}

/// Additive checksum, truncated to 16 bits.
pub fn checksum(bytes: &[u8]) -> u16 {
    bytes
        .iter()
        .fold(0u16, |acc, &byte| acc.wrapping_add(u16::from(byte)))
}

/// A validated register frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Unpacked control byte.
    pub packet_type: PacketType,
    /// Register address (start address for batches).
    pub address: u8,
    /// Payload, a multiple of four bytes.
    pub payload: Bytes,
}

impl Frame {
    /// Create a new frame.
    pub fn new(packet_type: PacketType, address: u8, payload: impl Into<Bytes>) -> Self {
        Self {
            packet_type,
            address,
            payload: payload.into(),
        }
    }

    /// A zero-payload request reading one register.
    pub fn read_request(address: u8, hidden: bool) -> Self {
        Self::new(PacketType::read(hidden), address, Bytes::new())
    }

    /// A single-value frame writing one register.
    pub fn write_request(address: u8, hidden: bool, value: [u8; VALUE_SIZE]) -> Self {
        Self::new(
            PacketType::write(hidden),
            address,
            Bytes::copy_from_slice(&value),
        )
    }

    /// The total wire size of this frame.
    pub fn wire_size(&self) -> usize {
        MIN_FRAME_LEN + self.payload.len()
    }

    /// Whether the frame addresses the hidden register space.
    pub fn is_hidden(&self) -> bool {
        self.packet_type.hidden
    }

    /// The first register value carried, if any.
    pub fn value(&self) -> Option<[u8; VALUE_SIZE]> {
        self.payload
            .get(..VALUE_SIZE)
            .and_then(|bytes| bytes.try_into().ok())
    }

    /// Every 4-byte register value carried, in address order.
    pub fn values(&self) -> impl Iterator<Item = [u8; VALUE_SIZE]> + '_ {
        self.payload
            .chunks_exact(VALUE_SIZE)
            .filter_map(|chunk| chunk.try_into().ok())
    }

    /// Encode into wire bytes.
    pub fn to_bytes(&self) -> Result<Bytes> {
        encode(self.packet_type, self.address, &self.payload)
    }
}

/// Encode a frame into the wire format.
///
/// ```text
/// ┌──────────────┬──────────┬─────────┬──────────────────┬─────────────┐
/// │ Preamble (3) │ Type (1) │ Addr (1)│ Payload (0/4/4n) │ Sum (2B BE) │
/// │ "snp"        │          │         │                  │             │
/// └──────────────┴──────────┴─────────┴──────────────────┴─────────────┘
/// ```
pub fn encode_frame(
    packet_type: PacketType,
    address: u8,
    payload: &[u8],
    dst: &mut BytesMut,
) -> Result<()> {
    let control = packet_type.to_byte()?;
    let expected = packet_type.payload_len();
    if payload.len() != expected {
        return Err(FrameError::PayloadLength {
            expected,
            actual: payload.len(),
        });
    }

    let start = dst.len();
    dst.reserve(MIN_FRAME_LEN + payload.len());
    dst.put_slice(&PREAMBLE);
    dst.put_u8(control);
    dst.put_u8(address);
    dst.put_slice(payload);
    let sum = checksum(&dst[start..]);
    dst.put_u16(sum);
    Ok(())
}

/// Encode a frame into a freshly allocated buffer.
pub fn encode(packet_type: PacketType, address: u8, payload: &[u8]) -> Result<Bytes> {
    let mut buf = BytesMut::with_capacity(MIN_FRAME_LEN + payload.len());
    encode_frame(packet_type, address, payload, &mut buf)?;
    Ok(buf.freeze())
}

/// Decode one complete candidate frame.
///
/// The checksum is verified before the length rule, so a single corrupted
/// byte anywhere in the frame reports [`FrameError::Checksum`].
pub fn decode_frame(bytes: &[u8]) -> Result<Frame> {
    if bytes.len() < MIN_FRAME_LEN {
        return Err(FrameError::Malformed {
            expected: MIN_FRAME_LEN,
            actual: bytes.len(),
        });
    }

    let (body, trailer) = bytes.split_at(bytes.len() - CHECKSUM_SIZE);
    let computed = checksum(body);
    let received = u16::from_be_bytes([trailer[0], trailer[1]]);
    if computed != received {
        return Err(FrameError::Checksum { computed, received });
    }

    let expected = expected_length(bytes[3]);
    if body[..PREAMBLE.len()] != PREAMBLE || bytes.len() != expected {
        return Err(FrameError::Malformed {
            expected,
            actual: bytes.len(),
        });
    }

    Ok(Frame {
        packet_type: PacketType::from_byte(bytes[3]),
        address: bytes[4],
        payload: Bytes::copy_from_slice(&body[HEADER_SIZE..]),
    })
}
