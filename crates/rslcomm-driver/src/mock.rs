use std::collections::HashMap;

use bytes::{Bytes, BytesMut};
use rslcomm_frame::{decode_frame, encode, Frame, PacketType};
use rslcomm_transport::{Transport, TransportError};

/// In-memory sensor answering register requests over the frame protocol.
#[derive(Default)]
pub(crate) struct MockSensor {
    pub registers: HashMap<(u8, bool), [u8; 4]>,
    pub requests: Vec<Frame>,
    pub inbox: BytesMut,
    /// Requests swallowed without any reply.
    pub ignore_requests: usize,
    /// Reply with the error bit set.
    pub reply_error: bool,
    /// Flip a checksum bit in every reply.
    pub corrupt_reply: bool,
    /// Accept at most this many bytes per write.
    pub accept_limit: Option<usize>,
    /// Frames emitted ahead of the next reply.
    pub before_reply: Vec<Bytes>,
    /// Frames delivered one per poll, with no request needed.
    pub stream: Vec<Bytes>,
    /// Fail reads once the stream is exhausted.
    pub fail_when_drained: bool,
}

impl MockSensor {
    pub fn set(&mut self, address: u8, hidden: bool, value: [u8; 4]) {
        self.registers.insert((address, hidden), value);
    }

    pub fn get(&self, address: u8, hidden: bool) -> Option<[u8; 4]> {
        self.registers.get(&(address, hidden)).copied()
    }

    fn reply_to(&mut self, request: &Frame) -> Frame {
        let hidden = request.is_hidden();
        let packet_type = request.packet_type;
        if self.reply_error {
            let mut error = PacketType::read(hidden);
            error.error = true;
            return Frame::new(error, request.address, Bytes::new());
        }
        if packet_type.has_data {
            if let Some(value) = request.value() {
                self.set(request.address, hidden, value);
            }
            return Frame::new(PacketType::read(hidden), request.address, Bytes::new());
        }

        let count = packet_type.batch_length.max(1);
        let mut payload = Vec::new();
        for offset in 0..count {
            let address = request.address.wrapping_add(offset);
            payload.extend_from_slice(&self.get(address, hidden).unwrap_or_default());
        }
        let reply_type = PacketType {
            has_data: true,
            batch_length: packet_type.batch_length,
            hidden,
            error: false,
        };
        Frame::new(reply_type, request.address, payload)
    }
}

impl Transport for MockSensor {
    fn write(&mut self, bytes: &[u8]) -> Result<usize, TransportError> {
        if let Some(limit) = self.accept_limit {
            return Ok(limit.min(bytes.len()));
        }
        let request = decode_frame(bytes).expect("driver sent an invalid frame");
        self.requests.push(request.clone());
        if self.ignore_requests > 0 {
            self.ignore_requests -= 1;
            return Ok(bytes.len());
        }

        for frame in self.before_reply.drain(..) {
            self.inbox.extend_from_slice(&frame);
        }
        let reply = self.reply_to(&request);
        let mut wire = reply.to_bytes().expect("reply encodes").to_vec();
        if self.corrupt_reply {
            let last = wire.len() - 1;
            wire[last] ^= 0x01;
        }
        self.inbox.extend_from_slice(&wire);
        Ok(bytes.len())
    }

    fn read_available(&mut self) -> Result<Bytes, TransportError> {
        if !self.stream.is_empty() {
            let frame = self.stream.remove(0);
            self.inbox.extend_from_slice(&frame);
        } else if self.fail_when_drained && self.inbox.is_empty() {
            return Err(TransportError::Closed);
        }
        Ok(self.inbox.split().freeze())
    }

    fn bytes_available(&mut self) -> Result<usize, TransportError> {
        Ok(self.inbox.len())
    }
}

/// A batch frame carrying `payload` from `address`.
pub(crate) fn broadcast_frame(address: u8, payload: &[u8]) -> Bytes {
    let packet_type = PacketType {
        has_data: true,
        batch_length: (payload.len() / 4) as u8,
        hidden: false,
        error: false,
    };
    encode(packet_type, address, payload).expect("broadcast encodes")
}
