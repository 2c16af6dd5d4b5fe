use std::collections::VecDeque;
use std::time::Instant;

use bytes::Bytes;
use rslcomm_frame::{decode_frame, Frame, FrameError, FrameScanner, PacketType, MAX_BATCH_LENGTH, VALUE_SIZE};
use rslcomm_registers::{
    decode_register, Catalog, DecodedRegister, RegisterDescriptor, RegisterError, RegisterInput,
    ShearwaterCatalog,
};
use rslcomm_transport::{Transport, TransportError};
use serde::Serialize;
use tracing::{debug, trace, warn};

use crate::broadcast::Broadcasts;
use crate::config::DriverConfig;
use crate::demux::BroadcastTable;
use crate::error::{DriverError, Result};
use crate::packets::{BroadcastPacket, PacketKind};

/// Byte offset of the control byte inside a frame.
const CONTROL_OFFSET: usize = 3;
/// Byte offset of the address inside a frame.
const ADDRESS_OFFSET: usize = 4;

/// The register a transaction is waiting to hear from.
#[derive(Debug, Clone, Copy)]
struct Pending {
    address: u8,
    hidden: bool,
}

impl Pending {
    fn matches(&self, frame: &Frame) -> bool {
        frame.address == self.address && frame.is_hidden() == self.hidden
    }

    /// Whether raw, undecodable bytes name this register.
    fn claims(&self, candidate: &[u8]) -> bool {
        candidate.get(ADDRESS_OFFSET) == Some(&self.address)
            && candidate
                .get(CONTROL_OFFSET)
                .is_some_and(|&control| PacketType::from_byte(control).hidden == self.hidden)
    }
}

/// Link health counters since the driver was created.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LinkStats {
    pub requests_sent: u64,
    pub frames_received: u64,
    pub checksum_errors: u64,
    pub malformed_frames: u64,
    pub unknown_shapes: u64,
    pub broadcasts_queued: u64,
    pub broadcasts_dropped: u64,
    pub timeouts: u64,
}

/// Register access and broadcast decoding over one transport.
///
/// Every operation takes `&mut self`: one driver serves one physical link
/// and requests are strictly sequential. Frames that arrive while a request
/// waits for its reply are decoded and kept for [`Driver::broadcasts`].
pub struct Driver<T> {
    transport: T,
    scanner: FrameScanner,
    table: BroadcastTable,
    queue: VecDeque<BroadcastPacket>,
    config: DriverConfig,
    stats: LinkStats,
}

impl<T: Transport> Driver<T> {
    /// Create a driver with default timing.
    pub fn new(transport: T) -> Self {
        Self::with_config(transport, DriverConfig::default())
    }

    pub fn with_config(transport: T, config: DriverConfig) -> Self {
        Self {
            transport,
            scanner: FrameScanner::new(),
            table: BroadcastTable::shearwater(),
            queue: VecDeque::new(),
            config,
            stats: LinkStats::default(),
        }
    }

    /// Replace the broadcast layout table.
    pub fn with_table(mut self, table: BroadcastTable) -> Self {
        self.table = table;
        self
    }

    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    pub fn stats(&self) -> &LinkStats {
        &self.stats
    }

    pub fn table(&self) -> &BroadcastTable {
        &self.table
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    pub fn into_transport(self) -> T {
        self.transport
    }

    /// Broadcasts received during transactions and not yet consumed.
    pub fn queued_broadcasts(&self) -> usize {
        self.queue.len()
    }

    /// Read one register.
    ///
    /// The request is sent up to `read_attempts` times, all within
    /// `read_timeout`. Only a single-value reply from the same address and
    /// register space is accepted.
    pub fn read(&mut self, address: u8, hidden: bool) -> Result<[u8; VALUE_SIZE]> {
        let request = Frame::read_request(address, hidden);
        let reply = self.request_values(&request)?;
        reply.value().ok_or_else(|| {
            DriverError::Frame(FrameError::PayloadLength {
                expected: VALUE_SIZE,
                actual: reply.payload.len(),
            })
        })
    }

    /// Read `count` consecutive registers with one batch request.
    pub fn read_batch(&mut self, address: u8, count: u8, hidden: bool) -> Result<Vec<[u8; VALUE_SIZE]>> {
        if count == 0 || count > MAX_BATCH_LENGTH {
            return Err(FrameError::InvalidBatchLength(count).into());
        }
        let request = Frame::new(PacketType::batch_read(count, hidden), address, Bytes::new());
        let reply = self.request_values(&request)?;
        Ok(reply.values().collect())
    }

    /// Write one register.
    ///
    /// Any frame from the same address acknowledges the write. Writes are
    /// sent once; a missing acknowledgement is a [`DriverError::Timeout`].
    pub fn write(&mut self, address: u8, hidden: bool, value: impl Into<RegisterInput>) -> Result<()> {
        let payload = value.into().to_bytes()?;
        let request = Frame::write_request(address, hidden, payload);
        self.send(&request)?;

        let deadline = Instant::now() + self.config.write_timeout;
        let pending = Pending { address, hidden };
        match self.await_reply(pending, deadline, |frame| frame.address == address)? {
            Some(_) => {
                debug!(address, hidden, "write acknowledged");
                Ok(())
            }
            None => {
                self.stats.timeouts += 1;
                Err(DriverError::Timeout {
                    address: Some(address),
                    hidden,
                    timeout: self.config.write_timeout,
                })
            }
        }
    }

    /// Read and decode a register described by the catalogue.
    pub fn read_register(&mut self, register: &RegisterDescriptor) -> Result<DecodedRegister> {
        if !register.access.is_readable() {
            return Err(RegisterError::NotReadable(register.name).into());
        }
        let bytes = self.read(register.address, register.is_hidden())?;
        Ok(decode_register(register, bytes))
    }

    /// Write a register described by the catalogue.
    pub fn write_register(
        &mut self,
        register: &RegisterDescriptor,
        value: impl Into<RegisterInput>,
    ) -> Result<()> {
        if !register.access.is_writable() {
            return Err(RegisterError::NotWritable(register.name).into());
        }
        self.write(register.address, register.is_hidden(), value)
    }

    /// Trigger a command register. Commands carry no argument; zero is sent.
    pub fn command(&mut self, register: &RegisterDescriptor) -> Result<()> {
        debug!(command = register.name, "sending command");
        self.write_register(register, 0u32)
    }

    /// Read a Shearwater register by name.
    pub fn read_named(&mut self, name: &str) -> Result<DecodedRegister> {
        let register = ShearwaterCatalog::global().lookup(name)?;
        self.read_register(register)
    }

    /// Write a Shearwater register by name.
    pub fn write_named(&mut self, name: &str, value: impl Into<RegisterInput>) -> Result<()> {
        let register = ShearwaterCatalog::global().lookup(name)?;
        self.write_register(register, value)
    }

    /// Iterate over every broadcast packet the sensor emits.
    pub fn broadcasts(&mut self) -> Broadcasts<'_, T> {
        Broadcasts::new(self, None)
    }

    /// Iterate over broadcasts of one kind, discarding the others.
    pub fn broadcasts_of(&mut self, kind: PacketKind) -> Broadcasts<'_, T> {
        Broadcasts::new(self, Some(kind))
    }

    /// Send a request expecting a data reply, retrying within `read_timeout`.
    fn request_values(&mut self, request: &Frame) -> Result<Frame> {
        let address = request.address;
        let hidden = request.is_hidden();
        let expected_len = PacketType {
            has_data: true,
            ..request.packet_type
        }
        .frame_len();

        let attempts = self.config.read_attempts.max(1);
        let overall = Instant::now() + self.config.read_timeout;
        let is_reply = |frame: &Frame| {
            frame.address == address && frame.is_hidden() == hidden && frame.wire_size() == expected_len
        };

        for attempt in 1..=attempts {
            self.send(request)?;
            let deadline = if attempt == attempts {
                overall
            } else {
                (Instant::now() + self.config.read_attempt_timeout()).min(overall)
            };
            if let Some(reply) = self.await_reply(Pending { address, hidden }, deadline, &is_reply)? {
                debug!(address, hidden, attempt, "read reply");
                return Ok(reply);
            }
            debug!(address, hidden, attempt, "no reply to read request");
        }

        self.stats.timeouts += 1;
        Err(DriverError::Timeout {
            address: Some(address),
            hidden,
            timeout: self.config.read_timeout,
        })
    }

    fn send(&mut self, frame: &Frame) -> Result<()> {
        let bytes = frame.to_bytes()?;
        let written = self.transport.write(&bytes)?;
        if written != bytes.len() {
            return Err(TransportError::ShortWrite {
                written,
                expected: bytes.len(),
            }
            .into());
        }
        self.stats.requests_sent += 1;
        debug!(
            address = frame.address,
            hidden = frame.is_hidden(),
            len = bytes.len(),
            "sent frame"
        );
        Ok(())
    }

    /// Poll until `is_reply` accepts a frame or `deadline` passes.
    fn await_reply(
        &mut self,
        pending: Pending,
        deadline: Instant,
        is_reply: impl Fn(&Frame) -> bool,
    ) -> Result<Option<Frame>> {
        loop {
            while let Some(candidate) = self.scanner.next_candidate() {
                if let Some(reply) = self.inspect(&candidate, Some(pending), &is_reply)? {
                    return Ok(Some(reply));
                }
            }

            if Instant::now() >= deadline {
                return Ok(None);
            }

            let filled = match self.fill() {
                Ok(filled) => filled,
                Err(err) => {
                    // A reply that arrived just ahead of the link closing still counts.
                    if let Some(candidate) = self.scanner.take_complete() {
                        if let Some(reply) = self.inspect(&candidate, Some(pending), &is_reply)? {
                            return Ok(Some(reply));
                        }
                    }
                    return Err(err);
                }
            };
            if !filled {
                if let Some(candidate) = self.scanner.take_complete() {
                    if let Some(reply) = self.inspect(&candidate, Some(pending), &is_reply)? {
                        return Ok(Some(reply));
                    }
                    continue;
                }
                std::thread::sleep(self.config.poll_interval);
            }
        }
    }

    /// Move whatever the transport has into the scanner.
    fn fill(&mut self) -> Result<bool> {
        let bytes = self.transport.read_available()?;
        if bytes.is_empty() {
            return Ok(false);
        }
        trace!(len = bytes.len(), buffered = self.scanner.buffered(), "received bytes");
        self.scanner.push(&bytes);
        Ok(true)
    }

    /// Decode a candidate; a reply is returned, anything else is queued or dropped.
    ///
    /// Undecodable bytes that claim the pending register end the transaction
    /// instead of being retried. Error reports for other registers are skipped.
    fn inspect(
        &mut self,
        candidate: &[u8],
        pending: Option<Pending>,
        is_reply: &impl Fn(&Frame) -> bool,
    ) -> Result<Option<Frame>> {
        match decode_frame(candidate) {
            Ok(frame) => {
                self.stats.frames_received += 1;
                if frame.packet_type.error {
                    if pending.is_some_and(|pending| pending.matches(&frame)) {
                        return Err(DriverError::CommandFailed {
                            address: frame.address,
                            hidden: frame.is_hidden(),
                        });
                    }
                    warn!(
                        address = frame.address,
                        hidden = frame.is_hidden(),
                        "ignoring error report for another register"
                    );
                    return Ok(None);
                }
                if is_reply(&frame) {
                    return Ok(Some(frame));
                }
                self.route(&frame);
                Ok(None)
            }
            Err(err) => {
                match err {
                    FrameError::Checksum { .. } => self.stats.checksum_errors += 1,
                    _ => self.stats.malformed_frames += 1,
                }
                if pending.is_some_and(|pending| pending.claims(candidate)) {
                    return Err(err.into());
                }
                warn!(%err, len = candidate.len(), "discarding undecodable frame");
                Ok(None)
            }
        }
    }

    /// Queue a frame that is not a reply as a broadcast, if it is one.
    fn route(&mut self, frame: &Frame) {
        match self.table.decode(frame) {
            Ok(packet) => {
                if self.queue.len() >= self.config.broadcast_queue_capacity.max(1) {
                    self.queue.pop_front();
                    self.stats.broadcasts_dropped += 1;
                }
                trace!(kind = %packet.kind(), queued = self.queue.len() + 1, "queued broadcast");
                self.queue.push_back(packet);
                self.stats.broadcasts_queued += 1;
            }
            Err(err) => {
                self.stats.unknown_shapes += 1;
                warn!(%err, "ignoring unrecognised frame");
            }
        }
    }

    /// Take the oldest queued broadcast, skipping other kinds when filtered.
    pub(crate) fn pop_broadcast(&mut self, kind: Option<PacketKind>) -> Option<BroadcastPacket> {
        while let Some(packet) = self.queue.pop_front() {
            match kind {
                Some(kind) if packet.kind() != kind => {
                    trace!(skipped = %packet.kind(), wanted = %kind, "skipping broadcast");
                }
                _ => return Some(packet),
            }
        }
        None
    }

    /// Pull new bytes and queue every complete broadcast. Returns whether
    /// anything arrived.
    ///
    /// A transport error is returned only after the bytes already buffered
    /// have been queued.
    pub(crate) fn pump(&mut self) -> Result<bool> {
        let not_reply = |_: &Frame| false;
        let filled = self.fill();
        while let Some(candidate) = self.scanner.next_candidate() {
            self.inspect(&candidate, None, &not_reply)?;
        }
        if !matches!(filled, Ok(true)) {
            if let Some(candidate) = self.scanner.take_complete() {
                self.inspect(&candidate, None, &not_reply)?;
            }
        }
        filled
    }
}

impl<T> std::fmt::Debug for Driver<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Driver")
            .field("config", &self.config)
            .field("buffered", &self.scanner.buffered())
            .field("queued", &self.queue.len())
            .field("stats", &self.stats)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{broadcast_frame, MockSensor};
    use rslcomm_frame::{checksum, encode};
    use rslcomm_transport::StreamTransport;
    use std::io::{self, Cursor, Read, Write};
    use std::time::Duration;

    /// A stream that plays back canned sensor output, then hangs up.
    struct Recorded {
        rx: Cursor<Vec<u8>>,
        tx: Vec<u8>,
    }

    impl Read for Recorded {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            self.rx.read(buf)
        }
    }

    impl Write for Recorded {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.tx.write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn fast() -> DriverConfig {
        DriverConfig {
            read_timeout: Duration::from_millis(40),
            write_timeout: Duration::from_millis(20),
            broadcast_idle_timeout: Some(Duration::from_millis(20)),
            ..DriverConfig::default()
        }
    }

    fn quaternion_frame() -> Bytes {
        let mut payload = Vec::new();
        for component in [29789i16, 0, 0, 0] {
            payload.extend_from_slice(&component.to_be_bytes());
        }
        payload.extend_from_slice(&1.5f32.to_be_bytes());
        broadcast_frame(0x7E, &payload)
    }

    #[test]
    fn reads_register_value() {
        let mut sensor = MockSensor::default();
        sensor.set(0x66, false, 21.5f32.to_be_bytes());
        let mut driver = Driver::with_config(&mut sensor, fast());

        assert_eq!(driver.read(0x66, false).unwrap(), 21.5f32.to_be_bytes());
        assert_eq!(driver.stats().requests_sent, 1);
        drop(driver);
        assert_eq!(sensor.requests.len(), 1);
    }

    #[test]
    fn telemetry_during_read_is_queued() {
        let mut sensor = MockSensor::default();
        sensor.set(0x01, false, [0, 0, 0, 9]);
        sensor.before_reply.push(quaternion_frame());
        let mut driver = Driver::with_config(&mut sensor, fast());

        assert_eq!(driver.read(0x01, false).unwrap(), [0, 0, 0, 9]);
        assert_eq!(driver.queued_broadcasts(), 1);

        let packet = driver.broadcasts().next().unwrap().unwrap();
        let BroadcastPacket::Quaternion(q) = packet else {
            panic!("expected quaternion, got {packet:?}");
        };
        assert!((q.w - 1.0).abs() < 1e-4);
        assert_eq!(q.time, 1.5);
    }

    #[test]
    fn read_retries_once_within_deadline() {
        let mut sensor = MockSensor {
            ignore_requests: 1,
            ..Default::default()
        };
        sensor.set(0x02, false, [1, 2, 3, 4]);
        let mut driver = Driver::with_config(&mut sensor, fast());

        assert_eq!(driver.read(0x02, false).unwrap(), [1, 2, 3, 4]);
        drop(driver);
        assert_eq!(sensor.requests.len(), 2);
    }

    #[test]
    fn read_times_out_after_all_attempts() {
        let mut sensor = MockSensor {
            ignore_requests: usize::MAX,
            ..Default::default()
        };
        let mut driver = Driver::with_config(&mut sensor, fast());

        let started = Instant::now();
        let err = driver.read(0x03, true).unwrap_err();
        assert!(matches!(
            err,
            DriverError::Timeout {
                address: Some(0x03),
                hidden: true,
                ..
            }
        ));
        assert!(started.elapsed() >= Duration::from_millis(40));
        assert_eq!(driver.stats().timeouts, 1);
        drop(driver);
        assert_eq!(sensor.requests.len(), 2);
    }

    #[test]
    fn hidden_read_ignores_main_space_reply() {
        let mut sensor = MockSensor::default();
        sensor.set(0x04, false, [0xAA; 4]);
        sensor.set(0x04, true, [0xBB; 4]);
        sensor.before_reply.push(
            Frame::write_request(0x04, false, [0xAA; 4])
                .to_bytes()
                .unwrap(),
        );
        let mut driver = Driver::with_config(&mut sensor, fast());

        assert_eq!(driver.read(0x04, true).unwrap(), [0xBB; 4]);
    }

    #[test]
    fn write_sends_once_without_retry() {
        let mut sensor = MockSensor {
            ignore_requests: usize::MAX,
            ..Default::default()
        };
        let mut driver = Driver::with_config(&mut sensor, fast());

        assert!(driver.write(0x09, false, 1.0f32).unwrap_err().is_timeout());
        drop(driver);
        assert_eq!(sensor.requests.len(), 1);
        assert_eq!(sensor.requests[0].payload.as_ref(), &[0x3F, 0x80, 0x00, 0x00]);
    }

    #[test]
    fn write_is_acknowledged() {
        let mut sensor = MockSensor::default();
        let mut driver = Driver::with_config(&mut sensor, fast());

        driver.write(0x10, false, -2i32).unwrap();
        drop(driver);
        assert_eq!(sensor.get(0x10, false), Some([0xFF, 0xFF, 0xFF, 0xFE]));
    }

    #[test]
    fn error_bit_is_command_failure() {
        let mut sensor = MockSensor {
            reply_error: true,
            ..Default::default()
        };
        let mut driver = Driver::with_config(&mut sensor, fast());

        let err = driver.write(0xAE, false, 0u32).unwrap_err();
        assert!(matches!(
            err,
            DriverError::CommandFailed {
                address: 0xAE,
                hidden: false
            }
        ));
    }

    #[test]
    fn corrupt_reply_is_checksum_error() {
        let mut sensor = MockSensor {
            corrupt_reply: true,
            ..Default::default()
        };
        sensor.set(0x05, false, [5; 4]);
        let mut driver = Driver::with_config(&mut sensor, fast());

        let err = driver.read(0x05, false).unwrap_err();
        assert!(matches!(err, DriverError::Frame(FrameError::Checksum { .. })));
        drop(driver);
        assert_eq!(sensor.requests.len(), 1);
    }

    #[test]
    fn corrupt_unrelated_frame_is_skipped() {
        let mut sensor = MockSensor::default();
        sensor.set(0x06, false, [6; 4]);
        let mut garbage = quaternion_frame().to_vec();
        garbage[8] ^= 0xFF;
        sensor.before_reply.push(Bytes::from(garbage));
        let mut driver = Driver::with_config(&mut sensor, fast());

        assert_eq!(driver.read(0x06, false).unwrap(), [6; 4]);
        assert_eq!(driver.stats().checksum_errors, 1);
        assert_eq!(driver.queued_broadcasts(), 0);
    }

    #[test]
    fn short_write_is_transport_error() {
        let mut sensor = MockSensor {
            accept_limit: Some(5),
            ..Default::default()
        };
        let mut driver = Driver::with_config(&mut sensor, fast());

        let err = driver.read(0x07, false).unwrap_err();
        assert!(matches!(
            err,
            DriverError::Transport(TransportError::ShortWrite {
                written: 5,
                expected: 7
            })
        ));
    }

    #[test]
    fn batch_read_returns_consecutive_values() {
        let mut sensor = MockSensor::default();
        for (i, address) in (0x86..=0x89).enumerate() {
            sensor.set(address, false, (i as f32).to_be_bytes());
        }
        let mut driver = Driver::with_config(&mut sensor, fast());

        let values = driver.read_batch(0x86, 4, false).unwrap();
        assert_eq!(values.len(), 4);
        assert_eq!(values[3], 3.0f32.to_be_bytes());
        assert!(matches!(
            driver.read_batch(0x86, 0, false),
            Err(DriverError::Frame(FrameError::InvalidBatchLength(0)))
        ));
    }

    #[test]
    fn catalogue_access_rules_are_enforced() {
        let mut sensor = MockSensor::default();
        let mut driver = Driver::with_config(&mut sensor, fast());
        let catalog = ShearwaterCatalog::global();

        let command = catalog.lookup("ZERO_GYROS").unwrap();
        assert!(matches!(
            driver.read_register(command),
            Err(DriverError::Register(RegisterError::NotReadable("ZERO_GYROS")))
        ));
        let health = catalog.lookup("DREG_HEALTH").unwrap();
        assert!(matches!(
            driver.write_register(health, 1u32),
            Err(DriverError::Register(RegisterError::NotWritable("DREG_HEALTH")))
        ));
        assert!(matches!(
            driver.read_named("NO_SUCH_REGISTER"),
            Err(DriverError::Register(RegisterError::UnknownName(_)))
        ));
        drop(driver);
        assert!(sensor.requests.is_empty());
    }

    #[test]
    fn command_writes_zero() {
        let mut sensor = MockSensor::default();
        let mut driver = Driver::with_config(&mut sensor, fast());
        let command = ShearwaterCatalog::global().lookup("FLASH_COMMIT").unwrap();

        driver.command(command).unwrap();
        drop(driver);
        assert_eq!(sensor.requests[0].address, 0xAC);
        assert_eq!(sensor.requests[0].value(), Some([0; 4]));
    }

    #[test]
    fn read_register_decodes_fields() {
        let mut sensor = MockSensor::default();
        sensor.set(0xAB, false, [2, 1, 0, 42]);
        let mut driver = Driver::with_config(&mut sensor, fast());

        let decoded = driver.read_named("get_fw_build_version").unwrap();
        assert_eq!(decoded.raw, 0x0201_002A);
        assert_eq!(
            decoded.value.to_string(),
            "VERSION_MAJOR=2, VERSION_MINOR=1, BUILD_ID=42"
        );
    }

    #[test]
    fn queue_drops_oldest_when_full() {
        let mut sensor = MockSensor::default();
        sensor.set(0x01, false, [0; 4]);
        for _ in 0..3 {
            sensor.before_reply.push(quaternion_frame());
        }
        let config = DriverConfig {
            broadcast_queue_capacity: 2,
            ..fast()
        };
        let mut driver = Driver::with_config(&mut sensor, config);

        driver.read(0x01, false).unwrap();
        assert_eq!(driver.queued_broadcasts(), 2);
        assert_eq!(driver.stats().broadcasts_dropped, 1);
    }

    #[test]
    fn reply_arriving_before_link_closes_is_kept() {
        let mut sensor = MockSensor {
            fail_when_drained: true,
            ..Default::default()
        };
        sensor.set(0x55, false, [0, 0, 0, 7]);
        let mut driver = Driver::with_config(&mut sensor, fast());

        assert_eq!(driver.read(0x55, false).unwrap(), [0, 0, 0, 7]);
        assert_eq!(driver.stats().timeouts, 0);
    }

    #[test]
    fn stream_reply_then_eof_is_read() {
        let reply_type = PacketType {
            has_data: true,
            ..PacketType::default()
        };
        let reply = encode(reply_type, 0x55, &[0, 0, 0, 7]).unwrap();
        let link = Recorded {
            rx: Cursor::new(reply.to_vec()),
            tx: Vec::new(),
        };
        let mut driver = Driver::with_config(StreamTransport::new(link), fast());

        assert_eq!(driver.read(0x55, false).unwrap(), [0, 0, 0, 7]);
        assert!(matches!(
            driver.read(0x55, false),
            Err(DriverError::Transport(TransportError::Closed))
        ));

        let sent = driver.into_transport().into_inner().tx;
        let request = decode_frame(&sent[..7]).unwrap();
        assert_eq!(request.address, 0x55);
        assert!(!request.packet_type.has_data);
    }

    #[test]
    fn malformed_reply_for_pending_register_is_not_retried() {
        // Control byte announces an empty frame but four data bytes follow.
        let mut body = b"snp\x00\x08".to_vec();
        body.extend_from_slice(&[1, 2, 3, 4]);
        let sum = checksum(&body);
        body.extend_from_slice(&sum.to_be_bytes());

        let mut sensor = MockSensor::default();
        sensor.before_reply.push(Bytes::from(body));
        let mut driver = Driver::with_config(&mut sensor, fast());

        let err = driver.read(0x08, false).unwrap_err();
        assert!(matches!(
            err,
            DriverError::Frame(FrameError::Malformed {
                expected: 7,
                actual: 11
            })
        ));
        assert_eq!(driver.stats().malformed_frames, 1);
        drop(driver);
        assert_eq!(sensor.requests.len(), 1);
    }

    #[test]
    fn error_report_from_other_space_does_not_fail_write() {
        let hidden_error = PacketType {
            error: true,
            ..PacketType::read(true)
        };
        let mut sensor = MockSensor::default();
        sensor.before_reply.push(encode(hidden_error, 0x10, &[]).unwrap());
        let mut driver = Driver::with_config(&mut sensor, fast());

        driver.write(0x10, false, 3u32).unwrap();
        assert_eq!(driver.stats().frames_received, 2);
        drop(driver);
        assert_eq!(sensor.get(0x10, false), Some([0, 0, 0, 3]));
    }
}
