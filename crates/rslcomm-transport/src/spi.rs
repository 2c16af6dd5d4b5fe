use bytes::{Bytes, BytesMut};
use rslcomm_frame::{decode_frame, Frame, PacketType, VALUE_SIZE};
use tracing::{debug, trace};

use crate::error::{Result, TransportError};
use crate::traits::Transport;

const SPI_READ: u8 = 0x00;
const SPI_WRITE: u8 = 0x01;

/// A full-duplex SPI master with chip select handled per transfer.
pub trait SpiBus {
    /// Clock `tx` out and return the bytes clocked in, same length.
    fn transfer(&mut self, tx: &[u8]) -> Result<Vec<u8>>;
}

impl<B: SpiBus + ?Sized> SpiBus for &mut B {
    fn transfer(&mut self, tx: &[u8]) -> Result<Vec<u8>> {
        (**self).transfer(tx)
    }
}

/// Presents the sensor's SPI register interface as a frame transport.
///
/// Each frame written is executed immediately as one SPI register cycle and
/// the answer the sensor would have sent over UART is queued for
/// [`Transport::read_available`]. A read answers with a single-value frame;
/// a write answers with an empty acknowledgement at the same address.
///
/// The SPI interface only reaches the main register space one register at a
/// time: hidden and batch requests are rejected.
#[derive(Debug)]
pub struct SpiBridgeTransport<B> {
    bus: B,
    pending: BytesMut,
}

impl<B: SpiBus> SpiBridgeTransport<B> {
    pub fn new(bus: B) -> Self {
        Self {
            bus,
            pending: BytesMut::new(),
        }
    }

    /// Borrow the underlying bus.
    pub fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }

    fn read_register(&mut self, address: u8) -> Result<[u8; VALUE_SIZE]> {
        let rx = self.bus.transfer(&[SPI_READ, address, 0, 0, 0, 0])?;
        rx.get(2..2 + VALUE_SIZE)
            .and_then(|value| value.try_into().ok())
            .ok_or_else(|| {
                TransportError::Spi(format!("short SPI read reply ({} bytes)", rx.len()))
            })
    }

    fn write_register(&mut self, address: u8, value: [u8; VALUE_SIZE]) -> Result<()> {
        let mut tx = [SPI_WRITE, address, 0, 0, 0, 0];
        tx[2..].copy_from_slice(&value);
        self.bus.transfer(&tx)?;
        Ok(())
    }

    fn execute(&mut self, request: &Frame) -> Result<Frame> {
        let packet_type = request.packet_type;
        if packet_type.hidden {
            return Err(TransportError::Unsupported(
                "hidden registers are not reachable over SPI",
            ));
        }

        match (packet_type.has_data, packet_type.batch_length) {
            (false, 0) => {
                let value = self.read_register(request.address)?;
                trace!(address = request.address, ?value, "spi read");
                Ok(Frame::write_request(request.address, false, value))
            }
            (true, 0) => {
                let value = request.value().ok_or(TransportError::Unsupported(
                    "write frame without a value",
                ))?;
                self.write_register(request.address, value)?;
                trace!(address = request.address, ?value, "spi write");
                Ok(Frame::new(PacketType::read(false), request.address, Bytes::new()))
            }
            _ => Err(TransportError::Unsupported(
                "batch transfers are not supported over SPI",
            )),
        }
    }
}

impl<B: SpiBus> Transport for SpiBridgeTransport<B> {
    fn write(&mut self, bytes: &[u8]) -> Result<usize> {
        let request = decode_frame(bytes)
            .map_err(|e| TransportError::Spi(format!("cannot bridge frame: {e}")))?;
        let response = self.execute(&request)?;
        let encoded = response
            .to_bytes()
            .map_err(|e| TransportError::Spi(format!("cannot encode response: {e}")))?;
        debug!(
            address = request.address,
            response_len = encoded.len(),
            "bridged frame over SPI"
        );
        self.pending.extend_from_slice(&encoded);
        Ok(bytes.len())
    }

    fn read_available(&mut self) -> Result<Bytes> {
        Ok(self.pending.split().freeze())
    }

    fn bytes_available(&mut self) -> Result<usize> {
        Ok(self.pending.len())
    }

    fn transport_name(&self) -> &'static str {
        "spi-bridge"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Default)]
    struct RegisterBus {
        registers: HashMap<u8, [u8; 4]>,
        transfers: Vec<Vec<u8>>,
    }

    impl SpiBus for RegisterBus {
        fn transfer(&mut self, tx: &[u8]) -> Result<Vec<u8>> {
            self.transfers.push(tx.to_vec());
            let mut rx = vec![0u8; tx.len()];
            match tx[0] {
                SPI_READ => {
                    let value = self.registers.get(&tx[1]).copied().unwrap_or_default();
                    rx[2..6].copy_from_slice(&value);
                }
                SPI_WRITE => {
                    let mut value = [0u8; 4];
                    value.copy_from_slice(&tx[2..6]);
                    self.registers.insert(tx[1], value);
                }
                other => panic!("unexpected SPI command {other:#04x}"),
            }
            Ok(rx)
        }
    }

    fn request(frame: Frame) -> Bytes {
        frame.to_bytes().unwrap()
    }

    #[test]
    fn read_synthesizes_value_frame() {
        let mut bus = RegisterBus::default();
        bus.registers.insert(0x7E, [0x12, 0x34, 0x56, 0x78]);
        let mut transport = SpiBridgeTransport::new(bus);

        let wire = request(Frame::read_request(0x7E, false));
        assert_eq!(transport.write(&wire).unwrap(), 7);
        assert_eq!(transport.bytes_available().unwrap(), 11);

        let response = decode_frame(&transport.read_available().unwrap()).unwrap();
        assert_eq!(response.address, 0x7E);
        assert!(!response.is_hidden());
        assert_eq!(response.value(), Some([0x12, 0x34, 0x56, 0x78]));
        assert_eq!(transport.bus_mut().transfers[0], vec![0x00, 0x7E, 0, 0, 0, 0]);
    }

    #[test]
    fn write_stores_and_acknowledges() {
        let mut transport = SpiBridgeTransport::new(RegisterBus::default());
        let wire = request(Frame::write_request(0x09, false, [0x3F, 0x80, 0, 0]));
        transport.write(&wire).unwrap();

        let ack = decode_frame(&transport.read_available().unwrap()).unwrap();
        assert_eq!(ack.address, 0x09);
        assert!(ack.payload.is_empty());
        assert_eq!(
            transport.bus_mut().registers.get(&0x09),
            Some(&[0x3F, 0x80, 0, 0])
        );
        assert_eq!(
            transport.bus_mut().transfers[0],
            vec![0x01, 0x09, 0x3F, 0x80, 0, 0]
        );
    }

    #[test]
    fn hidden_request_unsupported() {
        let mut transport = SpiBridgeTransport::new(RegisterBus::default());
        let wire = request(Frame::read_request(0x00, true));
        assert!(matches!(
            transport.write(&wire),
            Err(TransportError::Unsupported(_))
        ));
        assert!(transport.bus_mut().transfers.is_empty());
    }

    #[test]
    fn batch_request_unsupported() {
        let mut transport = SpiBridgeTransport::new(RegisterBus::default());
        let wire = request(Frame::new(PacketType::batch_read(4, false), 0x56, Bytes::new()));
        assert!(matches!(
            transport.write(&wire),
            Err(TransportError::Unsupported(_))
        ));
    }

    #[test]
    fn undecodable_bytes_rejected() {
        let mut transport = SpiBridgeTransport::new(RegisterBus::default());
        assert!(matches!(
            transport.write(b"snp\x00"),
            Err(TransportError::Spi(_))
        ));
    }
}
