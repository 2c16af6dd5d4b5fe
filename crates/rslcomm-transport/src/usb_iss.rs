use std::io::{Read, Write};

use tracing::debug;

use crate::error::{Result, TransportError};
use crate::spi::SpiBus;

const ISS_CMD: u8 = 0x5A;
const ISS_SET_MODE: u8 = 0x02;
const SPI_TRANSFER: u8 = 0x61;
const ACK: u8 = 0xFF;

/// SPI mode 0: clock idle low, sample on the leading edge.
pub const SPI_MODE_0: u8 = 0x90;
/// Largest transfer the adapter accepts in one command.
pub const MAX_TRANSFER: usize = 62;

/// USB-ISS adapter settings.
#[derive(Debug, Clone)]
pub struct UsbIssConfig {
    /// ISS operating mode byte (`0x90`..=`0x93` select SPI modes).
    pub mode: u8,
    /// SCK = 6 MHz / (divisor + 1).
    pub clock_divisor: u8,
}

impl Default for UsbIssConfig {
    fn default() -> Self {
        Self {
            mode: SPI_MODE_0,
            clock_divisor: 11,
        }
    }
}

/// [`SpiBus`] over a Devantech USB-ISS adapter's command channel.
///
/// `S` is the adapter's virtual serial port; it must block on read for a
/// bounded time (see [`crate::SerialPort`]).
#[derive(Debug)]
pub struct UsbIssSpi<S> {
    port: S,
}

impl<S: Read + Write> UsbIssSpi<S> {
    /// Switch the adapter to SPI mode and return the bus.
    pub fn new(mut port: S, config: UsbIssConfig) -> Result<Self> {
        port.write_all(&[ISS_CMD, ISS_SET_MODE, config.mode, config.clock_divisor])?;
        port.flush()?;

        let mut reply = [0u8; 2];
        port.read_exact(&mut reply)?;
        if reply[0] != ACK {
            return Err(TransportError::Spi(format!(
                "adapter refused mode {:#04x} (error code {:#04x})",
                config.mode, reply[1]
            )));
        }

        debug!(
            mode = config.mode,
            divisor = config.clock_divisor,
            "usb-iss configured for SPI"
        );
        Ok(Self { port })
    }

    pub fn into_inner(self) -> S {
        self.port
    }
}

impl<S: Read + Write> SpiBus for UsbIssSpi<S> {
    fn transfer(&mut self, tx: &[u8]) -> Result<Vec<u8>> {
        if tx.len() > MAX_TRANSFER {
            return Err(TransportError::Unsupported("SPI transfer longer than 62 bytes"));
        }

        let mut command = Vec::with_capacity(tx.len() + 1);
        command.push(SPI_TRANSFER);
        command.extend_from_slice(tx);
        self.port.write_all(&command)?;
        self.port.flush()?;

        let mut reply = vec![0u8; tx.len() + 1];
        self.port.read_exact(&mut reply)?;
        if reply[0] != ACK {
            return Err(TransportError::Spi("transfer not acknowledged".into()));
        }
        reply.remove(0);
        Ok(reply)
    }
}
