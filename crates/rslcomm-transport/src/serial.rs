use std::io::{self, ErrorKind, Read, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use bytes::{Bytes, BytesMut};
use serialport::{ClearBuffer, DataBits, FlowControl, Parity, StopBits};
use tracing::{debug, trace};

use crate::error::{Result, TransportError};
use crate::traits::Transport;

/// Serial line settings. Framing is always 8N1 without flow control.
#[derive(Debug, Clone)]
pub struct SerialConfig {
    /// Line rate in bits per second.
    pub baud_rate: u32,
    /// How long a blocking [`Read::read`] waits for the first byte.
    pub read_timeout: Duration,
}

impl Default for SerialConfig {
    fn default() -> Self {
        Self {
            baud_rate: 115_200,
            read_timeout: Duration::from_millis(100),
        }
    }
}

/// A UART device (`/dev/ttyUSB0`, `/dev/cu.usbserial-*`, `COM3`).
///
/// [`Transport::read_available`] only takes what the driver reports as
/// queued, so it never waits on the line.
pub struct SerialPort {
    port: Box<dyn serialport::SerialPort>,
    path: PathBuf,
    config: SerialConfig,
}

impl SerialPort {
    /// Open and configure a serial device.
    pub fn open(path: impl AsRef<Path>, config: SerialConfig) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let port = serialport::new(path.to_string_lossy(), config.baud_rate)
            .data_bits(DataBits::Eight)
            .parity(Parity::None)
            .stop_bits(StopBits::One)
            .flow_control(FlowControl::None)
            .timeout(config.read_timeout)
            .open()
            .and_then(|port| {
                port.clear(ClearBuffer::All)?;
                Ok(port)
            })
            .map_err(|err| TransportError::Open {
                path: path.clone(),
                source: io::Error::from(err),
            })?;

        debug!(?path, baud = config.baud_rate, "opened serial port");
        Ok(Self { port, path, config })
    }

    /// The device path this port was opened on.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Active line settings.
    pub fn config(&self) -> &SerialConfig {
        &self.config
    }
}

impl Read for SerialPort {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.port.read(buf)
    }
}

impl Write for SerialPort {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.port.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.port.flush()
    }
}

impl Transport for SerialPort {
    fn write(&mut self, bytes: &[u8]) -> Result<usize> {
        let mut written = 0;
        while written < bytes.len() {
            match self.port.write(&bytes[written..]) {
                Ok(0) => break,
                Ok(n) => written += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
        trace!(written, "serial write");
        Ok(written)
    }

    fn read_available(&mut self) -> Result<Bytes> {
        let queued = self.bytes_available()?;
        if queued == 0 {
            return Ok(Bytes::new());
        }

        let mut buf = BytesMut::zeroed(queued);
        let mut filled = 0;
        while filled < queued {
            match self.port.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) if matches!(e.kind(), ErrorKind::TimedOut | ErrorKind::WouldBlock) => break,
                Err(e) => return Err(e.into()),
            }
        }
        buf.truncate(filled);
        Ok(buf.freeze())
    }

    fn bytes_available(&mut self) -> Result<usize> {
        let queued = self.port.bytes_to_read().map_err(io::Error::from)?;
        Ok(usize::try_from(queued).unwrap_or(usize::MAX))
    }

    fn transport_name(&self) -> &'static str {
        "serial"
    }
}

impl std::fmt::Debug for SerialPort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SerialPort")
            .field("path", &self.path)
            .field("baud_rate", &self.config.baud_rate)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_line_is_115200() {
        let config = SerialConfig::default();
        assert_eq!(config.baud_rate, 115_200);
        assert_eq!(config.read_timeout, Duration::from_millis(100));
    }

    #[test]
    fn missing_device_is_open_error() {
        let err = SerialPort::open("/dev/rslcomm-does-not-exist", SerialConfig::default())
            .unwrap_err();
        match err {
            TransportError::Open { path, .. } => {
                assert_eq!(path, Path::new("/dev/rslcomm-does-not-exist"))
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn non_tty_fails_configuration() {
        let err = SerialPort::open("/dev/null", SerialConfig::default()).unwrap_err();
        assert!(matches!(err, TransportError::Open { .. }));
    }
}
