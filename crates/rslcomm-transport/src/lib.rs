//! Byte transports for RSL register protocol devices.
//!
//! Every transport moves whole frames out and arbitrary byte runs in:
//! - [`SerialPort`]: a UART device configured 8N1 without flow control
//! - [`StreamTransport`]: any `Read + Write` stream, e.g. a TCP serial bridge
//! - [`SpiBridgeTransport`]: the sensor's SPI register cycle presented as
//!   frames, so the same register logic drives both buses
//!
//! This is the lowest I/O layer of rslcomm. The driver builds on top of
//! the [`Transport`] trait provided here.

pub mod error;
pub mod serial;
pub mod spi;
pub mod stream;
pub mod traits;
pub mod usb_iss;

pub use error::{Result, TransportError};
pub use serial::{SerialConfig, SerialPort};
pub use spi::{SpiBridgeTransport, SpiBus};
pub use stream::StreamTransport;
pub use traits::Transport;
pub use usb_iss::{UsbIssConfig, UsbIssSpi};

