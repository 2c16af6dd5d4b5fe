use bytes::Bytes;

use crate::error::Result;

/// A byte channel to one sensor.
///
/// `write` sends one encoded frame. `read_available` never blocks: it returns
/// whatever has arrived since the last call, possibly nothing.
pub trait Transport {
    /// Send bytes, returning how many the device accepted.
    fn write(&mut self, bytes: &[u8]) -> Result<usize>;

    /// Drain all bytes received so far.
    fn read_available(&mut self) -> Result<Bytes>;

    /// Number of bytes waiting to be read.
    fn bytes_available(&mut self) -> Result<usize>;

    /// Transport name for diagnostics.
    fn transport_name(&self) -> &'static str {
        "transport"
    }
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn write(&mut self, bytes: &[u8]) -> Result<usize> {
        (**self).write(bytes)
    }

    fn read_available(&mut self) -> Result<Bytes> {
        (**self).read_available()
    }

    fn bytes_available(&mut self) -> Result<usize> {
        (**self).bytes_available()
    }

    fn transport_name(&self) -> &'static str {
        (**self).transport_name()
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn write(&mut self, bytes: &[u8]) -> Result<usize> {
        (**self).write(bytes)
    }

    fn read_available(&mut self) -> Result<Bytes> {
        (**self).read_available()
    }

    fn bytes_available(&mut self) -> Result<usize> {
        (**self).bytes_available()
    }

    fn transport_name(&self) -> &'static str {
        (**self).transport_name()
    }
}
