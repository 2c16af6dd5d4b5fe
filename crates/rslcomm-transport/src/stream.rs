use std::io::{ErrorKind, Read, Write};

use bytes::{Bytes, BytesMut};
use tracing::trace;

use crate::error::{Result, TransportError};
use crate::traits::Transport;

const READ_CHUNK: usize = 256;

/// [`Transport`] over any `Read + Write` stream.
///
/// The stream must not block indefinitely on read: put it in non-blocking
/// mode or give it a short read timeout. `WouldBlock` and `TimedOut` are
/// treated as "nothing received yet".
#[derive(Debug)]
pub struct StreamTransport<S> {
    inner: S,
    pending: BytesMut,
}

impl<S: Read + Write> StreamTransport<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            pending: BytesMut::with_capacity(READ_CHUNK),
        }
    }

    /// Borrow the wrapped stream.
    pub fn get_ref(&self) -> &S {
        &self.inner
    }

    /// Mutably borrow the wrapped stream.
    pub fn get_mut(&mut self) -> &mut S {
        &mut self.inner
    }

    /// Unwrap, discarding any bytes already pulled from the stream.
    pub fn into_inner(self) -> S {
        self.inner
    }

    fn fill(&mut self) -> Result<()> {
        let mut chunk = [0u8; READ_CHUNK];
        loop {
            match self.inner.read(&mut chunk) {
                Ok(0) => {
                    if self.pending.is_empty() {
                        return Err(TransportError::Closed);
                    }
                    return Ok(());
                }
                Ok(n) => {
                    self.pending.extend_from_slice(&chunk[..n]);
                    if n < chunk.len() {
                        return Ok(());
                    }
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) if matches!(e.kind(), ErrorKind::WouldBlock | ErrorKind::TimedOut) => {
                    return Ok(());
                }
                Err(e) => return Err(e.into()),
            }
        }
    }
}

impl<S: Read + Write> Transport for StreamTransport<S> {
    fn write(&mut self, bytes: &[u8]) -> Result<usize> {
        let mut written = 0;
        while written < bytes.len() {
            match self.inner.write(&bytes[written..]) {
                Ok(0) => break,
                Ok(n) => written += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
        self.inner.flush()?;
        trace!(written, "stream write");
        Ok(written)
    }

    fn read_available(&mut self) -> Result<Bytes> {
        self.fill()?;
        Ok(self.pending.split().freeze())
    }

    fn bytes_available(&mut self) -> Result<usize> {
        self.fill()?;
        Ok(self.pending.len())
    }

    fn transport_name(&self) -> &'static str {
        "stream"
    }
}
