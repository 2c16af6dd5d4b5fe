use std::path::PathBuf;

/// Errors that can occur in transport operations.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// Failed to open or configure the device.
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    /// An I/O error occurred on the underlying device.
    #[error("transport I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The device accepted fewer bytes than the frame holds.
    #[error("short write: {written} of {expected} bytes")]
    ShortWrite { written: usize, expected: usize },

    /// The SPI adapter rejected a command or answered unexpectedly.
    #[error("SPI adapter error: {0}")]
    Spi(String),

    /// The request cannot be expressed on this transport.
    #[error("unsupported on this transport: {0}")]
    Unsupported(&'static str),

    /// The peer closed the stream.
    #[error("transport closed")]
    Closed,
}

pub type Result<T> = std::result::Result<T, TransportError>;
