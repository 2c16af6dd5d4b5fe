use std::time::Duration;

fn space(hidden: &bool) -> &'static str {
    if *hidden {
        " (hidden)"
    } else {
        ""
    }
}

fn timeout_message(address: &Option<u8>, hidden: &bool, timeout: &Duration) -> String {
    match address {
        Some(address) => format!(
            "no reply from register {address:#04x}{} within {timeout:?}",
            space(hidden)
        ),
        None => format!("no broadcast received within {timeout:?}"),
    }
}

/// A frame that no broadcast layout accounts for.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DemuxError {
    #[error("no broadcast packet is {length} bytes at address {address:#04x}{}", space(.hidden))]
    UnknownPacketShape {
        address: u8,
        length: usize,
        hidden: bool,
    },
}

/// Errors that can occur in driver operations.
#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    /// Transport-level error.
    #[error("transport error: {0}")]
    Transport(#[from] rslcomm_transport::TransportError),

    /// Frame-level error.
    #[error("frame error: {0}")]
    Frame(#[from] rslcomm_frame::FrameError),

    /// Register lookup or value error.
    #[error("register error: {0}")]
    Register(#[from] rslcomm_registers::RegisterError),

    /// No matching reply (or, without an address, no broadcast) before the deadline.
    #[error("{}", timeout_message(.address, .hidden, .timeout))]
    Timeout {
        address: Option<u8>,
        hidden: bool,
        timeout: Duration,
    },

    /// The device answered with the error bit set.
    #[error("device rejected command on register {address:#04x}{}", space(.hidden))]
    CommandFailed { address: u8, hidden: bool },

    /// Broadcast decoding error.
    #[error("broadcast error: {0}")]
    Demux(#[from] DemuxError),
}

impl DriverError {
    /// Whether retrying or waiting longer may succeed.
    pub fn is_timeout(&self) -> bool {
        matches!(self, DriverError::Timeout { .. })
    }
}

pub type Result<T> = std::result::Result<T, DriverError>;
