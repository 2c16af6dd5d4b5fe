use std::fmt;
use std::io;

use rslcomm_driver::DriverError;
use rslcomm_registers::RegisterError;
use rslcomm_transport::TransportError;

pub const SUCCESS: i32 = 0;
pub const FAILURE: i32 = 1;
pub const TRANSPORT_ERROR: i32 = 3;
pub const DATA_INVALID: i32 = 60;
pub const USAGE: i32 = 64;
pub const TIMEOUT: i32 = 124;
pub const INTERNAL: i32 = 125;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug)]
pub struct CliError {
    pub code: i32,
    pub message: String,
}

impl CliError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

pub fn io_error(context: &str, err: io::Error) -> CliError {
    let code = match err.kind() {
        io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock => TIMEOUT,
        _ => TRANSPORT_ERROR,
    };
    CliError::new(code, format!("{context}: {err}"))
}

pub fn transport_error(context: &str, err: TransportError) -> CliError {
    match err {
        TransportError::Io(source) => io_error(context, source),
        TransportError::Unsupported(_) => CliError::new(USAGE, format!("{context}: {err}")),
        other => CliError::new(TRANSPORT_ERROR, format!("{context}: {other}")),
    }
}

pub fn register_error(context: &str, err: RegisterError) -> CliError {
    let code = match err {
        RegisterError::InvalidValue(_) => DATA_INVALID,
        RegisterError::UnknownName(_)
        | RegisterError::UnknownAddress { .. }
        | RegisterError::NotReadable(_)
        | RegisterError::NotWritable(_) => USAGE,
    };
    CliError::new(code, format!("{context}: {err}"))
}

pub fn driver_error(context: &str, err: DriverError) -> CliError {
    match err {
        DriverError::Transport(err) => transport_error(context, err),
        DriverError::Register(err) => register_error(context, err),
        DriverError::Frame(_) | DriverError::Demux(_) => {
            CliError::new(DATA_INVALID, format!("{context}: {err}"))
        }
        DriverError::Timeout { .. } => CliError::new(TIMEOUT, format!("{context}: {err}")),
        DriverError::CommandFailed { .. } => CliError::new(FAILURE, format!("{context}: {err}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn maps_driver_errors_to_exit_codes() {
        let timeout = DriverError::Timeout {
            address: Some(0x55),
            hidden: false,
            timeout: Duration::from_millis(150),
        };
        assert_eq!(driver_error("read failed", timeout).code, TIMEOUT);

        let rejected = DriverError::CommandFailed {
            address: 0xAE,
            hidden: false,
        };
        assert_eq!(driver_error("command failed", rejected).code, FAILURE);

        let checksum = DriverError::Frame(rslcomm_frame::FrameError::Checksum {
            computed: 1,
            received: 2,
        });
        assert_eq!(driver_error("read failed", checksum).code, DATA_INVALID);
    }

    #[test]
    fn register_lookup_errors_are_usage_errors() {
        let err = driver_error(
            "read failed",
            DriverError::Register(RegisterError::UnknownName("NOPE".to_string())),
        );
        assert_eq!(err.code, USAGE);
        assert!(err.message.starts_with("read failed: "));
    }

    #[test]
    fn transport_io_timeouts_map_to_timeout() {
        let err = transport_error(
            "read failed",
            TransportError::Io(io::Error::from(io::ErrorKind::TimedOut)),
        );
        assert_eq!(err.code, TIMEOUT);
        assert_eq!(
            transport_error("write failed", TransportError::Closed).code,
            TRANSPORT_ERROR
        );
    }
}
