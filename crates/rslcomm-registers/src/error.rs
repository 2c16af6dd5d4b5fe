use crate::descriptor::RegisterSpace;

/// Errors raised by register lookup and value conversion.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RegisterError {
    /// No register carries this name.
    #[error("unknown register: {0}")]
    UnknownName(String),

    /// No register lives at this address.
    #[error("no {space} register at address {address:#04x}")]
    UnknownAddress { address: u8, space: RegisterSpace },

    /// The register is write-only (a command).
    #[error("register {0} is not readable")]
    NotReadable(&'static str),

    /// The register is read-only.
    #[error("register {0} is not writable")]
    NotWritable(&'static str),

    /// The value cannot be represented in a 4-byte register.
    #[error("invalid register value: {0}")]
    InvalidValue(String),
}

pub type Result<T> = std::result::Result<T, RegisterError>;
