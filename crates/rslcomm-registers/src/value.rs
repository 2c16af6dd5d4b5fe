use std::fmt;

use serde::Serialize;

use crate::descriptor::{DecodeRule, FieldKind, FieldSpec, RegisterDescriptor};
use crate::error::{RegisterError, Result};

/// Register size on the wire.
pub const REGISTER_SIZE: usize = 4;

/// A field's engineering value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldNumber {
    Int(i64),
    Scaled(f64),
}

impl fmt::Display for FieldNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldNumber::Int(v) => write!(f, "{v}"),
            FieldNumber::Scaled(v) => write!(f, "{v:.5}"),
        }
    }
}

/// One decoded bit field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldValue {
    pub name: &'static str,
    pub value: FieldNumber,
}

/// A register value interpreted per its [`DecodeRule`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RegisterValue {
    Uint(u32),
    Int(i32),
    Float(f32),
    Text(String),
    Fields(Vec<FieldValue>),
}

impl RegisterValue {
    /// Value of a named field, if this is a bit-field register.
    pub fn field(&self, name: &str) -> Option<FieldNumber> {
        match self {
            RegisterValue::Fields(fields) => fields
                .iter()
                .find(|field| field.name.eq_ignore_ascii_case(name))
                .map(|field| field.value),
            _ => None,
        }
    }
}

impl fmt::Display for RegisterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegisterValue::Uint(v) => write!(f, "{v}"),
            RegisterValue::Int(v) => write!(f, "{v}"),
            RegisterValue::Float(v) => write!(f, "{v}"),
            RegisterValue::Text(s) => f.write_str(s),
            RegisterValue::Fields(fields) => {
                for (i, field) in fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}={}", field.name, field.value)?;
                }
                Ok(())
            }
        }
    }
}

/// A register read back from the device.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecodedRegister {
    pub name: &'static str,
    pub address: u8,
    pub raw: u32,
    pub value: RegisterValue,
}

fn decode_field(field: &FieldSpec, raw: u32) -> FieldValue {
    let integer = match field.kind {
        FieldKind::Signed => i64::from(field.extract_signed(raw)),
        FieldKind::Unsigned | FieldKind::Bits => i64::from(field.extract(raw)),
    };
    let value = match field.scale {
        Some(scale) => FieldNumber::Scaled(integer as f64 / scale),
        None => FieldNumber::Int(integer),
    };
    FieldValue {
        name: field.name,
        value,
    }
}

/// Interpret the four payload bytes of a register.
pub fn decode_register(descriptor: &RegisterDescriptor, bytes: [u8; REGISTER_SIZE]) -> DecodedRegister {
    let raw = u32::from_be_bytes(bytes);
    let value = match descriptor.rule {
        DecodeRule::Uint => RegisterValue::Uint(raw),
        DecodeRule::Int => RegisterValue::Int(i32::from_be_bytes(bytes)),
        DecodeRule::Float => RegisterValue::Float(f32::from_be_bytes(bytes)),
        DecodeRule::Text => {
            let end = bytes.iter().position(|&b| b == 0).unwrap_or(REGISTER_SIZE);
            RegisterValue::Text(String::from_utf8_lossy(&bytes[..end]).into_owned())
        }
        DecodeRule::Fields(fields) => {
            RegisterValue::Fields(fields.iter().map(|field| decode_field(field, raw)).collect())
        }
    };
    DecodedRegister {
        name: descriptor.name,
        address: descriptor.address,
        raw,
        value,
    }
}

/// A value to be written into a register.
#[derive(Debug, Clone, PartialEq)]
pub enum RegisterInput {
    Uint(u32),
    Int(i32),
    Float(f32),
    /// UTF-8 text of at most four bytes, NUL padded.
    Text(String),
    Raw([u8; REGISTER_SIZE]),
}

impl RegisterInput {
    /// Big-endian payload bytes.
    pub fn to_bytes(&self) -> Result<[u8; REGISTER_SIZE]> {
        match self {
            RegisterInput::Uint(v) => Ok(v.to_be_bytes()),
            RegisterInput::Int(v) => Ok(v.to_be_bytes()),
            RegisterInput::Float(v) => Ok(v.to_be_bytes()),
            RegisterInput::Raw(bytes) => Ok(*bytes),
            RegisterInput::Text(text) => {
                let encoded = text.as_bytes();
                if encoded.len() > REGISTER_SIZE {
                    return Err(RegisterError::InvalidValue(format!(
                        "text {text:?} is {} bytes, at most {REGISTER_SIZE} fit",
                        encoded.len()
                    )));
                }
                let mut bytes = [0u8; REGISTER_SIZE];
                bytes[..encoded.len()].copy_from_slice(encoded);
                Ok(bytes)
            }
        }
    }

    /// Parse user text according to how the register is decoded.
    ///
    /// Unsigned and bit-field registers accept decimal or `0x` hex.
    pub fn parse_for(rule: DecodeRule, text: &str) -> Result<Self> {
        let text = text.trim();
        let invalid = |what: &str| RegisterError::InvalidValue(format!("{text:?} is not {what}"));
        match rule {
            DecodeRule::Uint | DecodeRule::Fields(_) => parse_u32(text)
                .map(RegisterInput::Uint)
                .ok_or_else(|| invalid("an unsigned integer")),
            DecodeRule::Int => text
                .parse()
                .map(RegisterInput::Int)
                .map_err(|_| invalid("an integer")),
            DecodeRule::Float => text
                .parse()
                .map(RegisterInput::Float)
                .map_err(|_| invalid("a number")),
            DecodeRule::Text => Ok(RegisterInput::Text(text.to_string())),
        }
    }
}

fn parse_u32(text: &str) -> Option<u32> {
    match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16).ok(),
        None => text.parse().ok(),
    }
}

impl From<u32> for RegisterInput {
    fn from(value: u32) -> Self {
        RegisterInput::Uint(value)
    }
}

impl From<i32> for RegisterInput {
    fn from(value: i32) -> Self {
        RegisterInput::Int(value)
    }
}

impl From<f32> for RegisterInput {
    fn from(value: f32) -> Self {
        RegisterInput::Float(value)
    }
}

impl From<&str> for RegisterInput {
    fn from(value: &str) -> Self {
        RegisterInput::Text(value.to_string())
    }
}

impl From<String> for RegisterInput {
    fn from(value: String) -> Self {
        RegisterInput::Text(value)
    }
}

impl From<[u8; REGISTER_SIZE]> for RegisterInput {
    fn from(value: [u8; REGISTER_SIZE]) -> Self {
        RegisterInput::Raw(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, ShearwaterCatalog};

    fn lookup(name: &str) -> &'static RegisterDescriptor {
        ShearwaterCatalog::global().find_by_name(name).unwrap()
    }

    #[test]
    fn float_register() {
        let decoded = decode_register(lookup("DREG_TEMPERATURE"), 25.5f32.to_be_bytes());
        assert_eq!(decoded.value, RegisterValue::Float(25.5));
        assert_eq!(decoded.address, 0x66);
    }

    #[test]
    fn signed_integer_register() {
        let decoded = decode_register(lookup("DREG_MAG_1_RAW_X"), (-1234i32).to_be_bytes());
        assert_eq!(decoded.value, RegisterValue::Int(-1234));
    }

    #[test]
    fn scaled_quaternion_fields() {
        let a = (29789i16 / 2).to_be_bytes();
        let b = (-29789i16).to_be_bytes();
        let decoded = decode_register(lookup("DREG_QUAT_AB"), [a[0], a[1], b[0], b[1]]);

        let Some(FieldNumber::Scaled(qa)) = decoded.value.field("QUAT_A") else {
            panic!("QUAT_A not scaled: {:?}", decoded.value);
        };
        let Some(FieldNumber::Scaled(qb)) = decoded.value.field("quat_b") else {
            panic!("QUAT_B not scaled");
        };
        assert!((qa - 0.5).abs() < 1e-3);
        assert!((qb + 1.0).abs() < 1e-4);
    }

    #[test]
    fn health_flags() {
        let decoded = decode_register(lookup("DREG_HEALTH"), 0x0000_0109u32.to_be_bytes());
        assert_eq!(decoded.value.field("OVF"), Some(FieldNumber::Int(1)));
        assert_eq!(decoded.value.field("GYRO1"), Some(FieldNumber::Int(1)));
        assert_eq!(decoded.value.field("MAG2"), Some(FieldNumber::Int(1)));
        assert_eq!(decoded.value.field("MAG1"), Some(FieldNumber::Int(0)));
    }

    #[test]
    fn firmware_text_trims_padding() {
        let decoded = decode_register(lookup("GET_FW_BUILD_ID"), *b"AB\0\0");
        assert_eq!(decoded.value, RegisterValue::Text("AB".into()));
        assert_eq!(decoded.value.to_string(), "AB");
    }

    #[test]
    fn float_input_bytes() {
        assert_eq!(
            RegisterInput::from(1.0f32).to_bytes().unwrap(),
            [0x3F, 0x80, 0x00, 0x00]
        );
        assert_eq!(
            RegisterInput::from(-2i32).to_bytes().unwrap(),
            [0xFF, 0xFF, 0xFF, 0xFE]
        );
    }

    #[test]
    fn text_input_is_padded_and_bounded() {
        assert_eq!(RegisterInput::from("ab").to_bytes().unwrap(), *b"ab\0\0");
        assert!(matches!(
            RegisterInput::from("abcde").to_bytes(),
            Err(RegisterError::InvalidValue(_))
        ));
    }

    #[test]
    fn parse_follows_decode_rule() {
        assert_eq!(
            RegisterInput::parse_for(DecodeRule::Float, "1.5").unwrap(),
            RegisterInput::Float(1.5)
        );
        assert_eq!(
            RegisterInput::parse_for(DecodeRule::Uint, "0x10").unwrap(),
            RegisterInput::Uint(16)
        );
        assert_eq!(
            RegisterInput::parse_for(DecodeRule::Int, "-7").unwrap(),
            RegisterInput::Int(-7)
        );
        assert!(RegisterInput::parse_for(DecodeRule::Uint, "-1").is_err());
    }

    #[test]
    fn fields_display() {
        let decoded = decode_register(lookup("GET_FW_BUILD_VERSION"), [1, 2, 0, 7]);
        assert_eq!(
            decoded.value.to_string(),
            "VERSION_MAJOR=1, VERSION_MINOR=2, BUILD_ID=7"
        );
    }
}
