use std::fmt;

use serde::Serialize;

/// Which of the two address spaces a register lives in.
///
/// Hidden registers share addresses with main registers; the hidden flag in
/// the frame's control byte selects the space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RegisterSpace {
    Main,
    Hidden,
}

impl RegisterSpace {
    pub fn is_hidden(self) -> bool {
        self == RegisterSpace::Hidden
    }
}

impl fmt::Display for RegisterSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegisterSpace::Main => f.write_str("main"),
            RegisterSpace::Hidden => f.write_str("hidden"),
        }
    }
}

/// What the host may do with a register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Access {
    ReadWrite,
    ReadOnly,
    /// Command registers: writing any value triggers the action.
    WriteOnly,
}

impl Access {
    pub fn is_readable(self) -> bool {
        self != Access::WriteOnly
    }

    pub fn is_writable(self) -> bool {
        self != Access::ReadOnly
    }

    /// Short label used in listings.
    pub fn label(self) -> &'static str {
        match self {
            Access::ReadWrite => "rw",
            Access::ReadOnly => "r",
            Access::WriteOnly => "w",
        }
    }
}

/// How the bits of a field are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Unsigned,
    /// Two's complement over the field width.
    Signed,
    /// Flags or an enumeration code.
    Bits,
}

/// A bit range inside a 32-bit register, `msb` and `lsb` inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FieldSpec {
    pub name: &'static str,
    pub msb: u8,
    pub lsb: u8,
    pub kind: FieldKind,
    /// The engineering value is the integer value divided by this.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
}

impl FieldSpec {
    pub fn width(&self) -> u32 {
        u32::from(self.msb.saturating_sub(self.lsb)) + 1
    }

    fn mask(&self) -> u32 {
        match self.width() {
            32.. => u32::MAX,
            width => (1u32 << width) - 1,
        }
    }

    /// Unsigned field bits, right-aligned.
    pub fn extract(&self, raw: u32) -> u32 {
        (raw >> self.lsb) & self.mask()
    }

    /// Field bits sign-extended from the field width.
    pub fn extract_signed(&self, raw: u32) -> i32 {
        let shift = 32 - self.width();
        ((self.extract(raw) << shift) as i32) >> shift
    }

    /// Replace this field's bits in `raw` with `value`, truncated to width.
    pub fn insert(&self, raw: u32, value: u32) -> u32 {
        let mask = self.mask() << self.lsb;
        (raw & !mask) | ((value << self.lsb) & mask)
    }
}

/// How a register's raw value is decoded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "type", content = "fields")]
pub enum DecodeRule {
    Uint,
    Int,
    Float,
    /// Up to four ASCII characters, NUL padded.
    Text,
    Fields(&'static [FieldSpec]),
}

/// Static description of one register.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RegisterDescriptor {
    pub name: &'static str,
    pub address: u8,
    pub space: RegisterSpace,
    pub access: Access,
    pub rule: DecodeRule,
}

impl RegisterDescriptor {
    pub fn is_hidden(&self) -> bool {
        self.space.is_hidden()
    }

    /// Look up a field of a bit-field register.
    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        match self.rule {
            DecodeRule::Fields(fields) => fields
                .iter()
                .find(|field| field.name.eq_ignore_ascii_case(name)),
            _ => None,
        }
    }
}
