//! Register catalogue for RSL sensors.
//!
//! Every register is described by a static [`RegisterDescriptor`]: name,
//! address, register space, access mode and a [`DecodeRule`] that turns the
//! raw 32-bit big-endian value into engineering values. A single generic
//! decoder ([`decode_register`]) interprets every descriptor, so adding a
//! register is a table entry, not code.

pub mod catalog;
pub mod descriptor;
pub mod error;
mod shearwater;
pub mod value;

pub use catalog::{Catalog, ShearwaterCatalog};
pub use descriptor::{Access, DecodeRule, FieldKind, FieldSpec, RegisterDescriptor, RegisterSpace};
pub use error::{RegisterError, Result};
pub use value::{decode_register, DecodedRegister, FieldNumber, FieldValue, RegisterInput, RegisterValue};
