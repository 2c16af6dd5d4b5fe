use std::collections::HashMap;
use std::sync::OnceLock;

use crate::descriptor::{RegisterDescriptor, RegisterSpace};
use crate::error::{RegisterError, Result};
use crate::shearwater::REGISTERS;

/// A set of register descriptors for one sensor family.
pub trait Catalog {
    /// Every register, main space first, in address order.
    fn registers(&self) -> &[RegisterDescriptor];

    /// Case-insensitive lookup by register name.
    fn find_by_name(&self, name: &str) -> Option<&RegisterDescriptor> {
        self.registers()
            .iter()
            .find(|descriptor| descriptor.name.eq_ignore_ascii_case(name))
    }

    fn find_by_address(&self, address: u8, space: RegisterSpace) -> Option<&RegisterDescriptor> {
        self.registers()
            .iter()
            .find(|descriptor| descriptor.address == address && descriptor.space == space)
    }

    fn iter(&self) -> std::slice::Iter<'_, RegisterDescriptor> {
        self.registers().iter()
    }

    /// [`Catalog::find_by_name`] as an error.
    fn lookup(&self, name: &str) -> Result<&RegisterDescriptor> {
        self.find_by_name(name)
            .ok_or_else(|| RegisterError::UnknownName(name.to_string()))
    }

    /// [`Catalog::find_by_address`] as an error.
    fn lookup_address(&self, address: u8, space: RegisterSpace) -> Result<&RegisterDescriptor> {
        self.find_by_address(address, space)
            .ok_or(RegisterError::UnknownAddress { address, space })
    }
}

/// The Shearwater (RSL) register map with indexed lookups.
#[derive(Debug)]
pub struct ShearwaterCatalog {
    by_name: HashMap<String, usize>,
    by_address: HashMap<(u8, RegisterSpace), usize>,
}

impl ShearwaterCatalog {
    pub fn new() -> Self {
        let mut by_name = HashMap::with_capacity(REGISTERS.len());
        let mut by_address = HashMap::with_capacity(REGISTERS.len());
        for (index, descriptor) in REGISTERS.iter().enumerate() {
            by_name.insert(descriptor.name.to_ascii_uppercase(), index);
            by_address.insert((descriptor.address, descriptor.space), index);
        }
        Self {
            by_name,
            by_address,
        }
    }

    /// Process-wide shared instance.
    pub fn global() -> &'static ShearwaterCatalog {
        static CATALOG: OnceLock<ShearwaterCatalog> = OnceLock::new();
        CATALOG.get_or_init(ShearwaterCatalog::new)
    }
}

impl Default for ShearwaterCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog for ShearwaterCatalog {
    fn registers(&self) -> &[RegisterDescriptor] {
        REGISTERS
    }

    fn find_by_name(&self, name: &str) -> Option<&RegisterDescriptor> {
        self.by_name
            .get(&name.to_ascii_uppercase())
            .map(|&index| &REGISTERS[index])
    }

    fn find_by_address(&self, address: u8, space: RegisterSpace) -> Option<&RegisterDescriptor> {
        self.by_address
            .get(&(address, space))
            .map(|&index| &REGISTERS[index])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{Access, DecodeRule};
    use std::collections::HashSet;

    #[test]
    fn names_and_addresses_are_unique() {
        let mut names = HashSet::new();
        let mut slots = HashSet::new();
        for descriptor in REGISTERS {
            assert!(names.insert(descriptor.name), "duplicate {}", descriptor.name);
            assert!(
                slots.insert((descriptor.address, descriptor.space)),
                "duplicate slot for {}",
                descriptor.name
            );
        }
    }

    #[test]
    fn fields_fit_in_register() {
        for descriptor in REGISTERS {
            if let DecodeRule::Fields(fields) = descriptor.rule {
                for field in fields {
                    assert!(field.msb < 32 && field.lsb <= field.msb, "{}", field.name);
                }
            }
        }
    }

    #[test]
    fn finds_by_name_case_insensitively() {
        let catalog = ShearwaterCatalog::new();
        let quat = catalog.find_by_name("dreg_quat_ab").unwrap();
        assert_eq!(quat.address, 0x7E);
        assert_eq!(quat.access, Access::ReadOnly);
        assert!(catalog.find_by_name("NOT_A_REGISTER").is_none());
    }

    #[test]
    fn hidden_space_is_separate() {
        let catalog = ShearwaterCatalog::global();
        let main = catalog.find_by_address(0x00, RegisterSpace::Main).unwrap();
        let hidden = catalog.find_by_address(0x00, RegisterSpace::Hidden).unwrap();
        assert_eq!(main.name, "CREG_COM_SETTINGS");
        assert_eq!(hidden.name, "HIDDEN_GYRO_1_VARIANCE");
        assert!(hidden.is_hidden());
    }

    #[test]
    fn commands_are_write_only() {
        let catalog = ShearwaterCatalog::global();
        let zero = catalog.lookup("ZERO_GYROS").unwrap();
        assert_eq!(zero.address, 0xAE);
        assert_eq!(zero.access, Access::WriteOnly);
    }

    #[test]
    fn lookup_errors() {
        let catalog = ShearwaterCatalog::global();
        assert_eq!(
            catalog.lookup("NOPE").unwrap_err(),
            RegisterError::UnknownName("NOPE".into())
        );
        assert!(matches!(
            catalog.lookup_address(0x40, RegisterSpace::Main),
            Err(RegisterError::UnknownAddress { address: 0x40, .. })
        ));
    }

    #[test]
    fn default_lookup_matches_index() {
        struct Plain;
        impl Catalog for Plain {
            fn registers(&self) -> &[RegisterDescriptor] {
                REGISTERS
            }
        }
        let indexed = ShearwaterCatalog::global();
        for descriptor in indexed.iter() {
            assert_eq!(Plain.find_by_name(descriptor.name), Some(descriptor));
            assert_eq!(
                Plain.find_by_address(descriptor.address, descriptor.space),
                indexed.find_by_address(descriptor.address, descriptor.space)
            );
        }
    }
}
