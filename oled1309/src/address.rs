//! Device addressing

/// 7-bit I2C address of one controller
///
/// The SA0 pin selects between the two addresses an SSD1309 answers on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DeviceAddress(u8);

impl DeviceAddress {
    /// SA0 tied low
    pub const PRIMARY: Self = Self(0x3C);
    /// SA0 tied high
    pub const SECONDARY: Self = Self(0x3D);

    /// Validate a 7-bit address
    ///
    /// Returns `None` if the value does not fit in 7 bits.
    pub const fn new(address: u8) -> Option<Self> {
        if address > 0x7F {
            None
        } else {
            Some(Self(address))
        }
    }

    /// The 7-bit address as passed to the bus
    pub const fn get(self) -> u8 {
        self.0
    }

    /// The 8-bit address byte on the wire for a write (R/W bit clear)
    pub const fn write_address(self) -> u8 {
        self.0 << 1
    }
}

impl Default for DeviceAddress {
    fn default() -> Self {
        Self::PRIMARY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        assert_eq!(DeviceAddress::PRIMARY.get(), 0x3C);
        assert_eq!(DeviceAddress::SECONDARY.get(), 0x3D);
        assert_eq!(DeviceAddress::default(), DeviceAddress::PRIMARY);
    }

    #[test]
    fn test_write_address_shifts_out_rw_bit() {
        assert_eq!(DeviceAddress::PRIMARY.write_address(), 0x78);
        assert_eq!(DeviceAddress::SECONDARY.write_address(), 0x7A);
    }

    #[test]
    fn test_rejects_eight_bit_values() {
        assert_eq!(DeviceAddress::new(0x7F).map(DeviceAddress::get), Some(0x7F));
        assert!(DeviceAddress::new(0x00).is_some());
        assert!(DeviceAddress::new(0x80).is_none());
        assert!(DeviceAddress::new(0xFF).is_none());
    }
}
