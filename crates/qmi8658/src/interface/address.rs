//! I2C address definitions for the QMI8658.

/// QMI8658 I2C addresses, selected by the SA0 (ADDR) strap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Qmi8658Address {
    /// Primary address: 0x6A (SA0 = low).
    Primary,
    /// Secondary address: 0x6B (SA0 = high).
    Secondary,
}

impl Qmi8658Address {
    /// Returns the 7-bit I2C address.
    pub const fn addr(self) -> u8 {
        match self {
            Self::Primary => 0x6A,
            Self::Secondary => 0x6B,
        }
    }

    /// Maps a 7-bit address back to its strap setting.
    pub const fn from_addr(addr: u8) -> Option<Self> {
        match addr {
            0x6A => Some(Self::Primary),
            0x6B => Some(Self::Secondary),
            _ => None,
        }
    }
}

impl From<Qmi8658Address> for u8 {
    fn from(address: Qmi8658Address) -> Self {
        address.addr()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address() {
        assert_eq!(Qmi8658Address::Primary.addr(), 0x6A);
        assert_eq!(Qmi8658Address::Secondary.addr(), 0x6B);
    }

    #[test]
    fn from_addr_rejects_other_addresses() {
        assert_eq!(Qmi8658Address::from_addr(0x6B), Some(Qmi8658Address::Secondary));
        assert_eq!(Qmi8658Address::from_addr(0x68), None);
    }
}
