//! Error type for the QMI8658 driver.

/// Error type for QMI8658 operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Bus communication error (NACK, timeout, or short read).
    Bus,
    /// A range or rate code does not fit its register field.
    InvalidConfiguration,
    /// Invalid chip ID or wrong device.
    WrongDevice,
    /// The sensor engine backing this read has not been enabled.
    NotReady,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Bus => f.write_str("bus transaction failed"),
            Self::InvalidConfiguration => f.write_str("configuration code out of range"),
            Self::WrongDevice => f.write_str("unexpected WHO_AM_I value"),
            Self::NotReady => f.write_str("sensor engine not enabled"),
        }
    }
}

impl core::error::Error for Error {}
