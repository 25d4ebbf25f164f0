use crate::error::Error;
use crate::register::{ctrl2, ctrl3, ctrl6};

/// Low-pass filter bandwidth selection (percent of ODR).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LowPassFilterMode {
    /// 2.62% of ODR.
    OdrPercent2_62,
    /// 3.59% of ODR.
    OdrPercent3_59,
    /// 5.32% of ODR.
    OdrPercent5_32,
    /// 14.0% of ODR.
    OdrPercent14_0,
}

impl LowPassFilterMode {
    pub(crate) const fn bits(self) -> u8 {
        match self {
            Self::OdrPercent2_62 => 0b00,
            Self::OdrPercent3_59 => 0b01,
            Self::OdrPercent5_32 => 0b10,
            Self::OdrPercent14_0 => 0b11,
        }
    }
}

/// Accelerometer full-scale range selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AccelRange {
    /// +/-2 g range.
    G2,
    /// +/-4 g range.
    G4,
    /// +/-8 g range.
    G8,
    /// +/-16 g range.
    G16,
}

impl AccelRange {
    /// Range applied when a raw code is not recognized.
    pub const FALLBACK: Self = Self::G8;

    /// Returns the CTRL2 range code (already shifted into bits 4..6).
    pub const fn code(self) -> u8 {
        match self {
            Self::G2 => 0x00,
            Self::G4 => 0x10,
            Self::G8 => 0x20,
            Self::G16 => 0x30,
        }
    }

    /// Decodes a CTRL2 range code.
    ///
    /// Any code other than the four defined ones yields [`AccelRange::FALLBACK`].
    pub const fn from_code(code: u8) -> Self {
        match code {
            0x00 => Self::G2,
            0x10 => Self::G4,
            0x20 => Self::G8,
            0x30 => Self::G16,
            _ => Self::FALLBACK,
        }
    }

    /// Returns the accelerometer sensitivity in LSB/g.
    pub const fn lsb_divisor(self) -> u16 {
        match self {
            Self::G2 => 1 << 14,
            Self::G4 => 1 << 13,
            Self::G8 => 1 << 12,
            Self::G16 => 1 << 11,
        }
    }
}

/// Accelerometer output data rate selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AccelOutputDataRate {
    /// 8000 Hz output data rate (normal mode).
    Hz8000,
    /// 4000 Hz output data rate (normal mode).
    Hz4000,
    /// 2000 Hz output data rate (normal mode).
    Hz2000,
    /// 1000 Hz output data rate (normal mode).
    Hz1000,
    /// 500 Hz output data rate (normal mode).
    Hz500,
    /// 250 Hz output data rate (normal mode).
    Hz250,
    /// 125 Hz output data rate (normal mode).
    Hz125,
    /// 62.5 Hz output data rate (normal mode).
    Hz62_5,
    /// 31.25 Hz output data rate (normal mode).
    Hz31_25,
    /// 128 Hz output data rate (low power mode).
    LowPowerHz128,
    /// 21 Hz output data rate (low power mode).
    LowPowerHz21,
    /// 11 Hz output data rate (low power mode).
    LowPowerHz11,
    /// 3 Hz output data rate (low power mode).
    LowPowerHz3,
}

impl AccelOutputDataRate {
    /// Returns the output data rate in milli-hertz.
    pub const fn hz_milli(self) -> u32 {
        match self {
            Self::Hz8000 => 8_000_000,
            Self::Hz4000 => 4_000_000,
            Self::Hz2000 => 2_000_000,
            Self::Hz1000 => 1_000_000,
            Self::Hz500 => 500_000,
            Self::Hz250 => 250_000,
            Self::Hz125 => 125_000,
            Self::Hz62_5 => 62_500,
            Self::Hz31_25 => 31_250,
            Self::LowPowerHz128 => 128_000,
            Self::LowPowerHz21 => 21_000,
            Self::LowPowerHz11 => 11_000,
            Self::LowPowerHz3 => 3_000,
        }
    }

    /// Returns the CTRL2 ODR bits.
    pub const fn bits(self) -> u8 {
        match self {
            Self::Hz8000 => 0b0000,
            Self::Hz4000 => 0b0001,
            Self::Hz2000 => 0b0010,
            Self::Hz1000 => 0b0011,
            Self::Hz500 => 0b0100,
            Self::Hz250 => 0b0101,
            Self::Hz125 => 0b0110,
            Self::Hz62_5 => 0b0111,
            Self::Hz31_25 => 0b1000,
            Self::LowPowerHz128 => 0b1100,
            Self::LowPowerHz21 => 0b1101,
            Self::LowPowerHz11 => 0b1110,
            Self::LowPowerHz3 => 0b1111,
        }
    }
}

/// Gyroscope full-scale range selection, indexed by CTRL3 range code.
///
/// Sensitivities follow the LSB divisor table this driver has always used
/// (1024 LSB at code 0x00, halving per step). See [`GyroScale`](crate::GyroScale)
/// for the conversion applied on top.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GyroRange {
    /// Code 0x00, divisor 1024.
    Code0,
    /// Code 0x10, divisor 512.
    Code1,
    /// Code 0x20, divisor 256.
    Code2,
    /// Code 0x30, divisor 128.
    Code3,
    /// Code 0x40, divisor 64.
    Code4,
    /// Code 0x50, divisor 32.
    Code5,
    /// Code 0x60, divisor 16.
    Code6,
    /// Code 0x70, divisor 8.
    Code7,
}

impl GyroRange {
    /// Range applied when a raw code is not recognized (divisor 64, the
    /// +/-512 dps setting of the divisor table).
    pub const FALLBACK: Self = Self::Code4;

    /// Returns the CTRL3 range code (already shifted into bits 4..6).
    pub const fn code(self) -> u8 {
        match self {
            Self::Code0 => 0x00,
            Self::Code1 => 0x10,
            Self::Code2 => 0x20,
            Self::Code3 => 0x30,
            Self::Code4 => 0x40,
            Self::Code5 => 0x50,
            Self::Code6 => 0x60,
            Self::Code7 => 0x70,
        }
    }

    /// Decodes a CTRL3 range code, falling back to [`GyroRange::FALLBACK`].
    pub const fn from_code(code: u8) -> Self {
        match code {
            0x00 => Self::Code0,
            0x10 => Self::Code1,
            0x20 => Self::Code2,
            0x30 => Self::Code3,
            0x40 => Self::Code4,
            0x50 => Self::Code5,
            0x60 => Self::Code6,
            0x70 => Self::Code7,
            _ => Self::FALLBACK,
        }
    }

    /// Returns the gyroscope LSB divisor.
    pub const fn lsb_divisor(self) -> u16 {
        1024 >> (self.code() >> 4)
    }
}

/// Gyroscope output data rate selection.
///
/// Actual rates follow the gyro natural frequency (~0.94x nominal).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GyroOutputDataRate {
    /// 8000 Hz output data rate (normal mode).
    Hz8000,
    /// 4000 Hz output data rate (normal mode).
    Hz4000,
    /// 2000 Hz output data rate (normal mode).
    Hz2000,
    /// 1000 Hz output data rate (normal mode).
    Hz1000,
    /// 500 Hz output data rate (normal mode).
    Hz500,
    /// 250 Hz output data rate (normal mode).
    Hz250,
    /// 125 Hz output data rate (normal mode).
    Hz125,
    /// 62.5 Hz output data rate (normal mode).
    Hz62_5,
    /// 31.25 Hz output data rate (normal mode).
    Hz31_25,
}

impl GyroOutputDataRate {
    /// Returns the output data rate in milli-hertz.
    pub const fn hz_milli(self) -> u32 {
        match self {
            Self::Hz8000 => 7_520_000,
            Self::Hz4000 => 3_760_000,
            Self::Hz2000 => 1_880_000,
            Self::Hz1000 => 940_000,
            Self::Hz500 => 470_000,
            Self::Hz250 => 235_000,
            Self::Hz125 => 117_500,
            Self::Hz62_5 => 58_750,
            Self::Hz31_25 => 29_375,
        }
    }

    /// Returns the CTRL3 ODR bits.
    pub const fn bits(self) -> u8 {
        match self {
            Self::Hz8000 => 0b0000,
            Self::Hz4000 => 0b0001,
            Self::Hz2000 => 0b0010,
            Self::Hz1000 => 0b0011,
            Self::Hz500 => 0b0100,
            Self::Hz250 => 0b0101,
            Self::Hz125 => 0b0110,
            Self::Hz62_5 => 0b0111,
            Self::Hz31_25 => 0b1000,
        }
    }
}

/// Delta-velocity output data rate selection (CTRL6).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DeltaVelocityOutputDataRate {
    /// 1 Hz.
    Hz1,
    /// 2 Hz.
    Hz2,
    /// 4 Hz.
    Hz4,
    /// 8 Hz.
    Hz8,
    /// 16 Hz.
    Hz16,
    /// 32 Hz.
    Hz32,
    /// 64 Hz.
    Hz64,
}

impl DeltaVelocityOutputDataRate {
    /// Returns the CTRL6 ODR bits.
    pub const fn bits(self) -> u8 {
        match self {
            Self::Hz1 => 0,
            Self::Hz2 => 1,
            Self::Hz4 => 2,
            Self::Hz8 => 3,
            Self::Hz16 => 4,
            Self::Hz32 => 5,
            Self::Hz64 => 6,
        }
    }

    /// Returns the output data rate in hertz.
    pub const fn hz(self) -> u8 {
        1 << self.bits()
    }
}

/// Checks that an accelerometer/gyroscope ODR code fits the low nibble.
pub(crate) const fn check_odr_code(rate_code: u8) -> Result<u8, Error> {
    if rate_code & !ctrl2::A_ODR_MASK != 0 {
        Err(Error::InvalidConfiguration)
    } else {
        Ok(rate_code)
    }
}

/// Checks that a delta-velocity ODR code fits the CTRL6 ODR field.
pub(crate) const fn check_delta_velocity_code(rate_code: u8) -> Result<u8, Error> {
    if rate_code & !ctrl6::DV_ODR_MASK != 0 {
        Err(Error::InvalidConfiguration)
    } else {
        Ok(rate_code)
    }
}

/// Builds the CTRL2 value from a range code and ODR code.
pub(crate) const fn ctrl2_value(range: AccelRange, rate_code: u8, hpf: bool) -> u8 {
    let mut value = (range.code() & ctrl2::A_FS_MASK) | (rate_code & ctrl2::A_ODR_MASK);
    if hpf {
        value |= ctrl2::A_HPF;
    }
    value
}

/// Builds the CTRL3 value from a range code and ODR code.
pub(crate) const fn ctrl3_value(range: GyroRange, rate_code: u8, hpf: bool) -> u8 {
    let mut value = (range.code() & ctrl3::G_FS_MASK) | (rate_code & ctrl3::G_ODR_MASK);
    if hpf {
        value |= ctrl3::G_HPF;
    }
    value
}
