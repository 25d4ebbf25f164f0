//! QMI8658 register definitions.
//!
//! Register addresses and bit masks for the control, data, and identity
//! registers used by the driver.

/// QMI8658 register addresses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Register {
    /// Device identifier register.
    WhoAmI = 0x00,
    /// Control register 1 (serial interface and clock).
    Ctrl1 = 0x02,
    /// Control register 2 (accelerometer range and ODR).
    Ctrl2 = 0x03,
    /// Control register 3 (gyroscope range and ODR).
    Ctrl3 = 0x04,
    /// Control register 5 (low-pass filter settings).
    Ctrl5 = 0x06,
    /// Control register 6 (delta-velocity ODR).
    Ctrl6 = 0x07,
    /// Control register 7 (sensor engine enable).
    Ctrl7 = 0x08,
    /// Temperature low byte.
    TempL = 0x33,
    /// Accelerometer X-axis low byte.
    AxL = 0x35,
    /// Gyroscope X-axis low byte.
    GxL = 0x3B,
    /// Delta velocity X low byte.
    DvXL = 0x51,
    /// Soft reset register.
    Reset = 0x60,
}

impl Register {
    /// Returns the register address.
    pub const fn addr(self) -> u8 {
        self as u8
    }
}

/// Expected values for WHO_AM_I.
pub mod who_am_i {
    /// Expected WHO_AM_I register value.
    pub const EXPECTED: u8 = 0b0000_0101;
}

/// CTRL1 register bits.
pub mod ctrl1 {
    /// Auto-increment register address on reads.
    pub const ADDR_AI: u8 = 0b0100_0000;
    /// Serial interface read data order bit.
    pub const BE: u8 = 0b0010_0000;
    /// Required 0x60 profile written by `enable_sensors` (`ADDR_AI | BE`).
    pub const NORMAL: u8 = ADDR_AI | BE;
}

/// CTRL2 register bits.
pub mod ctrl2 {
    /// Accelerometer high-pass filter bit.
    ///
    /// Shares bit 7 with the accelerometer self-test enable on the QMI8658C.
    pub const A_HPF: u8 = 0b1000_0000;
    /// Accelerometer full-scale selection mask.
    pub const A_FS_MASK: u8 = 0b0111_0000;
    /// Accelerometer output data rate selection mask.
    pub const A_ODR_MASK: u8 = 0b0000_1111;
}

/// CTRL3 register bits.
pub mod ctrl3 {
    /// Gyroscope high-pass filter bit (shared with gyroscope self-test).
    pub const G_HPF: u8 = 0b1000_0000;
    /// Gyroscope full-scale selection mask.
    pub const G_FS_MASK: u8 = 0b0111_0000;
    /// Gyroscope output data rate selection mask.
    pub const G_ODR_MASK: u8 = 0b0000_1111;
}

/// CTRL5 register bits.
pub mod ctrl5 {
    /// Bits owned by the gyroscope filter settings.
    pub const G_NIBBLE: u8 = 0b1111_0000;
    /// Gyroscope low-pass filter mode mask.
    pub const G_LPF_MODE_MASK: u8 = 0b0110_0000;
    /// Gyroscope low-pass filter mode shift.
    pub const G_LPF_MODE_SHIFT: u8 = 5;
    /// Gyroscope low-pass filter enable.
    pub const G_LPF_EN: u8 = 0b0001_0000;
    /// Bits owned by the accelerometer filter settings.
    pub const A_NIBBLE: u8 = 0b0000_1111;
    /// Accelerometer low-pass filter mode mask.
    pub const A_LPF_MODE_MASK: u8 = 0b0000_0110;
    /// Accelerometer low-pass filter mode shift.
    pub const A_LPF_MODE_SHIFT: u8 = 1;
    /// Accelerometer low-pass filter enable.
    pub const A_LPF_EN: u8 = 0b0000_0001;
}

/// CTRL6 register bits.
pub mod ctrl6 {
    /// Delta-velocity output enable.
    pub const DV_EN: u8 = 0b1000_0000;
    /// Delta-velocity output data rate selection mask.
    pub const DV_ODR_MASK: u8 = 0b0000_0111;
}

/// CTRL7 register bits.
pub mod ctrl7 {
    /// Enable the delta-velocity (AttitudeEngine) output.
    pub const S_EN: u8 = 0b0000_1000;
    /// Enable gyroscope.
    pub const G_EN: u8 = 0b0000_0010;
    /// Enable accelerometer.
    pub const A_EN: u8 = 0b0000_0001;
}

/// RESET register values.
pub mod reset {
    /// Soft reset command value.
    pub const SOFT_RESET: u8 = 0b1011_0000;
}
