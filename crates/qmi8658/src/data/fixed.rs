//! Fixed-point conversion helpers.

use super::{AccelRaw, GyroRaw, TemperatureRaw};
use super::scale::TEMPERATURE_LSB_PER_CELSIUS;

/// Fixed-point number type used for sensor conversions (I32F32).
pub type Fixed = crate::fixed_crate::types::I32F32;

/// Fixed-point accelerometer sample in g.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AccelFixed {
    /// X-axis acceleration in g.
    pub x: Fixed,
    /// Y-axis acceleration in g.
    pub y: Fixed,
    /// Z-axis acceleration in g.
    pub z: Fixed,
}

/// Fixed-point gyroscope sample in LSB-divisor units (deg/s with the default scale).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GyroFixed {
    /// X-axis angular rate.
    pub x: Fixed,
    /// Y-axis angular rate.
    pub y: Fixed,
    /// Z-axis angular rate.
    pub z: Fixed,
}

/// Converts accelerometer raw counts to g.
pub fn accel_to_g(raw: AccelRaw, lsb_divisor: u16) -> AccelFixed {
    let scale = Fixed::from_num(lsb_divisor);
    AccelFixed {
        x: Fixed::from_num(raw.x) / scale,
        y: Fixed::from_num(raw.y) / scale,
        z: Fixed::from_num(raw.z) / scale,
    }
}

/// Converts gyroscope raw counts to deg/s.
pub fn gyro_to_dps(raw: GyroRaw, lsb_divisor: u16) -> GyroFixed {
    let scale = Fixed::from_num(lsb_divisor);
    GyroFixed {
        x: Fixed::from_num(raw.x) / scale,
        y: Fixed::from_num(raw.y) / scale,
        z: Fixed::from_num(raw.z) / scale,
    }
}

/// Converts temperature raw counts to degrees Celsius.
pub fn temperature_celsius_fixed(raw: TemperatureRaw) -> Fixed {
    Fixed::from_num(raw.value) / Fixed::from_num(TEMPERATURE_LSB_PER_CELSIUS as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accel_conversion_matches_divisor() {
        let raw = AccelRaw {
            x: 16_384,
            y: -16_384,
            z: 0,
        };
        let fixed = accel_to_g(raw, 16_384);
        assert_eq!(fixed.x, Fixed::from_num(1));
        assert_eq!(fixed.y, Fixed::from_num(-1));
        assert_eq!(fixed.z, Fixed::from_num(0));
    }

    #[test]
    fn gyro_conversion_matches_divisor() {
        let raw = GyroRaw { x: 64, y: -64, z: 0 };
        let fixed = gyro_to_dps(raw, 64);
        assert_eq!(fixed.x, Fixed::from_num(1));
        assert_eq!(fixed.y, Fixed::from_num(-1));
        assert_eq!(fixed.z, Fixed::from_num(0));
    }

    #[test]
    fn temperature_conversion_matches_scale() {
        let raw = TemperatureRaw { value: 256 };
        assert_eq!(temperature_celsius_fixed(raw), Fixed::from_num(1));
    }
}
