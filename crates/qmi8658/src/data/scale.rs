//! Conversion of raw counts to physical units.

use super::{AccelRaw, GyroRaw, TemperatureRaw};
use crate::config::{GyroScale, ONE_G};

/// Temperature sensitivity in LSB per degree Celsius.
pub const TEMPERATURE_LSB_PER_CELSIUS: f32 = 256.0;

/// Acceleration in m/s^2.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Acceleration {
    /// X-axis acceleration.
    pub x: f32,
    /// Y-axis acceleration.
    pub y: f32,
    /// Z-axis acceleration.
    pub z: f32,
}

/// Angular velocity, in deg/s with [`GyroScale::DPS`].
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AngularVelocity {
    /// X-axis angular rate.
    pub x: f32,
    /// Y-axis angular rate.
    pub y: f32,
    /// Z-axis angular rate.
    pub z: f32,
}

/// Die temperature in degrees Celsius.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Temperature {
    /// Temperature in degrees Celsius.
    pub celsius: f32,
}

/// Converts accelerometer counts to m/s^2 using the LSB-per-g divisor.
pub fn accel_to_mps2(raw: AccelRaw, lsb_divisor: u16) -> Acceleration {
    let divisor = f32::from(lsb_divisor);
    Acceleration {
        x: f32::from(raw.x) * ONE_G / divisor,
        y: f32::from(raw.y) * ONE_G / divisor,
        z: f32::from(raw.z) * ONE_G / divisor,
    }
}

/// Converts gyroscope counts using the LSB divisor and the configured scale.
pub fn gyro_to_angular_velocity(raw: GyroRaw, lsb_divisor: u16, scale: GyroScale) -> AngularVelocity {
    let divisor = f32::from(lsb_divisor);
    AngularVelocity {
        x: f32::from(raw.x) * scale.factor / divisor,
        y: f32::from(raw.y) * scale.factor / divisor,
        z: f32::from(raw.z) * scale.factor / divisor,
    }
}

/// Converts temperature counts to degrees Celsius.
pub fn temperature_celsius(raw: TemperatureRaw) -> Temperature {
    Temperature {
        celsius: f32::from(raw.value) / TEMPERATURE_LSB_PER_CELSIUS,
    }
}

#[cfg(test)]
pub(crate) fn assert_close(actual: f32, expected: f32) {
    let diff = actual - expected;
    assert!(
        diff < 1e-5 && diff > -1e-5,
        "expected {expected}, got {actual}"
    );
}
