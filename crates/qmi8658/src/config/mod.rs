//! Configuration helpers for the QMI8658.

pub(crate) mod common;

pub use common::{AccelOutputDataRate, AccelRange, LowPassFilterMode};
pub use common::{DeltaVelocityOutputDataRate, GyroOutputDataRate, GyroRange};
pub(crate) use common::{check_delta_velocity_code, check_odr_code, ctrl2_value, ctrl3_value};

use crate::register::{ctrl5, ctrl7};

/// Standard gravity in m/s^2.
pub const ONE_G: f32 = 9.806_65;

/// Filter settings applied whenever an axis is configured.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FilterConfig {
    /// Sets bit 7 of CTRL2/CTRL3 alongside the range and ODR.
    pub high_pass_filter_enabled: bool,
    /// Enables the low-pass filter nibble of CTRL5 for the configured axis.
    pub low_pass_filter_enabled: bool,
    /// Low-pass filter strength used when the filter is enabled.
    pub low_pass_mode: LowPassFilterMode,
}

impl FilterConfig {
    /// Low-pass enabled at 14% of ODR, high-pass disabled.
    pub const DEFAULT: Self = Self {
        high_pass_filter_enabled: false,
        low_pass_filter_enabled: true,
        low_pass_mode: LowPassFilterMode::OdrPercent14_0,
    };

    /// Both filters disabled.
    pub const DISABLED: Self = Self {
        high_pass_filter_enabled: false,
        low_pass_filter_enabled: false,
        low_pass_mode: LowPassFilterMode::OdrPercent14_0,
    };

    /// Enables or disables the high-pass filter bit.
    #[must_use]
    pub const fn with_high_pass(self, enable: bool) -> Self {
        Self {
            high_pass_filter_enabled: enable,
            ..self
        }
    }

    /// Enables the low-pass filter with the given strength.
    #[must_use]
    pub const fn with_low_pass(self, mode: LowPassFilterMode) -> Self {
        Self {
            low_pass_filter_enabled: true,
            low_pass_mode: mode,
            ..self
        }
    }

    /// Disables the low-pass filter.
    #[must_use]
    pub const fn without_low_pass(self) -> Self {
        Self {
            low_pass_filter_enabled: false,
            ..self
        }
    }

    /// Merges the accelerometer filter bits into `current`, keeping the gyro nibble.
    pub(crate) const fn merge_accel_ctrl5(self, current: u8) -> u8 {
        let mut value = current & !ctrl5::A_NIBBLE;
        if self.low_pass_filter_enabled {
            value |= (self.low_pass_mode.bits() << ctrl5::A_LPF_MODE_SHIFT) & ctrl5::A_LPF_MODE_MASK;
            value |= ctrl5::A_LPF_EN;
        }
        value
    }

    /// Merges the gyroscope filter bits into `current`, keeping the accel nibble.
    pub(crate) const fn merge_gyro_ctrl5(self, current: u8) -> u8 {
        let mut value = current & !ctrl5::G_NIBBLE;
        if self.low_pass_filter_enabled {
            value |= (self.low_pass_mode.bits() << ctrl5::G_LPF_MODE_SHIFT) & ctrl5::G_LPF_MODE_MASK;
            value |= ctrl5::G_LPF_EN;
        }
        value
    }
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Conversion factor applied to gyroscope counts after dividing by the LSB divisor.
///
/// `physical = raw * factor / divisor`. [`GyroScale::DPS`] yields deg/s.
/// [`GyroScale::LEGACY_GRAVITY`] multiplies by standard gravity, matching
/// firmware that scaled the gyro channel like the accelerometer.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GyroScale {
    /// Multiplier applied before dividing by the LSB divisor.
    pub factor: f32,
}

impl GyroScale {
    /// Plain degrees per second.
    pub const DPS: Self = Self { factor: 1.0 };
    /// Raw counts scaled by standard gravity.
    pub const LEGACY_GRAVITY: Self = Self { factor: ONE_G };

    /// Creates a custom scale.
    pub const fn new(factor: f32) -> Self {
        Self { factor }
    }
}

impl Default for GyroScale {
    fn default() -> Self {
        Self::DPS
    }
}

/// Sensor engines switched on by CTRL7.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorEngines {
    /// Accelerometer engine.
    pub accel: bool,
    /// Gyroscope engine.
    pub gyro: bool,
    /// Delta-velocity (AttitudeEngine) output.
    pub delta_velocity: bool,
}

impl SensorEngines {
    /// Accelerometer and gyroscope (CTRL7 = 0x03).
    pub const ACCEL_GYRO: Self = Self {
        accel: true,
        gyro: true,
        delta_velocity: false,
    };

    /// Accelerometer, gyroscope, and delta-velocity (CTRL7 = 0x0B).
    pub const ACCEL_GYRO_DELTA_VELOCITY: Self = Self {
        accel: true,
        gyro: true,
        delta_velocity: true,
    };

    /// Builds the CTRL7 enable mask.
    pub const fn ctrl7_value(self) -> u8 {
        let mut value = 0;
        if self.accel {
            value |= ctrl7::A_EN;
        }
        if self.gyro {
            value |= ctrl7::G_EN;
        }
        if self.delta_velocity {
            value |= ctrl7::S_EN;
        }
        value
    }
}

impl Default for SensorEngines {
    fn default() -> Self {
        Self::ACCEL_GYRO
    }
}

/// Driver configuration fixed at construction.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// Filter bits applied by the accelerometer and gyroscope setters.
    pub filters: FilterConfig,
    /// Gyroscope count-to-physical conversion.
    pub gyro_scale: GyroScale,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a default configuration.
    pub const fn new() -> Self {
        Self {
            filters: FilterConfig::DEFAULT,
            gyro_scale: GyroScale::DPS,
        }
    }

    /// Sets the filter configuration.
    #[must_use]
    pub const fn with_filters(mut self, filters: FilterConfig) -> Self {
        self.filters = filters;
        self
    }

    /// Sets the gyroscope scale.
    #[must_use]
    pub const fn with_gyro_scale(mut self, gyro_scale: GyroScale) -> Self {
        self.gyro_scale = gyro_scale;
        self
    }
}
