//! QMI8658 driver implementation.
//!
//! This module provides the blocking driver: configure the accelerometer,
//! gyroscope, and delta-velocity outputs, enable the engines, then poll.

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

use crate::config::{AccelOutputDataRate, AccelRange, Config, DeltaVelocityOutputDataRate};
use crate::config::{GyroOutputDataRate, GyroRange, SensorEngines};
use crate::config::{check_delta_velocity_code, check_odr_code};
use crate::data::scale::{accel_to_mps2, gyro_to_angular_velocity, temperature_celsius};
use crate::data::{AccelRaw, Acceleration, AngularVelocity, DeltaVelocityRaw, GyroRaw};
use crate::data::{MotionRaw, Temperature, TemperatureRaw};
use crate::device::DeviceCore;
use crate::error::Error;
use crate::interface::{I2cInterface, Interface, Qmi8658Address};

/// QMI8658 6-axis IMU driver.
///
/// Each instance owns its scale divisors; several sensors on one board are
/// several independent instances.
pub struct Qmi8658<I> {
    core: DeviceCore<I>,
}

/// I2C type alias for the QMI8658 driver.
pub type Qmi8658I2c<I2C> = Qmi8658<I2cInterface<I2C>>;

impl<I2C> Qmi8658<I2cInterface<I2C>>
where
    I2C: I2c,
{
    /// Creates a new I2C-based driver with default settings.
    pub fn new(i2c: I2C, address: Qmi8658Address) -> Self {
        Self::with_config(i2c, address, Config::default())
    }

    /// Creates a new I2C-based driver with a custom configuration.
    pub fn with_config(i2c: I2C, address: Qmi8658Address, config: Config) -> Self {
        Self::from_interface(I2cInterface::new(i2c, address), config)
    }

    /// Returns the strap address the driver talks to.
    pub fn address(&self) -> Qmi8658Address {
        self.core.interface().address()
    }

    /// Releases the I2C bus, consuming the driver.
    pub fn release(self) -> I2C {
        self.core.release().release()
    }
}

impl<I> Qmi8658<I>
where
    I: Interface,
{
    /// Creates a driver on top of an existing register interface.
    pub fn from_interface(interface: I, config: Config) -> Self {
        Self {
            core: DeviceCore::new(interface, config),
        }
    }

    /// Returns the configuration the driver was built with.
    pub const fn config(&self) -> Config {
        self.core.config()
    }

    /// Current accelerometer LSB-per-g divisor.
    pub const fn acc_scale_divisor(&self) -> u16 {
        self.core.acc_scale_divisor()
    }

    /// Current gyroscope LSB divisor.
    pub const fn gyro_scale_divisor(&self) -> u16 {
        self.core.gyro_scale_divisor()
    }

    /// Engines switched on by the last [`enable_sensors`](Self::enable_sensors), if any.
    pub const fn enabled_engines(&self) -> Option<SensorEngines> {
        self.core.engines()
    }

    /// Sets the accelerometer range and output data rate.
    ///
    /// Writes CTRL2, then updates the accelerometer low-pass bits of CTRL5
    /// without touching the gyroscope bits.
    pub fn configure_accelerometer(
        &mut self,
        range: AccelRange,
        odr: AccelOutputDataRate,
    ) -> Result<(), Error> {
        self.core.configure_accel(range, odr.bits())
    }

    /// Sets the accelerometer from raw CTRL2 codes.
    ///
    /// `range_code` values other than 0x00/0x10/0x20/0x30 select +/-8 g.
    /// `rate_code` is written as-is but must fit in the ODR nibble.
    pub fn configure_accelerometer_code(&mut self, range_code: u8, rate_code: u8) -> Result<(), Error> {
        let rate_code = check_odr_code(rate_code)?;
        let range = AccelRange::from_code(range_code);
        if range.code() != range_code {
            warn!("accel range code {:#x} unknown, using 8g", range_code);
        }
        self.core.configure_accel(range, rate_code)
    }

    /// Sets the gyroscope range and output data rate.
    pub fn configure_gyroscope(
        &mut self,
        range: GyroRange,
        odr: GyroOutputDataRate,
    ) -> Result<(), Error> {
        self.core.configure_gyro(range, odr.bits())
    }

    /// Sets the gyroscope from raw CTRL3 codes.
    ///
    /// Unknown `range_code` values select [`GyroRange::FALLBACK`].
    pub fn configure_gyroscope_code(&mut self, range_code: u8, rate_code: u8) -> Result<(), Error> {
        let rate_code = check_odr_code(rate_code)?;
        let range = GyroRange::from_code(range_code);
        if range.code() != range_code {
            warn!("gyro range code {:#x} unknown, using fallback", range_code);
        }
        self.core.configure_gyro(range, rate_code)
    }

    /// Enables delta-velocity output at the given rate (CTRL6).
    pub fn configure_delta_velocity(&mut self, odr: DeltaVelocityOutputDataRate) -> Result<(), Error> {
        self.core.configure_delta_velocity(odr.bits())
    }

    /// Enables delta-velocity output from a raw CTRL6 rate code (0..=7).
    pub fn configure_delta_velocity_code(&mut self, rate_code: u8) -> Result<(), Error> {
        let rate_code = check_delta_velocity_code(rate_code)?;
        self.core.configure_delta_velocity(rate_code)
    }

    /// Starts the clock (CTRL1) and switches on the selected engines (CTRL7).
    ///
    /// Safe to call repeatedly; the same bytes are written each time.
    pub fn enable_sensors(&mut self, engines: SensorEngines) -> Result<(), Error> {
        self.core.enable(engines)
    }

    /// Switches every engine off (CTRL7 = 0).
    pub fn disable_sensors(&mut self) -> Result<(), Error> {
        self.core.disable()
    }

    /// Performs a software reset and waits for the device to come back.
    ///
    /// Divisors return to their defaults and the engines must be enabled again.
    pub fn soft_reset<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Error> {
        self.core.soft_reset(delay)
    }

    /// Verifies the device WHO_AM_I register.
    pub fn verify_device(&mut self) -> Result<(), Error> {
        self.core.verify_device()
    }

    /// Reads the accelerometer in m/s^2.
    pub fn read_acceleration(&mut self) -> Result<Acceleration, Error> {
        let raw = self.core.read_accel_raw()?;
        Ok(accel_to_mps2(raw, self.core.acc_scale_divisor()))
    }

    /// Reads the gyroscope, scaled by the divisor and [`GyroScale`](crate::GyroScale).
    pub fn read_angular_velocity(&mut self) -> Result<AngularVelocity, Error> {
        let raw = self.core.read_gyro_raw()?;
        Ok(gyro_to_angular_velocity(
            raw,
            self.core.gyro_scale_divisor(),
            self.core.config().gyro_scale,
        ))
    }

    /// Reads the delta-velocity output as raw signed counts.
    pub fn read_delta_velocity(&mut self) -> Result<DeltaVelocityRaw, Error> {
        self.core.read_delta_velocity_raw()
    }

    /// Reads raw accelerometer counts.
    pub fn read_accel_raw(&mut self) -> Result<AccelRaw, Error> {
        self.core.read_accel_raw()
    }

    /// Reads raw gyroscope counts.
    pub fn read_gyro_raw(&mut self) -> Result<GyroRaw, Error> {
        self.core.read_gyro_raw()
    }

    /// Reads accelerometer and gyroscope counts in one bus transaction.
    pub fn read_motion(&mut self) -> Result<MotionRaw, Error> {
        self.core.read_motion_raw()
    }

    /// Reads raw temperature counts.
    pub fn read_temperature_raw(&mut self) -> Result<TemperatureRaw, Error> {
        self.core.read_temperature_raw()
    }

    /// Reads the die temperature in degrees Celsius.
    pub fn read_temperature(&mut self) -> Result<Temperature, Error> {
        self.core.read_temperature_raw().map(temperature_celsius)
    }
}
