//! Blocking `#![no_std]` driver for the
//! [QMI8658](https://www.qstcorp.com/en_comp_prod/QMI8658C) 6-axis IMU
//! (accelerometer + gyroscope) from QST Corporation, over I2C.
//!
//! The driver is built on `embedded-hal` 1.0 blocking traits. Every call is a
//! synchronous register transaction; nothing is buffered and nothing runs in
//! the background.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use qmi8658_imu::{
//!     AccelOutputDataRate, AccelRange, Config, GyroOutputDataRate, GyroRange,
//!     Qmi8658Address, Qmi8658I2c, SensorEngines,
//! };
//! # use embedded_hal::i2c::I2c;
//! #
//! # fn example<I2C: I2c>(i2c: I2C) -> Result<(), qmi8658_imu::Error> {
//! let mut imu: Qmi8658I2c<I2C> = Qmi8658I2c::with_config(i2c, Qmi8658Address::Secondary, Config::new());
//! imu.configure_accelerometer(AccelRange::G8, AccelOutputDataRate::Hz1000)?;
//! imu.configure_gyroscope(GyroRange::Code5, GyroOutputDataRate::Hz1000)?;
//! imu.enable_sensors(SensorEngines::ACCEL_GYRO)?;
//!
//! let accel = imu.read_acceleration()?;
//! let gyro = imu.read_angular_velocity()?;
//! # let _ = (accel, gyro);
//! # Ok(())
//! # }
//! ```
//!
//! # Scale state
//!
//! Each driver instance keeps its own accelerometer and gyroscope LSB
//! divisors. A divisor changes only once its range register write succeeds,
//! so it always matches the range the device runs. Unknown raw range codes
//! fall back to +/-8 g (divisor 4096) and to gyro divisor 64.
//!
//! # Gyroscope scale
//!
//! Angular velocity is `raw * factor / divisor`, with the factor taken from
//! [`GyroScale`]. The default is plain deg/s; [`GyroScale::LEGACY_GRAVITY`]
//! reproduces firmware that multiplied the gyro channel by standard gravity.
//!
//! # Logging
//!
//! Enable `defmt` or `log` to trace register writes and divisor changes.
//!
//! # Fixed-point conversions
//!
//! Enable the `fixed` feature to access fixed-point helpers that convert raw
//! readings into g and deg/s using `I32F32` integer math.

#![no_std]
#![deny(missing_docs)]
#![deny(unsafe_code)]
// Clippy lint levels live here.
#![deny(clippy::correctness)]
#![warn(
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::cloned_instead_of_copied,
    clippy::explicit_iter_loop,
    clippy::implicit_clone,
    clippy::inconsistent_struct_constructor,
    clippy::manual_assert,
    clippy::manual_let_else,
    clippy::match_same_arms,
    clippy::needless_pass_by_value,
    clippy::semicolon_if_nothing_returned,
    clippy::uninlined_format_args,
    clippy::std_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::alloc_instead_of_core
)]
#![allow(
    clippy::mod_module_files,
    clippy::self_named_module_files,
    clippy::similar_names,
    clippy::must_use_candidate,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::cast_lossless,
    clippy::module_name_repetitions,
    clippy::unwrap_used,
    clippy::expect_used
)]

#[cfg(feature = "fixed")]
extern crate fixed as fixed_crate;

#[macro_use]
mod fmt;

mod config;
mod data;
mod device;
mod driver;
mod error;
mod interface;
mod register;

#[cfg(test)]
mod testing;

// Interface layer
pub use interface::{I2cInterface, Interface, Qmi8658Address};

// Configuration
pub use config::{AccelOutputDataRate, AccelRange, DeltaVelocityOutputDataRate};
pub use config::{Config, FilterConfig, GyroScale, LowPassFilterMode, ONE_G, SensorEngines};
pub use config::{GyroOutputDataRate, GyroRange};

// Driver
pub use driver::{Qmi8658, Qmi8658I2c};

// Data types
pub use data::scale::{
    TEMPERATURE_LSB_PER_CELSIUS, accel_to_mps2, gyro_to_angular_velocity, temperature_celsius,
};
pub use data::{AccelRaw, DeltaVelocityRaw, GyroRaw, MotionRaw, TemperatureRaw};
pub use data::{Acceleration, AngularVelocity, Temperature};
pub use data::{to_twos_complement_16, twos_complement_16};

// Registers
pub use register::Register;

pub use error::Error;

// Fixed-point conversions (feature-gated)
#[cfg(feature = "fixed")]
pub use data::fixed::{
    AccelFixed, Fixed, GyroFixed, accel_to_g, gyro_to_dps, temperature_celsius_fixed,
};
