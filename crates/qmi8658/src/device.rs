//! Device core operations for the QMI8658.

use embedded_hal::delay::DelayNs;

use crate::config::{AccelRange, Config, GyroRange, SensorEngines};
use crate::config::{ctrl2_value, ctrl3_value};
use crate::data::{AXIS_BLOCK_LEN, AccelRaw, DeltaVelocityRaw, GyroRaw, MotionRaw, TemperatureRaw};
use crate::error::Error;
use crate::interface::Interface;
use crate::register::{Register, ctrl1, ctrl6, reset, who_am_i};

/// Time the device needs to come back after a soft reset.
const SOFT_RESET_DELAY_NS: u32 = 150_000_000;

pub(crate) struct DeviceCore<I> {
    interface: I,
    config: Config,
    acc_scale_divisor: u16,
    gyro_scale_divisor: u16,
    engines: Option<SensorEngines>,
}

impl<I> DeviceCore<I> {
    pub(crate) const fn new(interface: I, config: Config) -> Self {
        Self {
            interface,
            config,
            acc_scale_divisor: AccelRange::FALLBACK.lsb_divisor(),
            gyro_scale_divisor: GyroRange::FALLBACK.lsb_divisor(),
            engines: None,
        }
    }

    pub(crate) const fn config(&self) -> Config {
        self.config
    }

    pub(crate) const fn acc_scale_divisor(&self) -> u16 {
        self.acc_scale_divisor
    }

    pub(crate) const fn gyro_scale_divisor(&self) -> u16 {
        self.gyro_scale_divisor
    }

    pub(crate) const fn engines(&self) -> Option<SensorEngines> {
        self.engines
    }

    pub(crate) const fn interface(&self) -> &I {
        &self.interface
    }

    pub(crate) fn release(self) -> I {
        self.interface
    }
}

impl<I> DeviceCore<I>
where
    I: Interface,
{
    /// Writes CTRL2, then rewrites the accelerometer nibble of CTRL5.
    ///
    /// The divisor tracks CTRL2: it changes as soon as the range write lands,
    /// even if the filter update that follows fails.
    pub(crate) fn configure_accel(&mut self, range: AccelRange, rate_code: u8) -> Result<(), Error> {
        let filters = self.config.filters;
        let ctrl2 = ctrl2_value(range, rate_code, filters.high_pass_filter_enabled);
        self.write_reg(Register::Ctrl2, ctrl2)?;
        self.acc_scale_divisor = range.lsb_divisor();
        debug!("accel divisor = {}", self.acc_scale_divisor);

        let ctrl5 = self.read_reg(Register::Ctrl5)?;
        self.write_reg(Register::Ctrl5, filters.merge_accel_ctrl5(ctrl5))
    }

    /// Writes CTRL3, then rewrites the gyroscope nibble of CTRL5.
    pub(crate) fn configure_gyro(&mut self, range: GyroRange, rate_code: u8) -> Result<(), Error> {
        let filters = self.config.filters;
        let ctrl3 = ctrl3_value(range, rate_code, filters.high_pass_filter_enabled);
        self.write_reg(Register::Ctrl3, ctrl3)?;
        self.gyro_scale_divisor = range.lsb_divisor();
        debug!("gyro divisor = {}", self.gyro_scale_divisor);

        let ctrl5 = self.read_reg(Register::Ctrl5)?;
        self.write_reg(Register::Ctrl5, filters.merge_gyro_ctrl5(ctrl5))
    }

    pub(crate) fn configure_delta_velocity(&mut self, rate_code: u8) -> Result<(), Error> {
        self.write_reg(Register::Ctrl6, ctrl6::DV_EN | (rate_code & ctrl6::DV_ODR_MASK))
    }

    pub(crate) fn enable(&mut self, engines: SensorEngines) -> Result<(), Error> {
        self.write_reg(Register::Ctrl1, ctrl1::NORMAL)?;
        self.write_reg(Register::Ctrl7, engines.ctrl7_value())?;
        self.engines = Some(engines);
        Ok(())
    }

    pub(crate) fn disable(&mut self) -> Result<(), Error> {
        self.write_reg(Register::Ctrl7, 0)?;
        self.engines = None;
        Ok(())
    }

    pub(crate) fn soft_reset<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Error> {
        self.write_reg(Register::Reset, reset::SOFT_RESET)?;
        delay.delay_ns(SOFT_RESET_DELAY_NS);
        self.acc_scale_divisor = AccelRange::FALLBACK.lsb_divisor();
        self.gyro_scale_divisor = GyroRange::FALLBACK.lsb_divisor();
        self.engines = None;
        Ok(())
    }

    pub(crate) fn verify_device(&mut self) -> Result<(), Error> {
        let who = self.read_reg(Register::WhoAmI)?;
        if who != who_am_i::EXPECTED {
            warn!("unexpected WHO_AM_I {:#x}", who);
            return Err(Error::WrongDevice);
        }
        Ok(())
    }

    pub(crate) fn read_accel_raw(&mut self) -> Result<AccelRaw, Error> {
        self.require(|engines| engines.accel)?;
        let bytes = self.read_axis_block(Register::AxL)?;
        Ok(AccelRaw::from_le_bytes(&bytes))
    }

    pub(crate) fn read_gyro_raw(&mut self) -> Result<GyroRaw, Error> {
        self.require(|engines| engines.gyro)?;
        let bytes = self.read_axis_block(Register::GxL)?;
        Ok(GyroRaw::from_le_bytes(&bytes))
    }

    pub(crate) fn read_delta_velocity_raw(&mut self) -> Result<DeltaVelocityRaw, Error> {
        self.require(|engines| engines.delta_velocity)?;
        let bytes = self.read_axis_block(Register::DvXL)?;
        Ok(DeltaVelocityRaw::from_le_bytes(&bytes))
    }

    /// Reads accelerometer and gyroscope in a single 12-byte burst from AX_L.
    pub(crate) fn read_motion_raw(&mut self) -> Result<MotionRaw, Error> {
        self.require(|engines| engines.accel && engines.gyro)?;
        let mut buffer = [0u8; AXIS_BLOCK_LEN * 2];
        self.read_regs(Register::AxL, &mut buffer)?;
        let (accel, gyro) = buffer.split_at(AXIS_BLOCK_LEN);
        let mut accel_bytes = [0u8; AXIS_BLOCK_LEN];
        let mut gyro_bytes = [0u8; AXIS_BLOCK_LEN];
        accel_bytes.copy_from_slice(accel);
        gyro_bytes.copy_from_slice(gyro);
        Ok(MotionRaw {
            accel: AccelRaw::from_le_bytes(&accel_bytes),
            gyro: GyroRaw::from_le_bytes(&gyro_bytes),
        })
    }

    pub(crate) fn read_temperature_raw(&mut self) -> Result<TemperatureRaw, Error> {
        self.require(|engines| engines.accel || engines.gyro)?;
        let mut buffer = [0u8; 2];
        self.read_regs(Register::TempL, &mut buffer)?;
        Ok(TemperatureRaw::from_le_bytes(buffer))
    }

    fn require(&self, enabled: impl FnOnce(SensorEngines) -> bool) -> Result<(), Error> {
        match self.engines {
            Some(engines) if enabled(engines) => Ok(()),
            _ => Err(Error::NotReady),
        }
    }

    fn read_axis_block(&mut self, reg: Register) -> Result<[u8; AXIS_BLOCK_LEN], Error> {
        let mut buffer = [0u8; AXIS_BLOCK_LEN];
        self.read_regs(reg, &mut buffer)?;
        Ok(buffer)
    }

    pub(crate) fn read_reg(&mut self, reg: Register) -> Result<u8, Error> {
        self.interface.read_reg(reg.addr())
    }

    pub(crate) fn read_regs(&mut self, reg: Register, buffer: &mut [u8]) -> Result<(), Error> {
        self.interface.read_regs(reg.addr(), buffer)
    }

    pub(crate) fn write_reg(&mut self, reg: Register, value: u8) -> Result<(), Error> {
        trace!("write {:#x} <= {:#x}", reg.addr(), value);
        self.interface.write_reg(reg.addr(), value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{FilterConfig, GyroOutputDataRate};
    use crate::register::{ctrl2, ctrl3};
    use crate::testing::{MockDelay, MockInterface};

    fn core_with(interface: MockInterface) -> DeviceCore<MockInterface> {
        DeviceCore::new(interface, Config::new())
    }

    #[test]
    fn defaults_before_configuration() {
        let core = core_with(MockInterface::default());
        assert_eq!(core.acc_scale_divisor(), 4096);
        assert_eq!(core.gyro_scale_divisor(), 64);
        assert_eq!(core.engines(), None);
    }

    #[test]
    fn configure_accel_writes_ctrl2_then_ctrl5() {
        let interface = MockInterface::default().with_reg(Register::Ctrl5.addr(), 0x70);
        let mut core = core_with(interface);

        core.configure_accel(AccelRange::G4, 0x03).expect("configure accel");

        assert_eq!(
            core.interface().writes(),
            [(Register::Ctrl2.addr(), 0x13), (Register::Ctrl5.addr(), 0x77)]
        );
        assert_eq!(core.acc_scale_divisor(), 8192);
    }

    #[test]
    fn configure_gyro_keeps_accel_filter_bits() {
        let interface = MockInterface::default().with_reg(Register::Ctrl5.addr(), 0x07);
        let mut core = DeviceCore::new(
            interface,
            Config::new().with_filters(FilterConfig::DISABLED),
        );

        core.configure_gyro(GyroRange::Code5, GyroOutputDataRate::Hz1000.bits())
            .expect("configure gyro");

        assert_eq!(
            core.interface().writes(),
            [(Register::Ctrl3.addr(), 0x53), (Register::Ctrl5.addr(), 0x07)]
        );
        assert_eq!(core.gyro_scale_divisor(), 32);
    }

    #[test]
    fn failed_range_write_keeps_previous_divisor() {
        let mut core = core_with(MockInterface::default().failing_writes());

        assert_eq!(core.configure_accel(AccelRange::G2, 0x03), Err(Error::Bus));
        assert_eq!(core.acc_scale_divisor(), 4096);
        assert_eq!(core.configure_gyro(GyroRange::Code0, 0x03), Err(Error::Bus));
        assert_eq!(core.gyro_scale_divisor(), 64);
    }

    #[test]
    fn failed_filter_update_keeps_divisor_in_step_with_range() {
        let mut core = core_with(MockInterface::default().failing_reads());

        assert_eq!(core.configure_accel(AccelRange::G2, 0x03), Err(Error::Bus));
        let accel_reg = core.interface().reg(Register::Ctrl2.addr());
        assert_eq!(accel_reg, 0x03);
        let range = AccelRange::from_code(accel_reg & ctrl2::A_FS_MASK);
        assert_eq!(core.acc_scale_divisor(), range.lsb_divisor());
        assert_eq!(core.acc_scale_divisor(), 16384);

        assert_eq!(core.configure_gyro(GyroRange::Code0, 0x03), Err(Error::Bus));
        let gyro_reg = core.interface().reg(Register::Ctrl3.addr());
        let range = GyroRange::from_code(gyro_reg & ctrl3::G_FS_MASK);
        assert_eq!(core.gyro_scale_divisor(), range.lsb_divisor());
        assert_eq!(core.gyro_scale_divisor(), 1024);
    }

    #[test]
    fn delta_velocity_sets_enable_bit() {
        let mut core = core_with(MockInterface::default());
        core.configure_delta_velocity(0x06).expect("configure dv");
        assert_eq!(core.interface().writes(), [(Register::Ctrl6.addr(), 0x86)]);
    }

    #[test]
    fn enable_is_idempotent() {
        let mut core = core_with(MockInterface::default());
        core.enable(SensorEngines::ACCEL_GYRO_DELTA_VELOCITY).expect("enable");
        core.enable(SensorEngines::ACCEL_GYRO_DELTA_VELOCITY).expect("enable again");

        let expected = [
            (Register::Ctrl1.addr(), 0x60),
            (Register::Ctrl7.addr(), 0x0B),
            (Register::Ctrl1.addr(), 0x60),
            (Register::Ctrl7.addr(), 0x0B),
        ];
        assert_eq!(core.interface().writes(), expected);
    }

    #[test]
    fn reads_require_enabled_engine() {
        let mut core = core_with(MockInterface::default());
        assert_eq!(core.read_accel_raw(), Err(Error::NotReady));

        core.enable(SensorEngines::ACCEL_GYRO).expect("enable");
        assert_eq!(core.read_delta_velocity_raw(), Err(Error::NotReady));
        assert_eq!(core.interface().reads(), 0);
    }

    #[test]
    fn motion_burst_splits_accel_and_gyro() {
        let mut interface = MockInterface::default();
        let base = Register::AxL.addr();
        interface.set_reg(base, 0x01);
        interface.set_reg(base + 6, 0xFF);
        interface.set_reg(base + 7, 0xFF);
        let mut core = core_with(interface);
        core.enable(SensorEngines::ACCEL_GYRO).expect("enable");

        let motion = core.read_motion_raw().expect("motion");
        assert_eq!(motion.accel, AccelRaw { x: 1, y: 0, z: 0 });
        assert_eq!(motion.gyro, GyroRaw { x: -1, y: 0, z: 0 });
    }

    #[test]
    fn soft_reset_restores_defaults() {
        let mut core = core_with(MockInterface::default());
        core.configure_accel(AccelRange::G16, 0x03).expect("configure");
        core.enable(SensorEngines::ACCEL_GYRO).expect("enable");

        let mut delay = MockDelay::default();
        core.soft_reset(&mut delay).expect("reset");

        assert_eq!(delay.calls, 1);
        assert_eq!(delay.last_ns, Some(SOFT_RESET_DELAY_NS));
        assert_eq!(core.acc_scale_divisor(), 4096);
        assert_eq!(core.engines(), None);
    }

    #[test]
    fn verify_device_checks_who_am_i() {
        let interface = MockInterface::default().with_reg(Register::WhoAmI.addr(), 0x05);
        assert_eq!(core_with(interface).verify_device(), Ok(()));

        let interface = MockInterface::default().with_reg(Register::WhoAmI.addr(), 0x68);
        assert_eq!(core_with(interface).verify_device(), Err(Error::WrongDevice));
    }
}
