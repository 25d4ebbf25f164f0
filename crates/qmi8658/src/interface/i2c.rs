//! I2C interface adapter for the QMI8658.

use embedded_hal::i2c::I2c;

use super::{Interface, Qmi8658Address, sealed};
use crate::error::Error;

/// I2C register interface.
pub struct I2cInterface<I2C> {
    i2c: I2C,
    address: Qmi8658Address,
}

impl<I2C> I2cInterface<I2C> {
    /// Creates a new I2C interface with the given bus and strap address.
    pub const fn new(i2c: I2C, address: Qmi8658Address) -> Self {
        Self { i2c, address }
    }

    /// Returns the strap address this interface talks to.
    pub const fn address(&self) -> Qmi8658Address {
        self.address
    }

    /// Releases the underlying I2C bus.
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C> Interface for I2cInterface<I2C>
where
    I2C: I2c,
{
    fn read_reg(&mut self, reg: u8) -> Result<u8, Error> {
        let mut buffer = [0u8];
        self.read_regs(reg, &mut buffer)?;
        Ok(buffer[0])
    }

    fn read_regs(&mut self, reg: u8, buffer: &mut [u8]) -> Result<(), Error> {
        if buffer.is_empty() {
            return Ok(());
        }
        self.i2c
            .write_read(self.address.addr(), &[reg], buffer)
            .map_err(|_| Error::Bus)
    }

    fn write_reg(&mut self, reg: u8, value: u8) -> Result<(), Error> {
        self.i2c
            .write(self.address.addr(), &[reg, value])
            .map_err(|_| Error::Bus)
    }
}

impl<I2C> sealed::Sealed for I2cInterface<I2C> {}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::vec;

    use embedded_hal::i2c::ErrorKind;
    use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};

    use super::*;

    #[test]
    fn write_reg_sends_register_then_value() {
        let expectations = [I2cTransaction::write(0x6B, vec![0x03, 0x23])];
        let mut interface = I2cInterface::new(I2cMock::new(&expectations), Qmi8658Address::Secondary);

        interface.write_reg(0x03, 0x23).expect("write");

        interface.release().done();
    }

    #[test]
    fn read_regs_is_a_single_write_read() {
        let expectations = [I2cTransaction::write_read(
            0x6A,
            vec![0x35],
            vec![0x01, 0x02, 0x03, 0x04, 0x05, 0x06],
        )];
        let mut interface = I2cInterface::new(I2cMock::new(&expectations), Qmi8658Address::Primary);

        let mut buffer = [0u8; 6];
        interface.read_regs(0x35, &mut buffer).expect("read");
        assert_eq!(buffer, [0x01, 0x02, 0x03, 0x04, 0x05, 0x06]);

        interface.release().done();
    }

    #[test]
    fn nack_maps_to_bus_error() {
        let expectations =
            [I2cTransaction::write_read(0x6A, vec![0x3B], vec![0; 6]).with_error(ErrorKind::Other)];
        let mut interface = I2cInterface::new(I2cMock::new(&expectations), Qmi8658Address::Primary);

        let mut buffer = [0u8; 6];
        assert_eq!(interface.read_regs(0x3B, &mut buffer), Err(Error::Bus));

        interface.release().done();
    }

    #[test]
    fn empty_read_skips_the_bus() {
        let mut interface = I2cInterface::new(I2cMock::new(&[]), Qmi8658Address::Primary);

        interface.read_regs(0x35, &mut []).expect("empty read");

        interface.release().done();
    }
}
