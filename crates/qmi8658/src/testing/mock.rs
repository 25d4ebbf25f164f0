extern crate std;

use std::vec::Vec;

use embedded_hal::delay::DelayNs;

use crate::error::Error;
use crate::interface::{Interface, sealed};

/// In-memory register file that records every write.
#[derive(Clone, Debug)]
pub(crate) struct MockInterface {
    regs: [u8; 256],
    writes: Vec<(u8, u8)>,
    reads: usize,
    fail_reads: bool,
    fail_writes: bool,
}

impl Default for MockInterface {
    fn default() -> Self {
        Self {
            regs: [0u8; 256],
            writes: Vec::new(),
            reads: 0,
            fail_reads: false,
            fail_writes: false,
        }
    }
}

impl MockInterface {
    pub(crate) fn with_reg(mut self, reg: u8, value: u8) -> Self {
        self.set_reg(reg, value);
        self
    }

    pub(crate) fn with_regs(mut self, reg: u8, values: &[u8]) -> Self {
        for (offset, value) in values.iter().enumerate() {
            self.set_reg(reg.wrapping_add(offset as u8), *value);
        }
        self
    }

    /// Every read transaction fails with [`Error::Bus`].
    pub(crate) fn failing_reads(mut self) -> Self {
        self.fail_reads = true;
        self
    }

    /// Every write transaction fails with [`Error::Bus`].
    pub(crate) fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    pub(crate) fn set_reg(&mut self, reg: u8, value: u8) {
        self.regs[reg as usize] = value;
    }

    pub(crate) fn reg(&self, reg: u8) -> u8 {
        self.regs[reg as usize]
    }

    pub(crate) fn writes(&self) -> &[(u8, u8)] {
        &self.writes
    }

    /// Number of read transactions issued.
    pub(crate) fn reads(&self) -> usize {
        self.reads
    }
}

impl Interface for MockInterface {
    fn read_reg(&mut self, reg: u8) -> Result<u8, Error> {
        let mut buffer = [0u8];
        self.read_regs(reg, &mut buffer)?;
        Ok(buffer[0])
    }

    fn read_regs(&mut self, reg: u8, buffer: &mut [u8]) -> Result<(), Error> {
        if buffer.is_empty() {
            return Ok(());
        }
        self.reads += 1;
        if self.fail_reads {
            return Err(Error::Bus);
        }
        for (offset, slot) in buffer.iter_mut().enumerate() {
            let addr = reg.wrapping_add(offset as u8);
            *slot = self.regs[addr as usize];
        }
        Ok(())
    }

    fn write_reg(&mut self, reg: u8, value: u8) -> Result<(), Error> {
        if self.fail_writes {
            return Err(Error::Bus);
        }
        self.regs[reg as usize] = value;
        self.writes.push((reg, value));
        Ok(())
    }
}

impl sealed::Sealed for MockInterface {}

#[derive(Default, Debug)]
pub(crate) struct MockDelay {
    pub(crate) calls: u32,
    pub(crate) last_ns: Option<u32>,
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.calls += 1;
        self.last_ns = Some(ns);
    }
}
