//! Single-byte I2C transactions against a numbered bus.

use std::path::PathBuf;

use crate::number::Address;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BusError {
    #[error("cannot open {}: {reason}", .path.display())]
    Open { path: PathBuf, reason: String },
    #[error("reading address {address} failed: {reason}")]
    Read { address: Address, reason: String },
    #[error("writing {value} to address {address} failed: {reason}")]
    Write { address: Address, value: u8, reason: String },
    #[error("I2C access is only available on Linux")]
    Unsupported,
}

/// Something that can perform one-byte transfers with a device.
///
/// Implementations must not cache: every call is a separate bus transaction.
pub trait I2cBus {
    /// SMBus "receive byte": reads one byte from `address` without a register.
    fn read_byte(&mut self, address: Address) -> Result<u8, BusError>;

    /// SMBus "send byte": writes `value` to `address` without a register.
    fn write_byte(&mut self, address: Address, value: u8) -> Result<(), BusError>;
}

/// The kernel's `i2c-dev` interface for one bus.
///
/// A fresh device handle is opened for every transfer and closed when it
/// returns, so nothing is held between clicks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemBus {
    bus: u32,
}

impl SystemBus {
    pub fn new(bus: u32) -> Self {
        Self { bus }
    }

    pub fn index(&self) -> u32 {
        self.bus
    }

    pub fn device_path(&self) -> PathBuf {
        PathBuf::from(format!("/dev/i2c-{}", self.bus))
    }
}

impl Default for SystemBus {
    fn default() -> Self {
        Self::new(0)
    }
}

#[cfg(target_os = "linux")]
mod linux {
    use i2cdev::core::I2CDevice;
    use i2cdev::linux::LinuxI2CDevice;

    use super::{BusError, I2cBus, SystemBus};
    use crate::number::Address;

    impl SystemBus {
        fn open(&self, address: Address) -> Result<LinuxI2CDevice, BusError> {
            let path = self.device_path();
            LinuxI2CDevice::new(&path, u16::from(address.get())).map_err(|e| BusError::Open {
                path,
                reason: e.to_string(),
            })
        }
    }

    impl I2cBus for SystemBus {
        fn read_byte(&mut self, address: Address) -> Result<u8, BusError> {
            let mut dev = self.open(address)?;
            let value = dev.smbus_read_byte().map_err(|e| BusError::Read {
                address,
                reason: e.to_string(),
            })?;
            log::debug!("i2c-{} read {address} -> {value:#04x}", self.bus);
            Ok(value)
        }

        fn write_byte(&mut self, address: Address, value: u8) -> Result<(), BusError> {
            let mut dev = self.open(address)?;
            dev.smbus_write_byte(value).map_err(|e| BusError::Write {
                address,
                value,
                reason: e.to_string(),
            })?;
            log::debug!("i2c-{} wrote {value:#04x} to {address}", self.bus);
            Ok(())
        }
    }
}

#[cfg(not(target_os = "linux"))]
impl I2cBus for SystemBus {
    fn read_byte(&mut self, _address: Address) -> Result<u8, BusError> {
        Err(BusError::Unsupported)
    }

    fn write_byte(&mut self, _address: Address, _value: u8) -> Result<(), BusError> {
        Err(BusError::Unsupported)
    }
}
