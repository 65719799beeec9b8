//! Turns a button press into parse, transfer and log line.
//!
//! A request is handled synchronously from start to finish. On any failure
//! the returned [`Error`] carries the dialog text and the log is untouched,
//! so the session is ready for the next request either way.

use crate::bus::I2cBus;
use crate::error::Result;
use crate::logbuf::{LogEntry, LogStore};
use crate::number::{parse_address, parse_value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Request<'a> {
    Read { address: &'a str },
    Write { address: &'a str, value: &'a str },
}

pub struct Session<B> {
    bus: B,
    log: LogStore,
}

impl<B: I2cBus> Session<B> {
    pub fn new(bus: B) -> Self {
        Self {
            bus,
            log: LogStore::new(),
        }
    }

    pub fn handle(&mut self, request: Request<'_>) -> Result<&LogEntry> {
        let outcome = match request {
            Request::Read { address } => self.read(address),
            Request::Write { address, value } => self.write(address, value),
        };
        if let Err(e) = &outcome {
            log::warn!("{request:?} rejected: {e}");
        }
        outcome
    }

    /// Reads one byte from the device at `address`.
    pub fn read(&mut self, address: &str) -> Result<&LogEntry> {
        let address = parse_address(address)?;
        let value = self.bus.read_byte(address)?;
        log::info!("read {address} => {value}");
        Ok(self.log.push(format!("Reading address {address} => {value}")))
    }

    /// Writes one byte to the device at `address`. The address is validated
    /// before the value.
    pub fn write(&mut self, address: &str, value: &str) -> Result<&LogEntry> {
        let address = parse_address(address)?;
        let value = parse_value(value)?;
        self.bus.write_byte(address, value)?;
        log::info!("wrote {value} to {address}");
        Ok(self.log.push(format!("Writing address {address} => {value}")))
    }

    pub fn log(&self) -> &LogStore {
        &self.log
    }

    pub fn bus(&self) -> &B {
        &self.bus
    }

    pub fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }
}
