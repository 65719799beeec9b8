//! In-memory bus for exercising the session without hardware.

use std::collections::VecDeque;

use crate::bus::{BusError, I2cBus};
use crate::number::Address;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transaction {
    Read { address: Address },
    Write { address: Address, value: u8 },
}

/// Records every transfer and answers reads from a queue.
///
/// A read with nothing queued behaves like an absent device.
#[derive(Debug, Default)]
pub struct MockBus {
    transactions: Vec<Transaction>,
    responses: VecDeque<u8>,
    failures: VecDeque<String>,
}

impl MockBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Byte returned by the next read.
    pub fn queue_read(&mut self, value: u8) -> &mut Self {
        self.responses.push_back(value);
        self
    }

    /// Makes the next transfer fail with `reason`.
    pub fn fail_next(&mut self, reason: impl Into<String>) -> &mut Self {
        self.failures.push_back(reason.into());
        self
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn clear_transactions(&mut self) {
        self.transactions.clear();
    }
}

impl I2cBus for MockBus {
    fn read_byte(&mut self, address: Address) -> Result<u8, BusError> {
        self.transactions.push(Transaction::Read { address });
        if let Some(reason) = self.failures.pop_front() {
            return Err(BusError::Read { address, reason });
        }
        self.responses.pop_front().ok_or_else(|| BusError::Read {
            address,
            reason: "no device responded".to_string(),
        })
    }

    fn write_byte(&mut self, address: Address, value: u8) -> Result<(), BusError> {
        self.transactions.push(Transaction::Write { address, value });
        match self.failures.pop_front() {
            Some(reason) => Err(BusError::Write { address, value, reason }),
            None => Ok(()),
        }
    }
}
