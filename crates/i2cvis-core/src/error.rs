use crate::bus::BusError;
use crate::number::FormatError;

pub type Result<T> = std::result::Result<T, Error>;

/// Why a read or write request did not reach the log.
///
/// The `Display` text is what the error dialog shows.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error("I2C transfer failed: {0}")]
    Bus(#[from] BusError),
}
