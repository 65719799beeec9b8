//! Core functionalities: number parsing, I2C transfers, request log, settings.

pub mod bus;
pub mod error;
pub mod logbuf;
pub mod mock;
pub mod number;
pub mod session;
pub mod settings;

pub use bus::{BusError, I2cBus, SystemBus};
pub use error::{Error, Result};
pub use logbuf::{LogEntry, LogStore};
pub use mock::{MockBus, Transaction};
pub use number::{parse_address, parse_number, parse_value, Address, Field, FormatError, FormatErrorKind, NumberError};
pub use session::{Request, Session};
pub use settings::{Settings, SettingsError};
