//! Address and value parsing for the form fields.
//!
//! Operators type numbers in decimal, `0x`-prefixed hexadecimal or
//! `0b`-prefixed binary. The prefix is matched case-insensitively and only at
//! the start of the (whitespace-trimmed) text.

use std::fmt;

/// Largest 7-bit I2C address.
pub const MAX_ADDRESS: u8 = 0x7f;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Address,
    Value,
}

impl Field {
    pub fn name(&self) -> &'static str {
        match self {
            Field::Address => "address",
            Field::Value => "value",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberError {
    Empty,
    InvalidDigit,
    Overflow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatErrorKind {
    Invalid,
    OutOfRange { max: u8 },
}

/// A form field that could not be turned into a number the bus accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatError {
    pub field: Field,
    pub kind: FormatErrorKind,
}

impl FormatError {
    fn invalid(field: Field) -> Self {
        Self { field, kind: FormatErrorKind::Invalid }
    }

    fn out_of_range(field: Field, max: u8) -> Self {
        Self { field, kind: FormatErrorKind::OutOfRange { max } }
    }

    pub fn message(&self) -> String {
        let name = self.field.name();
        match self.kind {
            FormatErrorKind::Invalid => format!("Please enter a valid {name} (format: dec/hex/bin)."),
            FormatErrorKind::OutOfRange { max } => match self.field {
                Field::Address => format!("The {name} must be between 0x0 and {max:#x}."),
                Field::Value => format!("The {name} must be between 0 and {max}."),
            },
        }
    }
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for FormatError {}

/// 7-bit I2C device address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address(u8);

impl Address {
    pub fn new(raw: u8) -> Option<Self> {
        (raw <= MAX_ADDRESS).then_some(Self(raw))
    }

    pub fn get(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

impl fmt::LowerHex for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

/// Parses `text` as decimal, `0x` hex or `0b` binary.
pub fn parse_number(text: &str) -> Result<u64, NumberError> {
    let text = text.trim();
    let (digits, radix) = if let Some(rest) = strip_prefix_ci(text, "0x") {
        (rest, 16)
    } else if let Some(rest) = strip_prefix_ci(text, "0b") {
        (rest, 2)
    } else {
        (text, 10)
    };

    if digits.is_empty() {
        return Err(NumberError::Empty);
    }
    // from_str_radix tolerates a leading '+', the form does not.
    if !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(NumberError::InvalidDigit);
    }
    u64::from_str_radix(digits, radix).map_err(|_| NumberError::Overflow)
}

pub fn parse_address(text: &str) -> Result<Address, FormatError> {
    let raw = parse_field(Field::Address, text, MAX_ADDRESS)?;
    Address::new(raw).ok_or(FormatError::out_of_range(Field::Address, MAX_ADDRESS))
}

pub fn parse_value(text: &str) -> Result<u8, FormatError> {
    parse_field(Field::Value, text, u8::MAX)
}

fn parse_field(field: Field, text: &str, max: u8) -> Result<u8, FormatError> {
    match parse_number(text) {
        Ok(n) if n <= u64::from(max) => Ok(n as u8),
        Ok(_) | Err(NumberError::Overflow) => Err(FormatError::out_of_range(field, max)),
        Err(_) => Err(FormatError::invalid(field)),
    }
}

fn strip_prefix_ci<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    let head = text.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix).then(|| &text[prefix.len()..])
}
