//! Bit pattern visualiser
//!
//! Converts a decimal string into the two's-complement bit pattern of a
//! fixed-width signed integer, printed most significant bit first and
//! grouped into nibbles: `char -50` renders as `1100 1110`.

mod error;

pub use error::VisualiseError;

use std::fmt;
use std::str::FromStr;

/// Integer types the visualiser understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntType {
    /// Signed 8-bit
    Char,
    /// Signed 32-bit
    Int,
}

impl IntType {
    /// Size in bytes
    pub const fn size_of(self) -> usize {
        match self {
            Self::Char => 1,
            Self::Int => 4,
        }
    }

    pub const fn bits(self) -> u32 {
        self.size_of() as u32 * 8
    }

    /// Longest accepted decimal string, sign included
    const fn max_len(self) -> usize {
        match self {
            Self::Char => 4,
            Self::Int => 11,
        }
    }

    fn contains(self, value: i64) -> bool {
        match self {
            Self::Char => i8::try_from(value).is_ok(),
            Self::Int => i32::try_from(value).is_ok(),
        }
    }

    const fn name(self) -> &'static str {
        match self {
            Self::Char => "char",
            Self::Int => "int",
        }
    }
}

impl FromStr for IntType {
    type Err = VisualiseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "char" => Ok(Self::Char),
            "int" => Ok(Self::Int),
            other => Err(VisualiseError::UnknownType(other.to_string())),
        }
    }
}

impl fmt::Display for IntType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parse `input` as a value of `ty` and render its bit pattern
///
/// Accepts an optional leading `-` followed by ASCII digits. A leading zero
/// is only allowed when every character is `0`, so `08` is rejected.
///
/// # Example
/// ```
/// use cursor_list::visualise::{decimal_to_binary, IntType};
///
/// assert_eq!(decimal_to_binary(IntType::Char, "7").unwrap(), "0000 0111");
/// assert!(decimal_to_binary(IntType::Char, "255").is_err());
/// ```
pub fn decimal_to_binary(ty: IntType, input: &str) -> Result<String, VisualiseError> {
    if input.is_empty() {
        return Err(VisualiseError::Empty);
    }

    if input.len() > ty.max_len() {
        return Err(VisualiseError::TooLong {
            input: input.to_string(),
            max: ty.max_len(),
        });
    }

    let digits = input.strip_prefix('-').unwrap_or(input);
    let plain_digits = !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit());
    let padded = input.starts_with('0') && input.bytes().any(|b| b != b'0');
    if !plain_digits || padded {
        return Err(VisualiseError::InvalidDigits(input.to_string()));
    }

    // At most 11 characters, so this always fits
    let value: i64 = input
        .parse()
        .map_err(|_| VisualiseError::InvalidDigits(input.to_string()))?;

    if !ty.contains(value) {
        return Err(VisualiseError::OutOfRange {
            value: input.to_string(),
            ty: ty.name(),
        });
    }

    Ok(format_bits(value, ty.bits()))
}

/// Parse the type name and the decimal string in one step
pub fn visualise(type_name: &str, input: &str) -> Result<String, VisualiseError> {
    let ty: IntType = type_name.parse()?;
    decimal_to_binary(ty, input)
        .inspect_err(|err| tracing::debug!(%err, %ty, "rejected decimal input"))
}

/// Lowest `width` bits of `value`, MSB first, a space between nibbles
fn format_bits(value: i64, width: u32) -> String {
    let pattern = value as u64;
    let mut out = String::with_capacity((width + width / 4) as usize);

    for i in (0..width).rev() {
        out.push(if (pattern >> i) & 1 == 1 { '1' } else { '0' });
        if i > 0 && i % 4 == 0 {
            out.push(' ');
        }
    }

    out
}
