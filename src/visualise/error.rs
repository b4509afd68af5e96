//! Visualiser input errors.

/// Reasons a type name or decimal string is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VisualiseError {
    #[error("Unknown type '{0}' (expected 'char' or 'int')")]
    UnknownType(String),

    #[error("Decimal input is empty")]
    Empty,

    #[error("Decimal input '{input}' is longer than {max} characters")]
    TooLong { input: String, max: usize },

    #[error("Decimal input '{0}' is not a plain base-10 number")]
    InvalidDigits(String),

    #[error("Value {value} does not fit in {ty}")]
    OutOfRange { value: String, ty: &'static str },
}
