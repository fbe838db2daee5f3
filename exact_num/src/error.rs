use thiserror::Error;

/// Failures of the arithmetic engine. Every fallible operation returns one of
/// these instead of panicking.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumError {
    #[error("division by zero")]
    DivisionByZero,
    #[error("negative value cannot be converted to an unsigned integer")]
    NegativeToUnsigned,
    #[error("value {value} is out of range for {target}")]
    OutOfRange { value: String, target: &'static str },
    #[error("invalid exponent {0}: exponent must not be negative")]
    InvalidExponent(String),
    #[error("invalid numeric literal `{0}`")]
    InvalidNumericLiteral(String),
}

pub type NumResult<T> = Result<T, NumError>;
