use exact_num::NumError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("[Syntax Error] {message} at column {column}")]
    Syntax { message: String, column: usize },
    #[error("variable `{0}` has no value")]
    UnknownVariable(String),
    #[error("no variable named `{0}` in expression")]
    NoSuchVariable(String),
    #[error("exponent {0} is not an integer")]
    NonIntegerExponent(String),
    #[error(transparent)]
    Num(#[from] NumError),
}

impl EvalError {
    pub fn syntax(message: impl Into<String>, column: usize) -> Self {
        EvalError::Syntax { message: message.into(), column }
    }
    /// Whether the error was raised before evaluation started.
    pub fn is_syntax(&self) -> bool {
        matches!(self, EvalError::Syntax { .. })
    }
}
