pub mod token;
pub mod tokenizer;

pub use crate::tokenizer::token::{ExprTokenType, Token};
pub use crate::tokenizer::tokenizer::tokenize;
