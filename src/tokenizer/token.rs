#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExprTokenType {
    Var,
    Num,
    Add,
    Sub,
    Mul,
    Div,
    Pow,
    Assign,
    LeftScope,
    RightScope,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub val: String,
    pub ty: ExprTokenType,
    /// 1-based column of the first character.
    pub column: usize,
}

impl Token {
    pub fn new(val: String, ty: ExprTokenType, column: usize) -> Token {
        Token { val, ty, column }
    }
}
