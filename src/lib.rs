//! An exact calculator on top of [`exact_num`]. Expressions are tokenized,
//! parsed into an AST and evaluated over exact rationals; decimal literals
//! such as `297.003` are read exactly.

mod demo;
mod error;
mod parser;
mod session;
mod tokenizer;

pub use crate::demo::{run_demo, Demo};
pub use crate::error::EvalError;
pub use crate::parser::ast::Environment;
pub use crate::parser::parser::{Expression, Statement};
pub use crate::session::Session;

#[cfg(test)]
mod tests {
    use crate::Expression;
    use exact_num::Number;

    #[test]
    fn it_works() {
        let mut expr = Expression::parse("1 + 2*3 - x1 * x2").unwrap();
        expr.set_variable("x1", "2")
            .unwrap()
            .set_variable("x2", "2 * 2")
            .unwrap();
        assert_eq!(expr.evaluate().unwrap(), Number::from_i64(-1));
        expr.set_variable("x1", "1/3")
            .unwrap()
            .set_variable("x2", "3")
            .unwrap();
        assert_eq!(expr.evaluate().unwrap(), Number::from_i64(6));
    }
}
