use std::collections::HashMap;

use exact_num::Number;
use tracing::trace;

use crate::error::EvalError;

/// Values of the variables known to an evaluation, by name.
pub type Environment = HashMap<String, Number>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
    Neg,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    symbol: String,
}

impl Variable {
    pub fn new(symbol: String) -> Self {
        Self { symbol }
    }
    pub fn symbol(&self) -> &str {
        &self.symbol
    }
    fn get(&self, bindings: &Bindings<'_>) -> Result<Number, EvalError> {
        if let Some(Some(expr)) = bindings.table.get(&self.symbol) {
            // bound sub-expressions only see the outer environment
            return expr.evaluate(&Bindings { table: &HashMap::new(), env: bindings.env });
        }
        match bindings.env.get(&self.symbol) {
            Some(value) => Ok(value.clone()),
            None => Err(EvalError::UnknownVariable(self.symbol.clone())),
        }
    }
}

/// Where variables are looked up: first the expression's own bound
/// sub-expressions, then the caller's environment.
pub(crate) struct Bindings<'a> {
    pub table: &'a HashMap<String, Option<Operand>>,
    pub env: &'a Environment,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    Num(Number),
    Expr(Box<AstNode>),
    Var(Variable),
}

impl Operand {
    pub(crate) fn evaluate(&self, bindings: &Bindings<'_>) -> Result<Number, EvalError> {
        match self {
            Operand::Num(num) => Ok(num.clone()),
            Operand::Expr(expr) => expr.evaluate(bindings),
            Operand::Var(v) => v.get(bindings),
        }
    }
    pub(crate) fn collect_variables(&self, names: &mut Vec<String>) {
        match self {
            Operand::Num(_) => {}
            Operand::Expr(expr) => {
                expr.left_op.collect_variables(names);
                if let Some(right_op) = &expr.right_op {
                    right_op.collect_variables(names);
                }
            }
            Operand::Var(v) => {
                if !names.iter().any(|name| name == v.symbol()) {
                    names.push(v.symbol.clone());
                }
            }
        }
    }
}

/// `right_op` is `None` only for the unary [`Operator::Neg`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AstNode {
    left_op: Operand,
    right_op: Option<Operand>,
    operator: Operator,
}

impl AstNode {
    pub fn binary(left_op: Operand, right_op: Operand, operator: Operator) -> Self {
        AstNode { left_op, right_op: Some(right_op), operator }
    }
    pub fn negate(op: Operand) -> Self {
        AstNode { left_op: op, right_op: None, operator: Operator::Neg }
    }
    pub(crate) fn evaluate(&self, bindings: &Bindings<'_>) -> Result<Number, EvalError> {
        let left = self.left_op.evaluate(bindings)?;
        let right = match &self.right_op {
            Some(op) => op.evaluate(bindings)?,
            None => {
                trace!(operand = %left, "negate");
                return Ok(-left);
            }
        };
        trace!(operator = ?self.operator, %left, %right, "apply");
        let result = match self.operator {
            Operator::Add => left + right,
            Operator::Sub => left - right,
            Operator::Mul => left * right,
            Operator::Div => (left / right)?,
            Operator::Pow => {
                let exponent = right
                    .to_integer()
                    .ok_or_else(|| EvalError::NonIntegerExponent(right.to_string()))?;
                left.pow(&exponent)?
            }
            Operator::Neg => -left,
        };
        Ok(result)
    }
}

#[cfg(test)]
fn eval(op: &Operand) -> Result<Number, EvalError> {
    op.evaluate(&Bindings { table: &HashMap::new(), env: &Environment::new() })
}

#[test]
fn test_evaluate() {
    let op1 = Operand::Num(Number::from_i64(1));
    let op2 = Operand::Num(Number::from_i64(2));
    let ast = AstNode::binary(op1, op2, Operator::Div);
    let op1 = Operand::Num(Number::from_i64(3));
    let op2 = Operand::Expr(Box::new(ast));
    let ast = AstNode::binary(op1, op2, Operator::Mul);
    let result = eval(&Operand::Expr(Box::new(ast))).unwrap();
    assert_eq!(result.to_string(), "3/2");

    let neg = AstNode::negate(Operand::Num(Number::from_i64(5)));
    assert_eq!(eval(&Operand::Expr(Box::new(neg))).unwrap(), Number::from_i64(-5));
}

#[test]
fn test_evaluate_errors() {
    let div = AstNode::binary(
        Operand::Num(Number::from_i64(1)),
        Operand::Num(Number::zero()),
        Operator::Div,
    );
    assert_eq!(
        eval(&Operand::Expr(Box::new(div))),
        Err(EvalError::Num(exact_num::NumError::DivisionByZero))
    );

    let half = (Number::from_i64(1) / Number::from_i64(2)).unwrap();
    let pow = AstNode::binary(Operand::Num(Number::from_i64(4)), Operand::Num(half), Operator::Pow);
    assert_eq!(
        eval(&Operand::Expr(Box::new(pow))),
        Err(EvalError::NonIntegerExponent("1/2".to_string()))
    );

    let unknown = Operand::Var(Variable::new("x".to_string()));
    assert_eq!(eval(&unknown), Err(EvalError::UnknownVariable("x".to_string())));
}
