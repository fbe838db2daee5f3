use std::collections::{HashMap, VecDeque};

use exact_num::{BigInt, Number};
use tracing::debug;

use super::ast::{AstNode, Bindings, Environment, Operand, Operator, Variable};
use crate::error::EvalError;
use crate::tokenizer::{tokenize, ExprTokenType, Token};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression {
    variable_table: HashMap<String, Option<Operand>>,
    main_expr: Operand,
}

impl Expression {
    pub fn parse(origin: &str) -> Result<Self, EvalError> {
        let mut parser = Parser::new(origin)?;
        let main_expr = parser.parse_expression()?;
        parser.expect_end()?;
        Ok(Expression::from_operand(main_expr))
    }
    fn from_operand(main_expr: Operand) -> Self {
        let mut names = Vec::new();
        main_expr.collect_variables(&mut names);
        let variable_table = names.into_iter().map(|name| (name, None)).collect();
        Expression { variable_table, main_expr }
    }
    pub fn evaluate(&self) -> Result<Number, EvalError> {
        self.evaluate_in(&Environment::new())
    }
    /// Evaluates with `env` supplying the variables that have no bound
    /// sub-expression.
    pub fn evaluate_in(&self, env: &Environment) -> Result<Number, EvalError> {
        self.main_expr.evaluate(&Bindings { table: &self.variable_table, env })
    }
    /// Binds a variable of this expression to the expression `val`.
    pub fn set_variable(&mut self, val_name: &str, val: &str) -> Result<&mut Self, EvalError> {
        let bound = Expression::parse(val)?.main_expr;
        match self.variable_table.get_mut(val_name) {
            Some(slot) => {
                debug!(variable = val_name, value = val, "bind variable");
                *slot = Some(bound);
                Ok(self)
            }
            None => Err(EvalError::NoSuchVariable(val_name.to_string())),
        }
    }
    /// Names of the variables used, in order of first appearance.
    pub fn variables(&self) -> Vec<String> {
        let mut names = Vec::new();
        self.main_expr.collect_variables(&mut names);
        names
    }
}

/// One line of calculator input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Assign(String, Expression),
    Eval(Expression),
}

impl Statement {
    pub fn parse(origin: &str) -> Result<Self, EvalError> {
        let mut parser = Parser::new(origin)?;
        let is_assignment = matches!(
            (parser.tokens.front(), parser.tokens.get(1)),
            (Some(Token { ty: ExprTokenType::Var, .. }), Some(Token { ty: ExprTokenType::Assign, .. }))
        );
        if is_assignment {
            let name = parser.get_next_token()?.val;
            parser.get_next_token()?;
            let expr = parser.parse_expression()?;
            parser.expect_end()?;
            Ok(Statement::Assign(name, Expression::from_operand(expr)))
        } else {
            let expr = parser.parse_expression()?;
            parser.expect_end()?;
            Ok(Statement::Eval(Expression::from_operand(expr)))
        }
    }
}

struct Parser {
    tokens: VecDeque<Token>,
    end_column: usize,
}

// 基础文法
// E -> num | var | (E) | -E | E ^ E | E * E | E / E | E + E | E - E

// 定义优先级
// ()
// -      (一元)
// ^      (右结合)
// * , /
// + , -

// 消除左递归
// # 表示空结束符
// E  -> T E1
// E1 -> + T E1 | - T E1 | #
// T  -> F T1
// T1 -> * F T1 | / F T1 | #
// F  -> G ^ F | G
// G  -> - G   | H
// H  -> (E)   | num | var

impl Parser {
    fn new(origin: &str) -> Result<Self, EvalError> {
        let tokens = tokenize(origin)?;
        debug!(tokens = tokens.len(), "tokenized");
        Ok(Parser { tokens, end_column: origin.chars().count() + 1 })
    }
    fn get_next_token(&mut self) -> Result<Token, EvalError> {
        self.tokens
            .pop_front()
            .ok_or_else(|| EvalError::syntax("unexpected end of input", self.end_column))
    }
    fn watch_next_type(&self) -> Option<ExprTokenType> {
        self.tokens.front().map(|token| token.ty)
    }
    fn expect_end(&self) -> Result<(), EvalError> {
        match self.tokens.front() {
            Some(token) => Err(EvalError::syntax(format!("unexpected token `{}`", token.val), token.column)),
            None => Ok(()),
        }
    }
    fn parse_expression(&mut self) -> Result<Operand, EvalError> {
        self.parse_e()
    }
    fn parse_e(&mut self) -> Result<Operand, EvalError> {
        let mut left_op = self.parse_t()?;
        // E1 unrolled into a loop keeps `-` left associative
        loop {
            let operator = match self.watch_next_type() {
                Some(ExprTokenType::Add) => Operator::Add,
                Some(ExprTokenType::Sub) => Operator::Sub,
                _ => return Ok(left_op),
            };
            self.get_next_token()?;
            let right_op = self.parse_t()?;
            left_op = Operand::Expr(Box::new(AstNode::binary(left_op, right_op, operator)));
        }
    }
    fn parse_t(&mut self) -> Result<Operand, EvalError> {
        let mut left_op = self.parse_f()?;
        loop {
            let operator = match self.watch_next_type() {
                Some(ExprTokenType::Mul) => Operator::Mul,
                Some(ExprTokenType::Div) => Operator::Div,
                _ => return Ok(left_op),
            };
            self.get_next_token()?;
            let right_op = self.parse_f()?;
            left_op = Operand::Expr(Box::new(AstNode::binary(left_op, right_op, operator)));
        }
    }
    fn parse_f(&mut self) -> Result<Operand, EvalError> {
        let base = self.parse_g()?;
        if self.watch_next_type() == Some(ExprTokenType::Pow) {
            self.get_next_token()?;
            let exponent = self.parse_f()?;
            return Ok(Operand::Expr(Box::new(AstNode::binary(base, exponent, Operator::Pow))));
        }
        Ok(base)
    }
    fn parse_g(&mut self) -> Result<Operand, EvalError> {
        if self.watch_next_type() == Some(ExprTokenType::Sub) {
            self.get_next_token()?;
            let op = self.parse_g()?;
            return Ok(Operand::Expr(Box::new(AstNode::negate(op))));
        }
        self.parse_h()
    }
    fn parse_h(&mut self) -> Result<Operand, EvalError> {
        let token = self.get_next_token()?;
        match token.ty {
            ExprTokenType::Num => Ok(Operand::Num(literal_to_number(&token)?)),
            ExprTokenType::Var => Ok(Operand::Var(Variable::new(token.val))),
            ExprTokenType::LeftScope => {
                let inner = self.parse_e()?;
                match self.get_next_token() {
                    Ok(Token { ty: ExprTokenType::RightScope, .. }) => Ok(inner),
                    Ok(other) => Err(EvalError::syntax(format!("expected `)`, found `{}`", other.val), other.column)),
                    Err(_) => Err(EvalError::syntax("expected `)`", self.end_column)),
                }
            }
            _ => Err(EvalError::syntax(format!("unexpected token `{}`", token.val), token.column)),
        }
    }
}

/// Largest decimal exponent a literal may carry, `1e4096` being the widest.
const MAX_LITERAL_EXPONENT: u64 = 4096;

/// Reads a decimal literal exactly: `297.003` is `297003/1000` and `1.5e-3` is
/// `3/2000`. No double is ever involved.
fn literal_to_number(token: &Token) -> Result<Number, EvalError> {
    let invalid = |message: &str| EvalError::syntax(format!("{} `{}`", message, token.val), token.column);
    let (mantissa, exponent) = match token.val.find(|c: char| c == 'e' || c == 'E') {
        Some(pos) => (&token.val[..pos], &token.val[pos + 1..]),
        None => (token.val.as_str(), "0"),
    };
    let exponent: i64 = exponent.parse().map_err(|_| invalid("exponent out of range in"))?;
    if exponent.unsigned_abs() > MAX_LITERAL_EXPONENT {
        return Err(invalid("exponent out of range in"));
    }
    let (integer_digits, fraction_digits) = mantissa.split_once('.').unwrap_or((mantissa, ""));

    let digits: BigInt = format!("{}{}", integer_digits, fraction_digits)
        .parse()
        .map_err(|_| invalid("invalid number"))?;
    let scale = exponent - fraction_digits.len() as i64;
    let power = BigInt::from(10).pow(&BigInt::from(scale.unsigned_abs()))?;
    let value = if scale >= 0 {
        Number::from(digits * power)
    } else {
        Number::from_ratio(digits, power)?
    };
    Ok(value)
}

#[test]
fn test_literals() {
    let lit = |s: &str| literal_to_number(&Token::new(s.to_string(), ExprTokenType::Num, 1)).unwrap().to_string();
    assert_eq!(lit("42"), "42");
    assert_eq!(lit("297.003"), "297003/1000");
    assert_eq!(lit("1.50"), "3/2");
    assert_eq!(lit("1.5e-3"), "3/2000");
    assert_eq!(lit("2e10"), "20000000000");
    assert_eq!(lit("0.000"), "0");
    assert_eq!(lit("1e4096").len(), 4097);
    assert_eq!(lit("1e-4096").len(), 4099);
}

#[test]
fn test_literal_exponent_bound() {
    let err = |s: &str| literal_to_number(&Token::new(s.to_string(), ExprTokenType::Num, 3)).unwrap_err();
    assert_eq!(err("1e4097"), EvalError::syntax("exponent out of range in `1e4097`", 3));
    assert_eq!(err("1e999999999"), EvalError::syntax("exponent out of range in `1e999999999`", 3));
    assert_eq!(err("2.5E-99999"), EvalError::syntax("exponent out of range in `2.5E-99999`", 3));
    assert!(Expression::parse("1 + 1e999999999").unwrap_err().is_syntax());
}

#[test]
fn test_precedence() {
    let eval = |s: &str| Expression::parse(s).unwrap().evaluate().unwrap().to_string();
    assert_eq!(eval("1 + 2*3"), "7");
    assert_eq!(eval("(1 + 2)*3"), "9");
    assert_eq!(eval("10 - 4 - 3"), "3");
    assert_eq!(eval("8 / 4 / 2"), "1");
    assert_eq!(eval("2 ^ 3 ^ 2"), "512");
    assert_eq!(eval("-2 ^ 2"), "4");
    assert_eq!(eval("-(2 ^ 2)"), "-4");
    assert_eq!(eval("--3"), "3");
    assert_eq!(eval("1/3 + 1/6"), "1/2");
    assert_eq!(eval("0.1 + 0.2"), "3/10");
}

#[test]
fn test_variables() {
    let mut expr = Expression::parse("1 + 2*3 - x1 * x2").unwrap();
    assert_eq!(expr.variables(), vec!["x1".to_string(), "x2".to_string()]);
    expr.set_variable("x1", "2").unwrap().set_variable("x2", "2 * 2").unwrap();
    assert_eq!(expr.evaluate().unwrap(), Number::from_i64(-1));

    expr.set_variable("x1", "1/3").unwrap();
    let mut env = Environment::new();
    env.insert("y".to_string(), Number::from_i64(9));
    expr.set_variable("x2", "y").unwrap();
    assert_eq!(expr.evaluate_in(&env).unwrap(), Number::from_i64(4));

    assert_eq!(
        expr.set_variable("z", "1").unwrap_err(),
        EvalError::NoSuchVariable("z".to_string())
    );
    let unbound = Expression::parse("a + 1").unwrap();
    assert_eq!(unbound.evaluate(), Err(EvalError::UnknownVariable("a".to_string())));
}

#[test]
fn test_syntax_errors() {
    let err = |s: &str| Expression::parse(s).unwrap_err();
    assert_eq!(err(""), EvalError::syntax("unexpected end of input", 1));
    assert_eq!(err("1 +"), EvalError::syntax("unexpected end of input", 4));
    assert_eq!(err("(1 + 2"), EvalError::syntax("expected `)`", 7));
    assert_eq!(err("1 2"), EvalError::syntax("unexpected token `2`", 3));
    assert_eq!(err("* 2"), EvalError::syntax("unexpected token `*`", 1));
    assert_eq!(err("x = 1"), EvalError::syntax("unexpected token `=`", 3));
}

#[test]
fn test_statement() {
    match Statement::parse("x = 1/3").unwrap() {
        Statement::Assign(name, expr) => {
            assert_eq!(name, "x");
            assert_eq!(expr.evaluate().unwrap().to_string(), "1/3");
        }
        other => panic!("unexpected {:?}", other),
    }
    assert!(matches!(Statement::parse("x + 1").unwrap(), Statement::Eval(_)));
    assert!(Statement::parse("x = ").unwrap_err().is_syntax());
    assert!(Statement::parse("1 = 2").unwrap_err().is_syntax());
}
