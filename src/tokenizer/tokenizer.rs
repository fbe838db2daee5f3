use std::collections::VecDeque;

use super::token::{ExprTokenType, Token};
use crate::error::EvalError;

// 词法
// num    -> digit+ ( . digit+ )? ( (e|E) (+|-)? digit+ )?
// var    -> (letter | _) (letter | digit | _)*
// op     -> + | - | * | / | ^ | = | ( | )
// blank  -> ' ' | '\t'       (skipped)

pub fn tokenize(origin: &str) -> Result<VecDeque<Token>, EvalError> {
    let chars = origin.chars().collect::<Vec<_>>();
    let mut result = VecDeque::new();
    let mut current_pos = 0;

    while current_pos < chars.len() {
        let symbol = chars[current_pos];
        let column = current_pos + 1;
        let single = match symbol {
            '+' => Some(ExprTokenType::Add),
            '-' => Some(ExprTokenType::Sub),
            '*' => Some(ExprTokenType::Mul),
            '/' => Some(ExprTokenType::Div),
            '^' => Some(ExprTokenType::Pow),
            '=' => Some(ExprTokenType::Assign),
            '(' => Some(ExprTokenType::LeftScope),
            ')' => Some(ExprTokenType::RightScope),
            _ => None,
        };
        if let Some(ty) = single {
            result.push_back(Token::new(symbol.to_string(), ty, column));
            current_pos += 1;
        } else if symbol.is_whitespace() {
            current_pos += 1;
        } else if symbol.is_ascii_digit() {
            let end = scan_number(&chars, current_pos)?;
            let val = chars[current_pos..end].iter().collect();
            result.push_back(Token::new(val, ExprTokenType::Num, column));
            current_pos = end;
        } else if symbol.is_alphabetic() || symbol == '_' {
            let end = scan_while(&chars, current_pos, |c| c.is_alphanumeric() || c == '_');
            let val = chars[current_pos..end].iter().collect();
            result.push_back(Token::new(val, ExprTokenType::Var, column));
            current_pos = end;
        } else {
            return Err(EvalError::syntax(format!("unexpected symbol `{}`", symbol), column));
        }
    }
    Ok(result)
}

fn scan_while(chars: &[char], start: usize, accept: impl Fn(char) -> bool) -> usize {
    let mut end = start;
    while end < chars.len() && accept(chars[end]) {
        end += 1;
    }
    end
}

/// Returns the end of the numeric literal starting at `start`.
fn scan_number(chars: &[char], start: usize) -> Result<usize, EvalError> {
    let is_digit = |c: char| c.is_ascii_digit();
    let mut end = scan_while(chars, start, is_digit);

    if chars.get(end) == Some(&'.') {
        let fraction_end = scan_while(chars, end + 1, is_digit);
        if fraction_end == end + 1 {
            return Err(EvalError::syntax("expected digits after `.`", end + 2));
        }
        end = fraction_end;
    }

    if matches!(chars.get(end), Some('e') | Some('E')) {
        let mut exponent_start = end + 1;
        if matches!(chars.get(exponent_start), Some('+') | Some('-')) {
            exponent_start += 1;
        }
        let exponent_end = scan_while(chars, exponent_start, is_digit);
        if exponent_end == exponent_start {
            return Err(EvalError::syntax("expected digits in exponent", exponent_start + 1));
        }
        end = exponent_end;
    }
    Ok(end)
}

#[test]
fn test_tokenizer() {
    let origin = "x1+x2+x3*4 + (1.3) ^ 2 - 31e-22 / _tmp";
    let result = tokenize(origin).unwrap();
    let types = result.iter().map(|t| t.ty).collect::<Vec<_>>();
    use ExprTokenType::*;
    assert_eq!(
        types,
        vec![Var, Add, Var, Add, Var, Mul, Num, Add, LeftScope, Num, RightScope, Pow, Num, Sub, Num, Div, Var]
    );
    let values = result.iter().map(|t| t.val.as_str()).collect::<Vec<_>>();
    assert_eq!(values[9], "1.3");
    assert_eq!(values[14], "31e-22");
    assert_eq!(values[16], "_tmp");
    assert_eq!(result[2].column, 4);
}

#[test]
fn test_tokenizer_errors() {
    assert_eq!(
        tokenize("1 + $"),
        Err(EvalError::syntax("unexpected symbol `$`", 5))
    );
    assert!(tokenize("1.").unwrap_err().is_syntax());
    assert!(tokenize("2e+").unwrap_err().is_syntax());
    assert!(tokenize("   ").unwrap().is_empty());
}
