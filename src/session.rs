use exact_num::Number;
use tracing::{debug, info, warn};

use crate::error::EvalError;
use crate::parser::ast::Environment;
use crate::parser::parser::Statement;

/// State of one interactive calculator: variables bound so far and the
/// number of fractional digits to print.
#[derive(Debug, Clone, Default)]
pub struct Session {
    environment: Environment,
    precision: usize,
}

impl Session {
    pub fn new(precision: usize) -> Self {
        Session { environment: Environment::new(), precision }
    }
    pub fn precision(&self) -> usize {
        self.precision
    }
    pub fn get(&self, name: &str) -> Option<&Number> {
        self.environment.get(name)
    }
    /// Runs one line of input and returns the text to print, or `None` for a
    /// blank line. A failed line leaves the session unchanged.
    pub fn execute(&mut self, line: &str) -> Result<Option<String>, EvalError> {
        if line.trim().is_empty() {
            return Ok(None);
        }
        self.run(line).map_err(|e| {
            warn!(error = %e, "line rejected");
            e
        })
    }
    fn run(&mut self, line: &str) -> Result<Option<String>, EvalError> {
        match Statement::parse(line)? {
            Statement::Assign(name, expr) => {
                let value = expr.evaluate_in(&self.environment)?;
                let rendered = format!("{} = {}", name, value.to_decimal_string(self.precision));
                info!(variable = %name, value = %value, "assign");
                self.environment.insert(name, value);
                Ok(Some(rendered))
            }
            Statement::Eval(expr) => {
                let value = expr.evaluate_in(&self.environment)?;
                debug!(value = %value, "evaluated");
                Ok(Some(value.to_decimal_string(self.precision)))
            }
        }
    }
}

#[test]
fn test_session() {
    let mut session = Session::new(5);
    assert_eq!(session.execute("   ").unwrap(), None);
    assert_eq!(session.execute("x = 1/3").unwrap().unwrap(), "x = 0.33333");
    assert_eq!(session.execute("1024 + (x + 297.003)").unwrap().unwrap(), "1321.33633");
    assert_eq!(session.get("x").unwrap().to_string(), "1/3");

    let err = session.execute("x / 0").unwrap_err();
    assert_eq!(err.to_string(), "division by zero");
    assert!(!err.is_syntax());
    assert!(session.execute("x = (").unwrap_err().is_syntax());
    assert_eq!(session.get("x").unwrap().to_string(), "1/3");

    let mut wide = Session::new(70);
    assert_eq!(
        wide.execute("(10^50 + 1/10^10) * 3").unwrap().unwrap(),
        "300000000000000000000000000000000000000000000000000.0000000003000000000000000000000000000000000000000000000000000000000000"
    );
}
