use std::process;

use anyhow::Result;
use clap::Parser;
use exact_calc::{run_demo, EvalError, Session};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

/// Largest accepted `--precision`; every digit costs one long-division step.
const MAX_PRECISION: u32 = 1_000_000;

/// exact-calc: arithmetic over exact rationals
#[derive(Parser)]
#[command(name = "exact-calc", version, about)]
struct Cli {
    /// Expression or assignment to evaluate once; starts the interactive prompt when absent
    expression: Option<String>,

    /// Fractional digits printed for each result
    #[arg(
        short,
        long,
        env = "EXACT_CALC_PRECISION",
        default_value_t = 10,
        value_parser = clap::value_parser!(u32).range(..=MAX_PRECISION as i64)
    )]
    precision: u32,

    /// Print the built-in demonstration values and exit
    #[arg(long)]
    demo: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.demo {
        let demo = run_demo()?;
        for line in &demo.stdout {
            println!("{}", line);
        }
        for line in &demo.stderr {
            eprintln!("{}", line);
        }
        return Ok(());
    }

    let mut session = Session::new(cli.precision as usize);
    match cli.expression {
        Some(line) => {
            let code = run_once(&mut session, &line);
            if code != 0 {
                process::exit(code);
            }
        }
        None => repl(&mut session)?,
    }
    Ok(())
}

/// Evaluates a single command-line expression. The error is reported once,
/// on stderr, and only the exit code is handed back.
fn run_once(session: &mut Session, line: &str) -> i32 {
    match session.execute(line) {
        Ok(Some(output)) => {
            println!("{}", output);
            0
        }
        Ok(None) => 0,
        Err(e) => {
            report(&e);
            1
        }
    }
}

fn repl(session: &mut Session) -> Result<()> {
    let mut rl = DefaultEditor::new()?;
    loop {
        match rl.readline(">>> ") {
            Ok(line) => {
                remember(&mut rl, &line);
                match session.execute(&line) {
                    Ok(Some(output)) => println!("{}", output),
                    Ok(None) => {}
                    Err(e) => report(&e),
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => return Ok(()),
            Err(e) => return Err(e.into()),
        }
    }
}

/// Blank lines stay out of the history.
fn remember(rl: &mut DefaultEditor, line: &str) {
    if !line.trim().is_empty() {
        let _ = rl.add_history_entry(line);
    }
}

fn report(e: &EvalError) {
    eprintln!("{}", error_line(e));
}

fn error_line(e: &EvalError) -> String {
    if e.is_syntax() {
        format!("Compilation error: {}", e)
    } else {
        format!("Runtime error: {}", e)
    }
}

#[test]
fn test_precision_bounds() {
    let cli = Cli::try_parse_from(["exact-calc", "-p", "70", "1/3"]).unwrap();
    assert_eq!(cli.precision, 70);
    assert_eq!(cli.expression.as_deref(), Some("1/3"));
    assert!(Cli::try_parse_from(["exact-calc", "--precision", "1000000"]).is_ok());
    assert!(Cli::try_parse_from(["exact-calc", "--precision", "1000001"]).is_err());
    assert!(Cli::try_parse_from(["exact-calc", "--precision", "18446744073709551615"]).is_err());
    assert!(Cli::try_parse_from(["exact-calc", "--precision", "-1"]).is_err());
}

#[test]
fn test_run_once() {
    let mut session = Session::new(2);
    assert_eq!(run_once(&mut session, "1/4"), 0);
    assert_eq!(run_once(&mut session, "x = 3"), 0);
    assert_eq!(run_once(&mut session, "x / 0"), 1);
    assert_eq!(run_once(&mut session, "(1"), 1);

    let runtime = session.execute("x / 0").unwrap_err();
    assert_eq!(error_line(&runtime), "Runtime error: division by zero");
    let syntax = session.execute("1 +").unwrap_err();
    assert_eq!(error_line(&syntax), "Compilation error: [Syntax Error] unexpected end of input at column 4");
}

#[test]
fn test_history() {
    use rustyline::history::History;

    let mut rl = DefaultEditor::new().unwrap();
    remember(&mut rl, "x = 1/3");
    remember(&mut rl, "   ");
    remember(&mut rl, "");
    remember(&mut rl, "x * 3");
    assert_eq!(rl.history().len(), 2);
}
