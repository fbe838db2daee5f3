use exact_num::{BigInt, NumResult, Number};

/// The fixed demonstration values printed by `exact-calc --demo`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Demo {
    pub stdout: Vec<String>,
    pub stderr: Vec<String>,
}

pub fn run_demo() -> NumResult<Demo> {
    let mut stdout = Vec::new();
    let mut stderr = Vec::new();

    let mut x = Number::from_i64(1024);
    let y = (Number::from_i64(1) / Number::from_i64(3))? + Number::from_f64(297.003)?;
    x += y;
    stdout.push(x.to_decimal_string(5));

    let ten = Number::from_i64(10);
    let a = (ten.pow(&BigInt::from_f64(50.0)?)?
        + (Number::from_i64(1) / ten.pow(&BigInt::from_f64(10.0)?)?)?)
        * Number::from_i64(3);
    stdout.push(a.to_decimal_string(70));

    stdout.push((Number::from_i64(2) / Number::from_i64(3))?.to_decimal_string(12));
    stdout.push((Number::from_i64(5) / Number::from_i64(2))?.to_decimal_string(12));

    stdout.push((Number::from_i64(1000000) / Number::from_i64(10000))?.to_i32()?.to_string());
    stdout.push((Number::from_i64(1000001) / Number::from_i64(10000))?.to_i32()?.to_string());

    match Number::from_i64(-1).to_usize() {
        Ok(value) => stdout.push(value.to_string()),
        Err(e) => stderr.push(e.to_string()),
    }

    Ok(Demo { stdout, stderr })
}

#[test]
fn test_demo() {
    let demo = run_demo().unwrap();
    assert_eq!(
        demo.stdout,
        vec![
            "1321.33633".to_string(),
            "300000000000000000000000000000000000000000000000000.0000000003000000000000000000000000000000000000000000000000000000000000".to_string(),
            "0.666666666667".to_string(),
            "2.500000000000".to_string(),
            "100".to_string(),
            "100".to_string(),
        ]
    );
    assert_eq!(
        demo.stderr,
        vec!["negative value cannot be converted to an unsigned integer".to_string()]
    );
}
