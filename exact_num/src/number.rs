//! # Number
//! Exact rational numbers over [`BigInt`]. A `Number` is always kept in lowest
//! terms with a positive denominator, so the sign lives on the numerator and
//! structural equality is value equality.
//! # Example
//! ```
//! use exact_num::Number;
//!
//! let third = (Number::from_i64(1) / Number::from_i64(3)).unwrap();
//! let x = Number::from_i64(1024) + (third + Number::from_f64(297.003).unwrap());
//! assert_eq!(x.to_decimal_string(5), "1321.33633");
//! ```

use std::cmp::Ordering;
use std::fmt::{self, Display};
use std::ops::{
    Add, AddAssign,
    Sub, SubAssign,
    Mul, MulAssign,
    Div,
    Neg,
};

use crate::big_int::decompose_f64;
use crate::big_num_cache::TEN;
use crate::error::{NumError, NumResult};
use crate::BigInt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Number {
    numerator: BigInt,
    denominator: BigInt,
}

impl Default for Number {
    fn default() -> Self {
        Number::zero()
    }
}

// 实现构造
impl Number {
    pub fn zero() -> Number {
        Number { numerator: BigInt::zero(), denominator: BigInt::one() }
    }
    pub fn one() -> Number {
        Number { numerator: BigInt::one(), denominator: BigInt::one() }
    }
    pub fn from_i64(val: i64) -> Number {
        Number::from(BigInt::from(val))
    }
    /// Converts the exact binary value of `val`; `0.1` becomes
    /// `3602879701896397/36028797018963968`, not `1/10`.
    pub fn from_f64(val: f64) -> NumResult<Number> {
        let (negative, mantissa, exponent) = decompose_f64(val)?;
        if mantissa == 0 {
            return Ok(Number::zero());
        }
        // Cancel common factors of two up front; what remains is coprime.
        let (mantissa, exponent) = if exponent < 0 {
            let shift = mantissa.trailing_zeros().min(exponent.unsigned_abs());
            (mantissa >> shift, exponent + shift as i32)
        } else {
            (mantissa, exponent)
        };
        let mag = BigInt::from(mantissa);
        let numerator = if negative { -mag } else { mag };
        Ok(if exponent >= 0 {
            Number { numerator: numerator << exponent as u32, denominator: BigInt::one() }
        } else {
            Number { numerator, denominator: BigInt::one() << exponent.unsigned_abs() }
        })
    }
    pub fn from_ratio(numerator: BigInt, denominator: BigInt) -> NumResult<Number> {
        if denominator.is_zero() {
            return Err(NumError::DivisionByZero);
        }
        Ok(Number::reduce(numerator, denominator))
    }
    /// Brings `numerator / denominator` to lowest terms with a positive
    /// denominator. `denominator` must not be zero.
    fn reduce(numerator: BigInt, denominator: BigInt) -> Number {
        if numerator.is_zero() {
            return Number::zero();
        }
        let (numerator, denominator) = if denominator.is_negative() {
            (-numerator, -denominator)
        } else {
            (numerator, denominator)
        };
        let gcd = numerator.gcd(&denominator);
        if gcd == BigInt::one() {
            return Number { numerator, denominator };
        }
        Number {
            numerator: numerator.div_rem_nonzero(&gcd).0,
            denominator: denominator.div_rem_nonzero(&gcd).0,
        }
    }
}

impl From<BigInt> for Number {
    fn from(val: BigInt) -> Self {
        Number { numerator: val, denominator: BigInt::one() }
    }
}

macro_rules! impl_int_to_number {
    ($($t: ty),*) => {
    $(
    impl From<$t> for Number {
        fn from(val: $t) -> Self {
            Number::from(BigInt::from(val))
        }
    }
    )*
    };
}
impl_int_to_number!(u8, u16, u32, usize, u64, i8, i16, i32, isize, i64);

// 杂项辅助函数
impl Number {
    pub fn numerator(&self) -> &BigInt {
        &self.numerator
    }
    /// Always positive.
    pub fn denominator(&self) -> &BigInt {
        &self.denominator
    }
    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }
    pub fn is_negative(&self) -> bool {
        self.numerator.is_negative()
    }
    pub fn is_integer(&self) -> bool {
        self.denominator == BigInt::one()
    }
    pub fn signum(&self) -> i8 {
        self.numerator.signum()
    }
    pub fn abs(&self) -> Number {
        Number { numerator: self.numerator.abs(), denominator: self.denominator.clone() }
    }
    pub fn recip(&self) -> NumResult<Number> {
        if self.is_zero() {
            return Err(NumError::DivisionByZero);
        }
        Ok(Number::reduce(self.denominator.clone(), self.numerator.clone()))
    }
    /// The value as a `BigInt` when it has no fractional part.
    pub fn to_integer(&self) -> Option<BigInt> {
        if self.is_integer() {
            Some(self.numerator.clone())
        } else {
            None
        }
    }
    /// Integer part, truncated toward zero.
    pub fn trunc(&self) -> BigInt {
        self.numerator.div_rem_nonzero(&self.denominator).0
    }
}

// 实现加法
impl Add<&Number> for &Number {
    type Output = Number;

    fn add(self, rhs: &Number) -> Self::Output {
        if self.denominator == rhs.denominator {
            return Number::reduce(&self.numerator + &rhs.numerator, self.denominator.clone());
        }
        let numerator = &self.numerator * &rhs.denominator + &rhs.numerator * &self.denominator;
        Number::reduce(numerator, &self.denominator * &rhs.denominator)
    }
}

forward_binop!(impl Add, add for Number => Number);
forward_assign_op!(impl AddAssign, add_assign, Add, add for Number);

// 实现取反
impl Neg for Number {
    type Output = Number;

    fn neg(self) -> Self::Output {
        let Number { numerator, denominator } = self;
        Number { numerator: -numerator, denominator }
    }
}

impl Neg for &Number {
    type Output = Number;

    fn neg(self) -> Self::Output {
        self.clone().neg()
    }
}

// 实现减法
impl Sub<&Number> for &Number {
    type Output = Number;

    fn sub(self, rhs: &Number) -> Self::Output {
        self + &(-rhs)
    }
}

forward_binop!(impl Sub, sub for Number => Number);
forward_assign_op!(impl SubAssign, sub_assign, Sub, sub for Number);

// 实现乘法
impl Mul<&Number> for &Number {
    type Output = Number;

    fn mul(self, rhs: &Number) -> Self::Output {
        Number::reduce(
            &self.numerator * &rhs.numerator,
            &self.denominator * &rhs.denominator,
        )
    }
}

forward_binop!(impl Mul, mul for Number => Number);
forward_assign_op!(impl MulAssign, mul_assign, Mul, mul for Number);

// 实现除法
impl Div<&Number> for &Number {
    type Output = NumResult<Number>;

    fn div(self, rhs: &Number) -> Self::Output {
        if rhs.is_zero() {
            return Err(NumError::DivisionByZero);
        }
        Ok(Number::reduce(
            &self.numerator * &rhs.denominator,
            &self.denominator * &rhs.numerator,
        ))
    }
}

forward_binop!(impl Div, div for Number => NumResult<Number>);

impl Number {
    /// `self /= rhs`. On error the receiver keeps its old value.
    pub fn try_div_assign(&mut self, rhs: &Number) -> NumResult<()> {
        *self = (&*self / rhs)?;
        Ok(())
    }
}

// 实现乘方
impl Number {
    pub fn pow(&self, exponent: &BigInt) -> NumResult<Number> {
        let numerator = self.numerator.pow(exponent)?;
        let denominator = self.denominator.pow(exponent)?;
        Ok(Number::reduce(numerator, denominator))
    }
}

// 实现大小比较
impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Cross multiplication; denominators are positive so no sign flip is needed.
impl Ord for Number {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.denominator == other.denominator {
            return self.numerator.cmp(&other.numerator);
        }
        let left = &self.numerator * &other.denominator;
        let right = &other.numerator * &self.denominator;
        left.cmp(&right)
    }
}

// 实现窄化转换
impl Number {
    pub fn to_i32(&self) -> NumResult<i32> {
        let truncated = self.trunc();
        truncated
            .to_i64()
            .and_then(|val| i32::try_from(val).ok())
            .ok_or_else(|| NumError::OutOfRange { value: truncated.to_string(), target: "i32" })
    }
    pub fn to_usize(&self) -> NumResult<usize> {
        if self.numerator.is_negative() {
            return Err(NumError::NegativeToUnsigned);
        }
        let truncated = self.trunc();
        truncated
            .to_u64()
            .and_then(|val| usize::try_from(val).ok())
            .ok_or_else(|| NumError::OutOfRange { value: truncated.to_string(), target: "usize" })
    }
}

// 实现打印
/// Exact form: `n` for integers, `n/d` otherwise.
impl Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

impl Number {
    /// Renders the value with exactly `precision` digits after the decimal
    /// point, and no point at all when `precision == 0`.
    ///
    /// Digits are produced by long division on the exact fraction. The first
    /// digit that is not emitted decides the rounding: `5` and above round the
    /// magnitude up, so ties go away from zero (`-1/2` renders as `-1` at
    /// precision 0), carrying into the integer part if needed.
    /// A `-` is only written when some rendered digit is non-zero.
    pub fn to_decimal_string(&self, precision: usize) -> String {
        let magnitude = self.numerator.abs();
        let (mut integer_part, mut remainder) = magnitude.div_rem_nonzero(&self.denominator);

        let mut digits: Vec<u8> = Vec::new();
        while digits.len() < precision {
            if remainder.is_zero() {
                digits.resize(precision, 0);
                break;
            }
            let (digit, rest) = (&remainder * &*TEN).div_rem_nonzero(&self.denominator);
            digits.push(Number::digit_value(&digit));
            remainder = rest;
        }

        let (next_digit, _) = (&remainder * &*TEN).div_rem_nonzero(&self.denominator);
        if Number::digit_value(&next_digit) >= 5 {
            let mut carry = true;
            for digit in digits.iter_mut().rev() {
                if *digit == 9 {
                    *digit = 0;
                } else {
                    *digit += 1;
                    carry = false;
                    break;
                }
            }
            if carry {
                integer_part += BigInt::one();
            }
        }

        let all_zero = integer_part.is_zero() && digits.iter().all(|&d| d == 0);
        let integer_text = integer_part.to_string();
        let mut result = String::new();
        if self.is_negative() && !all_zero {
            result.push('-');
        }
        result.push_str(&integer_text);
        if precision > 0 {
            result.push('.');
            result.extend(digits.iter().map(|&d| char::from(b'0' + d)));
        }
        result
    }
    // a single decimal digit, 0..=9
    fn digit_value(digit: &BigInt) -> u8 {
        digit.to_u64().map_or(0, |d| d as u8)
    }
}

#[cfg(test)]
fn ratio(numerator: i64, denominator: i64) -> Number {
    (Number::from_i64(numerator) / Number::from_i64(denominator)).unwrap()
}

#[test]
fn test_reduce() {
    let n = ratio(6, -8);
    assert_eq!(n.numerator(), &BigInt::from(-3));
    assert_eq!(n.denominator(), &BigInt::from(4));
    assert_eq!(ratio(0, -5), Number::zero());
    assert_eq!(
        Number::from_ratio(BigInt::from(10), BigInt::from(-4)).unwrap().to_string(),
        "-5/2"
    );
    assert_eq!(
        Number::from_ratio(BigInt::from(1), BigInt::zero()),
        Err(NumError::DivisionByZero)
    );
}

#[test]
fn test_from_f64() {
    assert_eq!(Number::from_f64(0.5).unwrap(), ratio(1, 2));
    assert_eq!(Number::from_f64(-2.75).unwrap(), ratio(-11, 4));
    assert_eq!(Number::from_f64(1024.0).unwrap(), Number::from_i64(1024));
    assert_eq!(Number::from_f64(-0.0).unwrap(), Number::zero());
    assert_eq!(Number::from_f64(0.1).unwrap().to_string(), "3602879701896397/36028797018963968");
    assert_eq!(Number::from_f64(297.003).unwrap().to_string(), "5224932031749685/17592186044416");
    assert_eq!(Number::from_f64(1e20).unwrap().to_string(), "100000000000000000000");

    let tiny = Number::from_f64(f64::from_bits(1)).unwrap();
    assert_eq!(tiny.numerator(), &BigInt::one());
    assert_eq!(tiny.denominator(), &(BigInt::one() << 1074));

    assert!(Number::from_f64(f64::INFINITY).is_err());
    assert!(matches!(Number::from_f64(f64::NAN), Err(NumError::InvalidNumericLiteral(_))));
}

#[test]
fn test_arithmetic() {
    let a = ratio(1, 3);
    let b = ratio(1, 6);
    assert_eq!(&a + &b, ratio(1, 2));
    assert_eq!(&a - &b, ratio(1, 6));
    assert_eq!(&b - &a, ratio(-1, 6));
    assert_eq!(&a * &b, ratio(1, 18));
    assert_eq!((&a / &b).unwrap(), Number::from_i64(2));
    assert_eq!(-&a, ratio(-1, 3));
    assert_eq!(&a - &a, Number::zero());
    assert_eq!(
        Number::from_i64(1) / Number::from_i64(0),
        Err(NumError::DivisionByZero)
    );
}

#[test]
fn test_compound_assign() {
    let mut x = Number::from_i64(1024);
    let alias = x.clone();
    x += ratio(1, 3);
    x -= Number::from_i64(24);
    x *= &Number::from_i64(3);
    assert_eq!(x, Number::from_i64(3001));
    x.try_div_assign(&Number::from_i64(2)).unwrap();
    assert_eq!(x, ratio(3001, 2));
    assert_eq!(x.try_div_assign(&Number::zero()), Err(NumError::DivisionByZero));
    assert_eq!(x, ratio(3001, 2));
    assert_eq!(alias, Number::from_i64(1024));
}

#[test]
fn test_pow() {
    let two = Number::from_i64(2);
    assert_eq!(two.pow(&BigInt::from(10)).unwrap(), Number::from_i64(1024));
    assert_eq!(ratio(-2, 3).pow(&BigInt::from(3)).unwrap(), ratio(-8, 27));
    assert_eq!(ratio(7, 5).pow(&BigInt::zero()).unwrap(), Number::one());
    assert_eq!(
        two.pow(&BigInt::from(-2)),
        Err(NumError::InvalidExponent("-2".to_string()))
    );
}

#[test]
fn test_cmp() {
    assert!(ratio(1, 3) < ratio(1, 2));
    assert!(ratio(-1, 2) < ratio(-1, 3));
    assert!(ratio(-1, 2) < Number::zero());
    assert!(ratio(7, 2) > Number::from_i64(3));
    assert_eq!(ratio(2, 4).cmp(&ratio(1, 2)), Ordering::Equal);
}

#[test]
fn test_to_decimal_string() {
    let x = Number::from_i64(1024) + (ratio(1, 3) + Number::from_f64(297.003).unwrap());
    assert_eq!(x.to_decimal_string(5), "1321.33633");
    assert_eq!(x.to_decimal_string(20), "1321.33633333333331923617");

    let ten = Number::from_i64(10);
    let a = (ten.pow(&BigInt::from(50)).unwrap()
        + (Number::one() / ten.pow(&BigInt::from(10)).unwrap()).unwrap())
        * Number::from_i64(3);
    assert_eq!(
        a.to_decimal_string(70),
        "300000000000000000000000000000000000000000000000000.0000000003000000000000000000000000000000000000000000000000000000000000"
    );

    assert_eq!(ratio(2, 3).to_decimal_string(12), "0.666666666667");
    assert_eq!(ratio(5, 2).to_decimal_string(12), "2.500000000000");
    assert_eq!(ratio(-1, 3).to_decimal_string(3), "-0.333");
    assert_eq!(ratio(-7, 3).to_decimal_string(4), "-2.3333");
    assert_eq!(ratio(999, 1000).to_decimal_string(2), "1.00");
    assert_eq!(ratio(-1, 1000).to_decimal_string(2), "0.00");
    assert_eq!(ratio(-5, 2).to_decimal_string(0), "-3");
    assert_eq!(ratio(1, 2).to_decimal_string(0), "1");
    assert_eq!(Number::zero().to_decimal_string(0), "0");
    assert_eq!(Number::from_i64(-42).to_decimal_string(3), "-42.000");
    assert_eq!(Number::from_f64(0.1).unwrap().to_decimal_string(30), "0.100000000000000005551115123126");
}

#[test]
fn test_round_ties() {
    assert_eq!(ratio(-1, 2).to_decimal_string(0), "-1");
    assert_eq!(ratio(1, 2).to_decimal_string(0), "1");
    assert_eq!(ratio(-1, 20).to_decimal_string(1), "-0.1");
    assert_eq!(ratio(-5, 1000).to_decimal_string(2), "-0.01");
    assert_eq!(ratio(-4, 1000).to_decimal_string(2), "0.00");

    let wide = ratio(1, 8).to_decimal_string(100_000);
    assert_eq!(wide.len(), 2 + 100_000);
    assert!(wide.starts_with("0.125000"));
}

#[test]
fn test_narrowing() {
    assert_eq!(ratio(1000000, 10000).to_i32().unwrap(), 100);
    assert_eq!(ratio(1000001, 10000).to_i32().unwrap(), 100);
    assert_eq!(ratio(-7, 2).to_i32().unwrap(), -3);
    assert_eq!(Number::from_i64(i32::MIN as i64).to_i32().unwrap(), i32::MIN);
    assert_eq!(
        Number::from_i64(i32::MAX as i64 + 1).to_i32(),
        Err(NumError::OutOfRange { value: "2147483648".to_string(), target: "i32" })
    );

    assert_eq!(Number::from_i64(-1).to_usize(), Err(NumError::NegativeToUnsigned));
    assert_eq!(ratio(-1, 2).to_usize(), Err(NumError::NegativeToUnsigned));
    assert_eq!(ratio(9, 2).to_usize().unwrap(), 4);
    let huge = Number::from(BigInt::one() << 64);
    assert!(matches!(huge.to_usize(), Err(NumError::OutOfRange { target: "usize", .. })));
}

#[test]
fn test_display() {
    assert_eq!(ratio(-10, 4).to_string(), "-5/2");
    assert_eq!(Number::from_i64(7).to_string(), "7");
    assert_eq!(ratio(3, 1).recip().unwrap(), ratio(1, 3));
    assert_eq!(ratio(-3, 4).recip().unwrap(), ratio(-4, 3));
    assert_eq!(ratio(-7, 2).trunc(), BigInt::from(-3));
    assert_eq!(ratio(8, 2).to_integer(), Some(BigInt::from(4)));
    assert_eq!(ratio(1, 2).to_integer(), None);
}
