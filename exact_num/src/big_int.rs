//! # BigInt
//! Immutable arbitrary-precision signed integers in sign-magnitude form.
//! The magnitude is a vector of 32-bit limbs, least-significant first.
//! # Example
//! ```
//! use exact_num::BigInt;
//!
//! let a: BigInt = "10000000000000".parse().unwrap();
//! let b: BigInt = "900000000000".parse().unwrap();
//! assert_eq!((&a + &b).to_string(), "10900000000000");
//! assert_eq!((&a - &b).to_string(), "9100000000000");
//! assert_eq!((&a * &b).to_string(), "9000000000000000000000000");
//! let (q, r) = a.div_rem(&b).unwrap();
//! assert_eq!((q.to_string(), r.to_string()), ("11".to_string(), "100000000000".to_string()));
//! ```

use std::cmp::Ordering;
use std::fmt::{self, Display};
use std::ops::{
    Add, AddAssign,
    Sub, SubAssign,
    Mul, MulAssign,
    Shl, Shr,
    Neg,
};
use std::str::FromStr;

use crate::big_num_cache::*;
use crate::big_num_constants::*;
use crate::error::{NumError, NumResult};

pub const ZERO: BigInt = BigInt { signum: 0, mag: Vec::new() };

macro_rules! strip_high_zero {
    ($vec: expr) => {
        {
            let mut v: Vec<u32> = $vec;
            while v.last() == Some(&0) {
                v.pop();
            }
            v
        }
    };
}

/// Zero is represented only as `signum == 0` with an empty magnitude, so two
/// equal values always share one representation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BigInt {
    signum: i8,
    mag: Vec<u32>,
}

// 实现构造
impl BigInt {
    pub(crate) fn from_limbs(mag: Vec<u32>, signum: i8) -> Self {
        let mag = strip_high_zero!(mag);
        if mag.is_empty() {
            ZERO
        } else {
            let signum = if signum < 0 { -1 } else { 1 };
            BigInt { signum, mag }
        }
    }
    pub fn zero() -> Self {
        ZERO
    }
    pub fn one() -> Self {
        POS_CACHE[1].clone()
    }
    pub fn is_zero(&self) -> bool {
        self.signum == 0
    }
    pub fn is_negative(&self) -> bool {
        self.signum < 0
    }
    pub fn is_odd(&self) -> bool {
        self.mag.first().map_or(false, |low| low & 1 == 1)
    }
    /// `-1`, `0` or `1`.
    pub fn signum(&self) -> i8 {
        self.signum
    }

    /// Converts a double, truncating toward zero.
    pub fn from_f64(val: f64) -> NumResult<BigInt> {
        let (negative, mantissa, exponent) = decompose_f64(val)?;
        let mag = BigInt::from(mantissa);
        let truncated = if exponent >= 0 {
            mag << exponent as u32
        } else {
            mag >> exponent.unsigned_abs()
        };
        Ok(if negative { -truncated } else { truncated })
    }
}

/// Splits a finite double into `(negative, mantissa, exponent)` with
/// `|val| == mantissa * 2^exponent` exactly.
pub(crate) fn decompose_f64(val: f64) -> NumResult<(bool, u64, i32)> {
    if !val.is_finite() {
        return Err(NumError::InvalidNumericLiteral(val.to_string()));
    }
    let bits = val.to_bits();
    let negative = bits >> 63 == 1;
    let biased = ((bits >> F64_MANTISSA_BITS) & F64_EXPONENT_MASK) as i32;
    let fraction = bits & ((1 << F64_MANTISSA_BITS) - 1);
    if biased == 0 {
        // subnormal
        Ok((negative, fraction, 1 - F64_EXPONENT_BIAS))
    } else {
        Ok((negative, fraction | (1 << F64_MANTISSA_BITS), biased - F64_EXPONENT_BIAS))
    }
}

macro_rules! impl_unsigned_to_big_int {
    ($($u: ty),*) => {
    $(
    impl From<$u> for BigInt {
        fn from(val: $u) -> Self {
            BigInt::value_of(val as u64, 1)
        }
    }
    )*
    };
}

macro_rules! impl_signed_to_big_int {
    ($($i: ty),*) => {
    $(
    impl From<$i> for BigInt {
        fn from(val: $i) -> Self {
            let signum = if val < 0 { -1 } else { 1 };
            BigInt::value_of((val as i64).unsigned_abs(), signum)
        }
    }
    )*
    };
}
impl_unsigned_to_big_int!(u8, u16, u32, usize, u64);
impl_signed_to_big_int!(i8, i16, i32, isize, i64);

impl BigInt {
    fn value_of(val: u64, signum: i8) -> BigInt {
        if val == 0 {
            return ZERO;
        }
        if val <= MAX_CONSTANT as u64 {
            return if signum < 0 {
                NEG_CACHE[val as usize].clone()
            } else {
                POS_CACHE[val as usize].clone()
            };
        }
        let high = (val >> LIMB_BITS) as u32;
        BigInt::from_limbs(vec![val as u32, high], signum)
    }
    fn magnitude_u64(&self) -> Option<u64> {
        match self.mag.as_slice() {
            [] => Some(0),
            [low] => Some(*low as u64),
            [low, high] => Some(((*high as u64) << LIMB_BITS) | *low as u64),
            _ => None,
        }
    }
    /// `None` when the value is negative or wider than 64 bits.
    pub fn to_u64(&self) -> Option<u64> {
        if self.is_negative() {
            None
        } else {
            self.magnitude_u64()
        }
    }
    pub fn to_i64(&self) -> Option<i64> {
        let mag = self.magnitude_u64()?;
        if self.is_negative() {
            if mag <= 1 << 63 {
                Some((mag as i64).wrapping_neg())
            } else {
                None
            }
        } else {
            i64::try_from(mag).ok()
        }
    }
}

// 实现打印
impl Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(self.signum >= 0, "", &BigInt::mag_to_decimal(&self.mag))
    }
}

impl BigInt {
    fn mag_to_decimal(mag: &[u32]) -> String {
        // Peel off nine decimal digits at a time, lowest group first.
        let mut tmp = mag.to_vec();
        let mut digit_groups = Vec::with_capacity(mag.len() * 32 / 29 + 1);
        while !tmp.is_empty() {
            digit_groups.push(BigInt::div_rem_limb_in_place(&mut tmp, DECIMAL_RADIX));
        }
        let mut result = match digit_groups.pop() {
            Some(top) => top.to_string(),
            None => return String::from("0"),
        };
        result.reserve(digit_groups.len() * DIGITS_PER_LIMB);
        for group in digit_groups.iter().rev() {
            result.push_str(&format!("{:09}", group));
        }
        result
    }
}

// 实现解析
impl FromStr for BigInt {
    type Err = NumError;

    fn from_str(val: &str) -> NumResult<BigInt> {
        let invalid = || NumError::InvalidNumericLiteral(val.to_string());
        let (signum, digits) = match val.as_bytes().first() {
            Some(b'-') => (-1, &val[1..]),
            Some(b'+') => (1, &val[1..]),
            _ => (1, val),
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        // skip leading zero
        let digits = digits.trim_start_matches('0');
        let len = digits.len();
        let mut magnitude: Vec<u32> = Vec::with_capacity(len / DIGITS_PER_LIMB + 1);

        let mut group_len = match len % DIGITS_PER_LIMB {
            0 => DIGITS_PER_LIMB,
            first_group_len => first_group_len,
        };
        let mut cursor = 0;
        while cursor < len {
            let group_val: u32 = digits[cursor..cursor + group_len]
                .parse()
                .map_err(|_| invalid())?;
            BigInt::destructive_mul_add(&mut magnitude, 10_u32.pow(group_len as u32), group_val);
            cursor += group_len;
            group_len = DIGITS_PER_LIMB;
        }
        Ok(BigInt::from_limbs(magnitude, signum))
    }
}

impl BigInt {
    // magnitude = magnitude * factor + addend
    #[inline(always)]
    fn destructive_mul_add(magnitude: &mut Vec<u32>, factor: u32, addend: u32) {
        let mut carry = addend as u64;
        for x in magnitude.iter_mut() {
            let product = (*x as u64) * (factor as u64) + carry;
            *x = product as u32;
            carry = product >> LIMB_BITS;
        }
        if carry != 0 {
            magnitude.push(carry as u32);
        }
    }
}

// 实现大小比较
impl BigInt {
    fn compare_mag(x: &[u32], y: &[u32]) -> Ordering {
        x.len()
            .cmp(&y.len())
            .then_with(|| x.iter().rev().cmp(y.iter().rev()))
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.signum.cmp(&other.signum) {
            Ordering::Equal => {}
            ord => return ord,
        }
        if self.signum >= 0 {
            BigInt::compare_mag(&self.mag, &other.mag)
        } else {
            BigInt::compare_mag(&self.mag, &other.mag).reverse()
        }
    }
}

// 实现绝对值
impl BigInt {
    pub fn abs(&self) -> BigInt {
        self.clone().abs_take()
    }
    fn abs_take(self) -> BigInt {
        let BigInt { signum, mag } = self;
        BigInt { signum: signum.abs(), mag }
    }
}

// 实现加法
impl Add<&BigInt> for &BigInt {
    type Output = BigInt;

    fn add(self, val: &BigInt) -> Self::Output {
        if val.signum == 0 {
            return self.clone();
        }
        if self.signum == 0 {
            return val.clone();
        }
        if val.signum == self.signum {
            return BigInt::from_limbs(BigInt::add_mag(&self.mag, &val.mag), self.signum);
        }
        match BigInt::compare_mag(&self.mag, &val.mag) {
            Ordering::Less => BigInt::from_limbs(BigInt::sub_mag(&val.mag, &self.mag), val.signum),
            Ordering::Equal => ZERO,
            Ordering::Greater => BigInt::from_limbs(BigInt::sub_mag(&self.mag, &val.mag), self.signum),
        }
    }
}

impl BigInt {
    fn add_mag(x: &[u32], y: &[u32]) -> Vec<u32> {
        let (long, short) = if x.len() < y.len() { (y, x) } else { (x, y) };
        let mut result = Vec::with_capacity(long.len() + 1);
        let mut carry = 0_u64;
        for (i, &l) in long.iter().enumerate() {
            let sum = l as u64 + short.get(i).copied().unwrap_or(0) as u64 + carry;
            result.push(sum as u32);
            carry = sum >> LIMB_BITS;
        }
        if carry != 0 {
            result.push(carry as u32);
        }
        result
    }
    /// `big - little`, where `big >= little` by magnitude.
    fn sub_mag(big: &[u32], little: &[u32]) -> Vec<u32> {
        let mut result = Vec::with_capacity(big.len());
        let mut borrow = 0_u64;
        for (i, &b) in big.iter().enumerate() {
            let subtrahend = little.get(i).copied().unwrap_or(0) as u64 + borrow;
            let minuend = b as u64;
            if minuend >= subtrahend {
                result.push((minuend - subtrahend) as u32);
                borrow = 0;
            } else {
                result.push((minuend + (1 << LIMB_BITS) - subtrahend) as u32);
                borrow = 1;
            }
        }
        result
    }
}

forward_binop!(impl Add, add for BigInt => BigInt);
forward_assign_op!(impl AddAssign, add_assign, Add, add for BigInt);

// 实现取反
impl Neg for BigInt {
    type Output = BigInt;

    fn neg(self) -> Self::Output {
        let BigInt { signum, mag } = self;
        BigInt { signum: -signum, mag }
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> Self::Output {
        self.clone().neg()
    }
}

// 实现减法
impl Sub<&BigInt> for &BigInt {
    type Output = BigInt;

    fn sub(self, val: &BigInt) -> Self::Output {
        self + &(-val)
    }
}

forward_binop!(impl Sub, sub for BigInt => BigInt);
forward_assign_op!(impl SubAssign, sub_assign, Sub, sub for BigInt);

// 实现左移
impl Shl<u32> for &BigInt {
    type Output = BigInt;

    fn shl(self, n: u32) -> Self::Output {
        if self.signum == 0 || n == 0 {
            self.clone()
        } else {
            BigInt::from_limbs(BigInt::shl_mag(&self.mag, n), self.signum)
        }
    }
}

impl Shl<u32> for BigInt {
    type Output = BigInt;

    fn shl(self, n: u32) -> Self::Output {
        &self << n
    }
}

impl BigInt {
    fn shl_mag(mag: &[u32], n: u32) -> Vec<u32> {
        let limb_shift = (n / LIMB_BITS) as usize;
        let bit_shift = n % LIMB_BITS;
        let mut result = vec![0_u32; limb_shift];
        result.reserve(mag.len() + 1);
        if bit_shift == 0 {
            result.extend_from_slice(mag);
        } else {
            let mut carry = 0_u32;
            for &x in mag {
                result.push((x << bit_shift) | carry);
                carry = x >> (LIMB_BITS - bit_shift);
            }
            if carry != 0 {
                result.push(carry);
            }
        }
        result
    }
}

// 实现右移
/// Shifts the magnitude, so the result is truncated toward zero.
impl Shr<u32> for &BigInt {
    type Output = BigInt;

    fn shr(self, n: u32) -> Self::Output {
        if self.signum == 0 || n == 0 {
            self.clone()
        } else {
            BigInt::from_limbs(BigInt::shr_mag(&self.mag, n), self.signum)
        }
    }
}

impl Shr<u32> for BigInt {
    type Output = BigInt;

    fn shr(self, n: u32) -> Self::Output {
        &self >> n
    }
}

impl BigInt {
    fn shr_mag(mag: &[u32], n: u32) -> Vec<u32> {
        let limb_shift = (n / LIMB_BITS) as usize;
        if limb_shift >= mag.len() {
            return Vec::new();
        }
        let bit_shift = n % LIMB_BITS;
        let src = &mag[limb_shift..];
        if bit_shift == 0 {
            return src.to_vec();
        }
        let mut result = Vec::with_capacity(src.len());
        for (i, &x) in src.iter().enumerate() {
            let high = src.get(i + 1).map_or(0, |&next| next << (LIMB_BITS - bit_shift));
            result.push((x >> bit_shift) | high);
        }
        result
    }
}

// 实现乘法
impl Mul<&BigInt> for &BigInt {
    type Output = BigInt;

    fn mul(self, val: &BigInt) -> Self::Output {
        if self.signum == 0 || val.signum == 0 {
            return ZERO;
        }
        let signum = self.signum * val.signum;
        if val.mag.len() == 1 {
            return BigInt::from_limbs(BigInt::mul_by_limb(&self.mag, val.mag[0]), signum);
        }
        if self.mag.len() == 1 {
            return BigInt::from_limbs(BigInt::mul_by_limb(&val.mag, self.mag[0]), signum);
        }
        BigInt::from_limbs(BigInt::mul_to_len(&self.mag, &val.mag), signum)
    }
}

impl BigInt {
    pub fn square(&self) -> BigInt {
        self * self
    }
    fn mul_by_limb(x: &[u32], y: u32) -> Vec<u32> {
        let mut result = Vec::with_capacity(x.len() + 1);
        let mut carry = 0_u64;
        for &limb in x {
            let product = (limb as u64) * (y as u64) + carry;
            result.push(product as u32);
            carry = product >> LIMB_BITS;
        }
        if carry != 0 {
            result.push(carry as u32);
        }
        result
    }
    /// Schoolbook multiplication into a buffer of `x.len() + y.len()` limbs.
    fn mul_to_len(x: &[u32], y: &[u32]) -> Vec<u32> {
        let mut z = vec![0_u32; x.len() + y.len()];
        for (i, &x_limb) in x.iter().enumerate() {
            if x_limb == 0 {
                continue;
            }
            let mut carry = 0_u64;
            for (j, &y_limb) in y.iter().enumerate() {
                // (2^32-1)^2 + 2 * (2^32-1) still fits in a u64
                let product = (x_limb as u64) * (y_limb as u64) + z[i + j] as u64 + carry;
                z[i + j] = product as u32;
                carry = product >> LIMB_BITS;
            }
            z[i + y.len()] = carry as u32;
        }
        z
    }
}

forward_binop!(impl Mul, mul for BigInt => BigInt);
forward_assign_op!(impl MulAssign, mul_assign, Mul, mul for BigInt);

// 实现除法
impl BigInt {
    /// Truncating division: `self == q * divisor + r`, `|r| < |divisor|` and `r`
    /// takes the sign of `self`.
    pub fn div_rem(&self, divisor: &BigInt) -> NumResult<(BigInt, BigInt)> {
        if divisor.is_zero() {
            return Err(NumError::DivisionByZero);
        }
        Ok(self.div_rem_nonzero(divisor))
    }
    pub fn checked_div(&self, divisor: &BigInt) -> NumResult<BigInt> {
        self.div_rem(divisor).map(|(q, _)| q)
    }
    pub fn checked_rem(&self, divisor: &BigInt) -> NumResult<BigInt> {
        self.div_rem(divisor).map(|(_, r)| r)
    }
    /// Caller guarantees `divisor` is not zero.
    pub(crate) fn div_rem_nonzero(&self, divisor: &BigInt) -> (BigInt, BigInt) {
        if self.is_zero() {
            return (ZERO, ZERO);
        }
        let (q, r) = BigInt::div_rem_mag(&self.mag, &divisor.mag);
        (
            BigInt::from_limbs(q, self.signum * divisor.signum),
            BigInt::from_limbs(r, self.signum),
        )
    }
    fn div_rem_mag(u: &[u32], v: &[u32]) -> (Vec<u32>, Vec<u32>) {
        if BigInt::compare_mag(u, v) == Ordering::Less {
            return (Vec::new(), u.to_vec());
        }
        if v.len() == 1 {
            let mut q = u.to_vec();
            let r = BigInt::div_rem_limb_in_place(&mut q, v[0]);
            return (q, if r == 0 { Vec::new() } else { vec![r] });
        }
        BigInt::divide_knuth(u, v)
    }
    /// Divides `mag` by a single limb in place and returns the remainder.
    fn div_rem_limb_in_place(mag: &mut Vec<u32>, divisor: u32) -> u32 {
        let mut rem = 0_u64;
        for x in mag.iter_mut().rev() {
            let current = (rem << LIMB_BITS) | *x as u64;
            *x = (current / divisor as u64) as u32;
            rem = current % divisor as u64;
        }
        while mag.last() == Some(&0) {
            mag.pop();
        }
        rem as u32
    }
    /// Uses Algorithm D in Knuth "The Art Of Computer Programming" Vol.2 section 4.3.1.
    /// Requires `v.len() >= 2` and `u >= v`.
    fn divide_knuth(u: &[u32], v: &[u32]) -> (Vec<u32>, Vec<u32>) {
        let n = v.len();
        let m = u.len() - n;

        // D1 normalize: shift so the top limb of v has its high bit set
        let shift = v[n - 1].leading_zeros();
        let vn = BigInt::shl_limbs_exact(v, shift);
        let mut un = BigInt::shl_limbs_exact(u, shift);
        un.push(if shift == 0 { 0 } else { u[u.len() - 1] >> (LIMB_BITS - shift) });

        let b = 1_u64 << LIMB_BITS;
        let v_top = vn[n - 1] as u64;
        let v_next = vn[n - 2] as u64;
        let mut q = vec![0_u32; m + 1];

        for j in (0..=m).rev() {
            // D3 estimate qhat from the top two limbs
            let numerator = ((un[j + n] as u64) << LIMB_BITS) | un[j + n - 1] as u64;
            let mut qhat = numerator / v_top;
            let mut rhat = numerator % v_top;
            while qhat >= b || qhat * v_next > ((rhat << LIMB_BITS) | un[j + n - 2] as u64) {
                qhat -= 1;
                rhat += v_top;
                if rhat >= b {
                    break;
                }
            }

            // D4 multiply and subtract
            let mut borrow = 0_u64;
            let mut carry = 0_u64;
            for i in 0..n {
                let product = qhat * vn[i] as u64 + carry;
                carry = product >> LIMB_BITS;
                let subtrahend = (product & LIMB_MASK) + borrow;
                let minuend = un[i + j] as u64;
                if minuend >= subtrahend {
                    un[i + j] = (minuend - subtrahend) as u32;
                    borrow = 0;
                } else {
                    un[i + j] = (minuend + b - subtrahend) as u32;
                    borrow = 1;
                }
            }
            let subtrahend = carry + borrow;
            let minuend = un[j + n] as u64;
            un[j + n] = minuend.wrapping_sub(subtrahend) as u32;

            // D5, D6 add back when qhat was one too large
            if minuend < subtrahend {
                qhat -= 1;
                let mut carry = 0_u64;
                for i in 0..n {
                    let sum = un[i + j] as u64 + vn[i] as u64 + carry;
                    un[i + j] = sum as u32;
                    carry = sum >> LIMB_BITS;
                }
                un[j + n] = un[j + n].wrapping_add(carry as u32);
            }
            q[j] = qhat as u32;
        }

        // D8 unnormalize the remainder
        un.truncate(n);
        let r = BigInt::shr_mag(&un, shift);
        (strip_high_zero!(q), strip_high_zero!(r))
    }
    /// Shifts left by fewer than 32 bits, dropping the bits pushed out of the
    /// top limb.
    fn shl_limbs_exact(mag: &[u32], shift: u32) -> Vec<u32> {
        if shift == 0 {
            return mag.to_vec();
        }
        let mut result = Vec::with_capacity(mag.len() + 1);
        let mut carry = 0_u32;
        for &x in mag {
            result.push((x << shift) | carry);
            carry = x >> (LIMB_BITS - shift);
        }
        result
    }
}

// 实现最大公约数与乘方
impl BigInt {
    /// Euclid's algorithm on the magnitudes; the result is never negative.
    pub fn gcd(&self, other: &BigInt) -> BigInt {
        let mut a = self.mag.clone();
        let mut b = other.mag.clone();
        while !b.is_empty() {
            let (_, r) = BigInt::div_rem_mag(&a, &b);
            a = b;
            b = r;
        }
        BigInt::from_limbs(a, 1)
    }
    /// Square-and-multiply, walking the exponent by halving and parity tests so
    /// it never has to fit in a machine word.
    pub fn pow(&self, exponent: &BigInt) -> NumResult<BigInt> {
        if exponent.is_negative() {
            return Err(NumError::InvalidExponent(exponent.to_string()));
        }
        let mut result = BigInt::one();
        let mut base = self.clone();
        let mut exponent = exponent.clone();
        while !exponent.is_zero() {
            if exponent.is_odd() {
                result *= &base;
            }
            exponent = exponent >> 1;
            if !exponent.is_zero() {
                base = base.square();
            }
        }
        Ok(result)
    }
}

#[test]
fn test_from() {
    let num: i8 = 12;
    let big: BigInt = num.into();
    assert_eq!(big.mag[0] as i8, num * big.signum);

    let num: i16 = -100;
    let big: BigInt = num.into();
    assert_eq!(big.mag[0] as i16, num * (big.signum as i16));

    let num: isize = -10000;
    let big: BigInt = num.into();
    assert_eq!(big.mag[0] as isize, num * (big.signum as isize));

    let big = BigInt::from(i64::MIN);
    assert_eq!(big.to_string(), "-9223372036854775808");
    assert_eq!(big.to_i64(), Some(i64::MIN));

    let big = BigInt::from(u64::MAX);
    assert_eq!(big.mag, vec![u32::MAX, u32::MAX]);
    assert_eq!(big.to_u64(), Some(u64::MAX));
    assert_eq!(big.to_i64(), None);

    assert!(BigInt::from(0_i32).is_zero());
    assert_eq!(BigInt::from(0_u8), ZERO);
}

#[test]
fn test_from_f64() {
    assert_eq!(BigInt::from_f64(-123456.789).unwrap(), BigInt::from(-123456));
    assert_eq!(BigInt::from_f64(0.999).unwrap(), ZERO);
    assert_eq!(BigInt::from_f64(-0.0).unwrap(), ZERO);
    assert_eq!(BigInt::from_f64(50.0).unwrap(), BigInt::from(50));
    let big = BigInt::from_f64(1e300).unwrap();
    assert!(big.to_string().starts_with("1000000000000000052504760255204420248704468581108159154915854115511802457988908195786371375080447864043704443832883878176942523235360430575644792184786706982848387200926575803737830233794788090059368953234970799945081119038967640880074652742780142494579258788820056842838115669472196386865459400540160"));
    assert_eq!(
        BigInt::from_f64(f64::NAN),
        Err(NumError::InvalidNumericLiteral("NaN".to_string()))
    );
    assert!(BigInt::from_f64(f64::NEG_INFINITY).is_err());
}

#[test]
fn test_parse_and_print() {
    let text = "12345678909876523784950683472613487560983287654321";
    let a: BigInt = text.parse().unwrap();
    assert_eq!(a.to_string(), text);

    let a: BigInt = "-000001000000000".parse().unwrap();
    assert_eq!(a.to_string(), "-1000000000");
    let a: BigInt = "+42".parse().unwrap();
    assert_eq!(a, BigInt::from(42));
    let a: BigInt = "-0000".parse().unwrap();
    assert_eq!(a, ZERO);
    assert_eq!(a.to_string(), "0");

    assert!("".parse::<BigInt>().is_err());
    assert!("-".parse::<BigInt>().is_err());
    assert!("12a".parse::<BigInt>().is_err());
    assert!("1-2".parse::<BigInt>().is_err());
    assert_eq!(format!("{:>5}", BigInt::from(-12)), "  -12");
}

#[test]
fn test_cmp() {
    let values: Vec<BigInt> = ["-100000000000000000000", "-5", "0", "3", "4294967296", "100000000000000000000"]
        .iter()
        .map(|s| s.parse().unwrap())
        .collect();
    for (i, a) in values.iter().enumerate() {
        for (j, b) in values.iter().enumerate() {
            assert_eq!(a.cmp(b), i.cmp(&j), "{} vs {}", a, b);
        }
    }
}

#[test]
fn test_add_sub() {
    let a: BigInt = "4294967295".parse().unwrap();
    let b = BigInt::one();
    assert_eq!((&a + &b).to_string(), "4294967296");
    assert_eq!((&b - &a).to_string(), "-4294967294");
    assert_eq!(&a - &a, ZERO);
    assert_eq!(BigInt::from(-7) + BigInt::from(3), BigInt::from(-4));
    assert_eq!(BigInt::from(-7) - BigInt::from(-10), BigInt::from(3));

    let mut c = BigInt::from(10);
    let alias = c.clone();
    c += &a;
    c -= BigInt::from(5);
    assert_eq!(c.to_string(), "4294967300");
    assert_eq!(alias, BigInt::from(10));
}

#[test]
fn test_mul() {
    let a: BigInt = "10000000000000".parse().unwrap();
    let b: BigInt = "900000000000".parse().unwrap();
    assert_eq!((&a * &b).to_string(), "9000000000000000000000000");
    assert_eq!((&a * &-&b).to_string(), "-9000000000000000000000000");
    assert_eq!(&a * &ZERO, ZERO);
    let c: BigInt = "340282366920938463463374607431768211455".parse().unwrap();
    assert_eq!(c.square().to_string(), "115792089237316195423570985008687907852589419931798687112530834793049593217025");
}

#[test]
fn test_shift() {
    let one = BigInt::one();
    assert_eq!((&one << 100).to_string(), "1267650600228229401496703205376");
    assert_eq!((&one << 100) >> 99, BigInt::from(2));
    assert_eq!(BigInt::from(-7) >> 1, BigInt::from(-3));
    assert_eq!(BigInt::from(7) >> 64, ZERO);
}

#[test]
fn test_div() {
    let a = BigInt::from(120);
    let b = BigInt::from(13);
    assert_eq!(a.div_rem(&b).unwrap(), (BigInt::from(9), BigInt::from(3)));

    // truncating signs
    assert_eq!(BigInt::from(-7).div_rem(&BigInt::from(2)).unwrap(), (BigInt::from(-3), BigInt::from(-1)));
    assert_eq!(BigInt::from(7).div_rem(&BigInt::from(-2)).unwrap(), (BigInt::from(-3), BigInt::from(1)));
    assert_eq!(BigInt::from(-7).div_rem(&BigInt::from(-2)).unwrap(), (BigInt::from(3), BigInt::from(-1)));
    assert_eq!(BigInt::from(3).div_rem(&BigInt::from(-20)).unwrap(), (ZERO, BigInt::from(3)));

    // one word
    let a: BigInt = "10000000000000000000000000000000000".parse().unwrap();
    let b = BigInt::from(1000);
    assert_eq!(a.checked_div(&b).unwrap().to_string(), "10000000000000000000000000000000");

    // Knuth
    let a: BigInt = "124871287894782164876238905710532895792830741278950327951074309571023759712087492109591287094780219747214567876543245678976547897654367543567654678987654321456789087654325678908765432567890876543245678908765432567890876543876543245678907654356789".parse().unwrap();
    let b: BigInt = "5678987654678976543587654678976546789087657876545678976543256789765432456789234567890854376".parse().unwrap();
    let (q, r) = a.div_rem(&b).unwrap();
    assert_eq!(q.to_string(), "21988300642263136800048566126805476040703295625345756336585704044222781621158596876349726562910906651562104831721609088222205401883168960593370061500432215");
    assert_eq!(r.to_string(), "1193100845153944161348506284633422837373178517256300220003478173303874237852253838030233949");
    assert_eq!(&(&q * &b) + &r, a);

    assert_eq!(a.div_rem(&ZERO), Err(NumError::DivisionByZero));
}

#[test]
fn test_mod() {
    let a: BigInt = "10000000000000000".parse().unwrap();
    assert_eq!(a.checked_rem(&BigInt::from(10)).unwrap(), ZERO);

    let a: BigInt = "23456789873625348759607098765432345678909876325346546543456453573434839063464369876543245".parse().unwrap();
    let b: BigInt = "526738495607659438721653478560954837265378495607".parse().unwrap();
    let r: BigInt = "393707270751296419349581795408095683999332705291".parse().unwrap();
    assert_eq!(a.checked_rem(&b).unwrap(), r);
    assert_eq!((-&a).checked_rem(&b).unwrap(), -r);
}

#[test]
fn test_gcd() {
    assert_eq!(BigInt::from(-12).gcd(&BigInt::from(18)), BigInt::from(6));
    assert_eq!(BigInt::from(0).gcd(&BigInt::from(-5)), BigInt::from(5));
    assert_eq!(BigInt::from(17).gcd(&BigInt::from(0)), BigInt::from(17));
    let a = BigInt::from(2).pow(&BigInt::from(100)).unwrap();
    let b = BigInt::from(6).pow(&BigInt::from(40)).unwrap();
    assert_eq!(a.gcd(&b), BigInt::from(2).pow(&BigInt::from(40)).unwrap());
}

#[test]
fn test_pow() {
    let two = BigInt::from(2);
    assert_eq!(two.pow(&BigInt::from(100)).unwrap().to_string(), "1267650600228229401496703205376");
    assert_eq!(BigInt::from(3).pow(&BigInt::from(40)).unwrap().to_string(), "12157665459056928801");
    assert_eq!(BigInt::from(-3).pow(&BigInt::from(3)).unwrap(), BigInt::from(-27));
    assert_eq!(ZERO.pow(&ZERO).unwrap(), BigInt::one());
    assert_eq!(
        two.pow(&BigInt::from(-1)),
        Err(NumError::InvalidExponent("-1".to_string()))
    );
}
