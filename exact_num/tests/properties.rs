//! Property tests for the arithmetic engine:
//! 1. Exactness: (a / b) * b == a
//! 2. Reduction: every result is in lowest terms with a positive denominator
//! 3. i32 round trip through Number
//! 4. Truncating BigInt division identity
//! 5. Decimal rendering has exactly `p` fractional digits and is repeatable
//! 6. Power laws

use exact_num::{BigInt, NumError, Number};
use proptest::prelude::*;

// ── Strategies ───────────────────────────────────────────────────────────────

/// Integers made of up to eight random decimal chunks, so multi-limb values
/// show up as often as small ones.
fn big_int() -> impl Strategy<Value = BigInt> {
    (any::<bool>(), prop::collection::vec(0_u64..1_000_000_000, 1..8)).prop_map(|(negative, chunks)| {
        let mut text = String::from(if negative { "-" } else { "" });
        for chunk in chunks {
            text.push_str(&format!("{:09}", chunk));
        }
        text.parse().unwrap()
    })
}

fn non_zero_big_int() -> impl Strategy<Value = BigInt> {
    big_int().prop_filter("divisor must be non-zero", |b| !b.is_zero())
}

fn number() -> impl Strategy<Value = Number> {
    (big_int(), non_zero_big_int())
        .prop_map(|(n, d)| Number::from_ratio(n, d).unwrap())
}

fn assert_canonical(n: &Number) {
    assert!(!n.denominator().is_negative() && !n.denominator().is_zero());
    assert_eq!(n.numerator().gcd(n.denominator()), BigInt::one());
}

// ── Properties ───────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn division_then_multiplication_is_exact(a in any::<i64>(), b in any::<i64>().prop_filter("non-zero", |b| *b != 0)) {
        let a = Number::from_i64(a);
        let b = Number::from_i64(b);
        let q = (&a / &b).unwrap();
        prop_assert_eq!(q * b, a);
    }

    #[test]
    fn results_stay_reduced(x in number(), y in number()) {
        assert_canonical(&x);
        assert_canonical(&(&x + &y));
        assert_canonical(&(&x - &y));
        assert_canonical(&(&x * &y));
        match &x / &y {
            Ok(q) => assert_canonical(&q),
            Err(e) => {
                prop_assert!(y.is_zero());
                prop_assert_eq!(e, NumError::DivisionByZero);
            }
        }
    }

    #[test]
    fn i32_round_trip(n in any::<i32>()) {
        prop_assert_eq!(Number::from_i64(n as i64).to_i32().unwrap(), n);
    }

    #[test]
    fn big_int_division_identity(n in big_int(), d in non_zero_big_int()) {
        let (q, r) = n.div_rem(&d).unwrap();
        prop_assert_eq!(&(&q * &d) + &r, n.clone());
        prop_assert!(r.abs() < d.abs());
        prop_assert!(r.is_zero() || r.is_negative() == n.is_negative());
    }

    #[test]
    fn big_int_text_round_trip(n in big_int()) {
        let text = n.to_string();
        prop_assert_eq!(text.parse::<BigInt>().unwrap(), n);
    }

    #[test]
    fn small_products_match_machine_arithmetic(a in any::<i32>(), b in any::<i32>()) {
        let product = BigInt::from(a) * BigInt::from(b);
        prop_assert_eq!(product.to_i64(), Some(a as i64 * b as i64));
        let sum = BigInt::from(a) - BigInt::from(b);
        prop_assert_eq!(sum.to_i64(), Some(a as i64 - b as i64));
    }

    #[test]
    fn decimal_rendering_is_deterministic(x in number(), precision in 0_usize..60) {
        let first = x.to_decimal_string(precision);
        prop_assert_eq!(&first, &x.to_decimal_string(precision));
        match first.split_once('.') {
            Some((_, fraction)) => prop_assert_eq!(fraction.len(), precision),
            None => prop_assert_eq!(precision, 0),
        }
        let integer = first.trim_start_matches('-').split('.').next().unwrap();
        prop_assert!(integer == "0" || !integer.starts_with('0'));
    }

    #[test]
    fn rendering_matches_f64_for_short_doubles(v in -1.0e6_f64..1.0e6) {
        // Two places of rounding move the value by at most half a cent.
        let exact = Number::from_f64(v).unwrap();
        let rendered: f64 = exact.to_decimal_string(2).parse().unwrap();
        prop_assert!((rendered - v).abs() <= 0.005 + 1e-9);
    }

    #[test]
    fn power_laws(x in number(), e in 0_u32..12) {
        prop_assert_eq!(x.pow(&BigInt::zero()).unwrap(), Number::one());
        prop_assert_eq!(x.pow(&BigInt::one()).unwrap(), x.clone());
        let next = x.pow(&BigInt::from(e + 1)).unwrap();
        prop_assert_eq!(next, x.pow(&BigInt::from(e)).unwrap() * &x);
    }

    #[test]
    fn comparison_agrees_with_subtraction(x in number(), y in number()) {
        let difference = &x - &y;
        prop_assert_eq!(x.cmp(&y), difference.signum().cmp(&0));
    }
}

#[test]
fn power_of_two() {
    assert_eq!(
        Number::from_i64(2).pow(&BigInt::from(10)).unwrap(),
        Number::from_i64(1024)
    );
}

#[test]
fn negative_to_unsigned() {
    assert_eq!(Number::from_i64(-1).to_usize(), Err(NumError::NegativeToUnsigned));
}
