//! Exact Num \
//! This crate provides:
//! - [`BigInt`]: Immutable arbitrary-precision signed integers.
//! - [`Number`]: Immutable exact rational numbers built on `BigInt`, always kept
//!   in lowest terms, with decimal rendering at any requested precision.
//!
//! Nothing here touches floating point after construction: a double passed to
//! [`Number::from_f64`] is captured as its exact binary value.
//!
//! Fallible operations return [`NumResult`] instead of panicking.

#[macro_use]
mod macros;

mod big_int;
mod big_num_cache;
mod big_num_constants;
mod error;
mod number;

pub use big_int::BigInt;
pub use error::{NumError, NumResult};
pub use number::Number;

#[cfg(test)]
mod tests {
    use crate::{BigInt, Number};

    #[test]
    fn it_works() {
        let x = Number::from_i64(1024);
        let y = (Number::from_i64(1) / Number::from_i64(3)).unwrap()
            + Number::from_f64(297.003).unwrap();
        let mut z = x.clone();
        z += y;
        assert_eq!(z.to_decimal_string(5), "1321.33633");
        assert_eq!(x, Number::from_i64(1024));

        let base = Number::from_i64(10);
        let exponent = BigInt::from_f64(50.0).unwrap();
        assert_eq!(base.pow(&exponent).unwrap().to_decimal_string(0).len(), 51);
    }
}
