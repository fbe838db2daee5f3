use lazy_static::*;

use crate::BigInt;
use crate::big_num_constants::*;

lazy_static! {
    pub static ref POS_CACHE: Vec<BigInt> = (0..=MAX_CONSTANT as u32)
        .map(|val| BigInt::from_limbs(vec![val], 1))
        .collect();
    pub static ref NEG_CACHE: Vec<BigInt> = (0..=MAX_CONSTANT as u32)
        .map(|val| BigInt::from_limbs(vec![val], -1))
        .collect();
    pub static ref TEN: BigInt = BigInt::from_limbs(vec![10], 1);
}

#[test]
fn test_cache() {
    assert!(POS_CACHE[0].is_zero());
    assert!(NEG_CACHE[0].is_zero());
    assert_eq!(POS_CACHE[16].to_string(), "16");
    assert_eq!(NEG_CACHE[7].to_string(), "-7");
    assert_eq!(-&NEG_CACHE[10], *TEN);
}
