/// Width of one magnitude limb.
pub const LIMB_BITS: u32 = u32::BITS;

pub const LIMB_MASK: u64 = 0xffff_ffff;

/// Largest power of ten that fits in a limb. Decimal conversion works a limb of
/// digits at a time.
pub const DECIMAL_RADIX: u32 = 1_000_000_000;

pub const DIGITS_PER_LIMB: usize = 9;

pub const MAX_CONSTANT: usize = 16;

pub const F64_MANTISSA_BITS: u32 = 52;

pub const F64_EXPONENT_MASK: u64 = 0x7ff;

/// IEEE-754 exponent bias plus the mantissa width, so that
/// `value == mantissa * 2^(biased - F64_EXPONENT_BIAS)`.
pub const F64_EXPONENT_BIAS: i32 = 1075;
