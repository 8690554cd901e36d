//! Lossless, fixed-width, big-endian conversion between nonnegative
//! integers and byte strings.

use num_bigint::BigUint;
use num_traits::Zero;

/// Big-endian, unsigned. Returns `0` for empty input.
pub fn int_from_bytes(bytes: &[u8]) -> BigUint {
    BigUint::from_bytes_be(bytes)
}

/// Big-endian, unsigned, minimum number of bytes. Returns a single `0x00`
/// for `n = 0`.
pub fn int_to_bytes(n: &BigUint) -> Vec<u8> {
    if n.is_zero() {
        vec![0u8]
    } else {
        n.to_bytes_be()
    }
}

/// `ceil(log_256(v+1))`, `0` for `v = 0`.
pub fn required_bytes_given_value(v: &BigUint) -> usize {
    if v.is_zero() {
        0
    } else {
        ((v.bits() as usize) + 7) / 8
    }
}
