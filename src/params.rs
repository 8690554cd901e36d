//! The fixed prime catalog and the Feldman parameter selector.
//!
//! The catalog avoids a runtime prime search for the large moduli this
//! crate deals in; the `p = r*q + 1` structure then guarantees a subgroup
//! of order `q` inside `Z_p*` for Feldman commitments.

use num_bigint::BigUint;
use num_traits::One;
use once_cell::sync::Lazy;

use crate::arith;
use crate::error::Error;

const MERSENNE_EXPONENTS: &[u32] = &[
    17, 19, 31, 61, 89, 107, 127, 521, 607, 1279, 2203, 2281, 3217, 4253, 4423, 9689, 9941, 11213,
    19937, 21701, 23209, 44497, 86243, 110503, 132049, 216091,
];

/// `(bit length k, c)` pairs for the smallest prime exceeding `2^k`,
/// expressed as `2^k + c`.
const EXTRA_PRIME_SPECS: &[(u32, u32)] = &[
    (128, 51),
    (192, 133),
    (256, 297),
    (320, 27),
    (384, 231),
    (448, 211),
    (512, 75),
    (768, 183),
    (1024, 643),
    (1536, 75),
    (2048, 981),
    (3072, 813),
    (4096, 1761),
];

static CATALOG: Lazy<Vec<BigUint>> = Lazy::new(|| {
    let mut primes: Vec<BigUint> = MERSENNE_EXPONENTS
        .iter()
        .map(|&k| (BigUint::one() << k as usize) - BigUint::one())
        .collect();
    primes.extend(
        EXTRA_PRIME_SPECS
            .iter()
            .map(|&(k, c)| (BigUint::one() << k as usize) + BigUint::from(c)),
    );
    primes.sort();
    primes
});

/// The smallest catalog entry strictly greater than `n`.
pub fn select_prime_larger_than(n: &BigUint) -> Result<BigUint, Error> {
    CATALOG
        .iter()
        .find(|q| *q > n)
        .cloned()
        .ok_or(Error::CatalogExhausted)
}

/// `(q, p, g)` for Feldman VSS: `q = select_prime_larger_than(n)`, `p =
/// r*q + 1` for the smallest `r >= 1` making `p` prime, and `g` the
/// smallest-`h` generator of the order-`q` subgroup of `Z_p*`.
///
/// `g` is chosen deterministically (smallest `h >= 2` coprime to `p`)
/// rather than randomized, to keep parity with fixed test vectors; see
/// the crate-level design notes.
pub fn select_prime_feldman(n: &BigUint) -> Result<(BigUint, BigUint, BigUint), Error> {
    let q = select_prime_larger_than(n)?;
    let one = BigUint::one();

    let mut r = BigUint::one();
    let p = loop {
        let candidate = &r * &q + &one;
        if arith::is_probable_prime(&candidate) {
            break candidate;
        }
        r += &one;
    };

    let mut h = BigUint::from(2u8);
    let g = loop {
        if arith::gcd(&h, &p) == one {
            let candidate = arith::powmod(&h, &r, &p);
            if candidate != one {
                break candidate;
            }
        }
        h += &one;
    };

    Ok((q, p, g))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_is_sorted_and_nonempty() {
        let mut sorted = CATALOG.clone();
        sorted.sort();
        assert_eq!(CATALOG.clone(), sorted);
        assert!(!CATALOG.is_empty());
    }

    #[test]
    fn select_prime_larger_than_exceeds_bound() {
        let n = BigUint::from(1000u32);
        let q = select_prime_larger_than(&n).unwrap();
        assert!(q > n);
        // smallest catalog entry: 2^17 - 1 = 131071
        assert_eq!(q, BigUint::from(131071u32));
    }

    #[test]
    fn select_prime_larger_than_picks_smallest_match() {
        let mersenne_17 = (BigUint::one() << 17usize) - BigUint::one();
        let just_under = &mersenne_17 - BigUint::one();
        let q = select_prime_larger_than(&just_under).unwrap();
        assert_eq!(q, mersenne_17);
    }

    #[test]
    fn feldman_params_satisfy_subgroup_invariant() {
        let n = BigUint::from(1000u32);
        let (q, p, g) = select_prime_feldman(&n).unwrap();
        assert!(arith::is_probable_prime(&p));
        assert_eq!((&p - BigUint::one()) % &q, num_traits::Zero::zero());
        assert_eq!(arith::powmod(&g, &q, &p), BigUint::one());
        assert_ne!(g, BigUint::one());
    }

    #[test]
    fn catalog_exhausted_for_absurd_bound() {
        let n = (BigUint::one() << 5000usize) + BigUint::from(1u32);
        assert_eq!(select_prime_larger_than(&n), Err(Error::CatalogExhausted));
    }
}
