//! Big-integer and modular arithmetic adapters over `num-bigint`.
//!
//! `powmod` and the rest lean on `num-bigint`'s own Montgomery-free but
//! still sub-quadratic `modpow`; nothing here re-implements big-integer
//! multiplication itself.

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use crate::error::Error;

/// `base^exp mod m`, accepting exponents of arbitrary bit length.
///
/// This is the one call site in the crate that is secret-dependent when
/// `base` carries a Feldman coefficient derived from the secret; a
/// constant-time `modpow` is recommended there but not required for
/// correctness (see the crate-level design notes).
pub fn powmod(base: &BigUint, exp: &BigUint, modulus: &BigUint) -> BigUint {
    base.modpow(exp, modulus)
}

/// `base^exp` for a small, non-negative `exp`, computed by repeated
/// squaring without any modular reduction. Used for Feldman exponent
/// bookkeeping (`x_i^j` for `j` bounded by the threshold) where the
/// exponent itself, not a modpow result, is needed.
pub fn pow_usize(base: &BigUint, mut exp: usize) -> BigUint {
    let mut result = BigUint::one();
    let mut b = base.clone();
    while exp > 0 {
        if exp & 1 == 1 {
            result *= &b;
        }
        b = &b * &b;
        exp >>= 1;
    }
    result
}

pub fn gcd(a: &BigUint, b: &BigUint) -> BigUint {
    a.gcd(b)
}

/// Extended Euclidean algorithm returning `(gcd, x, y)` with `a*x + b*y = gcd`.
fn extended_gcd(a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
    if b.is_zero() {
        (a.clone(), BigInt::one(), BigInt::zero())
    } else {
        let (g, x1, y1) = extended_gcd(b, &(a % b));
        let x = y1.clone();
        let y = x1 - (a / b) * y1;
        (g, x, y)
    }
}

/// The unique `x` in `[0, m)` with `a*x ≡ 1 (mod m)`.
///
/// Fails with [`Error::Arithmetic`] when `gcd(a, m) != 1`.
pub fn modinv(a: &BigUint, m: &BigUint) -> Result<BigUint, Error> {
    if m.is_zero() || m.is_one() {
        return Err(Error::Arithmetic("modulus must exceed 1".to_string()));
    }
    let a_mod = a % m;
    let (g, x, _y) = extended_gcd(&BigInt::from(a_mod), &BigInt::from(m.clone()));
    if g != BigInt::one() {
        return Err(Error::Arithmetic(format!("{} and {} are not coprime", a, m)));
    }
    let m_big = BigInt::from(m.clone());
    let mut result = x % &m_big;
    if result.is_negative() {
        result += &m_big;
    }
    Ok(result
        .to_biguint()
        .expect("normalized modular inverse must be non-negative"))
}

const SMALL_PRIMES: &[u32] = &[
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89, 97,
];

/// Miller-Rabin primality test with a fixed round count suitable for
/// cryptographic use. Catalog primes (see [`crate::params`]) are treated
/// as prime without re-testing by their callers; this function itself
/// always runs the full test.
pub fn is_probable_prime(n: &BigUint) -> bool {
    is_probable_prime_rounds(n, 64)
}

fn is_probable_prime_rounds(n: &BigUint, rounds: u32) -> bool {
    let zero = BigUint::zero();
    let one = BigUint::one();
    let two = BigUint::from(2u8);

    if *n < two {
        return false;
    }
    if *n == two {
        return true;
    }
    if (n % &two) == zero {
        return false;
    }
    for &sp in SMALL_PRIMES {
        let sp = BigUint::from(sp);
        if *n == sp {
            return true;
        }
        if (n % &sp) == zero {
            return false;
        }
    }

    let n_minus_one = n - &one;
    let mut d = n_minus_one.clone();
    let mut r: u64 = 0;
    while (&d % &two) == zero {
        d /= &two;
        r += 1;
    }

    let mut rng = rand::thread_rng();
    'witness: for _ in 0..rounds {
        let a = {
            use num_bigint::RandBigInt;
            rng.gen_biguint_range(&two, &n_minus_one)
        };
        let mut x = powmod(&a, &d, n);
        if x == one || x == n_minus_one {
            continue 'witness;
        }
        for _ in 0..r.saturating_sub(1) {
            x = powmod(&x, &two, n);
            if x == n_minus_one {
                continue 'witness;
            }
        }
        return false;
    }
    true
}
