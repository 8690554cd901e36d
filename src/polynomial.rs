//! Polynomial construction, Horner evaluation, and Lagrange interpolation
//! over `Z_q`.

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::arith;
use crate::error::Error;

/// Prepended to the secret bytes before they are interpreted as an
/// integer, so that a secret with leading zero bytes survives the
/// int-to-bytes-and-back round trip undamaged (see
/// [`unframe_secret`]).
pub const SENTINEL: u8 = 0x2A;

pub fn frame_secret(secret_bytes: &[u8]) -> Vec<u8> {
    let mut framed = Vec::with_capacity(secret_bytes.len() + 1);
    framed.push(SENTINEL);
    framed.extend_from_slice(secret_bytes);
    framed
}

/// Strips the leading sentinel byte. Does not validate that the stripped
/// byte was actually `SENTINEL`; recovering with fewer than the required
/// shares yields undefined bytes by design (see
/// [`crate::shamir::recover_secret`]).
pub fn unframe_secret(bytes: &[u8]) -> Vec<u8> {
    bytes.get(1..).unwrap_or(&[]).to_vec()
}

/// Coefficients `(a_{t-1}, ..., a_1, a_0)` of a degree-`(t-1)` polynomial
/// over `Z_q`; `a_0` is the framed secret.
#[derive(Clone, Debug)]
pub struct Polynomial {
    prime_mod: BigUint,
    coefficients: Vec<BigUint>,
}

impl Polynomial {
    /// `coefficients` must be highest-degree first. Requires `prime_mod >
    /// coefficients.len()` and every coefficient in `[0, prime_mod)`.
    pub fn new(prime_mod: BigUint, coefficients: Vec<BigUint>) -> Result<Self, Error> {
        if prime_mod <= BigUint::one() {
            return Err(Error::Domain("invalid prime mod".to_string()));
        }
        if BigUint::from(coefficients.len()) >= prime_mod {
            return Err(Error::Domain(
                "prime mod must exceed number of coefficients".to_string(),
            ));
        }
        for coefficient in &coefficients {
            if coefficient >= &prime_mod {
                return Err(Error::Domain("out-of-range coefficient".to_string()));
            }
        }
        Ok(Self {
            prime_mod,
            coefficients,
        })
    }

    pub fn prime_mod(&self) -> &BigUint {
        &self.prime_mod
    }

    /// Highest-degree first: `(a_{t-1}, ..., a_1, a_0)`.
    pub fn coefficients(&self) -> &[BigUint] {
        &self.coefficients
    }

    /// `P(x) mod q` via Horner's rule. Rejects `x = 0`: the constant term
    /// is the secret and must never be disclosed through this surface.
    pub fn evaluate(&self, x: &BigUint) -> Result<BigUint, Error> {
        if x.is_zero() {
            return Err(Error::Domain(
                "P(0) may not be requested; it is the secret".to_string(),
            ));
        }
        if x >= &self.prime_mod {
            return Err(Error::Domain("out-of-range x-coordinate".to_string()));
        }
        let mut y = BigUint::zero();
        for coefficient in &self.coefficients {
            y = (&y * x + coefficient) % &self.prime_mod;
        }
        Ok(y)
    }
}

/// Lagrange interpolation of `P(0)` from `points = [(x_i, y_i)]`, all
/// distinct `x_i` in `(0, q)`. Duplicate `x_i` drive a denominator to
/// zero and surface as [`Error::Arithmetic`] from the underlying
/// `modinv`.
pub fn lagrange_interpolation_zero(
    points: &[(BigUint, BigUint)],
    prime_mod: &BigUint,
) -> Result<BigUint, Error> {
    if prime_mod <= &BigUint::one() {
        return Err(Error::Domain("invalid prime mod".to_string()));
    }
    for (xi, yi) in points {
        if xi >= prime_mod || yi >= prime_mod {
            return Err(Error::Domain("invalid points".to_string()));
        }
    }

    let mut y = BigUint::zero();
    for (i, (_, yi)) in points.iter().enumerate() {
        let mut numerator = BigUint::one();
        let mut denominator = BigUint::one();
        let xi = &points[i].0;
        for (j, (xj, _)) in points.iter().enumerate() {
            if i == j {
                continue;
            }
            // (x0 - xj) mod q, with x0 = 0, normalized into [0, q) first.
            let neg_xj = (prime_mod - xj) % prime_mod;
            numerator = (numerator * &neg_xj) % prime_mod;
            let term_den = (xi + &neg_xj) % prime_mod;
            denominator = (denominator * term_den) % prime_mod;
        }
        let den_inv = arith::modinv(&denominator, prime_mod)?;
        y = (y + (yi * den_inv) % prime_mod) % prime_mod;
    }
    Ok(y)
}
