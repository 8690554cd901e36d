//! The sharing protocol: `split_secret`, `recover_secret`,
//! `feldman_verification`, and the `Bundle` data format they share.

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::arith;
use crate::codec;
use crate::error::Error;
use crate::params;
use crate::polynomial::{self, Polynomial};
use crate::randomness::{self, RandomnessSource};

/// A single `(x, P(x))` pair. `x` is never `0`; within one [`Bundle`] all
/// `x` values are distinct.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Share {
    pub x: u16,
    pub y_bytes: Vec<u8>,
}

/// The output of [`split_secret`], the input to [`recover_secret`] and
/// [`feldman_verification`].
///
/// Conceptually moves through three states over its lifetime: **built**
/// (fresh from `split_secret`), **decoded** (fresh from
/// `from_base64`/`from_hex`), and **consumed** (after `recover_secret`).
/// Feldman verification is idempotent and may run any number of times in
/// the first two states; nothing in the type itself enforces this, since
/// `recover_secret` borrows rather than consumes its argument and
/// verification must remain callable on both built and decoded bundles.
#[derive(Clone, Debug)]
pub struct Bundle {
    /// Absent only on a hand-assembled or decoded bundle that never
    /// recorded it; [`split_secret`] always sets this.
    pub required_shares: Option<u16>,
    pub prime_mod: BigUint,
    /// `0` when the bundle is not verifiable.
    pub prime2: BigUint,
    /// `0` when the bundle is not verifiable.
    pub generator: BigUint,
    pub shares: Vec<Share>,
    /// Empty when the bundle is not verifiable.
    pub commits: Vec<Vec<u8>>,
}

impl Bundle {
    pub fn is_verifiable(&self) -> bool {
        !self.commits.is_empty()
    }
}

/// Splits `secret_bytes` into `distributed_shares` shares, any
/// `required_shares` of which reconstruct it.
///
/// `prime_mod` lets a caller pin the modulus for a non-verifiable bundle
/// instead of drawing one from the catalog; it is ignored when
/// `verifiable` is set, since Feldman bundles must use a
/// `select_prime_feldman`-chosen `q` (so that a matching `p, g` exist).
/// `rng` lets a caller inject a randomness source (e.g. for
/// reproducible test vectors); absent that, the default source is chosen
/// by secret length as described in [`randomness::default_randomness_source`].
pub fn split_secret(
    secret_bytes: &[u8],
    required_shares: u16,
    distributed_shares: u16,
    verifiable: bool,
    prime_mod: Option<BigUint>,
    rng: Option<&mut dyn RandomnessSource>,
) -> Result<Bundle, Error> {
    if required_shares == 0 {
        return Err(Error::Domain("required_shares must be at least 1".to_string()));
    }
    if distributed_shares < required_shares {
        return Err(Error::Domain(
            "distributed_shares must be greater than or equal to required_shares".to_string(),
        ));
    }

    let framed = polynomial::frame_secret(secret_bytes);
    let secret_len = framed.len();
    let max = codec::int_from_bytes(&vec![0xFFu8; secret_len]);

    let (q, p, g) = if verifiable {
        params::select_prime_feldman(&max)?
    } else {
        let q = match prime_mod {
            Some(q) => q,
            None => params::select_prime_larger_than(&max)?,
        };
        (q, BigUint::zero(), BigUint::zero())
    };

    if max >= q {
        return Err(Error::Domain("prime mod is not large enough".to_string()));
    }

    let coeff_bytes = codec::required_bytes_given_value(&(&q - BigUint::one()));

    let mut owned_rng;
    let rng: &mut dyn RandomnessSource = match rng {
        Some(r) => r,
        None => {
            owned_rng = randomness::default_randomness_source(secret_len);
            owned_rng.as_mut()
        }
    };

    log::debug!(
        "split_secret: q.bits()={}, verifiable={}, t={}, n={}",
        q.bits(),
        verifiable,
        required_shares,
        distributed_shares
    );

    let secret_int = codec::int_from_bytes(&framed);
    let mut coefficients = Vec::with_capacity(required_shares as usize);
    for _ in 1..required_shares {
        let bytes = rng.next_bytes(coeff_bytes)?;
        let coeff = codec::int_from_bytes(&bytes) % &q;
        coefficients.push(coeff);
    }
    coefficients.push(secret_int);

    let polynomial = Polynomial::new(q.clone(), coefficients.clone())?;

    let mut shares = Vec::with_capacity(distributed_shares as usize);
    for i in 1..=distributed_shares {
        let x = BigUint::from(i);
        let y = polynomial.evaluate(&x)?;
        shares.push(Share {
            x: i,
            y_bytes: codec::int_to_bytes(&y),
        });
        log::trace!("split_secret: generated share x={}", i);
    }

    let mut commits = Vec::new();
    if verifiable {
        for a_i in &coefficients {
            let c = arith::powmod(&g, a_i, &p);
            commits.push(codec::int_to_bytes(&c));
        }
    }

    Ok(Bundle {
        required_shares: Some(required_shares),
        prime_mod: q,
        prime2: p,
        generator: g,
        shares,
        commits,
    })
}

/// Reconstructs the original secret bytes from `bundle.shares`.
///
/// Truncates to the first `required_shares` shares when more are
/// supplied and `required_shares` is present; fails with
/// [`Error::InsufficientShares`] when fewer are. When
/// `required_shares` is absent, proceeds with every supplied share and
/// logs a warning instead of failing — silently using too few shares
/// then produces an incorrect secret without detection, by design (see
/// the crate-level design notes).
pub fn recover_secret(bundle: &Bundle) -> Result<Vec<u8>, Error> {
    let mut shares = bundle.shares.clone();

    match bundle.required_shares {
        Some(required) => {
            if (shares.len() as u16) < required {
                return Err(Error::InsufficientShares {
                    required,
                    have: shares.len() as u16,
                });
            }
            shares.truncate(required as usize);
        }
        None => {
            log::warn!(
                "recover_secret: required_shares not specified; an incorrect secret will be \
                 produced without detection if too few shares were supplied"
            );
        }
    }

    let points: Vec<(BigUint, BigUint)> = shares
        .iter()
        .map(|s| (BigUint::from(s.x), codec::int_from_bytes(&s.y_bytes)))
        .collect();

    let secret_int = polynomial::lagrange_interpolation_zero(&points, &bundle.prime_mod)?;
    let framed = codec::int_to_bytes(&secret_int);
    Ok(polynomial::unframe_secret(&framed))
}

/// Checks that `(x, y_bytes)` is consistent with the dealer's polynomial
/// as published in `commits`, without learning the polynomial itself.
///
/// `commits` is stored highest-degree first, `(C_{t-1}, ..., C_0)`; the
/// verification equation reduces it in that same order.
pub fn feldman_verification(
    prime2: &BigUint,
    generator: &BigUint,
    x: u16,
    y_bytes: &[u8],
    commits: &[Vec<u8>],
) -> Result<(), Error> {
    if commits.is_empty() {
        return Err(Error::Domain(
            "commits were not generated; did you set the verifiable flag?".to_string(),
        ));
    }

    let s = codec::int_from_bytes(y_bytes);
    let lhs = arith::powmod(generator, &s, prime2);

    let index = BigUint::from(x);
    let n = commits.len();
    let mut rhs = BigUint::one();
    for j in 0..n {
        let commit = codec::int_from_bytes(&commits[n - j - 1]);
        let exponent = arith::pow_usize(&index, j);
        rhs = (rhs * arith::powmod(&commit, &exponent, prime2)) % prime2;
    }

    if lhs != rhs {
        return Err(Error::Verification);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::randomness::FixedByteReader;

    #[test]
    fn split_rejects_threshold_above_share_count() {
        let err = split_secret(b"A", 11, 10, false, None, None).unwrap_err();
        assert!(matches!(err, Error::Domain(_)));
    }

    #[test]
    fn split_rejects_zero_threshold() {
        let err = split_secret(b"A", 0, 3, false, None, None).unwrap_err();
        assert!(matches!(err, Error::Domain(_)));
    }

    #[test]
    fn trivial_threshold_one_any_share_recovers() {
        let bundle = split_secret(b"A", 1, 3, false, None, None).unwrap();
        for share in &bundle.shares {
            let single = Bundle {
                shares: vec![share.clone()],
                ..bundle.clone()
            };
            assert_eq!(recover_secret(&single).unwrap(), b"A".to_vec());
        }
    }

    #[test]
    fn recovery_correctness_over_any_threshold_subset() {
        let secret = b"hello world".to_vec();
        let bundle = split_secret(&secret, 3, 6, false, None, None).unwrap();
        for combo in [
            [0usize, 1, 2],
            [1, 3, 5],
            [0, 2, 4],
            [2, 3, 4],
            [0, 4, 5],
        ] {
            let subset = Bundle {
                shares: combo.iter().map(|&i| bundle.shares[i].clone()).collect(),
                ..bundle.clone()
            };
            assert_eq!(recover_secret(&subset).unwrap(), secret);
        }
    }

    #[test]
    fn insufficient_shares_reported_when_required_shares_known() {
        let bundle = split_secret(b"hello", 3, 5, false, None, None).unwrap();
        let too_few = Bundle {
            shares: bundle.shares[0..2].to_vec(),
            ..bundle
        };
        assert!(matches!(
            recover_secret(&too_few),
            Err(Error::InsufficientShares { required: 3, have: 2 })
        ));
    }

    #[test]
    fn recovery_without_required_shares_warns_and_proceeds() {
        let bundle = split_secret(b"hello", 3, 5, false, None, None).unwrap();
        let untagged = Bundle {
            required_shares: None,
            shares: bundle.shares[0..2].to_vec(),
            ..bundle
        };
        // Proceeds without error, but the result is not guaranteed correct.
        assert!(recover_secret(&untagged).is_ok());
    }

    #[test]
    fn leading_zero_secret_bytes_are_preserved() {
        let secret = vec![0x00, 0x00, 0x00];
        let bundle = split_secret(&secret, 3, 5, false, None, None).unwrap();
        let recovered = recover_secret(&Bundle {
            shares: bundle.shares[0..3].to_vec(),
            ..bundle
        })
        .unwrap();
        assert_eq!(recovered, secret);
    }

    #[test]
    fn feldman_accepts_every_legitimate_share_and_rejects_tampering() {
        let secret: Vec<u8> = (0..100u16).map(|i| (i % 251) as u8).collect();
        let bundle = split_secret(&secret, 3, 10, true, None, None).unwrap();
        assert!(bundle.is_verifiable());

        for share in &bundle.shares {
            feldman_verification(
                &bundle.prime2,
                &bundle.generator,
                share.x,
                &share.y_bytes,
                &bundle.commits,
            )
            .unwrap();
        }

        let mut tampered = bundle.shares[4].clone();
        let last = tampered.y_bytes.len() - 1;
        tampered.y_bytes[last] ^= 0x01;
        let result = feldman_verification(
            &bundle.prime2,
            &bundle.generator,
            tampered.x,
            &tampered.y_bytes,
            &bundle.commits,
        );
        assert_eq!(result, Err(Error::Verification));
    }

    #[test]
    fn feldman_verification_requires_commits() {
        let bundle = split_secret(b"hi", 2, 3, false, None, None).unwrap();
        let share = &bundle.shares[0];
        let result = feldman_verification(
            &bundle.prime2,
            &bundle.generator,
            share.x,
            &share.y_bytes,
            &bundle.commits,
        );
        assert!(matches!(result, Err(Error::Domain(_))));
    }

    #[test]
    fn scenario_s1_fixed_rng_matches_horner_evaluation() {
        let mut rng = FixedByteReader::new(0x01);
        let bundle = split_secret(b"hi", 2, 3, false, None, Some(&mut rng)).unwrap();

        // a_1 is the single random coefficient: B bytes of 0x01 reduced mod q.
        let coeff_bytes = codec::required_bytes_given_value(&(&bundle.prime_mod - BigUint::one()));
        let a1 = codec::int_from_bytes(&vec![0x01u8; coeff_bytes]) % &bundle.prime_mod;
        let framed = polynomial::frame_secret(b"hi");
        let a0 = codec::int_from_bytes(&framed);

        for share in &bundle.shares {
            let x = BigUint::from(share.x);
            let expected = (&a1 * &x + &a0) % &bundle.prime_mod;
            assert_eq!(codec::int_from_bytes(&share.y_bytes), expected);
        }

        let subset = Bundle {
            shares: bundle.shares[0..2].to_vec(),
            ..bundle
        };
        assert_eq!(recover_secret(&subset).unwrap(), b"hi".to_vec());
    }
}
