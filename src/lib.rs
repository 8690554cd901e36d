//! # shamir_vss
//!
//! Shamir secret sharing over a prime field, optionally augmented with
//! Feldman verifiable secret sharing (VSS).
//!
//! ## Overview
//! A secret byte string is split into `n` shares such that any `t` of
//! them reconstruct it exactly, and any `t-1` reveal nothing about it.
//! In verifiable mode, commitments are published alongside the shares so
//! any holder can confirm their share is consistent with the dealer's
//! polynomial without learning it.
//!
//! ### Core pieces
//! - [`arith`] — modular arithmetic (`powmod`, `modinv`, Miller-Rabin).
//! - [`codec`] — big-endian integer/byte conversion.
//! - [`randomness`] — the scoped randomness source contract.
//! - [`params`] — the fixed prime catalog and Feldman parameter search.
//! - [`polynomial`] — polynomial construction, evaluation, interpolation.
//! - [`shamir`] — `split_secret`, `recover_secret`, `feldman_verification`.
//! - [`serde_bundle`] — base64/hex canonical bundle encodings.
//!
//! ## Usage
//!
//! ```
//! use shamir_vss::shamir::{split_secret, recover_secret, Bundle};
//!
//! let bundle = split_secret(b"correct horse battery staple", 3, 5, false, None, None).unwrap();
//! let subset = Bundle { shares: bundle.shares[0..3].to_vec(), ..bundle };
//! let recovered = recover_secret(&subset).unwrap();
//! assert_eq!(recovered, b"correct horse battery staple");
//! ```
//!
//! See `demos/usage.rs` for a complete split → verify → recover
//! walkthrough including Feldman VSS and base64 serialization.
//!
//! ## Notes
//! - Threshold `t = 1` is legal (trivial sharing: every share equals the
//!   secret).
//! - Non-verifiable bundles carry `prime2 = generator = 0` and empty
//!   `commits`.
//! - `recover_secret` without a `required_shares` on the bundle logs a
//!   warning and proceeds with whatever shares were supplied, rather
//!   than refusing — this is deliberate scheme behavior, not a bug; see
//!   `DESIGN.md`.

pub mod arith;
pub mod codec;
pub mod error;
pub mod params;
pub mod polynomial;
pub mod randomness;
pub mod serde_bundle;
pub mod shamir;

pub use error::Error;
pub use shamir::{Bundle, Share};
