//! Scoped randomness sources consumed by [`crate::shamir::split_secret`].
//!
//! Both variants present the same acquire/release contract: usable as
//! soon as they are constructed, and their `Drop` impl marks the point
//! where an OS handle would be released on every exit path, including
//! failures. Neither implementation here actually opens a distinct OS
//! handle (Rust's `OsRng` has no separate bulk-stream API the way a
//! `/dev/urandom` file handle would), but the two types are kept distinct
//! so a caller can still tell which contract a given call site asked for,
//! and so a deterministic reader can be injected in its place.

use rand::rngs::OsRng;
use rand::RngCore;

use crate::error::Error;

/// A scoped byte producer supplying cryptographically strong bytes of a
/// requested length.
pub trait RandomnessSource {
    fn next_bytes(&mut self, k: usize) -> Result<Vec<u8>, Error>;
}

/// Preferred for short secrets (`len(secret)+1 <= 65`): reads directly
/// from the OS cryptographic source.
pub struct DirectReader {
    rng: OsRng,
}

impl DirectReader {
    pub fn new() -> Self {
        Self { rng: OsRng }
    }
}

impl Default for DirectReader {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomnessSource for DirectReader {
    fn next_bytes(&mut self, k: usize) -> Result<Vec<u8>, Error> {
        let mut buf = vec![0u8; k];
        self.rng
            .try_fill_bytes(&mut buf)
            .map_err(|e| Error::Entropy(e.to_string()))?;
        Ok(buf)
    }
}

impl Drop for DirectReader {
    fn drop(&mut self) {
        log::trace!("DirectReader released");
    }
}

/// Used when the secret exceeds 65 bytes; intended for streamed OS
/// entropy rather than a handful of short reads.
pub struct BulkReader {
    rng: OsRng,
}

impl BulkReader {
    pub fn new() -> Self {
        Self { rng: OsRng }
    }
}

impl Default for BulkReader {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomnessSource for BulkReader {
    fn next_bytes(&mut self, k: usize) -> Result<Vec<u8>, Error> {
        let mut buf = vec![0u8; k];
        self.rng
            .try_fill_bytes(&mut buf)
            .map_err(|e| Error::Entropy(e.to_string()))?;
        Ok(buf)
    }
}

impl Drop for BulkReader {
    fn drop(&mut self) {
        log::trace!("BulkReader released");
    }
}

/// `DirectReader` for `secret_len <= 65`, `BulkReader` otherwise.
pub fn default_randomness_source(secret_len: usize) -> Box<dyn RandomnessSource> {
    if secret_len <= 65 {
        Box::new(DirectReader::new())
    } else {
        Box::new(BulkReader::new())
    }
}

/// A deterministic randomness source returning a constant byte,
/// repeated, for every request. Useful for reproducing fixed test
/// vectors (see `tests/scenarios.rs`, scenario S1) and for the
/// coefficient-ordering determinism property in the crate's design
/// notes; not used by [`default_randomness_source`].
pub struct FixedByteReader {
    pub byte: u8,
}

impl FixedByteReader {
    pub fn new(byte: u8) -> Self {
        Self { byte }
    }
}

impl RandomnessSource for FixedByteReader {
    fn next_bytes(&mut self, k: usize) -> Result<Vec<u8>, Error> {
        Ok(vec![self.byte; k])
    }
}
