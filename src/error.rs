use thiserror::Error as ThisError;

/// The error taxonomy for the sharing protocol and its collaborators.
///
/// Every fallible operation in this crate returns one of these variants;
/// nothing is retried internally and nothing exits the process from here.
#[derive(Debug, ThisError, PartialEq, Eq, Clone)]
pub enum Error {
    /// Argument out of range: bad threshold/share counts, `x = 0`, empty
    /// commits at verification time, duplicate share indices, ...
    #[error("domain error: {0}")]
    Domain(String),

    /// A modular inverse was undefined, or a non-integer operand slipped
    /// through.
    #[error("arithmetic error: {0}")]
    Arithmetic(String),

    /// Malformed base64/hex, or a malformed `"x-y"` share string.
    #[error("codec error: {0}")]
    Codec(String),

    /// The randomness source was exhausted or unavailable.
    #[error("entropy error: {0}")]
    Entropy(String),

    /// A Feldman commitment did not match the claimed share.
    #[error("feldman verification failed")]
    Verification,

    /// Fewer shares were supplied than `required_shares` demands.
    #[error("insufficient shares: need {required}, have {have}")]
    InsufficientShares { required: u16, have: u16 },

    /// The secret is larger than every prime in the fixed catalog.
    #[error("catalog exhausted: no catalog prime exceeds the requested bound")]
    CatalogExhausted,
}
