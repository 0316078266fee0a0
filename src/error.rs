//! Error taxonomy shared by every operation in the crate.
//!
//! All operations are pure functions over fixed-size byte encodings, so the
//! failure space is small and closed:
//!
//! - a buffer does not have the mandated length,
//! - bytes do not decode to a valid subgroup point or canonical scalar,
//! - the extraction challenge is zero and cannot be inverted,
//! - an extracted key differs from the key it was checked against.
//!
//! A well-formed signature that simply does not verify is **not** an error:
//! [`verify`](crate::verify) and [`verify2`](crate::verify2) report it as
//! `Ok(false)`.

use thiserror::Error;

/// Errors returned by key derivation, signing, verification and extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// An input buffer is not of the mandated fixed size.
    #[error("invalid length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// Bytes do not decode to a point of the prime-order subgroup, or to a
    /// canonical scalar.
    #[error("invalid {what} encoding")]
    InvalidEncoding { what: &'static str },

    /// The key-blind challenge reduced to zero and has no inverse.
    #[error("challenge scalar is zero, public key cannot be extracted")]
    DegenerateChallenge,

    /// The extracted public key differs from the claimed one.
    #[error("extracted public key does not match the claimed public key")]
    PublicKeyMismatch,
}

pub type Result<T, E = Error> = core::result::Result<T, E>;
