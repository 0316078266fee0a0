//! SHA-512 entry points.
//!
//! The compression function itself comes from the `sha2` crate. This module
//! only fixes the shapes the rest of the crate works with: a fixed 64-byte
//! digest, and hashing of a concatenation given as separate parts so callers
//! never have to assemble `R || A || M` into a temporary buffer.

use sha2::{Digest, Sha512};

/// Length in bytes of a SHA-512 digest.
pub const DIGEST_LENGTH: usize = 64;

/// Hashes `data` with SHA-512.
#[inline]
pub fn sha512(data: &[u8]) -> [u8; DIGEST_LENGTH] {
    Sha512::digest(data).into()
}

/// Hashes the concatenation of `parts` with SHA-512.
///
/// `sha512_concat(&[a, b])` is equal to `sha512(&[a, b].concat())`.
pub fn sha512_concat(parts: &[&[u8]]) -> [u8; DIGEST_LENGTH] {
    parts
        .iter()
        .fold(Sha512::new(), |hasher, part| hasher.chain_update(part))
        .finalize()
        .into()
}
