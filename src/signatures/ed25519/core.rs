//! Typed Ed25519 signatures.
//!
//! [`Signature`] is the 64-byte `R || S` container. The byte-slice
//! functions in the parent module are thin wrappers over the methods
//! defined here on [`Keypair`], [`PublicKey`] and [`Signature`].

use std::fmt;

use super::extract::extract;
use super::sign::sign_expanded;
use super::verify::verify_with;
use crate::error::Result;
use crate::keys::ed25519::group::{POINT_LENGTH, SCALAR_LENGTH};
use crate::keys::ed25519::{Keypair, PublicKey};
use crate::utils::fixed;

/// Length in bytes of an encoded signature.
pub const SIGNATURE_LENGTH: usize = POINT_LENGTH + SCALAR_LENGTH;

/// An Ed25519 signature: the encoded nonce point `R` followed by the
/// little-endian scalar `S`.
///
/// Construction does not validate the components. `R` and `S` are decoded,
/// and rejected if malformed, when the signature is verified or a key is
/// extracted from it.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Signature {
    r: [u8; POINT_LENGTH],
    s: [u8; SCALAR_LENGTH],
}

impl Signature {
    pub(crate) fn from_parts(r: [u8; POINT_LENGTH], s: [u8; SCALAR_LENGTH]) -> Self {
        Self { r, s }
    }

    pub fn from_bytes(bytes: &[u8; SIGNATURE_LENGTH]) -> Self {
        let mut r = [0u8; POINT_LENGTH];
        let mut s = [0u8; SCALAR_LENGTH];

        r.copy_from_slice(&bytes[..POINT_LENGTH]);
        s.copy_from_slice(&bytes[POINT_LENGTH..]);

        Self { r, s }
    }

    /// Fails with `InvalidLength` unless `bytes` is 64 bytes long.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        fixed::<SIGNATURE_LENGTH>(bytes).map(Self::from_bytes)
    }

    #[inline]
    pub fn r_bytes(&self) -> &[u8; POINT_LENGTH] {
        &self.r
    }

    #[inline]
    pub fn s_bytes(&self) -> &[u8; SCALAR_LENGTH] {
        &self.s
    }

    pub fn to_bytes(&self) -> [u8; SIGNATURE_LENGTH] {
        let mut out = [0u8; SIGNATURE_LENGTH];

        out[..POINT_LENGTH].copy_from_slice(&self.r);
        out[POINT_LENGTH..].copy_from_slice(&self.s);

        out
    }

    /// Recovers the public key of the signer, assuming this signature was
    /// produced by [`Keypair::sign2`] over `message`.
    pub fn extract_public_key(&self, message: &[u8]) -> Result<PublicKey> {
        extract(self, message)
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signature")
            .field("r", &self.r)
            .field("s", &self.s)
            .finish()
    }
}

impl Keypair {
    /// Standard Ed25519 signature, bound to this keypair's public key.
    pub fn sign(&self, message: &[u8]) -> Signature {
        sign_expanded(
            &self.seed().expand(),
            Some(self.public().as_bytes()),
            message,
        )
    }

    /// Key-blind signature, from which the public key can be extracted.
    pub fn sign2(&self, message: &[u8]) -> Signature {
        sign_expanded(&self.seed().expand(), None, message)
    }
}

impl PublicKey {
    /// See [`verify`](super::verify).
    pub fn verify(&self, message: &[u8], signature: &Signature) -> Result<bool> {
        verify_with(signature, message, self, true)
    }

    /// See [`verify2`](super::verify2).
    pub fn verify2(&self, message: &[u8], signature: &Signature) -> Result<bool> {
        verify_with(signature, message, self, false)
    }
}
