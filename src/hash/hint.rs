//! Hash-to-integer.
//!
//! A SHA-512 digest read as a little-endian 512-bit unsigned integer. The
//! value is kept unreduced: reduction modulo the group order ℓ happens only
//! through [`WideInt::reduce`], so every place that moves from "hash output"
//! to "scalar" is visible at the call site.

use curve25519_dalek::scalar::Scalar;
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::sha512::{DIGEST_LENGTH, sha512, sha512_concat};

/// An unreduced 512-bit integer, stored as 64 little-endian bytes.
///
/// Hash outputs feeding the nonce are secret, so the bytes are wiped on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct WideInt([u8; DIGEST_LENGTH]);

impl PartialEq for WideInt {
    fn eq(&self, other: &Self) -> bool {
        self.0[..].ct_eq(&other.0[..]).into()
    }
}

impl Eq for WideInt {}

impl WideInt {
    #[inline]
    pub fn from_le_bytes(bytes: [u8; DIGEST_LENGTH]) -> Self {
        Self(bytes)
    }

    #[inline]
    pub fn to_le_bytes(&self) -> [u8; DIGEST_LENGTH] {
        self.0
    }

    /// Reduces the integer modulo ℓ.
    #[inline]
    pub fn reduce(&self) -> Scalar {
        Scalar::from_bytes_mod_order_wide(&self.0)
    }
}

/// Hashes `data` and returns the digest as an unreduced integer.
pub fn hint(data: &[u8]) -> WideInt {
    WideInt(sha512(data))
}

/// Same as [`hint`] over the concatenation of `parts`.
pub(crate) fn hint_concat(parts: &[&[u8]]) -> WideInt {
    WideInt(sha512_concat(parts))
}
