//! Hash-derived scalars used while signing and verifying.
//!
//! Both signing variants draw their nonce the same way. They differ only in
//! what the challenge hash covers:
//!
//! ```text
//! nonce      r = Hint(prefix || M)     mod ℓ
//! bound      k = Hint(R || A || M)     mod ℓ
//! key-blind  k = Hint(R || M)          mod ℓ
//! ```
//!
//! Leaving `A` out of the key-blind challenge keeps `S·B = R + k·A` linear in
//! `A`, which is what allows the public key to be solved for afterwards.

use curve25519_dalek::scalar::Scalar;
use zeroize::Zeroizing;

use crate::hash::hint::hint_concat;

pub(crate) fn nonce(prefix: &[u8; 32], message: &[u8]) -> Zeroizing<Scalar> {
    Zeroizing::new(hint_concat(&[&prefix[..], message]).reduce())
}

/// `public_key` is `None` for the key-blind variant.
pub(crate) fn challenge(r: &[u8; 32], public_key: Option<&[u8; 32]>, message: &[u8]) -> Scalar {
    match public_key {
        Some(a) => hint_concat(&[&r[..], &a[..], message]).reduce(),
        None => hint_concat(&[&r[..], message]).reduce(),
    }
}
