use curve25519_dalek::edwards::EdwardsPoint;

use super::challenge::{challenge, nonce};
use super::core::{SIGNATURE_LENGTH, Signature};
use crate::error::Result;
use crate::keys::ed25519::group::{encode_point, encode_scalar};
use crate::keys::ed25519::{ExpandedSecret, PUBLIC_KEY_LENGTH, Seed};
use crate::utils::fixed;

/// Computes `R = r·B` and `S = r + k·a mod ℓ`.
///
/// With `public_key` set the challenge binds the key (standard Ed25519),
/// without it the signature is key-blind.
pub(crate) fn sign_expanded(
    secret: &ExpandedSecret,
    public_key: Option<&[u8; PUBLIC_KEY_LENGTH]>,
    message: &[u8],
) -> Signature {
    let r = nonce(secret.prefix(), message);
    let r_bytes = encode_point(&EdwardsPoint::mul_base(&r));

    let k = challenge(&r_bytes, public_key, message);
    let s = *r + k * secret.scalar();

    Signature::from_parts(r_bytes, encode_scalar(&s))
}

/// Standard Ed25519 signing.
///
/// `public_key` must be the key derived from `seed`; this is not checked.
/// Fails with `InvalidLength` unless both are 32 bytes long.
pub fn sign(message: &[u8], seed: &[u8], public_key: &[u8]) -> Result<[u8; SIGNATURE_LENGTH]> {
    let seed = Seed::from_slice(seed)?;
    let public_key = fixed::<PUBLIC_KEY_LENGTH>(public_key)?;

    Ok(sign_expanded(&seed.expand(), Some(public_key), message).to_bytes())
}

/// Key-blind signing: the challenge leaves the public key out, so the
/// signer's key can later be recovered with [`extract_pk`](super::extract_pk).
///
/// Fails with `InvalidLength` unless `seed` is 32 bytes long.
pub fn sign2(message: &[u8], seed: &[u8]) -> Result<[u8; SIGNATURE_LENGTH]> {
    let seed = Seed::from_slice(seed)?;

    Ok(sign_expanded(&seed.expand(), None, message).to_bytes())
}
