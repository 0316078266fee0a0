use curve25519_dalek::edwards::EdwardsPoint;

use super::challenge::challenge;
use super::core::Signature;
use crate::error::Result;
use crate::keys::ed25519::PublicKey;
use crate::keys::ed25519::group::{decode_point, decode_scalar};

/// Checks `S·B == R + k·A`.
///
/// `bind_key` selects the challenge: with the public key (standard) or
/// without it (key-blind). Malformed `R` or `S` is an error; a well-formed
/// signature that does not satisfy the equation is `Ok(false)`.
pub(crate) fn verify_with(
    signature: &Signature,
    message: &[u8],
    public: &PublicKey,
    bind_key: bool,
) -> Result<bool> {
    let r = decode_point(signature.r_bytes())?;
    let s = decode_scalar(signature.s_bytes())?;

    let k = challenge(
        signature.r_bytes(),
        bind_key.then(|| public.as_bytes()),
        message,
    );

    // S·B - k·A, compared against R. All inputs are public.
    let minus_a = -public.as_point();
    let check = EdwardsPoint::vartime_double_scalar_mul_basepoint(&k, &minus_a, &s);

    let valid = check == r;
    if !valid {
        tracing::debug!(bind_key, "signature does not satisfy the verification equation");
    }

    Ok(valid)
}

/// Standard Ed25519 verification.
///
/// Fails with `InvalidLength` unless `signature` is 64 bytes and
/// `public_key` 32 bytes, and with `InvalidEncoding` if `R`, `A` or `S`
/// does not decode. Otherwise returns whether the signature is valid.
pub fn verify(signature: &[u8], message: &[u8], public_key: &[u8]) -> Result<bool> {
    let signature = Signature::from_slice(signature)?;
    let public = PublicKey::from_bytes(public_key)?;

    verify_with(&signature, message, &public, true)
}

/// Verifies a key-blind signature (see [`sign2`](super::sign2)) against a
/// known public key. Same failure modes as [`verify`].
pub fn verify2(signature: &[u8], message: &[u8], public_key: &[u8]) -> Result<bool> {
    let signature = Signature::from_slice(signature)?;
    let public = PublicKey::from_bytes(public_key)?;

    verify_with(&signature, message, &public, false)
}
