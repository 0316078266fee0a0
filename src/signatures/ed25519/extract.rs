//! Public-key extraction from key-blind signatures.
//!
//! A key-blind signature satisfies
//!
//! ```text
//! S·B = R + h·A        with h = Hint(R || M) mod ℓ
//! ```
//!
//! Since `h` does not depend on `A`, the equation is linear in `A` and can
//! be solved directly:
//!
//! ```text
//! A = h⁻¹ · (S·B + (ℓ-1)·R)
//! ```
//!
//! The result is only as trustworthy as the pairing of message and
//! signature: any well-formed `(R, S)` yields *some* point. It must be
//! compared with an independently known key ([`check_pk`]) before being
//! relied on.

use curve25519_dalek::edwards::EdwardsPoint;
use curve25519_dalek::scalar::Scalar;

use super::challenge::challenge;
use super::core::Signature;
use crate::error::{Error, Result};
use crate::keys::ed25519::PublicKey;
use crate::keys::ed25519::group::{decode_point, decode_scalar};
use crate::keys::ed25519::scalar::{ell_minus_one, invert};

/// Solves `S·B = R + h·A` for `A`.
fn solve(r: &EdwardsPoint, s: &Scalar, h: &Scalar) -> Result<EdwardsPoint> {
    let Some(h_inv) = invert(h) else {
        tracing::debug!("challenge reduced to zero, no inverse");
        return Err(Error::DegenerateChallenge);
    };

    let r_neg = r * ell_minus_one();
    let v = EdwardsPoint::mul_base(s) + r_neg;

    Ok(v * h_inv)
}

pub(crate) fn extract(signature: &Signature, message: &[u8]) -> Result<PublicKey> {
    let r = decode_point(signature.r_bytes())?;
    let s = decode_scalar(signature.s_bytes())?;

    let h = challenge(signature.r_bytes(), None, message);
    let public = PublicKey::from_point(solve(&r, &s, &h)?);

    tracing::trace!(message_len = message.len(), "extracted public key");

    Ok(public)
}

/// Recovers the signer's public key from a key-blind signature and the
/// message it covers.
///
/// Fails with `InvalidLength` unless `signature` is 64 bytes long,
/// `InvalidEncoding` if `R` or `S` does not decode, and
/// `DegenerateChallenge` in the (negligible) case where the challenge is
/// zero.
pub fn extract_pk(signature: &[u8], message: &[u8]) -> Result<PublicKey> {
    let signature = Signature::from_slice(signature)?;
    extract(&signature, message)
}

/// Asserts that `public_key` decodes to the same group element as
/// `extracted`.
///
/// Fails with `InvalidLength`/`InvalidEncoding` if `public_key` is not a
/// valid key, and with `PublicKeyMismatch` if the points differ.
pub fn check_pk(public_key: &[u8], extracted: &PublicKey) -> Result<()> {
    let claimed = PublicKey::from_bytes(public_key)?;

    if claimed != *extracted {
        tracing::debug!("extracted public key differs from the claimed key");
        return Err(Error::PublicKeyMismatch);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use curve25519_dalek::constants::ED25519_BASEPOINT_POINT;

    #[test]
    fn multiplying_by_ell_minus_one_negates() {
        let p = ED25519_BASEPOINT_POINT * Scalar::from(12345u64);
        assert_eq!(p * ell_minus_one(), -p);
    }

    #[test]
    fn solve_recovers_the_signing_key() {
        let a = Scalar::from(0x1234_5678_9abc_def0u64);
        let r = Scalar::from(42u64);
        let h = Scalar::from(7u64);

        let big_a = EdwardsPoint::mul_base(&a);
        let big_r = EdwardsPoint::mul_base(&r);
        let s = r + h * a;

        assert_eq!(solve(&big_r, &s, &h).unwrap(), big_a);
    }

    #[test]
    fn zero_challenge_is_degenerate() {
        let big_r = EdwardsPoint::mul_base(&Scalar::from(42u64));
        assert_eq!(
            solve(&big_r, &Scalar::ONE, &Scalar::ZERO),
            Err(Error::DegenerateChallenge)
        );
    }
}
