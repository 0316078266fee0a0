//! Strict encodings for points and scalars.
//!
//! Curve arithmetic is provided by `curve25519-dalek`. What this module adds
//! is the decoding policy: a 32-byte string is accepted as a point only if
//!
//! - it decompresses to a point on the curve,
//! - it is the canonical encoding of that point (re-compressing gives back
//!   the exact same bytes, so `y ≥ p` and a set sign bit on `x = 0` are
//!   rejected),
//! - the point lies in the prime-order subgroup (no torsion component).
//!
//! Scalars are accepted only in canonical form, i.e. strictly below ℓ.
//!
//! Anything else is an [`Error::InvalidEncoding`]. There is no best-effort
//! recovery of malformed inputs.

use curve25519_dalek::edwards::{CompressedEdwardsY, EdwardsPoint};
use curve25519_dalek::scalar::Scalar;

use crate::error::{Error, Result};

pub const POINT_LENGTH: usize = 32;
pub const SCALAR_LENGTH: usize = 32;

const POINT: Error = Error::InvalidEncoding { what: "point" };
const SCALAR: Error = Error::InvalidEncoding { what: "scalar" };

#[inline]
pub fn encode_point(point: &EdwardsPoint) -> [u8; POINT_LENGTH] {
    point.compress().to_bytes()
}

pub fn decode_point(bytes: &[u8; POINT_LENGTH]) -> Result<EdwardsPoint> {
    let compressed = CompressedEdwardsY(*bytes);

    let Some(point) = compressed.decompress() else {
        tracing::debug!("rejecting point: not on the curve");
        return Err(POINT);
    };

    if point.compress() != compressed {
        tracing::debug!("rejecting point: non-canonical encoding");
        return Err(POINT);
    }

    if !point.is_torsion_free() {
        tracing::debug!("rejecting point: outside the prime-order subgroup");
        return Err(POINT);
    }

    Ok(point)
}

#[inline]
pub fn encode_scalar(scalar: &Scalar) -> [u8; SCALAR_LENGTH] {
    scalar.to_bytes()
}

pub fn decode_scalar(bytes: &[u8; SCALAR_LENGTH]) -> Result<Scalar> {
    Option::from(Scalar::from_canonical_bytes(*bytes)).ok_or_else(|| {
        tracing::debug!("rejecting scalar: not reduced modulo the group order");
        SCALAR
    })
}
