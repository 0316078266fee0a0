//! Scalar helpers on top of `curve25519_dalek::scalar::Scalar`.
//!
//! Scalars are integers modulo the group order
//!
//! ```text
//! ℓ = 2^252 + 27742317777372353535851937790883648493
//! ```
//!
//! This module provides the pieces the signature layer needs beyond plain
//! field arithmetic:
//!
//! - Ed25519 clamping of a 32-byte secret,
//! - `ℓ - 1`, the scalar that negates a point by multiplication,
//! - inversion by Fermat's little theorem, `x^(ℓ-2) mod ℓ`.

use curve25519_dalek::scalar::Scalar;

/// `ℓ - 2`, little endian. Exponent for Fermat inversion.
const ELL_MINUS_TWO: [u8; 32] = [
    0xeb, 0xd3, 0xf5, 0x5c, 0x1a, 0x63, 0x12, 0x58, 0xd6, 0x9c, 0xf7, 0xa2, 0xde, 0xf9, 0xde, 0x14,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x10,
];

/// Applies Ed25519 clamping to a 32-byte little-endian integer.
///
/// The three low bits and bit 255 are cleared, bit 254 is set.
#[inline]
pub const fn clamp(mut bytes: [u8; 32]) -> [u8; 32] {
    bytes[0] &= 0b1111_1000;
    bytes[31] &= 0b0111_1111;
    bytes[31] |= 0b0100_0000;
    bytes
}

/// `ℓ - 1`. Multiplying a point by it yields the point's negation.
#[inline]
pub fn ell_minus_one() -> Scalar {
    -Scalar::ONE
}

/// Computes `x^(ℓ-2) mod ℓ`, the inverse of `x` when `x ≠ 0`.
///
/// Returns `None` for zero, which has no inverse.
///
/// The exponent is public, so a plain left-to-right square-and-multiply is
/// used; the multiplications themselves are constant time in `x`.
pub fn invert(x: &Scalar) -> Option<Scalar> {
    if *x == Scalar::ZERO {
        return None;
    }

    let mut acc = Scalar::ONE;

    for byte in ELL_MINUS_TWO.iter().rev() {
        for bit in (0..8).rev() {
            acc = acc * acc;

            if (byte >> bit) & 1 == 1 {
                acc *= x;
            }
        }
    }

    Some(acc)
}
