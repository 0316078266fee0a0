//! Ed25519 key material.
//!
//! This module defines the key types used by both signing variants:
//!
//! - [`Seed`]: the 32 random bytes that are the only secret input,
//! - [`ExpandedSecret`]: the clamped scalar `a` and nonce prefix obtained
//!   by hashing the seed,
//! - [`PublicKey`]: the point `A = a·B` together with its 32-byte encoding,
//! - [`Keypair`]: a seed bundled with its public key.
//!
//! Key derivation follows RFC 8032: `h = SHA-512(seed)`, `a = clamp(h[0..32])`,
//! `prefix = h[32..64]`, `A = a·B`. The seed itself is never clamped or
//! reduced; only its hash is.

use std::fmt;

use curve25519_dalek::edwards::{CompressedEdwardsY, EdwardsPoint};
use curve25519_dalek::scalar::Scalar;
use rand_core::CryptoRngCore;
use subtle::{Choice, ConstantTimeEq};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use super::group::{POINT_LENGTH, decode_point, encode_point};
use super::scalar::clamp;
use crate::error::{Error, Result};
use crate::hash::{sha512, sha512_concat};
use crate::utils::fixed;

/// Length in bytes of a seed.
pub const SEED_LENGTH: usize = 32;

/// Length in bytes of an encoded public key.
pub const PUBLIC_KEY_LENGTH: usize = POINT_LENGTH;

/// Length in bytes of an encoded keypair (`seed || public key`).
pub const KEYPAIR_LENGTH: usize = SEED_LENGTH + PUBLIC_KEY_LENGTH;

/// A 32-byte Ed25519 seed.
///
/// The seed is wiped from memory when dropped. Equality is constant time.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Seed([u8; SEED_LENGTH]);

impl Seed {
    #[inline]
    pub fn from_bytes(bytes: [u8; SEED_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Copies a seed out of `bytes`, which must be exactly 32 bytes long.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        fixed::<SEED_LENGTH>(bytes).map(|seed| Self(*seed))
    }

    /// Draws a fresh seed from `rng`.
    pub fn generate<R: CryptoRngCore + ?Sized>(rng: &mut R) -> Self {
        let mut seed = [0u8; SEED_LENGTH];
        rng.fill_bytes(&mut seed);
        Self(seed)
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8; SEED_LENGTH] {
        &self.0
    }

    /// Hashes the seed into the signing scalar and nonce prefix.
    pub fn expand(&self) -> ExpandedSecret {
        let digest = Zeroizing::new(sha512(&self.0));

        let mut a_bytes = Zeroizing::new([0u8; 32]);
        a_bytes.copy_from_slice(&digest[..32]);

        let mut prefix = [0u8; 32];
        prefix.copy_from_slice(&digest[32..]);

        ExpandedSecret {
            scalar: Scalar::from_bytes_mod_order(clamp(*a_bytes)),
            prefix,
        }
    }

    /// Derives a child seed from this seed, an index and a salt.
    ///
    /// The child is the first half of `SHA-512(seed || salt || le64(index))`.
    /// Any change to the index or the salt gives an unrelated key.
    pub fn derive(&self, index: u64, salt: &[u8]) -> Seed {
        let digest = Zeroizing::new(sha512_concat(&[&self.0[..], salt, &index.to_le_bytes()[..]]));

        let mut child = [0u8; SEED_LENGTH];
        child.copy_from_slice(&digest[..SEED_LENGTH]);
        Seed(child)
    }

    #[inline]
    pub fn public_key(&self) -> PublicKey {
        self.expand().public_key()
    }
}

impl ConstantTimeEq for Seed {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0[..].ct_eq(&other.0[..])
    }
}

impl PartialEq for Seed {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for Seed {}

impl fmt::Debug for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Seed(..)")
    }
}

/// The expanded form of a seed.
///
/// Holds the clamped scalar `a` (already reduced modulo ℓ, which leaves
/// `a·B` unchanged) and the 32-byte prefix that keys nonce derivation.
/// Both are wiped on drop and never serialized.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct ExpandedSecret {
    scalar: Scalar,
    prefix: [u8; 32],
}

impl ExpandedSecret {
    #[inline]
    pub(crate) fn scalar(&self) -> &Scalar {
        &self.scalar
    }

    #[inline]
    pub(crate) fn prefix(&self) -> &[u8; 32] {
        &self.prefix
    }

    pub fn public_key(&self) -> PublicKey {
        PublicKey::from_point(EdwardsPoint::mul_base(&self.scalar))
    }
}

/// An Ed25519 public key.
///
/// Keeps both the decoded point and its canonical 32-byte encoding.
/// Two public keys are equal when their points are equal as group elements.
#[derive(Clone, Copy)]
pub struct PublicKey {
    compressed: CompressedEdwardsY,
    point: EdwardsPoint,
}

impl PublicKey {
    /// Decodes a public key. Fails with [`Error::InvalidLength`] unless
    /// `bytes` is 32 bytes long, and with [`Error::InvalidEncoding`] unless
    /// it encodes a point of the prime-order subgroup.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let bytes = fixed::<PUBLIC_KEY_LENGTH>(bytes)?;
        let point = decode_point(bytes)?;

        Ok(Self {
            compressed: CompressedEdwardsY(*bytes),
            point,
        })
    }

    pub(crate) fn from_point(point: EdwardsPoint) -> Self {
        Self {
            compressed: point.compress(),
            point,
        }
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8; PUBLIC_KEY_LENGTH] {
        self.compressed.as_bytes()
    }

    #[inline]
    pub fn to_bytes(&self) -> [u8; PUBLIC_KEY_LENGTH] {
        self.compressed.to_bytes()
    }

    #[inline]
    pub fn as_point(&self) -> &EdwardsPoint {
        &self.point
    }
}

impl PartialEq for PublicKey {
    fn eq(&self, other: &Self) -> bool {
        self.point == other.point
    }
}

impl Eq for PublicKey {}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PublicKey").field(self.as_bytes()).finish()
    }
}

/// A seed together with the public key it derives.
#[derive(Clone)]
pub struct Keypair {
    seed: Seed,
    public: PublicKey,
}

impl Keypair {
    pub fn from_seed(seed: Seed) -> Self {
        let public = seed.public_key();
        Self { seed, public }
    }

    pub fn generate<R: CryptoRngCore + ?Sized>(rng: &mut R) -> Self {
        Self::from_seed(Seed::generate(rng))
    }

    /// Decodes `seed || public key`.
    ///
    /// The embedded public key must be the one derived from the seed,
    /// otherwise [`Error::PublicKeyMismatch`] is returned.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let bytes = fixed::<KEYPAIR_LENGTH>(bytes)?;
        let keypair = Self::from_seed(Seed::from_slice(&bytes[..SEED_LENGTH])?);

        if keypair.public.as_bytes()[..] != bytes[SEED_LENGTH..] {
            tracing::debug!("keypair bytes carry a public key that does not match the seed");
            return Err(Error::PublicKeyMismatch);
        }

        Ok(keypair)
    }

    /// Encodes the keypair as `seed || public key`.
    pub fn to_bytes(&self) -> Zeroizing<[u8; KEYPAIR_LENGTH]> {
        let mut out = Zeroizing::new([0u8; KEYPAIR_LENGTH]);

        out[..SEED_LENGTH].copy_from_slice(self.seed.as_bytes());
        out[SEED_LENGTH..].copy_from_slice(self.public.as_bytes());

        out
    }

    #[inline]
    pub fn seed(&self) -> &Seed {
        &self.seed
    }

    #[inline]
    pub fn public(&self) -> &PublicKey {
        &self.public
    }
}

impl fmt::Debug for Keypair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Keypair")
            .field("public", &self.public)
            .finish_non_exhaustive()
    }
}

/// Derives the encoded public key of a 32-byte seed.
///
/// Fails with [`Error::InvalidLength`] if `seed` is not 32 bytes long.
pub fn public_key(seed: &[u8]) -> Result<[u8; PUBLIC_KEY_LENGTH]> {
    let seed = Seed::from_slice(seed)?;
    Ok(encode_point(seed.public_key().as_point()))
}
