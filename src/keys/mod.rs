//! Key material.
//!
//! Only key structure and derivation live here. Signing, verification and
//! public-key extraction are in [`crate::signatures`].
//!
//! ## Ed25519
//!
//! Keys on the twisted Edwards curve birationally equivalent to
//! Curve25519, over 𝔽ₚ with `p = 2²⁵⁵ − 19`, restricted to the subgroup of
//! prime order ℓ generated by the standard base point.
//!
//! A keypair is derived from a 32-byte seed exactly as in RFC 8032, so keys
//! produced here interoperate with any standard Ed25519 implementation.
//! Seeds can also be derived hierarchically from a parent seed, an index
//! and a salt.

pub mod ed25519;
