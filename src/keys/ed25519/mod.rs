//! Ed25519 key material and the group-level building blocks beneath it.
//!
//! The curve and scalar arithmetic come from `curve25519-dalek`. This module
//! layers on top of it what the signature schemes need:
//!
//! - a strict decoding policy for points and scalars (`group`),
//! - clamping and Fermat inversion modulo ℓ (`scalar`),
//! - seeds, expanded secrets, public keys and keypairs (`core`).

/// Seeds, expanded secrets, public keys and keypairs.
pub(crate) mod core;

/// Canonical, subgroup-checked point encoding and canonical scalar encoding.
pub mod group;

/// Clamping, `ℓ - 1` and inversion modulo ℓ.
pub mod scalar;

pub use self::core::*;
