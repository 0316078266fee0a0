//! Ed25519 signatures with public-key extraction.
//!
//! This crate implements standard Ed25519 alongside a key-blind variant
//! whose signatures let a verifier *recover* the signer's public key from
//! the message and signature alone. The key is never transmitted or
//! embedded in the signed data; it is deduced afterwards and then compared
//! against the key the verifier expects.
//!
//! # Module overview
//!
//! - `hash`  
//!   SHA-512 and hash-to-integer: digests read as little-endian 512-bit
//!   integers, reduced into the scalar field only when asked to.
//!
//! - `keys`  
//!   Seeds, expanded secrets, public keys and keypairs, plus strict point
//!   and scalar encodings and inversion modulo the group order.
//!
//! - `signatures`  
//!   Signing, verification, public-key extraction and the consistency
//!   check between an extracted and a claimed key.
//!
//! - `error`  
//!   The [`Error`] taxonomy shared by all of the above.
//!
//! Curve and scalar arithmetic are provided by `curve25519-dalek`; SHA-512 by
//! `sha2`. Secret scalars, nonce prefixes and seeds are zeroized on drop.
//!
//! # Wire formats
//!
//! | Object     | Encoding                 | Length   |
//! |------------|--------------------------|----------|
//! | Seed       | raw bytes                | 32       |
//! | Public key | compressed Edwards point | 32       |
//! | Signature  | `R (32) \|\| S (32)`     | 64       |
//!
//! All integers are little endian.
//!
//! # Example
//!
//! ```
//! use ed25519_extract::{check_pk, extract_pk, public_key, sign2};
//!
//! let seed = [7u8; 32];
//! let pk = public_key(&seed)?;
//!
//! let sig = sign2(b"blob", &seed)?;
//! let recovered = extract_pk(&sig, b"blob")?;
//!
//! assert_eq!(recovered.to_bytes(), pk);
//! check_pk(&pk, &recovered)?;
//! # Ok::<(), ed25519_extract::Error>(())
//! ```

mod utils;

pub mod error;
pub mod hash;
pub mod keys;
pub mod signatures;

pub use error::{Error, Result};
pub use keys::ed25519::{
    Keypair, PUBLIC_KEY_LENGTH, PublicKey, SEED_LENGTH, Seed, public_key,
};
pub use signatures::ed25519::{
    SIGNATURE_LENGTH, Signature, check_pk, extract_pk, sign, sign2, verify, verify2,
};
