//! SHA-512, the 512-bit hash every Ed25519 construction in this crate is
//! built on.

pub(crate) mod core;

pub use self::core::{DIGEST_LENGTH, sha512, sha512_concat};
