//! Hash functions and hash-derived integers.
//!
//! - `sha512`: the 512-bit hash used for key expansion, nonces and
//!   challenges.
//! - `hint`: SHA-512 digests interpreted as little-endian integers, with an
//!   explicit reduction step into the scalar field.

pub mod hint;
pub mod sha512;

pub use hint::{WideInt, hint};
pub use sha512::{sha512, sha512_concat};
