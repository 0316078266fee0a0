//! Digital signature schemes.
//!
//! Each submodule implements one scheme on top of the key material in
//! [`crate::keys`]. There is no shared abstraction across schemes.

pub mod ed25519;
