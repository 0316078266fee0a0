//! Ed25519 signatures with public-key extraction.
//!
//! Two signing variants share key derivation and nonce generation:
//!
//! - `sign` / `verify`: standard Ed25519 (RFC 8032). The challenge hash
//!   covers `R || A || M`, so a signature is tied to one specific key.
//! - `sign2` / `extract_pk` / `check_pk`: key-blind signatures. The
//!   challenge covers only `R || M`. The public key never has to be sent
//!   along; it is recomputed from `(M, R, S)` and then compared with the key
//!   the verifier expects. `verify2` checks such a signature directly
//!   against a known key.
//!
//! Every function here is pure and operates on immutable inputs, so calls
//! can run concurrently without coordination.

pub(crate) mod core;

mod challenge;
mod extract;
mod sign;
mod verify;

pub use self::core::{SIGNATURE_LENGTH, Signature};
pub use extract::{check_pk, extract_pk};
pub use sign::{sign, sign2};
pub use verify::{verify, verify2};
