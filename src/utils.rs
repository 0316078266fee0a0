//! Byte-level helpers that are not cryptographic in themselves.

use crate::error::{Error, Result};

/// Views `bytes` as a fixed-size array, failing with
/// [`Error::InvalidLength`] when the length differs from `N`.
pub(crate) fn fixed<const N: usize>(bytes: &[u8]) -> Result<&[u8; N]> {
    bytes.try_into().map_err(|_| {
        tracing::debug!(expected = N, actual = bytes.len(), "rejecting input buffer");

        Error::InvalidLength {
            expected: N,
            actual: bytes.len(),
        }
    })
}
