use thiserror::Error;
use rand::rand_core;

/// TEA Result type.
pub type Result<T> = std::result::Result<T, Error>;

/// TEA Error type.
///
/// The cipher itself is total over fixed-width words and never fails. Errors only arise
/// at the edges: building keys and blocks from unchecked slices, drawing keys from the
/// OS RNG, and surfacing a failed self-test.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Attempted to instantiate a TEA key from a slice that is not exactly 16 bytes.
    #[error("invalid key length: {len} bytes (expected 16)")]
    InvalidKeyLength { len: usize },

    /// Attempted to encrypt or decrypt a slice that is not exactly one 8-byte block.
    #[error("invalid block length: {len} bytes (expected 8)")]
    InvalidBlockLength { len: usize },

    /// OS RNG failed during random key generation.
    #[error("OS RNG failed in random key generation")]
    Rng(#[from] rand_core::OsError),

    /// One or more known-answer checks produced the wrong bytes.
    #[error("self-test failed: {failed} of {total} checks did not match")]
    SelfTestFailed { failed: usize, total: usize },
}
