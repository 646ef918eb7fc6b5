//! Defines the [`Key`] struct, which holds a 128-bit TEA key as four 32-bit words.
//! Keys can be randomly generated or constructed from existing bytes or words.

use rand::TryRngCore;
use rand::rngs::OsRng;

use crate::tea::error::{Error, Result};
use crate::tea::pack::{pack_key, unpack_key};

/// Contains a TEA key. Can be instantiated with a random key, or built from 16 bytes
/// (read as four little-endian words) or directly from four words.
/// A `Key` is required to instantiate a [Cipher](crate::Cipher).
///
/// ## Examples
/// ```
/// # fn main() -> teap::Result<()> {
/// use teap::Key;
///
/// // Instantiate a random key:
/// let rk = Key::rand_key()?;
///
/// // Instantiate a key from a slice:
/// let key_bytes: [u8; 16] = [0x2b, 0x02, 0x05, 0x68, 0x06, 0x14, 0x49, 0x76,
///                            0x77, 0x5d, 0x0e, 0x26, 0x6c, 0x28, 0x78, 0x43];
/// let my_key = Key::try_from_slice(&key_bytes)?;
///
/// // Bytes survive the round trip through the word representation:
/// assert_eq!(my_key.to_bytes(), key_bytes);
/// assert_eq!(my_key.words()[0], 0x6805022b);
///
/// // Attempting to instantiate with anything other than 16 bytes
/// // returns an InvalidKeyLength error:
/// assert!(Key::try_from_slice(&key_bytes[..12]).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Key {
    words: [u32; 4],
}

impl Key {
    /// Generate a random 128-bit key. Returns Error if OsRng fails.
    pub fn rand_key() -> Result<Self> {
        let mut k = [0u8; 16];
        OsRng.try_fill_bytes(&mut k)?;
        Ok(Self::from_bytes(&k))
    }

    /// Builds a key from exactly 16 bytes.
    pub fn from_bytes(bytes: &[u8; 16]) -> Self {
        Self {
            words: pack_key(bytes),
        }
    }

    /// Builds a key from its word representation `[k0, k1, k2, k3]`.
    pub const fn from_words(words: [u32; 4]) -> Self {
        Self { words }
    }

    /// Attempts to build a key from a slice of bytes. Will return an InvalidKeyLength error
    /// if the input slice is anything other than 16 bytes long.
    pub fn try_from_slice(bytes: &[u8]) -> Result<Self> {
        let bytes: &[u8; 16] = bytes
            .try_into()
            .map_err(|_| Error::InvalidKeyLength { len: bytes.len() })?;
        Ok(Self::from_bytes(bytes))
    }

    /// Returns the key words `[k0, k1, k2, k3]`.
    pub fn words(&self) -> &[u32; 4] {
        &self.words
    }

    /// Returns the key as 16 bytes, matching the input of [Key::from_bytes].
    pub fn to_bytes(&self) -> [u8; 16] {
        unpack_key(&self.words)
    }
}

impl From<[u8; 16]> for Key {
    fn from(bytes: [u8; 16]) -> Self {
        Self::from_bytes(&bytes)
    }
}

impl From<[u32; 4]> for Key {
    fn from(words: [u32; 4]) -> Self {
        Self::from_words(words)
    }
}
