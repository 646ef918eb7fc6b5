use crate::tea::core::{decrypt_block, encrypt_block};
use crate::tea::error::{Error, Result};
use crate::tea::key::Key;
use crate::tea::pack::{pack_block, unpack_block};
use crate::tea::Block;

/// Encrypts one word-level block under `key`.
///
/// ```
/// use teap::{Key, decrypt, encrypt};
///
/// let key = Key::from_words([1, 2, 3, 4]);
/// let ct = encrypt(&[300, 400], &key);
/// assert_ne!(ct, [300, 400]);
/// assert_eq!(decrypt(&ct, &key), [300, 400]);
/// ```
pub fn encrypt(block: &Block, key: &Key) -> Block {
    encrypt_block(block, key)
}

/// Decrypts one word-level block under `key`.
pub fn decrypt(block: &Block, key: &Key) -> Block {
    decrypt_block(block, key)
}

/// Encrypts 8 plaintext bytes under 16 key bytes, both read as little-endian words.
///
/// ```
/// use teap::encrypt_bytes;
///
/// assert_eq!(
///     encrypt_bytes(&[0; 8], &[0; 16]),
///     [0x0a, 0x3a, 0xea, 0x41, 0x40, 0xa9, 0xba, 0x94],
/// );
/// ```
pub fn encrypt_bytes(plaintext: &[u8; 8], key: &[u8; 16]) -> [u8; 8] {
    Cipher::new(&Key::from_bytes(key)).encrypt_block(plaintext)
}

/// Decrypts 8 ciphertext bytes under 16 key bytes.
pub fn decrypt_bytes(ciphertext: &[u8; 8], key: &[u8; 16]) -> [u8; 8] {
    Cipher::new(&Key::from_bytes(key)).decrypt_block(ciphertext)
}

/// Provides byte-level encryption and decryption of single 8-byte blocks.
/// Instantiated with a TEA [Key], which is copied into the instance.
///
/// No multi-block API: chaining modes and padding are left to
/// the caller.
#[derive(Copy, Clone, Debug)]
pub struct Cipher {
    key: Key,
}

impl Cipher {
    /// Stores the provided key in the returned instance.
    pub fn new(key: &Key) -> Self {
        Self { key: *key }
    }

    /// Getter for the internal key.
    pub fn key(&self) -> &Key {
        &self.key
    }

    /// Encrypts one 8-byte block.
    pub fn encrypt_block(&self, plaintext: &[u8; 8]) -> [u8; 8] {
        unpack_block(&encrypt_block(&pack_block(plaintext), &self.key))
    }

    /// Decrypts one 8-byte block.
    pub fn decrypt_block(&self, ciphertext: &[u8; 8]) -> [u8; 8] {
        unpack_block(&decrypt_block(&pack_block(ciphertext), &self.key))
    }

    /// Like [Cipher::encrypt_block] for an unchecked slice. Returns an InvalidBlockLength
    /// error unless the slice is exactly 8 bytes.
    pub fn encrypt_slice(&self, plaintext: &[u8]) -> Result<[u8; 8]> {
        Ok(self.encrypt_block(as_block(plaintext)?))
    }

    /// Like [Cipher::decrypt_block] for an unchecked slice.
    pub fn decrypt_slice(&self, ciphertext: &[u8]) -> Result<[u8; 8]> {
        Ok(self.decrypt_block(as_block(ciphertext)?))
    }
}

fn as_block(bytes: &[u8]) -> Result<&[u8; 8]> {
    bytes
        .try_into()
        .map_err(|_| Error::InvalidBlockLength { len: bytes.len() })
}
