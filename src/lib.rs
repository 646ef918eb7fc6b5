//! Tiny Encryption Algorithm (TEA): a 64-bit block cipher with a 128-bit key, plus a
//! known-answer [harness] for checking an implementation against fixed test vectors.
//!
//! ```
//! # fn main() -> teap::Result<()> {
//! use teap::{Cipher, Key};
//!
//! let key = Key::rand_key()?;
//! let cipher = Cipher::new(&key);
//!
//! let ciphertext = cipher.encrypt_block(b"8 bytes!");
//! assert_eq!(&cipher.decrypt_block(&ciphertext), b"8 bytes!");
//! # Ok(())
//! # }
//! ```

mod tea;

pub use tea::{
    Block, Cipher, Error, Key, Result, decrypt, decrypt_bytes, encrypt, encrypt_bytes, harness,
    pack_block, pack_key, unpack_block, unpack_key,
};
