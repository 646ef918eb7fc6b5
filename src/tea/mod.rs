mod cipher;
mod core;
mod error;
mod key;
mod pack;
mod util;

pub mod harness;

/// TEA operates on 64-bit blocks, held as two 32-bit words `[v0, v1]`.
pub type Block = [u32; 2];

pub use cipher::{Cipher, decrypt, decrypt_bytes, encrypt, encrypt_bytes};
pub use error::{Error, Result};
pub use key::Key;
pub use pack::{pack_block, pack_key, unpack_block, unpack_key};
