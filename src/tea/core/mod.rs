//! Core TEA implementation for encryption and decryption of a single 64-bit block. Exports encrypt_block and decrypt_block.

pub mod constants;
mod util;
mod decryption;
mod encryption;

pub use decryption::decrypt_block;
pub use encryption::encrypt_block;
