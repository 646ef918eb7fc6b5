//! Conversion between raw bytes and the 32-bit words the cipher operates on.
//!
//! Every 4-byte group is read as a little-endian `u32` (least significant byte first).
//! The conversion is done explicitly, so results do not depend on the byte order of
//! the machine running the code.

use crate::tea::Block;

/// Packs 8 bytes into a block: `v0` from bytes 0..4, `v1` from bytes 4..8.
#[inline(always)]
pub fn pack_block(bytes: &[u8; 8]) -> Block {
    [
        u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]),
        u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]),
    ]
}

/// Inverse of [pack_block].
#[inline(always)]
pub fn unpack_block(block: &Block) -> [u8; 8] {
    let v0 = block[0].to_le_bytes();
    let v1 = block[1].to_le_bytes();
    [
        v0[0], v0[1], v0[2], v0[3], //
        v1[0], v1[1], v1[2], v1[3], //
    ]
}

/// Packs 16 key bytes into four words `k0..k3`, one per consecutive 4-byte group.
#[inline(always)]
pub fn pack_key(bytes: &[u8; 16]) -> [u32; 4] {
    let mut words = [0u32; 4];
    for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(4)) {
        *word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
    words
}

/// Inverse of [pack_key].
#[inline(always)]
pub fn unpack_key(words: &[u32; 4]) -> [u8; 16] {
    let mut bytes = [0u8; 16];
    for (chunk, word) in bytes.chunks_exact_mut(4).zip(words) {
        chunk.copy_from_slice(&word.to_le_bytes());
    }
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn pack_block_little_endian() {
        let bytes: [u8; 8] = [0x01, 0x02, 0x03, 0x04, 0xaa, 0xbb, 0xcc, 0xdd];
        assert_eq!(
            pack_block(&bytes),
            [0x04030201, 0xddccbbaa],
            "block words must be read least significant byte first"
        );
    }

    #[test]
    fn pack_key_little_endian() {
        let bytes: [u8; 16] = [
            0x78, 0x56, 0x34, 0x12, 0xef, 0xcd, 0xab, 0x90, //
            0x09, 0xba, 0xdc, 0xfe, 0x21, 0x43, 0x65, 0x87, //
        ];
        assert_eq!(
            pack_key(&bytes),
            [0x12345678, 0x90abcdef, 0xfedcba09, 0x87654321]
        );
    }

    #[test]
    fn unpack_block_reverses_pack_block() {
        let mut rng = StdRng::seed_from_u64(0x7ea);
        for _ in 0..1000 {
            let mut bytes = [0u8; 8];
            rng.fill(&mut bytes);
            assert_eq!(unpack_block(&pack_block(&bytes)), bytes);
        }
    }

    #[test]
    fn unpack_key_reverses_pack_key() {
        let mut rng = StdRng::seed_from_u64(0x7ea);
        for _ in 0..1000 {
            let mut bytes = [0u8; 16];
            rng.fill(&mut bytes);
            assert_eq!(unpack_key(&pack_key(&bytes)), bytes);
        }
    }
}
