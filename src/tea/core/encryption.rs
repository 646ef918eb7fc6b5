use super::constants::{DELTA, NUM_ROUNDS};
use super::util::mix;
use crate::tea::{Block, Key};

#[inline(always)]
pub fn encrypt_block(plaintext: &Block, key: &Key) -> Block {
    let [mut v0, mut v1] = *plaintext;
    let [k0, k1, k2, k3] = *key.words();
    let mut sum: u32 = 0;

    for _ in 0..NUM_ROUNDS {
        sum = sum.wrapping_add(DELTA);
        v0 = v0.wrapping_add(mix(v1, sum, k0, k1));
        // v1 consumes the v0 updated on the line above
        v1 = v1.wrapping_add(mix(v0, sum, k2, k3));
    }

    [v0, v1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encrypt_block_zero() {
        // all-zero block under the all-zero key: only DELTA feeds the mixing
        let actual = encrypt_block(&[0, 0], &Key::from_words([0; 4]));
        assert_eq!(
            actual,
            [0x41ea3a0a, 0x94baa940],
            "incorrect encryption of zero block under zero key"
        );
    }

    #[test]
    fn test_encrypt_block_words() {
        // word-level case from the reference driver program
        let key = Key::from_words([0x12345678, 0x90abcdef, 0xfedcba09, 0x87654321]);
        let actual = encrypt_block(&[0x12345678, 0x90abcdef], &key);
        assert_eq!(actual, [0xc28071a9, 0xc49d02fe], "incorrect encryption of block");
    }
}
