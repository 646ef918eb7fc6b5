use super::constants::{DECRYPT_SUM, DELTA, NUM_ROUNDS};
use super::util::mix;
use crate::tea::{Block, Key};

/// Exact inverse of [encrypt_block](super::encrypt_block).
///
/// Each round undoes the encryption round back to front: `v1` is restored first using
/// the `v0` it was originally mixed with, then `v0` using the restored `v1`, and only
/// then does the accumulator step back.
#[inline(always)]
pub fn decrypt_block(ciphertext: &Block, key: &Key) -> Block {
    let [mut v0, mut v1] = *ciphertext;
    let [k0, k1, k2, k3] = *key.words();
    let mut sum: u32 = DECRYPT_SUM;

    for _ in 0..NUM_ROUNDS {
        v1 = v1.wrapping_sub(mix(v0, sum, k2, k3));
        v0 = v0.wrapping_sub(mix(v1, sum, k0, k1));
        sum = sum.wrapping_sub(DELTA);
    }

    [v0, v1]
}
