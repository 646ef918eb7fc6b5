// used for both encryption and decryption
//
// one half-round of the Feistel function: mixes `v` with the round accumulator and
// a pair of key words. Shifts are logical on u32, additions wrap mod 2^32.
#[inline(always)]
pub(crate) fn mix(v: u32, sum: u32, ka: u32, kb: u32) -> u32 {
    (v << 4).wrapping_add(ka) ^ v.wrapping_add(sum) ^ (v >> 5).wrapping_add(kb)
}
