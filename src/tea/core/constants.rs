/// Key schedule constant, derived from the golden ratio: floor(2^32 / phi).
pub const DELTA: u32 = 0x9E37_79B9;

/// Number of cycles. Each cycle updates both halves of the block once.
pub const NUM_ROUNDS: u32 = 32;

/// Accumulator value after all encryption rounds, `DELTA * NUM_ROUNDS mod 2^32`.
/// Decryption starts from here and walks back to zero.
pub const DECRYPT_SUM: u32 = DELTA.wrapping_mul(NUM_ROUNDS);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decrypt_sum_value() {
        assert_eq!(DECRYPT_SUM, 0xC6EF3720);
    }
}
