/// A known-answer test case: `plaintext` encrypts to `ciphertext` under `key`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TestVector {
    pub plaintext: [u8; 8],
    pub ciphertext: [u8; 8],
    pub key: [u8; 16],
}

/// Canonical TEA vectors. Words are little-endian, so the first vector's ciphertext
/// is the words `[0x41ea3a0a, 0x94baa940]`.
pub const VECTORS: [TestVector; 4] = [
    // all-zero boundary
    TestVector {
        plaintext: [0x00; 8],
        ciphertext: [0x0a, 0x3a, 0xea, 0x41, 0x40, 0xa9, 0xba, 0x94],
        key: [0x00; 16],
    },
    TestVector {
        plaintext: *b"test me.",
        ciphertext: [0x77, 0x5d, 0x2a, 0x6a, 0xf6, 0xce, 0x92, 0x09],
        key: [
            0x2b, 0x02, 0x05, 0x68, 0x06, 0x14, 0x49, 0x76, //
            0x77, 0x5d, 0x0e, 0x26, 0x6c, 0x28, 0x78, 0x43, //
        ],
    },
    TestVector {
        plaintext: *b"longer_t",
        ciphertext: [0xbe, 0x7a, 0xbb, 0x81, 0x95, 0x2d, 0x1f, 0x1e],
        key: [
            0x09, 0x65, 0x43, 0x11, 0x66, 0x44, 0x39, 0x25, //
            0x51, 0x3a, 0x16, 0x10, 0x0a, 0x08, 0x12, 0x6e, //
        ],
    },
    TestVector {
        plaintext: *b"est_vect",
        ciphertext: [0xdd, 0x89, 0xa1, 0x25, 0x04, 0x21, 0xdf, 0x95],
        key: [
            0x09, 0x65, 0x43, 0x11, 0x66, 0x44, 0x39, 0x25, //
            0x51, 0x3a, 0x16, 0x10, 0x0a, 0x08, 0x12, 0x6e, //
        ],
    },
];
