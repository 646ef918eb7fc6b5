#![cfg(feature = "test-vectors")]

use hex_literal::hex;
use teap::harness::{self, TestVector};
use teap::{Cipher, Key, decrypt, decrypt_bytes, encrypt, encrypt_bytes, pack_block, unpack_block};

/// Same table as the built-in one, written out independently from hex.
const KAT: [TestVector; 4] = [
    TestVector {
        plaintext: hex!("0000000000000000"),
        ciphertext: hex!("0a3aea4140a9ba94"),
        key: hex!("00000000000000000000000000000000"),
    },
    TestVector {
        plaintext: hex!("74657374206d652e"),
        ciphertext: hex!("775d2a6af6ce9209"),
        key: hex!("2b02056806144976775d0e266c287843"),
    },
    TestVector {
        plaintext: hex!("6c6f6e6765725f74"),
        ciphertext: hex!("be7abb81952d1f1e"),
        key: hex!("0965431166443925513a16100a08126e"),
    },
    TestVector {
        plaintext: hex!("6573745f76656374"),
        ciphertext: hex!("dd89a1250421df95"),
        key: hex!("0965431166443925513a16100a08126e"),
    },
];

#[test]
fn builtin_table_matches_hex() {
    assert_eq!(KAT, harness::VECTORS);
}

#[test]
fn kat_encrypt_bytes() {
    for (i, v) in KAT.iter().enumerate() {
        assert_eq!(
            encrypt_bytes(&v.plaintext, &v.key),
            v.ciphertext,
            "vector {i}: encrypted result does not match expected"
        );
    }
}

#[test]
fn kat_decrypt_bytes() {
    for (i, v) in KAT.iter().enumerate() {
        assert_eq!(
            decrypt_bytes(&v.ciphertext, &v.key),
            v.plaintext,
            "vector {i}: decrypted result does not match expected"
        );
    }
}

#[test]
fn kat_word_level() {
    for v in &KAT {
        let key = Key::from_bytes(&v.key);
        let ct = encrypt(&pack_block(&v.plaintext), &key);
        assert_eq!(unpack_block(&ct), v.ciphertext);
        assert_eq!(unpack_block(&decrypt(&ct, &key)), v.plaintext);
    }
}

#[test]
fn kat_cipher_slices() -> teap::Result<()> {
    for v in &KAT {
        let cipher = Cipher::new(&Key::try_from_slice(&v.key)?);
        assert_eq!(cipher.encrypt_slice(&v.plaintext)?, v.ciphertext);
        assert_eq!(cipher.decrypt_slice(&v.ciphertext)?, v.plaintext);
    }
    Ok(())
}

#[test]
fn kat_harness() -> teap::Result<()> {
    harness::run_serial(&KAT).into_result()?;
    harness::run_parallel(&KAT).into_result()
}
