//! Known-answer self-test. Runs a table of [TestVector]s through the cipher and collects
//! every mismatch instead of stopping at the first one.
//!
//! ## Examples
//! ```
//! # fn main() -> teap::Result<()> {
//! use teap::harness::{self, VECTORS};
//!
//! let report = harness::run(&VECTORS);
//! assert!(report.passed());
//! assert_eq!(report.checks(), 2 * VECTORS.len());
//! report.into_result()?;
//! # Ok(())
//! # }
//! ```

mod vectors;

use std::fmt;

use rayon::prelude::*;

use crate::tea::core::{decrypt_block, encrypt_block};
use crate::tea::error::{Error, Result};
use crate::tea::key::Key;
use crate::tea::pack::{pack_block, unpack_block};
use crate::tea::util::to_hex;
use crate::tea::Block;

pub use vectors::{TestVector, VECTORS};

/// run in parallel if the table has more vectors than this
pub const PARALLEL_THRESHOLD: usize = 64;

/// Word-level block transform driven by the harness.
pub type BlockFn = fn(&Block, &Key) -> Block;

/// Which half of a vector check failed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    /// plaintext -> ciphertext
    Encrypt,
    /// ciphertext -> plaintext
    Decrypt,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Encrypt => f.write_str("encrypt"),
            Direction::Decrypt => f.write_str("decrypt"),
        }
    }
}

/// A single failed check: vector `index` produced `actual` where `expected` was required.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("vector {index} {direction}: expected {}, got {}", to_hex(.expected), to_hex(.actual))]
pub struct Mismatch {
    pub index: usize,
    pub direction: Direction,
    pub expected: [u8; 8],
    pub actual: [u8; 8],
}

/// Outcome of a harness run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    vectors: usize,
    mismatches: Vec<Mismatch>,
}

impl Report {
    /// Number of vectors checked.
    pub fn vectors(&self) -> usize {
        self.vectors
    }

    /// Number of individual checks (one encrypt and one decrypt per vector).
    pub fn checks(&self) -> usize {
        self.vectors * 2
    }

    /// All mismatches, ordered by vector index then direction.
    pub fn mismatches(&self) -> &[Mismatch] {
        &self.mismatches
    }

    pub fn passed(&self) -> bool {
        self.mismatches.is_empty()
    }

    /// Converts a failing report into [SelfTestFailed](crate::Error::SelfTestFailed).
    pub fn into_result(self) -> Result<()> {
        if self.passed() {
            Ok(())
        } else {
            Err(Error::SelfTestFailed {
                failed: self.mismatches.len(),
                total: self.checks(),
            })
        }
    }
}

/// Checks vectors against a pair of block functions. [Harness::default] drives the real
/// cipher; [Harness::with_cipher] accepts any other pair, which is how the mutation
/// tests confirm the vector table catches broken implementations.
#[derive(Copy, Clone, Debug)]
pub struct Harness {
    encrypt: BlockFn,
    decrypt: BlockFn,
}

impl Default for Harness {
    fn default() -> Self {
        Self::with_cipher(encrypt_block, decrypt_block)
    }
}

impl Harness {
    pub fn with_cipher(encrypt: BlockFn, decrypt: BlockFn) -> Self {
        Self { encrypt, decrypt }
    }

    /// Runs both checks for one vector. Decryption starts from the vector's own
    /// ciphertext, so a broken encrypt cannot mask a broken decrypt.
    pub fn check_vector(&self, index: usize, vector: &TestVector) -> Vec<Mismatch> {
        let key = Key::from_bytes(&vector.key);
        let mut mismatches = Vec::new();

        let encrypted = unpack_block(&(self.encrypt)(&pack_block(&vector.plaintext), &key));
        if encrypted != vector.ciphertext {
            mismatches.push(Mismatch {
                index,
                direction: Direction::Encrypt,
                expected: vector.ciphertext,
                actual: encrypted,
            });
        }

        let decrypted = unpack_block(&(self.decrypt)(&pack_block(&vector.ciphertext), &key));
        if decrypted != vector.plaintext {
            mismatches.push(Mismatch {
                index,
                direction: Direction::Decrypt,
                expected: vector.plaintext,
                actual: decrypted,
            });
        }

        mismatches
    }

    pub fn run_serial(&self, vectors: &[TestVector]) -> Report {
        let mismatches = vectors
            .iter()
            .enumerate()
            .flat_map(|(i, v)| self.check_vector(i, v))
            .collect();

        Report {
            vectors: vectors.len(),
            mismatches,
        }
    }

    /// Checks run independently on the rayon pool; collect keeps index order.
    pub fn run_parallel(&self, vectors: &[TestVector]) -> Report {
        let mismatches = vectors
            .par_iter()
            .enumerate()
            .flat_map_iter(|(i, v)| self.check_vector(i, v))
            .collect();

        Report {
            vectors: vectors.len(),
            mismatches,
        }
    }

    pub fn run(&self, vectors: &[TestVector]) -> Report {
        if vectors.len() > PARALLEL_THRESHOLD {
            self.run_parallel(vectors)
        } else {
            self.run_serial(vectors)
        }
    }
}

/// Checks `vectors` against the cipher, one after another.
pub fn run_serial(vectors: &[TestVector]) -> Report {
    Harness::default().run_serial(vectors)
}

/// Checks `vectors` against the cipher in parallel.
pub fn run_parallel(vectors: &[TestVector]) -> Report {
    Harness::default().run_parallel(vectors)
}

/// Checks `vectors` against the cipher, in parallel for large tables.
pub fn run(vectors: &[TestVector]) -> Report {
    Harness::default().run(vectors)
}
