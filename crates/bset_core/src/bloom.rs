//! Membership filter over a packed bit array.
//!
//! Answers "was this key added?" with a tunable false-positive rate and no
//! false negatives. Keys are opaque byte sequences; callers hashing anything
//! richer must pick a canonical byte encoding first, so equal values always
//! hash alike.

use xxhash_rust::xxh3::xxh3_64_with_seed;

use crate::bitarray::BitArray;
use crate::errors::{BsetError, Result};
use crate::params::{optimal_bits, optimal_hashes, projected_fp_rate};

#[derive(Clone, Debug)]
pub struct BloomFilter {
    m_bits: u64,
    k: u32,
    bits: BitArray,
    insertions: u64,
}

impl BloomFilter {
    /// Sizes the filter for `expected_items` keys at the target `fp_rate`.
    ///
    /// `expected_items` must be at least 1 and `fp_rate` strictly between
    /// 0 and 1.
    pub fn new(expected_items: u64, fp_rate: f64) -> Result<Self> {
        if expected_items < 1 {
            return Err(BsetError::InvalidCapacity(expected_items));
        }
        if !(fp_rate > 0.0 && fp_rate < 1.0) {
            return Err(BsetError::InvalidRate(fp_rate));
        }
        let m_bits = optimal_bits(expected_items, fp_rate);
        Ok(Self {
            m_bits,
            k: optimal_hashes(fp_rate),
            bits: BitArray::new(m_bits)?,
            insertions: 0,
        })
    }

    /// One seeded hash per position, seeds 0..k, each reduced mod the bit
    /// count. Shared by `add` and `contains`.
    fn positions(&self, key: &[u8]) -> Vec<u64> {
        (0..u64::from(self.k))
            .map(|seed| xxh3_64_with_seed(key, seed) % self.m_bits)
            .collect()
    }

    /// Inserts `key`. Bumps the insertion counter on every call, duplicates
    /// included.
    pub fn add(&mut self, key: &[u8]) {
        for pos in self.positions(key) {
            self.bits
                .set(pos)
                .expect("derived position within bit range");
        }
        self.insertions += 1;
    }

    /// Whether `key` was possibly added. `false` is definitive; `true` may
    /// be a false positive at the configured rate.
    pub fn contains(&self, key: &[u8]) -> bool {
        self.positions(key).into_iter().all(|pos| {
            self.bits
                .test(pos)
                .expect("derived position within bit range")
        })
    }

    /// Number of `add` calls, not distinct keys: duplicate adds inflate it.
    pub fn len(&self) -> u64 {
        self.insertions
    }

    pub fn is_empty(&self) -> bool {
        self.insertions == 0
    }

    /// Size of the owned bit array in bits.
    pub fn bit_count(&self) -> u64 {
        self.m_bits
    }

    /// Hash evaluations per key.
    pub fn hash_count(&self) -> u32 {
        self.k
    }

    /// Population count of the owned bit array.
    pub fn bits_set(&self) -> u64 {
        self.bits.count_ones()
    }

    /// Expected false-positive rate at the current insertion count.
    pub fn projected_fp_rate(&self) -> f64 {
        projected_fp_rate(self.m_bits, self.k, self.insertions)
    }

    /// Read-only view of the owned bit array, for rendering and inspection.
    pub fn bit_array(&self) -> &BitArray {
        &self.bits
    }
}
