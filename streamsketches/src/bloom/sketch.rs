// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use crate::error::Error;
use crate::hash::hash64;

/// Bloom filter over items identified by their canonical string form.
///
/// Two items with the same string form are indistinguishable to the filter.
/// A bit once set is never cleared, so `contains` can return a false positive
/// but never a false negative. The expected false-positive rate after adding
/// `n` distinct items is `(1 - e^(-k*n/m))^k` for `m` bits and `k` hashes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BloomFilter {
    capacity: u64,
    num_hashes: u16,
    /// Bit-packed array; bit `i` of the filter is bit `i % 64` of word `i / 64`.
    bits: Box<[u64]>,
    num_bits_set: u64,
}

impl BloomFilter {
    /// Creates a filter with `capacity` bits and `num_hashes` index functions.
    ///
    /// Returns [`Error::InvalidArgument`] if either parameter is zero.
    pub fn new(capacity: u64, num_hashes: u16) -> Result<Self, Error> {
        if capacity == 0 {
            return Err(Error::invalid_argument("capacity must be at least 1 bit"));
        }
        if num_hashes == 0 {
            return Err(Error::invalid_argument("num_hashes must be at least 1"));
        }
        let num_words = capacity.div_ceil(64) as usize;
        Ok(Self {
            capacity,
            num_hashes,
            bits: vec![0u64; num_words].into_boxed_slice(),
            num_bits_set: 0,
        })
    }

    /// Adds an item to the filter.
    ///
    /// Re-adding an item leaves the filter unchanged.
    pub fn update(&mut self, item: &str) {
        let bytes = item.as_bytes();
        for seed in 0..self.num_hashes {
            let bit = self.bit_index(bytes, seed);
            if !get_bit(&self.bits, bit) {
                set_bit(&mut self.bits, bit);
                self.num_bits_set += 1;
            }
        }
    }

    /// Adds an item that may be absent; `None` is ignored.
    pub fn update_opt(&mut self, item: Option<&str>) {
        if let Some(item) = item {
            self.update(item);
        }
    }

    /// Returns whether the item was (probably) added before.
    ///
    /// `false` is definitive; `true` may be a false positive.
    pub fn contains(&self, item: &str) -> bool {
        let bytes = item.as_bytes();
        (0..self.num_hashes).all(|seed| get_bit(&self.bits, self.bit_index(bytes, seed)))
    }

    /// Membership test for an item that may be absent; `None` is never a member.
    pub fn contains_opt(&self, item: Option<&str>) -> bool {
        item.is_some_and(|item| self.contains(item))
    }

    /// Returns the configured number of bits.
    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    /// Returns the configured number of index functions per item.
    pub fn num_hashes(&self) -> u16 {
        self.num_hashes
    }

    /// Returns the number of bits currently set.
    pub fn bits_used(&self) -> u64 {
        self.num_bits_set
    }

    /// Returns true if no item has been added.
    pub fn is_empty(&self) -> bool {
        self.num_bits_set == 0
    }

    /// Maps `(item, seed)` to a bit position in `[0, capacity)`.
    ///
    /// Stable across runs; seeds `0..num_hashes` form the index family.
    #[inline]
    fn bit_index(&self, item: &[u8], seed: u16) -> u64 {
        hash64(item, u64::from(seed)) % self.capacity
    }
}

#[inline]
fn set_bit(words: &mut [u64], bit: u64) {
    words[(bit / 64) as usize] |= 1u64 << (bit % 64);
}

#[inline]
fn get_bit(words: &[u64], bit: u64) -> bool {
    words[(bit / 64) as usize] & (1u64 << (bit % 64)) != 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_helpers_across_word_boundary() {
        let mut words = vec![0u64; 2];
        for bit in [0u64, 1, 63, 64, 65, 127] {
            assert!(!get_bit(&words, bit));
            set_bit(&mut words, bit);
            assert!(get_bit(&words, bit));
        }
        // Neighbors stay untouched.
        assert!(!get_bit(&words, 2));
        assert!(!get_bit(&words, 62));
        assert!(!get_bit(&words, 66));
    }

    #[test]
    fn test_bit_index_in_range() {
        for capacity in [1u64, 7, 1000, 4096] {
            let filter = BloomFilter::new(capacity, 5).unwrap();
            for seed in 0..5u16 {
                for i in 0..100 {
                    let item = format!("item-{i}");
                    assert!(filter.bit_index(item.as_bytes(), seed) < capacity);
                }
            }
        }
    }

    #[test]
    fn test_bit_index_deterministic() {
        let filter = BloomFilter::new(1000, 3).unwrap();
        for seed in 0..3u16 {
            assert_eq!(
                filter.bit_index(b"stable", seed),
                filter.bit_index(b"stable", seed)
            );
        }
    }

    #[test]
    fn test_update_sets_at_most_num_hashes_bits() {
        let mut filter = BloomFilter::new(1 << 16, 4).unwrap();
        filter.update("one item");
        assert!(filter.bits_used() >= 1);
        assert!(filter.bits_used() <= 4);
    }

    #[test]
    fn test_capacity_one_degenerates_gracefully() {
        let mut filter = BloomFilter::new(1, 3).unwrap();
        assert!(!filter.contains("x"));
        filter.update("x");
        // A single bit means every item now tests positive.
        assert!(filter.contains("x"));
        assert!(filter.contains("y"));
        assert_eq!(filter.bits_used(), 1);
    }
}
