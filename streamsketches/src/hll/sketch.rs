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
use crate::hash::DEFAULT_UPDATE_SEED;
use crate::hash::hash64;

/// Width in bits of the item hash feeding the register update.
///
/// The low `precision` bits select a register and the rest form the remainder,
/// so `precision` may not exceed this width.
const HASH_BITS: u8 = 32;

/// Distinct-count sketch over items identified by their canonical string form.
///
/// Registers only ever grow (element-wise max), so `update` is idempotent and
/// [`HllSketch::estimate`] is a pure read that may be interleaved with updates
/// arbitrarily. There is no separate build phase.
///
/// Register ranks use the bit length of the hash remainder, not the textbook
/// leading-zero count. The update rule and the estimator agree on this
/// convention; changing either side alone would skew the estimate.
#[derive(Debug, Clone, PartialEq)]
pub struct HllSketch {
    precision: u8,
    /// m = 2^precision.
    num_registers: usize,
    registers: Box<[u8]>,
    /// Count of registers still at 0; the `V` of the linear-counting branch.
    num_zeros: usize,
    alpha: f64,
    small_range_threshold: f64,
}

impl HllSketch {
    /// Creates a sketch with `2^precision` registers.
    ///
    /// Returns [`Error::InvalidArgument`] if `precision` is zero or exceeds
    /// the 32-bit item hash width.
    pub fn new(precision: u8) -> Result<Self, Error> {
        if precision == 0 {
            return Err(Error::invalid_argument("precision must be positive"));
        }
        if precision > HASH_BITS {
            return Err(Error::invalid_argument(format!(
                "precision must not exceed {HASH_BITS}, got {precision}"
            )));
        }
        let num_registers = 1usize << precision;
        Ok(Self {
            precision,
            num_registers,
            registers: vec![0u8; num_registers].into_boxed_slice(),
            num_zeros: num_registers,
            alpha: alpha_for(precision, num_registers),
            small_range_threshold: 2.5 * num_registers as f64,
        })
    }

    /// Adds an item to the sketch.
    ///
    /// Re-adding an item recomputes the same register and rank, so repeated
    /// adds leave the sketch unchanged.
    pub fn update(&mut self, item: &str) {
        let x = hash64(item.as_bytes(), DEFAULT_UPDATE_SEED) as u32;
        let slot = (u64::from(x) & (self.num_registers as u64 - 1)) as usize;
        let remainder = u64::from(x) >> self.precision;
        let rank = rank_of(remainder);

        let old = self.registers[slot];
        if rank > old {
            self.registers[slot] = rank;
            if old == 0 {
                self.num_zeros -= 1;
            }
        }
    }

    /// Adds an item that may be absent; `None` is ignored.
    pub fn update_opt(&mut self, item: Option<&str>) {
        if let Some(item) = item {
            self.update(item);
        }
    }

    /// Returns the current distinct-count estimate.
    ///
    /// Below `2.5 * m` the raw harmonic-mean estimate is biased, so while any
    /// register is still zero the linear-counting substitute `m * ln(m / V)`
    /// is returned instead. There is no correction branch for estimates far
    /// above `m`.
    pub fn estimate(&self) -> f64 {
        let m = self.num_registers as f64;
        let mut harmonic_sum = 0.0;
        for &r in self.registers.iter() {
            harmonic_sum += 1.0 / ((1u64 << r) as f64);
        }
        let raw = self.alpha * m * m / harmonic_sum;

        if raw <= self.small_range_threshold && self.num_zeros > 0 {
            return m * (m / self.num_zeros as f64).ln();
        }
        raw
    }

    /// Returns the configured precision.
    pub fn precision(&self) -> u8 {
        self.precision
    }

    /// Returns the number of registers (`2^precision`).
    pub fn num_registers(&self) -> usize {
        self.num_registers
    }

    /// Returns the value of one register.
    pub fn register(&self, index: usize) -> u8 {
        self.registers[index]
    }

    /// Returns true if no item has been added.
    pub fn is_empty(&self) -> bool {
        self.num_zeros == self.num_registers
    }
}

/// Bias-correction constant for a given register count.
fn alpha_for(precision: u8, num_registers: usize) -> f64 {
    if precision <= 16 {
        0.673
    } else if precision == 32 {
        0.697
    } else {
        0.7213 / (1.0 + 1.079 / num_registers as f64)
    }
}

/// Rank of a hash remainder: its bit length (1 + index of the highest set
/// bit), with the full hash width as sentinel for a zero remainder.
#[inline]
fn rank_of(remainder: u64) -> u8 {
    if remainder == 0 {
        HASH_BITS
    } else {
        (64 - remainder.leading_zeros()) as u8
    }
}
