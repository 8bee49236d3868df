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

//! Stable hashing for sketch index derivation.
//!
//! `std::hash::DefaultHasher` is randomized per process; both sketches require
//! the same item to map to the same cells on every run, so all index and
//! register derivation goes through an explicit seeded hash instead.

use std::hash::Hasher;

use twox_hash::XxHash64;

/// Seed for item hashes that are not part of a seeded family.
pub(crate) const DEFAULT_UPDATE_SEED: u64 = 9001;

/// 64-bit stable hash of `data` under `seed`.
///
/// Fixed for all time: changing the algorithm or the seeding scheme would
/// silently remap every previously derived index.
#[inline]
pub(crate) fn hash64(data: &[u8], seed: u64) -> u64 {
    let mut hasher = XxHash64::with_seed(seed);
    hasher.write(data);
    hasher.finish()
}
