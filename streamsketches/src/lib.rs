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

//! Probabilistic sketches for streams of discrete items.
//!
//! The crate provides two independent fixed-memory structures:
//!
//! - [`bloom::BloomFilter`] answers "has this item been added?" with no false
//!   negatives and a tunable false-positive rate.
//! - [`hll::HllSketch`] estimates the number of distinct items added, with
//!   bounded statistical error independent of how often each item repeats.
//!
//! Both map items to internal state through stable, seeded hashing, so a given
//! item touches the same cells on every run and on every platform. Neither
//! structure stores the items themselves.
//!
//! Instances are single-owner and not thread-safe: callers that ingest from
//! multiple threads must serialize all mutating calls externally.

pub mod bloom;
pub mod error;
mod hash;
pub mod hll;
pub mod ingest;

pub use self::error::Error;
