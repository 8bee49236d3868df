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

//! HyperLogLog-style sketch for distinct-count estimation.
//!
//! The sketch keeps `2^precision` one-byte registers and estimates the number
//! of distinct items added, independent of how many times each item repeats.
//! Low cardinalities are served by a linear-counting correction over the
//! still-zero registers; the harmonic-mean estimate takes over above
//! `2.5 * 2^precision`.
//!
//! # Usage
//!
//! ```rust
//! # use streamsketches::hll::HllSketch;
//! let mut sketch = HllSketch::new(14).unwrap();
//! for i in 0..1000u32 {
//!     sketch.update(&i.to_string());
//! }
//! let estimate = sketch.estimate();
//! assert!((estimate - 1000.0).abs() / 1000.0 < 0.05);
//! ```

mod sketch;
pub use self::sketch::HllSketch;
