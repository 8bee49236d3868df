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

//! Bloom filter implementation for approximate set membership.
//!
//! The filter answers "has this item been added?" over a fixed-size bit array
//! with no false negatives and a false-positive rate governed by the filter
//! size, the number of hash functions, and the number of distinct items added.
//! There is no way to remove an item; that is a standard property of the
//! structure, not an omission.
//!
//! # Usage
//!
//! ```rust
//! # use streamsketches::bloom::BloomFilter;
//! let mut filter = BloomFilter::new(1000, 3).unwrap();
//! filter.update("apple");
//! assert!(filter.contains("apple"));
//! assert!(!filter.contains("pear"));
//! ```
//!
//! # Batch classification
//!
//! ```rust
//! # use streamsketches::bloom::{classify_batch, BloomFilter, Classification};
//! let mut filter = BloomFilter::new(1000, 3).unwrap();
//! filter.update("apple");
//! let report = classify_batch(&filter, &[Some("apple"), Some("pear")]);
//! assert_eq!(report["apple"], Classification::AlreadyPresent);
//! assert_eq!(report["pear"], Classification::Unique);
//! ```

mod classify;
pub use self::classify::Classification;
pub use self::classify::classify_batch;

mod sketch;
pub use self::sketch::BloomFilter;
