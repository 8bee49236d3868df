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

//! Batch classification of candidate items against a populated filter.

use std::collections::HashMap;

use crate::bloom::BloomFilter;

/// Outcome of a membership probe for one candidate item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// The filter has (probably) seen this item before.
    AlreadyPresent,
    /// The filter has definitely not seen this item.
    Unique,
}

/// Classifies each candidate against the filter.
///
/// Absent candidates are canonicalized to the empty string before lookup, so
/// a batch containing `None` reports under the `""` key. Candidates with the
/// same canonical string collapse to a single entry.
pub fn classify_batch(
    filter: &BloomFilter,
    candidates: &[Option<&str>],
) -> HashMap<String, Classification> {
    let mut report = HashMap::with_capacity(candidates.len());
    for candidate in candidates {
        let candidate = candidate.unwrap_or("");
        let classification = if filter.contains(candidate) {
            Classification::AlreadyPresent
        } else {
            Classification::Unique
        };
        report.insert(candidate.to_string(), classification);
    }
    report
}
