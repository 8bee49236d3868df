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

//! Address extraction from newline-delimited JSON access logs.
//!
//! Each log line holds one JSON object. Lines that are blank, fail to parse,
//! lack the requested field, or hold a non-string or empty value are skipped
//! silently; the sketches downstream only ever see valid address strings.

use std::fs::File;
use std::io::BufRead;
use std::io::BufReader;
use std::path::Path;

use log::debug;
use serde_json::Value;

use crate::error::Error;
use crate::hll::HllSketch;

/// JSON field holding the client address in access logs.
pub const DEFAULT_ADDRESS_FIELD: &str = "remote_addr";

/// Returns an iterator over the address values of a newline-delimited JSON log.
///
/// Opening the file can fail with [`Error::Io`]; once open, unreadable or
/// malformed lines are dropped at this boundary and never surfaced as errors.
pub fn read_addresses(
    path: &Path,
    field: &str,
) -> Result<impl Iterator<Item = String>, Error> {
    let file = File::open(path)?;
    let field = field.to_string();
    let lines = BufReader::new(file).lines();

    Ok(lines.filter_map(move |line| {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                debug!("skipping unreadable log line: {err}");
                return None;
            }
        };
        let line = line.trim();
        if line.is_empty() {
            return None;
        }
        let record: Value = match serde_json::from_str(line) {
            Ok(record) => record,
            Err(err) => {
                debug!("skipping malformed log line: {err}");
                return None;
            }
        };
        match record.get(field.as_str()).and_then(Value::as_str) {
            Some(addr) if !addr.is_empty() => Some(addr.to_string()),
            _ => {
                debug!("skipping log line without string field {field:?}");
                None
            }
        }
    }))
}

/// Estimates the number of distinct addresses in a log.
///
/// Folds the valid address stream of [`read_addresses`] into an [`HllSketch`]
/// of the given precision and returns its estimate.
pub fn estimate_distinct_addresses(
    path: &Path,
    field: &str,
    precision: u8,
) -> Result<f64, Error> {
    let mut sketch = HllSketch::new(precision)?;
    for addr in read_addresses(path, field)? {
        sketch.update(&addr);
    }
    Ok(sketch.estimate())
}
