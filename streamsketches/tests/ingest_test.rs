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

use std::fs;
use std::path::PathBuf;

use streamsketches::Error;
use streamsketches::ingest::DEFAULT_ADDRESS_FIELD;
use streamsketches::ingest::estimate_distinct_addresses;
use streamsketches::ingest::read_addresses;

fn write_temp_log(name: &str, contents: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!("streamsketches-{}-{name}", std::process::id()));
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_reads_valid_lines_in_order() {
    let log = concat!(
        r#"{"remote_addr": "10.0.0.1", "status": 200}"#,
        "\n",
        r#"{"remote_addr": "10.0.0.2"}"#,
        "\n",
        r#"{"remote_addr": "10.0.0.1"}"#,
        "\n",
    );
    let path = write_temp_log("valid.log", log);

    let addrs: Vec<String> = read_addresses(&path, DEFAULT_ADDRESS_FIELD)
        .unwrap()
        .collect();
    assert_eq!(addrs, ["10.0.0.1", "10.0.0.2", "10.0.0.1"]);

    let _ = fs::remove_file(&path);
}

#[test]
fn test_skips_invalid_lines_silently() {
    let log = concat!(
        r#"{"remote_addr": "10.0.0.1"}"#,
        "\n",
        "\n",                                     // blank line
        "not json at all\n",                      // malformed
        r#"{"status": 404}"#,
        "\n",                                     // missing field
        r#"{"remote_addr": 42}"#,
        "\n",                                     // not a string
        r#"{"remote_addr": ""}"#,
        "\n",                                     // empty value
        r#"{"remote_addr": "10.0.0.2"}"#,
        "\n",
    );
    let path = write_temp_log("mixed.log", log);

    let addrs: Vec<String> = read_addresses(&path, DEFAULT_ADDRESS_FIELD)
        .unwrap()
        .collect();
    assert_eq!(addrs, ["10.0.0.1", "10.0.0.2"]);

    let _ = fs::remove_file(&path);
}

#[test]
fn test_missing_file_is_an_io_error() {
    let mut path = std::env::temp_dir();
    path.push("streamsketches-does-not-exist.log");
    assert!(matches!(
        read_addresses(&path, DEFAULT_ADDRESS_FIELD),
        Err(Error::Io(_))
    ));
}

#[test]
fn test_custom_field_name() {
    let log = concat!(
        r#"{"client": "fe80::1", "remote_addr": "ignored"}"#,
        "\n",
        r#"{"client": "fe80::2"}"#,
        "\n",
    );
    let path = write_temp_log("custom.log", log);

    let addrs: Vec<String> = read_addresses(&path, "client").unwrap().collect();
    assert_eq!(addrs, ["fe80::1", "fe80::2"]);

    let _ = fs::remove_file(&path);
}

#[test]
fn test_estimate_distinct_addresses_small_log() {
    // Three distinct addresses across five valid lines plus one junk line.
    let log = concat!(
        r#"{"remote_addr": "10.0.0.1"}"#,
        "\n",
        r#"{"remote_addr": "10.0.0.2"}"#,
        "\n",
        r#"{"remote_addr": "10.0.0.1"}"#,
        "\n",
        "garbage\n",
        r#"{"remote_addr": "10.0.0.3"}"#,
        "\n",
        r#"{"remote_addr": "10.0.0.3"}"#,
        "\n",
    );
    let path = write_temp_log("estimate.log", log);

    let estimate = estimate_distinct_addresses(&path, DEFAULT_ADDRESS_FIELD, 14).unwrap();
    assert!(
        (estimate - 3.0).abs() < 0.5,
        "estimate {estimate} too far from 3"
    );

    let _ = fs::remove_file(&path);
}

#[test]
fn test_estimate_rejects_invalid_precision() {
    let path = write_temp_log("precision.log", "{}\n");
    assert!(matches!(
        estimate_distinct_addresses(&path, DEFAULT_ADDRESS_FIELD, 0),
        Err(Error::InvalidArgument(_))
    ));
    let _ = fs::remove_file(&path);
}
