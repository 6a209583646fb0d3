// Copyright 2024 FastLabs Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fs;
use std::str::FromStr;
use std::sync::Arc;
use std::thread;

use logforth_dated_file::DatedFile;
use logforth_dated_file::ErrorKind;
use logforth_dated_file::LogWriter;
use logforth_dated_file::Rotation;
use tempfile::TempDir;

fn files_in(temp_dir: &TempDir) -> Vec<String> {
    fs::read_dir(temp_dir.path())
        .unwrap()
        .filter_map(|entry| entry.ok()?.file_name().into_string().ok())
        .collect()
}

#[test]
fn test_write_lands_in_dated_file() {
    let temp_dir = TempDir::new().expect("failed to create a temporary directory");
    let writer = DatedFile::builder(temp_dir.path())
        .rotation(Rotation::from_str("year").unwrap())
        .filename_suffix("-access")
        .filename_extension("log")
        .build()
        .unwrap();

    let expected = writer.current_path().unwrap();
    writer.write("hello").unwrap();
    writer.write("world").unwrap();

    let name = expected.file_name().unwrap().to_str().unwrap();
    let year = name.strip_suffix("-access.log").unwrap();
    assert_eq!(year.len(), 4);
    assert!(year.chars().all(|c| c.is_ascii_digit()));
    assert_eq!(files_in(&temp_dir), [name]);
    assert_eq!(fs::read_to_string(&expected).unwrap(), "hello\nworld\n");
}

#[test]
fn test_lines_are_written_verbatim() {
    let temp_dir = TempDir::new().expect("failed to create a temporary directory");
    let writer = DatedFile::builder(temp_dir.path())
        .rollover_monthly()
        .build()
        .unwrap();

    let path = writer.current_path().unwrap();
    writer.write("").unwrap();
    writer.write("  padded\twith tabs  ").unwrap();
    writer.write("{\"not\": \"parsed\"}").unwrap();

    assert_eq!(
        fs::read_to_string(path).unwrap(),
        "\n  padded\twith tabs  \n{\"not\": \"parsed\"}\n"
    );
}

#[test]
fn test_unconfigured_writer_touches_nothing() {
    let temp_dir = TempDir::new().expect("failed to create a temporary directory");
    let writer = DatedFile::new();

    let err = writer.write("dropped").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotConfigured);
    assert!(files_in(&temp_dir).is_empty());
}

#[test]
fn test_non_writable_directory_is_rejected() {
    let temp_dir = TempDir::new().expect("failed to create a temporary directory");

    let err = DatedFile::builder(temp_dir.path().join("missing"))
        .build()
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ConfigInvalid);

    let file_path = temp_dir.path().join("plain-file");
    fs::write(&file_path, "").unwrap();
    let mut writer = DatedFile::new();
    let err = writer.set_directory(&file_path).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
    assert!(writer.directory().is_none());
}

#[test]
fn test_shared_writer_across_threads() {
    let temp_dir = TempDir::new().expect("failed to create a temporary directory");
    let writer = Arc::new(
        DatedFile::builder(temp_dir.path())
            .rollover_yearly()
            .build()
            .unwrap(),
    );
    let path = writer.current_path().unwrap();

    let handles = (0..4)
        .map(|i| {
            let writer = writer.clone();
            thread::spawn(move || {
                for j in 0..25 {
                    writer.write(&format!("thread {i} line {j}")).unwrap();
                }
            })
        })
        .collect::<Vec<_>>();
    for handle in handles {
        handle.join().unwrap();
    }

    let content = fs::read_to_string(path).unwrap();
    assert_eq!(content.lines().count(), 100);
    assert!(content.lines().all(|line| line.starts_with("thread ")));
}
