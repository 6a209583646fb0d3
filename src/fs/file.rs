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

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use crate::Error;

/// A handle to a single log file.
///
/// No file descriptor is held between calls; every operation opens the file anew.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogFile {
    path: PathBuf,
}

impl LogFile {
    /// Create a handle for `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Return the path of this file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Return whether a file exists at this path.
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Create the file if it is missing. An existing file is left as is.
    pub fn create(&self) -> Result<(), Error> {
        OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)
            .map(drop)
            .map_err(|err| {
                Error::from_io_error(err)
                    .with_context("action", "create")
                    .with_context("path", self.path.display())
            })
    }

    /// Append `bytes` to the end of the file with a single write.
    pub fn append(&self, bytes: &[u8]) -> Result<(), Error> {
        let mut file = OpenOptions::new()
            .append(true)
            .open(&self.path)
            .map_err(|err| {
                Error::from_io_error(err)
                    .with_context("action", "open")
                    .with_context("path", self.path.display())
            })?;

        file.write_all(bytes).map_err(|err| {
            Error::from_io_error(err)
                .with_context("action", "append")
                .with_context("path", self.path.display())
        })
    }
}
