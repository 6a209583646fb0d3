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

use std::path::Path;
use std::path::PathBuf;

use crate::Error;
use crate::ErrorKind;

/// A handle to the directory log files are written into.
///
/// Creating a handle does not touch the file system; use [`Directory::is_writable`] to check that
/// the directory can actually receive log files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directory {
    path: PathBuf,
}

impl Directory {
    /// Create a handle for `path`.
    ///
    /// # Errors
    ///
    /// Return an error if `path` is empty.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, Error> {
        let path = path.into();
        if path.as_os_str().is_empty() {
            return Err(Error::new(
                ErrorKind::ConfigInvalid,
                "log directory path is empty",
            ));
        }
        Ok(Self { path })
    }

    /// Return the path of this directory.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Return whether the path exists, is a directory and can be written by this process.
    pub fn is_writable(&self) -> bool {
        self.path.is_dir() && can_write(&self.path)
    }
}

#[cfg(unix)]
fn can_write(path: &Path) -> bool {
    use std::ffi::CString;
    use std::os::unix::ffi::OsStrExt;

    let Ok(path) = CString::new(path.as_os_str().as_bytes()) else {
        return false;
    };
    // SAFETY: `path` is a valid NUL-terminated string that outlives the call.
    unsafe { libc::access(path.as_ptr(), libc::W_OK) == 0 }
}

#[cfg(not(unix))]
fn can_write(path: &Path) -> bool {
    std::fs::metadata(path)
        .map(|metadata| !metadata.permissions().readonly())
        .unwrap_or(false)
}
