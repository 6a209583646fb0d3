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

//! Sinks that accept lines of text.

use std::fmt;

use crate::Error;

mod dated_file;
mod stdio;

pub use self::dated_file::DatedFile;
pub use self::dated_file::DatedFileBuilder;
pub use self::stdio::Stderr;
pub use self::stdio::Stdout;

/// A sink that lines of text can be written to.
///
/// Implementors decide where the line goes; callers only depend on this trait so that sinks can be
/// swapped without touching the call sites.
pub trait LogWriter: fmt::Debug + Send + Sync + 'static {
    /// Write `data` as one line.
    ///
    /// The implementation terminates the line; `data` should not end with a newline.
    fn write(&self, data: &str) -> Result<(), Error>;
}

impl<T: LogWriter> From<T> for Box<dyn LogWriter> {
    fn from(value: T) -> Self {
        Box::new(value)
    }
}
