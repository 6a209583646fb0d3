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

//! Append lines of text to log files named after the current date.
//!
//! # Overview
//!
//! A [`DatedFile`] writer is configured with a directory, a [`Rotation`], an optional file name
//! suffix and a file extension. Every [`LogWriter::write`] computes the file name from the current
//! date, creates the file if needed and appends the line. When the formatted date changes, e.g. at
//! midnight for [`Rotation::Daily`], the next write goes to a new file.
//!
//! Old files are never removed, and writes from several writers to the same file are not
//! coordinated.
//!
//! # Examples
//!
//! ```
//! use logforth_dated_file::DatedFile;
//! use logforth_dated_file::LogWriter;
//! use logforth_dated_file::Rotation;
//!
//! let dir = tempfile::tempdir().unwrap();
//!
//! let mut writer = DatedFile::new();
//! writer
//!     .set_directory(dir.path())
//!     .unwrap()
//!     .set_rotation(Rotation::Hourly)
//!     .set_suffix("-app")
//!     .set_extension("txt");
//!
//! writer.write("service started").unwrap();
//! ```

pub mod fs;
pub mod writer;

mod clock;
mod error;
mod rotation;

pub use self::error::Error;
pub use self::error::ErrorKind;
pub use self::rotation::Rotation;
pub use self::writer::DatedFile;
pub use self::writer::DatedFileBuilder;
pub use self::writer::LogWriter;
