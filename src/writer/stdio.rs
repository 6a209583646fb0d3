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

use std::io;
use std::io::Write;

use crate::Error;
use crate::writer::LogWriter;

fn line(data: &str) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(data.len() + 1);
    bytes.extend_from_slice(data.as_bytes());
    bytes.push(b'\n');
    bytes
}

/// A writer that prints lines to stdout.
///
/// # Examples
///
/// ```
/// use logforth_dated_file::LogWriter;
/// use logforth_dated_file::writer::Stdout;
///
/// Stdout::default().write("hello").unwrap();
/// ```
#[derive(Debug, Default)]
#[non_exhaustive]
pub struct Stdout {}

impl LogWriter for Stdout {
    fn write(&self, data: &str) -> Result<(), Error> {
        io::stdout()
            .lock()
            .write_all(&line(data))
            .map_err(Error::from_io_error)
    }
}

/// A writer that prints lines to stderr.
#[derive(Debug, Default)]
#[non_exhaustive]
pub struct Stderr {}

impl LogWriter for Stderr {
    fn write(&self, data: &str) -> Result<(), Error> {
        io::stderr()
            .lock()
            .write_all(&line(data))
            .map_err(Error::from_io_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_is_newline_terminated() {
        assert_eq!(line("hello"), b"hello\n");
        assert_eq!(line(""), b"\n");
    }

    #[test]
    fn test_boxed_writers() {
        let writers: Vec<Box<dyn LogWriter>> =
            vec![Stdout::default().into(), Stderr::default().into()];
        for writer in &writers {
            writer.write("written by a boxed writer").unwrap();
        }
    }
}
