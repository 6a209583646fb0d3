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

use std::path::PathBuf;

use jiff::Zoned;
use jiff::tz::TimeZone;

use crate::Error;
use crate::ErrorKind;
use crate::Rotation;
use crate::clock::Clock;
use crate::fs::Directory;
use crate::fs::LogFile;
use crate::writer::LogWriter;

const DEFAULT_EXTENSION: &str = ".log";

fn normalize_extension(extension: impl Into<String>) -> String {
    let extension = extension.into();
    if extension.starts_with('.') {
        extension
    } else {
        format!(".{extension}")
    }
}

fn normalize_suffix(suffix: impl Into<String>) -> Option<String> {
    let suffix = suffix.into();
    if suffix.is_empty() {
        None
    } else {
        Some(suffix)
    }
}

/// A builder to configure and create a [`DatedFile`] writer.
#[derive(Debug)]
pub struct DatedFileBuilder {
    // required
    basedir: PathBuf,

    // has default
    rotation: Rotation,
    suffix: Option<String>,
    extension: String,
    time_zone: Option<TimeZone>,
    clock: Clock,
}

impl DatedFileBuilder {
    /// Create a new builder writing into `basedir`.
    #[must_use]
    pub fn new(basedir: impl Into<PathBuf>) -> Self {
        Self {
            basedir: basedir.into(),
            rotation: Rotation::default(),
            suffix: None,
            extension: DEFAULT_EXTENSION.to_string(),
            time_zone: None,
            clock: Clock::DefaultClock,
        }
    }

    /// Set the rotation.
    ///
    /// Default to [`Rotation::Daily`].
    #[must_use]
    pub fn rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    /// Start a new log file every hour.
    #[must_use]
    pub fn rollover_hourly(self) -> Self {
        self.rotation(Rotation::Hourly)
    }

    /// Start a new log file every day at 00:00 in the configured time zone.
    #[must_use]
    pub fn rollover_daily(self) -> Self {
        self.rotation(Rotation::Daily)
    }

    /// Start a new log file every ISO 8601 week.
    #[must_use]
    pub fn rollover_weekly(self) -> Self {
        self.rotation(Rotation::Weekly)
    }

    /// Start a new log file every month.
    #[must_use]
    pub fn rollover_monthly(self) -> Self {
        self.rotation(Rotation::Monthly)
    }

    /// Start a new log file every year.
    #[must_use]
    pub fn rollover_yearly(self) -> Self {
        self.rotation(Rotation::Yearly)
    }

    /// Set the string placed between the date and the extension of the file name.
    ///
    /// An empty string means no suffix.
    #[must_use]
    pub fn filename_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = normalize_suffix(suffix);
        self
    }

    /// Set the file extension. A leading dot is added if missing.
    ///
    /// Default to `.log`.
    #[must_use]
    pub fn filename_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = normalize_extension(extension);
        self
    }

    /// Set the time zone used to compute the date part of the file name.
    ///
    /// Default to the system time zone.
    #[must_use]
    pub fn time_zone(mut self, time_zone: TimeZone) -> Self {
        self.time_zone = Some(time_zone);
        self
    }

    #[cfg(test)]
    fn clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Build the [`DatedFile`] writer.
    ///
    /// # Errors
    ///
    /// Return an error if the directory path is empty or the directory is not writable.
    pub fn build(self) -> Result<DatedFile, Error> {
        let Self {
            basedir,
            rotation,
            suffix,
            extension,
            time_zone,
            clock,
        } = self;

        let mut writer = DatedFile {
            directory: None,
            rotation,
            suffix,
            extension,
            time_zone,
            clock,
        };
        writer.set_directory(basedir)?;
        Ok(writer)
    }
}

/// A writer that appends lines to a file named after the current date.
///
/// The target file name is `<date><suffix><extension>` inside the configured directory, where
/// `<date>` is the current time formatted according to the [`Rotation`]. It is computed on every
/// write, so a new file is started as soon as the formatted date changes. Older files are never
/// touched again.
///
/// Writes are not coordinated: concurrent writers targeting the same file rely on the atomicity of
/// append-mode writes provided by the operating system.
///
/// # Examples
///
/// ```
/// use logforth_dated_file::DatedFile;
/// use logforth_dated_file::LogWriter;
///
/// let dir = tempfile::tempdir().unwrap();
/// let writer = DatedFile::builder(dir.path())
///     .rollover_daily()
///     .filename_suffix("-access")
///     .build()
///     .unwrap();
///
/// writer.write("GET /index.html 200").unwrap();
/// ```
#[derive(Debug)]
pub struct DatedFile {
    directory: Option<Directory>,
    rotation: Rotation,
    suffix: Option<String>,
    extension: String,
    time_zone: Option<TimeZone>,
    clock: Clock,
}

impl Default for DatedFile {
    fn default() -> Self {
        Self::new()
    }
}

impl DatedFile {
    /// Create a writer without a directory.
    ///
    /// [`DatedFile::set_directory`] must be called before the first write.
    pub fn new() -> Self {
        Self {
            directory: None,
            rotation: Rotation::default(),
            suffix: None,
            extension: DEFAULT_EXTENSION.to_string(),
            time_zone: None,
            clock: Clock::DefaultClock,
        }
    }

    /// Create a [`DatedFileBuilder`] writing into `basedir`.
    #[must_use]
    pub fn builder(basedir: impl Into<PathBuf>) -> DatedFileBuilder {
        DatedFileBuilder::new(basedir)
    }

    /// Set the directory log files are written into.
    ///
    /// # Errors
    ///
    /// Return a [`ErrorKind::ConfigInvalid`] error if the path is empty, does not exist, is not a
    /// directory or is not writable. The previously configured directory is kept in that case.
    pub fn set_directory(&mut self, path: impl Into<PathBuf>) -> Result<&mut Self, Error> {
        let directory = Directory::new(path)?;
        if !directory.is_writable() {
            return Err(
                Error::new(ErrorKind::ConfigInvalid, "log directory is not writable")
                    .with_context("path", directory.path().display()),
            );
        }

        self.directory = Some(directory);
        Ok(self)
    }

    /// Return the configured directory, if any.
    pub fn directory(&self) -> Option<&Directory> {
        self.directory.as_ref()
    }

    /// Set the file extension. A leading dot is added if missing.
    pub fn set_extension(&mut self, extension: impl Into<String>) -> &mut Self {
        self.extension = normalize_extension(extension);
        self
    }

    /// Return the file extension, always starting with a dot.
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Set the rotation.
    pub fn set_rotation(&mut self, rotation: Rotation) -> &mut Self {
        self.rotation = rotation;
        self
    }

    /// Return the rotation.
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Set the file name suffix. An empty string clears it.
    pub fn set_suffix(&mut self, suffix: impl Into<String>) -> &mut Self {
        self.suffix = normalize_suffix(suffix);
        self
    }

    /// Return the file name suffix, if any.
    pub fn suffix(&self) -> Option<&str> {
        self.suffix.as_deref()
    }

    /// Set the time zone used to compute the date part of the file name.
    pub fn set_time_zone(&mut self, time_zone: TimeZone) -> &mut Self {
        self.time_zone = Some(time_zone);
        self
    }

    /// Return the configured time zone. `None` means the system time zone.
    pub fn time_zone(&self) -> Option<&TimeZone> {
        self.time_zone.as_ref()
    }

    /// Return the file name used for writes happening at `date`.
    pub fn file_name_at(&self, date: &Zoned) -> String {
        let date = self.rotation.format_date(date);
        let suffix = self.suffix.as_deref().unwrap_or_default();
        format!("{date}{suffix}{}", self.extension)
    }

    /// Return the path the next write would go to.
    ///
    /// # Errors
    ///
    /// Return a [`ErrorKind::NotConfigured`] error if no directory is set.
    pub fn current_path(&self) -> Result<PathBuf, Error> {
        let directory = self.configured_directory()?;
        let now = self.clock.now(self.time_zone.as_ref());
        Ok(directory.path().join(self.file_name_at(&now)))
    }

    fn configured_directory(&self) -> Result<&Directory, Error> {
        self.directory
            .as_ref()
            .ok_or_else(|| Error::new(ErrorKind::NotConfigured, "log directory is not set"))
    }
}

impl LogWriter for DatedFile {
    fn write(&self, data: &str) -> Result<(), Error> {
        let file = LogFile::new(self.current_path()?);
        if !file.exists() {
            file.create()?;
            log::debug!("created log file {}", file.path().display());
        }

        let mut line = String::with_capacity(data.len() + 1);
        line.push_str(data);
        line.push('\n');
        file.append(line.as_bytes())?;
        log::trace!("appended {} bytes to {}", line.len(), file.path().display());
        Ok(())
    }
}
