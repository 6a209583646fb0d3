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

use std::fmt;
use std::str::FromStr;

use jiff::Zoned;

use crate::Error;
use crate::ErrorKind;

/// Defines how often the target log file changes.
///
/// Each rotation maps to the date pattern that forms the leading part of the file name. Once the
/// formatted date changes, writes go to a new file and the previous one is left untouched.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Rotation {
    /// A new file every hour, e.g. `2024-03-15 14`.
    Hourly,
    /// A new file every day, e.g. `2024-03-15`.
    #[default]
    Daily,
    /// A new file every ISO 8601 week, e.g. `2024-W11`.
    Weekly,
    /// A new file every month, e.g. `2024-03`.
    Monthly,
    /// A new file every year, e.g. `2024`.
    Yearly,
}

impl Rotation {
    /// The strftime pattern for this rotation.
    pub fn date_format(&self) -> &'static str {
        match *self {
            Rotation::Hourly => "%Y-%m-%d %H",
            Rotation::Daily => "%Y-%m-%d",
            // ISO week-based year, so that 2024-12-30 is in 2025-W01.
            Rotation::Weekly => "%G-W%V",
            Rotation::Monthly => "%Y-%m",
            Rotation::Yearly => "%Y",
        }
    }

    /// Formats `date` into the date component of a log file name.
    pub fn format_date(&self, date: &Zoned) -> String {
        date.strftime(self.date_format()).to_string()
    }

    fn as_str(&self) -> &'static str {
        match *self {
            Rotation::Hourly => "hourly",
            Rotation::Daily => "daily",
            Rotation::Weekly => "weekly",
            Rotation::Monthly => "monthly",
            Rotation::Yearly => "yearly",
        }
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Rotation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hour" | "hourly" => Ok(Rotation::Hourly),
            "day" | "daily" => Ok(Rotation::Daily),
            "week" | "weekly" => Ok(Rotation::Weekly),
            "month" | "monthly" => Ok(Rotation::Monthly),
            "year" | "yearly" => Ok(Rotation::Yearly),
            _ => Err(Error::new(ErrorKind::ConfigInvalid, "unknown rotation")
                .with_context("rotation", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use jiff::Zoned;

    use super::Rotation;

    #[test]
    fn test_format_date() {
        let date = Zoned::from_str("2024-03-15T14:05:09+00:00[UTC]").unwrap();

        assert_eq!(Rotation::Hourly.format_date(&date), "2024-03-15 14");
        assert_eq!(Rotation::Daily.format_date(&date), "2024-03-15");
        assert_eq!(Rotation::Weekly.format_date(&date), "2024-W11");
        assert_eq!(Rotation::Monthly.format_date(&date), "2024-03");
        assert_eq!(Rotation::Yearly.format_date(&date), "2024");
    }

    #[test]
    fn test_format_date_pads_single_digits() {
        let date = Zoned::from_str("2025-01-02T03:00:00+00:00[UTC]").unwrap();

        assert_eq!(Rotation::Hourly.format_date(&date), "2025-01-02 03");
        assert_eq!(Rotation::Weekly.format_date(&date), "2025-W01");
        assert_eq!(Rotation::Monthly.format_date(&date), "2025-01");
    }

    #[test]
    fn test_weekly_uses_iso_week_year() {
        let date = Zoned::from_str("2024-12-30T10:00:00+00:00[UTC]").unwrap();
        assert_eq!(Rotation::Weekly.format_date(&date), "2025-W01");

        let date = Zoned::from_str("2021-01-03T10:00:00+00:00[UTC]").unwrap();
        assert_eq!(Rotation::Weekly.format_date(&date), "2020-W53");
    }

    #[test]
    fn test_default_is_daily() {
        assert_eq!(Rotation::default(), Rotation::Daily);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Rotation::from_str("hour").unwrap(), Rotation::Hourly);
        assert_eq!(Rotation::from_str("Daily").unwrap(), Rotation::Daily);
        assert_eq!(Rotation::from_str(" WEEK ").unwrap(), Rotation::Weekly);
        assert_eq!(Rotation::from_str("monthly").unwrap(), Rotation::Monthly);
        assert_eq!(Rotation::from_str("year").unwrap(), Rotation::Yearly);

        let err = Rotation::from_str("Y-m-d").unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::ConfigInvalid);
    }

    #[test]
    fn test_display_parses_back() {
        for rotation in [
            Rotation::Hourly,
            Rotation::Daily,
            Rotation::Weekly,
            Rotation::Monthly,
            Rotation::Yearly,
        ] {
            assert_eq!(Rotation::from_str(&rotation.to_string()).unwrap(), rotation);
        }
    }
}
