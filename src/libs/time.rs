//! Clock time values and 12/24-hour conversion.
//!
//! Entries store wall-clock times on a 24-hour scale (`HH:MM`, zero-padded).
//! Claim documents and listings show them on a 12-hour scale (`H:MM AM`).
//! Both conversions are strict: anything that is not exactly one of the two
//! shapes is a [`FormatError`].
//!
//! ```rust
//! use timeclaim::libs::time::{to_12_hour, to_24_hour};
//!
//! assert_eq!(to_12_hour("00:05").unwrap(), "12:05 AM");
//! assert_eq!(to_12_hour("12:30").unwrap(), "12:30 PM");
//! assert_eq!(to_24_hour("8:00 AM").unwrap(), "08:00");
//! assert_eq!(to_24_hour("12:00 AM").unwrap(), "00:00");
//! ```

use super::error::FormatError;
use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A wall-clock time with minute resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime(NaiveTime);

impl ClockTime {
    pub fn new(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(Self)
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    pub fn as_naive(&self) -> NaiveTime {
        self.0
    }

    /// Renders the time as `H:MM AM|PM`.
    pub fn to_12_hour(&self) -> String {
        let (designator, hour) = match self.hour() {
            0 => ("AM", 12),
            h @ 1..=11 => ("AM", h),
            12 => ("PM", 12),
            h => ("PM", h - 12),
        };
        format!("{}:{:02} {}", hour, self.minute(), designator)
    }

    /// Parses `H:MM AM|PM`.
    pub fn parse_12_hour(display: &str) -> Result<Self, FormatError> {
        let invalid = || FormatError::Time(display.to_string());

        let (clock, designator) = display.split_once(' ').ok_or_else(invalid)?;
        let (hour, minute) = clock.split_once(':').ok_or_else(invalid)?;
        if hour.is_empty() || hour.len() > 2 || minute.len() != 2 {
            return Err(invalid());
        }
        let hour = parse_digits(hour).ok_or_else(invalid)?;
        let minute = parse_digits(minute).ok_or_else(invalid)?;
        if !(1..=12).contains(&hour) {
            return Err(invalid());
        }

        let hour = match designator.to_ascii_uppercase().as_str() {
            "AM" if hour == 12 => 0,
            "AM" => hour,
            "PM" if hour == 12 => 12,
            "PM" => hour + 12,
            _ => return Err(invalid()),
        };
        Self::new(hour, minute).ok_or_else(invalid)
    }

    /// Accepts either `HH:MM` or `H:MM AM|PM`.
    pub fn parse_flexible(input: &str) -> Result<Self, FormatError> {
        let input = input.trim();
        if input.contains(' ') {
            Self::parse_12_hour(input)
        } else {
            input.parse()
        }
    }
}

impl FromStr for ClockTime {
    type Err = FormatError;

    /// Parses a zero-padded 24-hour `HH:MM` string.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || FormatError::Time(s.to_string());

        let (hour, minute) = s.split_once(':').ok_or_else(invalid)?;
        if hour.len() != 2 || minute.len() != 2 {
            return Err(invalid());
        }
        let hour = parse_digits(hour).ok_or_else(invalid)?;
        let minute = parse_digits(minute).ok_or_else(invalid)?;
        Self::new(hour, minute).ok_or_else(invalid)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Converts `HH:MM` into `H:MM AM|PM`.
pub fn to_12_hour(time24: &str) -> Result<String, FormatError> {
    Ok(time24.parse::<ClockTime>()?.to_12_hour())
}

/// Converts `H:MM AM|PM` into `HH:MM`.
pub fn to_24_hour(display: &str) -> Result<String, FormatError> {
    Ok(ClockTime::parse_12_hour(display)?.to_string())
}

/// Parses an ASCII digit run; signs and whitespace are rejected.
pub(crate) fn parse_digits(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}
