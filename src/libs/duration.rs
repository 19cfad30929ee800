//! Claimed durations and the in/out duration calculator.
//!
//! A [`ClaimDuration`] is a whole number of minutes rendered as `H:MM`
//! (hours unpadded, minutes two digits). It is what every entry stores and
//! what a month total is summed from.
//!
//! ## Overnight spans
//!
//! Both clock times are placed on the same reference day. When the out time
//! is at or before the in time the shift is taken to cross midnight and the
//! out time moves to the next day. Equal times therefore claim a full
//! `24:00`: a zero-length shift is never a claim anyone files.
//!
//! ```rust
//! use timeclaim::libs::duration::calculate_str;
//!
//! assert_eq!(calculate_str("08:00", "12:30").unwrap().to_string(), "4:30");
//! assert_eq!(calculate_str("23:30", "00:15").unwrap().to_string(), "0:45");
//! assert_eq!(calculate_str("09:00", "09:00").unwrap().to_string(), "24:00");
//! ```

use super::error::FormatError;
use super::time::{parse_digits, ClockTime};
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClaimDuration {
    minutes: u64,
}

impl ClaimDuration {
    pub const ZERO: ClaimDuration = ClaimDuration { minutes: 0 };

    pub fn from_minutes(minutes: u64) -> Self {
        Self { minutes }
    }

    pub fn from_hours_minutes(hours: u64, minutes: u64) -> Self {
        Self { minutes: hours * 60 + minutes }
    }

    /// Negative spans clamp to zero; seconds are dropped.
    pub fn from_chrono(duration: Duration) -> Self {
        Self {
            minutes: duration.num_minutes().max(0) as u64,
        }
    }

    pub fn total_minutes(&self) -> u64 {
        self.minutes
    }

    pub fn hours(&self) -> u64 {
        self.minutes / 60
    }

    pub fn minutes(&self) -> u64 {
        self.minutes % 60
    }
}

impl fmt::Display for ClaimDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.hours(), self.minutes())
    }
}

impl FromStr for ClaimDuration {
    type Err = FormatError;

    /// Parses `H:MM` where the hour part has any number of digits.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || FormatError::Duration(s.to_string());
        let (hours, minutes) = s.split_once(':').ok_or_else(invalid)?;
        if minutes.len() != 2 {
            return Err(invalid());
        }
        let hours = parse_digits(hours).ok_or_else(invalid)?;
        let minutes = parse_digits(minutes).filter(|m| *m < 60).ok_or_else(invalid)?;
        Ok(Self::from_hours_minutes(hours as u64, minutes as u64))
    }
}

impl Add for ClaimDuration {
    type Output = ClaimDuration;

    fn add(self, rhs: Self) -> Self::Output {
        ClaimDuration {
            minutes: self.minutes + rhs.minutes,
        }
    }
}

impl Sum for ClaimDuration {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(ClaimDuration::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a ClaimDuration> for ClaimDuration {
    fn sum<I: Iterator<Item = &'a ClaimDuration>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl Serialize for ClaimDuration {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClaimDuration {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Elapsed time from `time_in` to `time_out`, crossing midnight when
/// `time_out` is not after `time_in`.
pub fn calculate(time_in: ClockTime, time_out: ClockTime) -> ClaimDuration {
    let reference = NaiveDate::default();
    let start = reference.and_time(time_in.as_naive());
    let mut end = reference.and_time(time_out.as_naive());
    if end <= start {
        end += Duration::days(1);
    }
    ClaimDuration::from_chrono(end.signed_duration_since(start))
}

/// [`calculate`] over `HH:MM` strings.
pub fn calculate_str(time_in: &str, time_out: &str) -> Result<ClaimDuration, FormatError> {
    Ok(calculate(time_in.parse()?, time_out.parse()?))
}
