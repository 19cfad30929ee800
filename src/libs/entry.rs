//! Time entries and the entry validator.
//!
//! An [`EntryDraft`] is what the user typed. [`EntryDraft::validate`] turns
//! it into a [`TimeEntry`] with a fresh id and a computed duration, or
//! rejects it. The draft is never committed anywhere when validation fails.
//!
//! The session label is passed through as given. It is not checked against
//! the clock times, so a `PM` entry with morning hours is accepted.

use super::date::{format_canonical, format_display, parse_canonical};
use super::duration::{calculate, ClaimDuration};
use super::error::{ClaimResult, FormatError, ValidationError};
use super::time::ClockTime;
use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// User-chosen half-day label.
#[derive(ValueEnum, Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum Session {
    #[default]
    #[serde(rename = "AM")]
    #[value(name = "am")]
    Am,
    #[serde(rename = "PM")]
    #[value(name = "pm")]
    Pm,
}

impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Session::Am => write!(f, "AM"),
            Session::Pm => write!(f, "PM"),
        }
    }
}

impl FromStr for Session {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "AM" => Ok(Session::Am),
            "PM" => Ok(Session::Pm),
            _ => Err(FormatError::Session(s.to_string())),
        }
    }
}

/// A candidate entry as entered, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryDraft {
    /// Canonical `YYYY-MM-DD`, empty when not entered.
    pub date: String,
    pub session: Session,
    /// `HH:MM`, empty when not entered.
    pub time_in: String,
    /// `HH:MM`, empty when not entered.
    pub time_out: String,
}

impl EntryDraft {
    pub fn new(date: &str, session: Session, time_in: &str, time_out: &str) -> Self {
        EntryDraft {
            date: date.to_string(),
            session,
            time_in: time_in.to_string(),
            time_out: time_out.to_string(),
        }
    }

    /// Checks required fields, then parses and computes the duration.
    ///
    /// `MissingDate` wins over `MissingTimes` when both are absent.
    pub fn validate(&self) -> ClaimResult<TimeEntry> {
        if self.date.trim().is_empty() {
            return Err(ValidationError::MissingDate.into());
        }
        if self.time_in.trim().is_empty() || self.time_out.trim().is_empty() {
            return Err(ValidationError::MissingTimes.into());
        }

        let date = parse_canonical(self.date.trim())?;
        let time_in: ClockTime = self.time_in.trim().parse()?;
        let time_out: ClockTime = self.time_out.trim().parse()?;
        Ok(TimeEntry::new(date, self.session, time_in, time_out))
    }
}

/// One claimed work interval.
///
/// The duration is derived on construction and has no setter; replacing an
/// entry means building a new one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntry {
    /// Records written without an id get a fresh one on load.
    #[serde(default = "Uuid::now_v7")]
    id: Uuid,
    date: NaiveDate,
    session: Session,
    time_in: ClockTime,
    time_out: ClockTime,
    duration: ClaimDuration,
}

impl TimeEntry {
    pub fn new(date: NaiveDate, session: Session, time_in: ClockTime, time_out: ClockTime) -> Self {
        TimeEntry {
            id: Uuid::now_v7(),
            date,
            session,
            time_in,
            time_out,
            duration: calculate(time_in, time_out),
        }
    }

    /// Carries an existing identity over to a freshly validated entry.
    pub(crate) fn with_identity(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn session(&self) -> Session {
        self.session
    }

    pub fn time_in(&self) -> ClockTime {
        self.time_in
    }

    pub fn time_out(&self) -> ClockTime {
        self.time_out
    }

    pub fn duration(&self) -> ClaimDuration {
        self.duration
    }

    pub fn display_date(&self) -> String {
        format_display(&self.date)
    }

    /// The entry's fields as an editable draft.
    pub fn to_draft(&self) -> EntryDraft {
        EntryDraft {
            date: format_canonical(&self.date),
            session: self.session,
            time_in: self.time_in.to_string(),
            time_out: self.time_out.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_date_is_reported_before_missing_times() {
        let draft = EntryDraft::default();
        let err = draft.validate().unwrap_err();
        assert!(matches!(err, crate::libs::error::ClaimError::Validation(ValidationError::MissingDate)));
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let entry = EntryDraft::new("2025-03-05", Session::Pm, "13:00", "17:15").validate().unwrap();
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["date"], "2025-03-05");
        assert_eq!(json["session"], "PM");
        assert_eq!(json["timeIn"], "13:00");
        assert_eq!(json["timeOut"], "17:15");
        assert_eq!(json["duration"], "4:15");
    }
}
