//! Date normalization between the canonical and the display form.
//!
//! Canonical dates are `YYYY-MM-DD`, display dates are `DD/MM/YYYY`. Both
//! directions split the string into three integers and build the date with
//! [`NaiveDate::from_ymd_opt`], so no timezone ever takes part and a date
//! cannot drift by a day. An empty string maps to an empty string.

use super::error::FormatError;
use super::time::parse_digits;
use chrono::{Datelike, NaiveDate};

/// Builds a date from its canonical `YYYY-MM-DD` form.
pub fn parse_canonical(canonical: &str) -> Result<NaiveDate, FormatError> {
    let invalid = || FormatError::Date(canonical.to_string());
    let mut parts = canonical.split('-');
    let (Some(year), Some(month), Some(day), None) = (parts.next(), parts.next(), parts.next(), parts.next()) else {
        return Err(invalid());
    };
    if year.len() != 4 || month.len() != 2 || day.len() != 2 {
        return Err(invalid());
    }
    from_parts(year, month, day).ok_or_else(invalid)
}

/// Builds a date from its display `DD/MM/YYYY` form.
pub fn parse_display(display: &str) -> Result<NaiveDate, FormatError> {
    let invalid = || FormatError::Date(display.to_string());
    let mut parts = display.split('/');
    let (Some(day), Some(month), Some(year), None) = (parts.next(), parts.next(), parts.next(), parts.next()) else {
        return Err(invalid());
    };
    if year.len() != 4 || month.len() != 2 || day.len() != 2 {
        return Err(invalid());
    }
    from_parts(year, month, day).ok_or_else(invalid)
}

pub fn format_display(date: &NaiveDate) -> String {
    format!("{:02}/{:02}/{:04}", date.day(), date.month(), date.year())
}

pub fn format_canonical(date: &NaiveDate) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day())
}

/// `YYYY-MM-DD` to `DD/MM/YYYY`.
pub fn to_display(canonical: &str) -> Result<String, FormatError> {
    if canonical.is_empty() {
        return Ok(String::new());
    }
    Ok(format_display(&parse_canonical(canonical)?))
}

/// `DD/MM/YYYY` to `YYYY-MM-DD`.
pub fn to_canonical(display: &str) -> Result<String, FormatError> {
    if display.is_empty() {
        return Ok(String::new());
    }
    Ok(format_canonical(&parse_display(display)?))
}

fn from_parts(year: &str, month: &str, day: &str) -> Option<NaiveDate> {
    let year = parse_digits(year)? as i32;
    NaiveDate::from_ymd_opt(year, parse_digits(month)?, parse_digits(day)?)
}
