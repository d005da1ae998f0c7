//! Domain date-time value as stored on calendar and contact objects.

use std::fmt;

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{ConversionError, ConversionResult};

/// A calendar date-time in the object model.
///
/// Zone semantics are carried by exactly one of:
/// - `utc == true`: an absolute instant in UTC,
/// - a non-empty `timezone`: wall-clock time in that zone,
/// - neither: floating time, read in whatever zone the observer is in.
///
/// The `Default` value is invalid and converts to an invalid host value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateTime {
    /// Year (e.g., 2026).
    pub year: i32,
    /// Month (1-12).
    pub month: u32,
    /// Day of month (1-31).
    pub day: u32,
    /// Hour (0-23). Ignored when `date_only` is set.
    pub hour: u32,
    /// Minute (0-59). Ignored when `date_only` is set.
    pub minute: u32,
    /// Second (0-59). Ignored when `date_only` is set.
    pub second: u32,
    /// The value carries no time of day.
    pub date_only: bool,
    /// The value is a UTC instant.
    pub utc: bool,
    /// Timezone identifier; empty means floating.
    pub timezone: String,
}

impl DateTime {
    /// Creates a date-only value.
    #[must_use]
    pub fn date(year: i32, month: u32, day: u32) -> Self {
        Self {
            year,
            month,
            day,
            date_only: true,
            ..Self::default()
        }
    }

    /// Creates a floating date-time.
    #[must_use]
    pub fn floating(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            ..Self::default()
        }
    }

    /// Creates a UTC date-time.
    #[must_use]
    pub fn utc(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> Self {
        Self {
            utc: true,
            ..Self::floating(year, month, day, hour, minute, second)
        }
    }

    /// Creates a date-time in the named timezone.
    #[must_use]
    pub fn zoned(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        timezone: impl Into<String>,
    ) -> Self {
        Self {
            timezone: timezone.into(),
            ..Self::floating(year, month, day, hour, minute, second)
        }
    }

    /// ## Summary
    /// Parses `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM:SS` or the RFC 5545 basic forms
    /// (`YYYYMMDD`, `YYYYMMDDTHHMMSS`). A trailing `Z` marks a UTC value.
    ///
    /// ## Errors
    /// Returns `ConversionError::InvalidDateTime` if the input matches none of the forms.
    pub fn parse(input: &str) -> ConversionResult<Self> {
        let input = input.trim();
        let (body, utc) = match input.strip_suffix('Z') {
            Some(body) => (body, true),
            None => (input, false),
        };

        for format in ["%Y-%m-%dT%H:%M:%S", "%Y%m%dT%H%M%S"] {
            if let Ok(naive) = NaiveDateTime::parse_from_str(body, format) {
                let mut dt = Self::from_naive_date(naive.date());
                dt.set_time(naive.hour(), naive.minute(), naive.second());
                dt.utc = utc;
                return Ok(dt);
            }
        }

        if !utc {
            for format in ["%Y-%m-%d", "%Y%m%d"] {
                if let Ok(date) = NaiveDate::parse_from_str(body, format) {
                    return Ok(Self::from_naive_date(date));
                }
            }
        }

        Err(ConversionError::InvalidDateTime(input.to_string()))
    }

    pub(crate) fn from_naive_date(date: NaiveDate) -> Self {
        Self::date(date.year(), date.month(), date.day())
    }

    /// Sets the calendar date, leaving time and zone untouched.
    pub fn set_date(&mut self, year: i32, month: u32, day: u32) {
        self.year = year;
        self.month = month;
        self.day = day;
    }

    /// Sets the time of day; the value is no longer date-only.
    pub fn set_time(&mut self, hour: u32, minute: u32, second: u32) {
        self.hour = hour;
        self.minute = minute;
        self.second = second;
        self.date_only = false;
    }

    pub fn set_utc(&mut self, utc: bool) {
        self.utc = utc;
    }

    pub fn set_timezone(&mut self, timezone: impl Into<String>) {
        self.timezone = timezone.into();
    }

    /// Returns whether the components name a real date (and time, unless date-only).
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.naive_date().is_some() && (self.date_only || self.naive_time().is_some())
    }

    /// Returns whether this value has neither a UTC marker nor a timezone.
    #[must_use]
    pub fn is_floating(&self) -> bool {
        !self.utc && self.timezone.is_empty()
    }

    /// Returns the timezone identifier, if any.
    #[must_use]
    pub fn tzid(&self) -> Option<&str> {
        if self.timezone.is_empty() {
            None
        } else {
            Some(&self.timezone)
        }
    }

    #[must_use]
    pub fn naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }

    /// Returns the time of day, or `None` for date-only or out-of-range values.
    #[must_use]
    pub fn naive_time(&self) -> Option<NaiveTime> {
        if self.date_only {
            return None;
        }
        NaiveTime::from_hms_opt(self.hour, self.minute, self.second)
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_valid() {
            return f.write_str("invalid");
        }
        if let Some(tzid) = self.tzid()
            && !self.utc
        {
            write!(f, "TZID={tzid}:")?;
        }
        write!(f, "{:04}{:02}{:02}", self.year, self.month, self.day)?;
        if self.date_only {
            return Ok(());
        }
        write!(f, "T{:02}{:02}{:02}", self.hour, self.minute, self.second)?;
        if self.utc {
            write!(f, "Z")?;
        }
        Ok(())
    }
}
