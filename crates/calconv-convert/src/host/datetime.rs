//! Runtime date-time representation built on `chrono`.

use std::fmt;

use chrono::{FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

/// How the wall-clock fields of a [`HostDateTime`] map onto an instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeSpec {
    /// The fields are UTC.
    Utc,
    /// Floating time; the fields are read in the observer's zone.
    ClockTime,
    /// The fields are local time at a fixed offset from UTC.
    OffsetFromUtc(FixedOffset),
    /// The fields are local time in an IANA timezone.
    TimeZone(Tz),
    /// The fields are local time in the system zone of the machine that produced them.
    LocalZone,
}

impl fmt::Display for TimeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Utc => f.write_str("UTC"),
            Self::ClockTime => f.write_str("ClockTime"),
            Self::OffsetFromUtc(offset) => write!(f, "OffsetFromUTC({offset})"),
            Self::TimeZone(tz) => write!(f, "TimeZone({})", tz.name()),
            Self::LocalZone => f.write_str("LocalZone"),
        }
    }
}

/// A date with optional time of day and a [`TimeSpec`].
///
/// A value without a date is invalid; a value without a time is date-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostDateTime {
    date: Option<NaiveDate>,
    time: Option<NaiveTime>,
    spec: TimeSpec,
}

impl HostDateTime {
    /// Creates the invalid value.
    #[must_use]
    pub const fn invalid() -> Self {
        Self {
            date: None,
            time: None,
            spec: TimeSpec::ClockTime,
        }
    }

    /// Creates a floating date-only value.
    #[must_use]
    pub const fn date_only(date: NaiveDate) -> Self {
        Self {
            date: Some(date),
            time: None,
            spec: TimeSpec::ClockTime,
        }
    }

    #[must_use]
    pub const fn new(date: NaiveDate, time: NaiveTime, spec: TimeSpec) -> Self {
        Self {
            date: Some(date),
            time: Some(time),
            spec,
        }
    }

    /// Replaces the time spec.
    #[must_use]
    pub const fn with_spec(mut self, spec: TimeSpec) -> Self {
        self.spec = spec;
        self
    }

    #[must_use]
    pub fn from_utc(dt: chrono::DateTime<Utc>) -> Self {
        let naive = dt.naive_utc();
        Self::new(naive.date(), naive.time(), TimeSpec::Utc)
    }

    #[must_use]
    pub fn from_zoned(dt: chrono::DateTime<Tz>) -> Self {
        let naive = dt.naive_local();
        Self::new(naive.date(), naive.time(), TimeSpec::TimeZone(dt.timezone()))
    }

    #[must_use]
    pub fn from_fixed(dt: chrono::DateTime<FixedOffset>) -> Self {
        let naive = dt.naive_local();
        Self::new(
            naive.date(),
            naive.time(),
            TimeSpec::OffsetFromUtc(*dt.offset()),
        )
    }

    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.date.is_some()
    }

    #[must_use]
    pub const fn is_date_only(&self) -> bool {
        self.time.is_none()
    }

    #[must_use]
    pub const fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    #[must_use]
    pub const fn time(&self) -> Option<NaiveTime> {
        self.time
    }

    #[must_use]
    pub const fn spec(&self) -> TimeSpec {
        self.spec
    }

    /// Returns the wall-clock fields, if both date and time are set.
    #[must_use]
    pub fn naive(&self) -> Option<NaiveDateTime> {
        Some(self.date?.and_time(self.time?))
    }

    /// ## Summary
    /// Returns the UTC instant for UTC, offset and zoned values.
    ///
    /// Floating and system-local values have no fixed instant and yield `None`,
    /// as do date-only values and local times that fall in a DST gap. Times in a
    /// DST fold resolve to the earlier instant.
    #[must_use]
    pub fn to_utc(&self) -> Option<chrono::DateTime<Utc>> {
        let naive = self.naive()?;
        match self.spec {
            TimeSpec::Utc => Some(naive.and_utc()),
            TimeSpec::OffsetFromUtc(offset) => offset
                .from_local_datetime(&naive)
                .single()
                .map(|dt| dt.with_timezone(&Utc)),
            TimeSpec::TimeZone(tz) => tz
                .from_local_datetime(&naive)
                .earliest()
                .map(|dt| dt.with_timezone(&Utc)),
            TimeSpec::ClockTime | TimeSpec::LocalZone => None,
        }
    }
}

impl Default for HostDateTime {
    fn default() -> Self {
        Self::invalid()
    }
}

impl fmt::Display for HostDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(date) = self.date else {
            return f.write_str("invalid");
        };
        write!(f, "{date}")?;
        if let Some(time) = self.time {
            write!(f, " {time}")?;
        }
        write!(f, " [{}]", self.spec)
    }
}
