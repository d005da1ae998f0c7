//! Conversion between object-model date-times and host date-times.
//!
//! Conversions never fail. Unknown or unsupported timezones degrade to
//! floating time and are reported through the converter's [`DiagnosticSink`].

use chrono::Timelike;

use crate::diagnostics::{DiagnosticSink, TracingSink};
use crate::host::{HostDateTime, TimeSpec};
use crate::model::DateTime;
use crate::timezone::{IcuTimezoneNormalizer, NormalizeTimezone, SystemTimezones, TimezoneLookup};

/// Converts [`DateTime`] values to [`HostDateTime`] values and back.
#[derive(Debug, Clone, Default)]
pub struct DateTimeConverter<N = IcuTimezoneNormalizer, L = SystemTimezones, D = TracingSink> {
    normalizer: N,
    lookup: L,
    diagnostics: D,
}

impl DateTimeConverter {
    /// Creates a converter with the ICU normalizer, the compiled IANA database
    /// and `tracing` diagnostics.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<N, L, D> DateTimeConverter<N, L, D>
where
    N: NormalizeTimezone,
    L: TimezoneLookup,
    D: DiagnosticSink,
{
    #[must_use]
    pub fn with_parts(normalizer: N, lookup: L, diagnostics: D) -> Self {
        Self {
            normalizer,
            lookup,
            diagnostics,
        }
    }

    /// Replaces the timezone normalizer.
    #[must_use]
    pub fn with_normalizer<N2: NormalizeTimezone>(
        self,
        normalizer: N2,
    ) -> DateTimeConverter<N2, L, D> {
        DateTimeConverter {
            normalizer,
            lookup: self.lookup,
            diagnostics: self.diagnostics,
        }
    }

    /// Replaces the timezone lookup.
    #[must_use]
    pub fn with_lookup<L2: TimezoneLookup>(self, lookup: L2) -> DateTimeConverter<N, L2, D> {
        DateTimeConverter {
            normalizer: self.normalizer,
            lookup,
            diagnostics: self.diagnostics,
        }
    }

    /// Replaces the diagnostic sink.
    #[must_use]
    pub fn with_diagnostics<D2: DiagnosticSink>(
        self,
        diagnostics: D2,
    ) -> DateTimeConverter<N, L, D2> {
        DateTimeConverter {
            normalizer: self.normalizer,
            lookup: self.lookup,
            diagnostics,
        }
    }

    /// ## Summary
    /// Picks the host time spec for a UTC flag and timezone identifier.
    ///
    /// UTC wins over any identifier. An empty identifier is floating time. Other
    /// identifiers are normalized and resolved; if that fails a warning is
    /// reported and the result is floating time.
    #[must_use]
    pub fn time_spec(&self, is_utc: bool, tzid: &str) -> TimeSpec {
        if is_utc {
            return TimeSpec::Utc;
        }
        if tzid.is_empty() {
            return TimeSpec::ClockTime;
        }

        // Convert non-olson timezones if necessary
        let resolved = self
            .normalizer
            .normalize(tzid)
            .filter(|canonical| self.lookup.is_available(canonical))
            .and_then(|canonical| self.lookup.resolve(&canonical));

        match resolved {
            Some(tz) => TimeSpec::TimeZone(tz),
            None => {
                self.diagnostics
                    .warn(&format!("invalid timezone: {tzid}, assuming floating time"));
                TimeSpec::ClockTime
            }
        }
    }

    /// ## Summary
    /// Converts an object-model date-time to a host date-time.
    ///
    /// Invalid input yields the invalid host value. Date-only input yields a
    /// floating date-only value. The result's spec is never unset.
    #[must_use]
    pub fn to_host(&self, dt: &DateTime) -> HostDateTime {
        // Invalid values are expected here and round-trip as invalid.
        let Some(date) = dt.naive_date() else {
            return HostDateTime::invalid();
        };
        if dt.date_only {
            return HostDateTime::date_only(date);
        }
        let Some(time) = dt.naive_time() else {
            return HostDateTime::invalid();
        };

        HostDateTime::new(date, time, self.time_spec(dt.utc, &dt.timezone))
    }

    /// ## Summary
    /// Converts a host date-time to an object-model date-time.
    ///
    /// Offsets from UTC are folded into a UTC value. Zones that cannot be
    /// normalized, and spec kinds this converter does not handle, degrade to
    /// floating time with the date and time kept.
    #[must_use]
    pub fn from_host(&self, hdt: &HostDateTime) -> DateTime {
        let Some(date) = hdt.date() else {
            return DateTime::default();
        };
        let mut dt = DateTime::from_naive_date(date);
        // Date-only values carry no zone.
        let Some(time) = hdt.time() else {
            return dt;
        };
        dt.set_time(time.hour(), time.minute(), time.second());

        match hdt.spec() {
            TimeSpec::Utc => dt.set_utc(true),
            TimeSpec::OffsetFromUtc(offset) => match hdt.to_utc() {
                Some(utc) => {
                    let naive = utc.naive_utc();
                    dt = DateTime::from_naive_date(naive.date());
                    dt.set_time(naive.hour(), naive.minute(), naive.second());
                    dt.set_utc(true);
                }
                None => self.diagnostics.error(&format!(
                    "offset {offset} out of range, assuming floating time. dt: {hdt}"
                )),
            },
            TimeSpec::TimeZone(tz) => match self.normalizer.normalize(tz.name()) {
                Some(tzid) => dt.set_timezone(tzid),
                None => self.diagnostics.warn(&format!(
                    "invalid timezone: {}, assuming floating time",
                    tz.name()
                )),
            },
            TimeSpec::ClockTime => {}
            spec @ TimeSpec::LocalZone => self.diagnostics.error(&format!(
                "invalid timespec, assuming floating time. Type: {spec} dt: {hdt}"
            )),
        }

        dt
    }
}

/// ## Summary
/// [`DateTimeConverter::time_spec`] with the default converter.
#[must_use]
pub fn time_spec(is_utc: bool, tzid: &str) -> TimeSpec {
    DateTimeConverter::new().time_spec(is_utc, tzid)
}

/// ## Summary
/// [`DateTimeConverter::to_host`] with the default converter.
#[must_use]
pub fn to_host(dt: &DateTime) -> HostDateTime {
    DateTimeConverter::new().to_host(dt)
}

/// ## Summary
/// [`DateTimeConverter::from_host`] with the default converter.
#[must_use]
pub fn from_host(hdt: &HostDateTime) -> DateTime {
    DateTimeConverter::new().from_host(hdt)
}
