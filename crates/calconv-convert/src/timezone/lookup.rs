//! Availability check and resolution against the IANA timezone database.

use std::str::FromStr;

use chrono_tz::Tz;

/// Resolves canonical timezone identifiers to zone handles.
pub trait TimezoneLookup: Send + Sync {
    /// Resolves `tzid`, or `None` if the database does not know it.
    fn resolve(&self, tzid: &str) -> Option<Tz>;

    fn is_available(&self, tzid: &str) -> bool {
        self.resolve(tzid).is_some()
    }
}

/// Lookup backed by the IANA database compiled into `chrono-tz`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimezones;

impl TimezoneLookup for SystemTimezones {
    fn resolve(&self, tzid: &str) -> Option<Tz> {
        Tz::from_str(tzid).ok()
    }
}
