//! Timezone identifier normalization.
//!
//! Uses ICU4X for Windows timezone ID to IANA mapping and timezone canonicalization.
//! Calendar clients emit many non-standard TZID values: vendor-prefixed Olson
//! names, Windows zone names, Outlook display names and retired IANA aliases.

use std::collections::HashMap;

use calconv_core::config::TimezoneSettings;
use chrono_tz::TZ_VARIANTS;
use icu::time::zone::WindowsParser;
use icu::time::zone::iana::IanaParserExtended;

/// Vendor prefixes that wrap an Olson identifier.
const VENDOR_PREFIXES: &[&str] = &["/mozilla.org/", "/softwarestudio.org/", "/citadel.org/"];

/// Maps a timezone identifier to its canonical IANA name.
pub trait NormalizeTimezone: Send + Sync {
    /// Returns the canonical identifier, or `None` if `tzid` cannot be mapped.
    fn normalize(&self, tzid: &str) -> Option<String>;
}

/// Default normalizer backed by ICU4X data, with optional site aliases.
#[derive(Debug, Clone, Default)]
pub struct IcuTimezoneNormalizer {
    aliases: HashMap<String, String>,
    extra_prefixes: Vec<String>,
}

impl IcuTimezoneNormalizer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_settings(settings: &TimezoneSettings) -> Self {
        Self {
            aliases: settings.aliases.clone(),
            extra_prefixes: settings.extra_prefixes.clone(),
        }
    }

    /// Adds a site alias, e.g. a proprietary TZID used by one client.
    #[must_use]
    pub fn with_alias(mut self, tzid: impl Into<String>, target: impl Into<String>) -> Self {
        self.aliases.insert(tzid.into(), target.into());
        self
    }

    fn alias(&self, tzid: &str) -> Option<&str> {
        self.aliases
            .get(tzid)
            .or_else(|| {
                self.aliases
                    .iter()
                    .find(|(from, _)| from.eq_ignore_ascii_case(tzid))
                    .map(|(_, to)| to)
            })
            .map(String::as_str)
    }

    fn strip_prefix<'a>(&self, tzid: &'a str) -> &'a str {
        self.extra_prefixes
            .iter()
            .map(String::as_str)
            .chain(VENDOR_PREFIXES.iter().copied())
            .find_map(|prefix| tzid.strip_prefix(prefix))
            .unwrap_or(tzid)
    }
}

impl NormalizeTimezone for IcuTimezoneNormalizer {
    fn normalize(&self, tzid: &str) -> Option<String> {
        let tzid = tzid.trim();
        if tzid.is_empty() {
            return None;
        }

        if let Some(target) = self.alias(tzid) {
            tracing::debug!(tzid, target, "Timezone matched configured alias");
            return Some(canonical_iana(target).unwrap_or_else(|| target.to_string()));
        }

        let stripped = self.strip_prefix(tzid);

        let mut normalized = windows_to_iana(stripped).or_else(|| canonical_iana(stripped));
        if normalized.is_none() && stripped.len() != tzid.len() {
            normalized = versioned_olson(stripped);
        }
        if normalized.is_none() {
            normalized = outlook_display_name(stripped);
        }

        tracing::debug!(tzid, normalized = ?normalized, "Timezone normalized");
        normalized
    }
}

/// ## Summary
/// Normalizes `tzid` with the default normalizer.
#[must_use]
pub fn normalize_tzid(tzid: &str) -> Option<String> {
    IcuTimezoneNormalizer::new().normalize(tzid)
}

/// Maps a Windows zone name ("W. Europe Standard Time") to its IANA name.
fn windows_to_iana(name: &str) -> Option<String> {
    let tz = WindowsParser::new().parse(name, None)?;

    // Get the canonical IANA name from the BCP-47 timezone ID
    IanaParserExtended::new()
        .iter()
        .find(|entry| entry.time_zone == tz)
        .map(|entry| entry.canonical.to_string())
}

/// Canonicalizes an IANA name or alias (Europe/Kiev -> Europe/Kyiv).
fn canonical_iana(name: &str) -> Option<String> {
    let parsed = IanaParserExtended::new().parse(name);
    if parsed.time_zone == icu::time::TimeZone::UNKNOWN {
        return None;
    }
    Some(parsed.canonical.to_string())
}

/// Handles prefixes carrying a version segment, e.g. `20050126_1/America/New_York`
/// left over from `/mozilla.org/20050126_1/America/New_York`.
fn versioned_olson(name: &str) -> Option<String> {
    name.match_indices('/')
        .map(|(idx, _)| &name[idx + 1..])
        .filter(|rest| !rest.is_empty())
        .find_map(canonical_iana)
}

/// Resolves Outlook display names such as
/// `(GMT+01.00) Amsterdam / Berlin / Bern / Rome` or
/// `(UTC-05:00) Eastern Time (US & Canada)`.
fn outlook_display_name(name: &str) -> Option<String> {
    let rest = name.strip_prefix('(')?;
    let close = rest.find(')')?;
    let prefix = &rest[..close];
    if !(prefix.starts_with("GMT") || prefix.starts_with("UTC")) {
        return None;
    }
    let cities = rest[close + 1..].trim();

    let by_city = cities
        .split(['/', ','])
        .map(str::trim)
        .filter(|city| !city.is_empty())
        .find_map(iana_by_city);
    if by_city.is_some() {
        return by_city;
    }

    // "Eastern Time (US & Canada)" -> "Eastern Standard Time"
    let region = cities.split('(').next().unwrap_or(cities).trim();
    let windows_name = match region.strip_suffix(" Time") {
        Some(base) => format!("{base} Standard Time"),
        None => format!("{region} Standard Time"),
    };
    windows_to_iana(&windows_name)
}

/// Finds an IANA zone whose city segment matches `city` (ASCII case-insensitive).
fn iana_by_city(city: &str) -> Option<String> {
    let wanted = city.replace(' ', "_");
    TZ_VARIANTS
        .iter()
        .map(|tz| tz.name())
        .filter(|name| name.contains('/'))
        .find(|name| {
            name.rsplit('/')
                .next()
                .is_some_and(|last| last.eq_ignore_ascii_case(&wanted))
        })
        .and_then(|name| canonical_iana(name).or_else(|| Some(name.to_string())))
}
