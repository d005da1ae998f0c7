//! Round trips through the host representation.

use calconv_test::convert::{from_host, to_host};
use calconv_test::diagnostics::RecordingSink;
use calconv_test::host::{HostDateTime, TimeSpec};
use calconv_test::model::DateTime;
use calconv_test::{SAMPLE_DATES, SAMPLE_TIMES};
use chrono::{Datelike, FixedOffset, TimeZone, Timelike};

use super::helpers::converter;

fn samples() -> impl Iterator<Item = ((i32, u32, u32), (u32, u32, u32))> {
    SAMPLE_DATES
        .iter()
        .flat_map(|date| SAMPLE_TIMES.iter().map(move |time| (*date, *time)))
}

#[test_log::test]
fn utc_round_trip() {
    for ((y, mo, d), (h, mi, s)) in samples() {
        let dt = DateTime::utc(y, mo, d, h, mi, s);
        let host = to_host(&dt);

        assert_eq!(host.spec(), TimeSpec::Utc);
        assert_eq!(from_host(&host), dt, "round trip of {dt}");
    }
}

#[test]
fn floating_round_trip() {
    for ((y, mo, d), (h, mi, s)) in samples() {
        let dt = DateTime::floating(y, mo, d, h, mi, s);
        let back = from_host(&to_host(&dt));

        assert!(back.is_floating(), "{back} should stay floating");
        assert_eq!(back, dt);
    }
}

#[test]
fn date_only_round_trip() {
    for &(y, mo, d) in SAMPLE_DATES {
        let dt = DateTime::date(y, mo, d);
        let host = to_host(&dt);

        assert!(host.is_date_only());
        assert_eq!(host.spec(), TimeSpec::ClockTime);
        assert_eq!(from_host(&host), dt);
    }
}

#[test]
fn date_only_ignores_zone_markers() {
    let mut dt = DateTime::date(2026, 1, 15);
    dt.set_timezone("Europe/Berlin");
    dt.set_utc(true);

    let back = from_host(&to_host(&dt));
    assert_eq!(back, DateTime::date(2026, 1, 15));
}

#[test]
fn zoned_round_trip_keeps_wall_clock() {
    for tzid in ["America/New_York", "Europe/Berlin", "Asia/Kolkata", "Australia/Sydney"] {
        for ((y, mo, d), (h, mi, s)) in samples() {
            let dt = DateTime::zoned(y, mo, d, h, mi, s, tzid);
            let back = from_host(&to_host(&dt));

            assert_eq!(back, dt, "round trip of {dt}");
        }
    }
}

#[test]
fn legacy_zone_comes_back_canonical() {
    let sink = RecordingSink::new();
    let converter = converter(&sink);

    let dt = DateTime::zoned(2026, 7, 1, 9, 0, 0, "/mozilla.org/20050126_1/Europe/Kiev");
    let back = converter.from_host(&converter.to_host(&dt));

    assert_eq!(back, DateTime::zoned(2026, 7, 1, 9, 0, 0, "Europe/Kyiv"));
    assert!(sink.is_empty());
}

#[test]
fn offset_values_become_utc_instants() {
    for minutes in [-720, -330, 0, 345, 840] {
        let offset = FixedOffset::east_opt(minutes * 60).expect("offset in range");
        for ((y, mo, d), (h, mi, s)) in samples() {
            let local = offset
                .with_ymd_and_hms(y, mo, d, h, mi, s)
                .single()
                .expect("fixed offsets are unambiguous");
            let back = from_host(&HostDateTime::from_fixed(local));

            let utc = local.naive_utc();
            let expected = DateTime::utc(
                utc.year(),
                utc.month(),
                utc.day(),
                utc.hour(),
                utc.minute(),
                utc.second(),
            );
            assert_eq!(back, expected, "offset {offset} for {local}");
        }
    }
}

#[test]
fn invalid_in_invalid_out() {
    let sink = RecordingSink::new();
    let converter = converter(&sink);

    assert!(!converter.to_host(&DateTime::default()).is_valid());
    assert!(!converter.to_host(&DateTime::date(2026, 2, 30)).is_valid());
    assert!(!converter.from_host(&HostDateTime::invalid()).is_valid());
    assert!(sink.is_empty());
}
