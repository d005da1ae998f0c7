//! Unknown zones and unsupported specs degrade to floating time.

use calconv_test::config::Settings;
use calconv_test::convert::DateTimeConverter;
use calconv_test::diagnostics::{Level, RecordingSink};
use calconv_test::host::{HostDateTime, TimeSpec};
use calconv_test::model::DateTime;
use calconv_test::timezone::IcuTimezoneNormalizer;
use chrono::{NaiveDate, NaiveTime};

use super::helpers::converter;

fn sample_host(spec: TimeSpec) -> HostDateTime {
    HostDateTime::new(
        NaiveDate::from_ymd_opt(2026, 5, 4).expect("valid date"),
        NaiveTime::from_hms_opt(18, 45, 10).expect("valid time"),
        spec,
    )
}

#[test_log::test]
fn unknown_timezone_is_floating_with_warning() {
    let sink = RecordingSink::new();

    assert_eq!(converter(&sink).time_spec(false, "Not/AZone"), TimeSpec::ClockTime);

    assert_eq!(sink.count(Level::Warning), 1);
    assert_eq!(sink.count(Level::Error), 0);
}

#[test]
fn unknown_timezone_keeps_date_and_time() {
    let sink = RecordingSink::new();
    let converter = converter(&sink);

    let dt = DateTime::zoned(2026, 5, 4, 18, 45, 10, "Atlantis/Capital");
    let host = converter.to_host(&dt);

    assert_eq!(host, sample_host(TimeSpec::ClockTime));
    assert_eq!(
        converter.from_host(&host),
        DateTime::floating(2026, 5, 4, 18, 45, 10)
    );
    assert_eq!(sink.count(Level::Warning), 1);
}

#[test]
fn local_zone_is_floating_with_error() {
    let sink = RecordingSink::new();

    let dt = converter(&sink).from_host(&sample_host(TimeSpec::LocalZone));

    assert_eq!(dt, DateTime::floating(2026, 5, 4, 18, 45, 10));
    assert_eq!(sink.count(Level::Error), 1);
    assert_eq!(sink.count(Level::Warning), 0);
}

#[test]
fn configured_alias_avoids_degradation() {
    let settings = Settings::from_toml_str(
        r#"
        [timezone.aliases]
        "kolab/headquarters" = "Europe/Zurich"
        "#,
    )
    .expect("valid settings");
    let sink = RecordingSink::new();
    let converter = DateTimeConverter::new()
        .with_normalizer(IcuTimezoneNormalizer::from_settings(&settings.timezone))
        .with_diagnostics(&sink);

    let host =
        converter.to_host(&DateTime::zoned(2026, 5, 4, 18, 45, 10, "Kolab/Headquarters"));

    assert_eq!(host.spec(), TimeSpec::TimeZone(chrono_tz::Tz::Europe__Zurich));
    assert!(sink.is_empty());
}

#[test]
fn utc_flag_wins_over_unknown_zone() {
    let sink = RecordingSink::new();
    let mut dt = DateTime::utc(2026, 5, 4, 18, 45, 10);
    dt.set_timezone("Not/AZone");

    let host = converter(&sink).to_host(&dt);

    assert_eq!(host.spec(), TimeSpec::Utc);
    assert!(sink.is_empty());
}
