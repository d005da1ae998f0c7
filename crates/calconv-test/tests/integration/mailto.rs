//! `mailto:` identity encoding and decoding.

use calconv_test::convert::{to_mailto, to_mailto_string};
use calconv_test::diagnostics::{Level, RecordingSink};
use calconv_test::model::Identity;

use super::helpers::codec;

#[test_log::test]
fn encode_decode_identity() {
    let sink = RecordingSink::new();
    let codec = codec(&sink);

    let encoded = to_mailto_string("a@b.com", "Alice");
    assert_eq!(codec.from_mailto(&encoded), Identity::new("a@b.com", "Alice"));

    let uri = to_mailto("a@b.com", "Alice").expect("valid mailto URI");
    assert_eq!(
        codec.from_mailto_uri(&uri).into_parts(),
        ("a@b.com".to_string(), "Alice".to_string())
    );
    assert!(sink.is_empty());
}

#[test]
fn decode_without_brackets_returns_whole_string() {
    let sink = RecordingSink::new();

    let identity = codec(&sink).from_mailto("mailto:plain@x.com");

    assert_eq!(identity, Identity::bare("mailto:plain@x.com"));
    let recorded = sink.diagnostics();
    assert_eq!(recorded.len(), 1);
    assert_eq!(recorded[0].level, Level::Warning);
    assert!(recorded[0].message.contains("mailto:plain@x.com"));
}

#[test]
fn decode_non_mailto_is_silent() {
    let sink = RecordingSink::new();

    assert_eq!(
        codec(&sink).from_mailto("not-a-mailto"),
        Identity::bare("not-a-mailto")
    );
    assert!(sink.is_empty());
}

#[test]
fn empty_name_round_trip() {
    let sink = RecordingSink::new();

    let encoded = to_mailto_string("a@b.com", "");
    assert_eq!(encoded, "mailto:<a@b.com>");
    assert_eq!(codec(&sink).from_mailto(&encoded), Identity::bare("a@b.com"));
    assert!(sink.is_empty());
}

#[test]
fn names_with_spaces_and_accents_round_trip() {
    let sink = RecordingSink::new();
    let codec = codec(&sink);

    for (email, name) in [
        ("jane@example.com", "Jane Doe"),
        ("jurgen@example.de", "Jürgen Müller"),
        ("x@example.org", "Ops, Team"),
    ] {
        let uri = to_mailto(email, name).expect("valid mailto URI");
        assert_eq!(codec.from_mailto_uri(&uri), Identity::new(email, name));
    }
    assert!(sink.is_empty());
}

#[test]
fn decode_is_percent_decoded_first() {
    let sink = RecordingSink::new();

    assert_eq!(
        codec(&sink).from_mailto("mailto:Jane%20Doe%3Cjane@example.com%3E"),
        Identity::new("jane@example.com", "Jane Doe")
    );
}
