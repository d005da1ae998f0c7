use calconv_test::convert::{DateTimeConverter, MailtoCodec};
use calconv_test::diagnostics::RecordingSink;
use calconv_test::timezone::{IcuTimezoneNormalizer, SystemTimezones};

pub type RecordingConverter<'a> =
    DateTimeConverter<IcuTimezoneNormalizer, SystemTimezones, &'a RecordingSink>;

/// ## Summary
/// Default converter reporting into `sink`.
pub fn converter(sink: &RecordingSink) -> RecordingConverter<'_> {
    DateTimeConverter::new().with_diagnostics(sink)
}

/// ## Summary
/// Mailto codec reporting into `sink`.
pub fn codec(sink: &RecordingSink) -> MailtoCodec<&RecordingSink> {
    MailtoCodec::with_diagnostics(sink)
}
