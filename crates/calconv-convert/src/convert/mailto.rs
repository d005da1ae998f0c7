//! `mailto:` identity strings of the form `mailto:Display Name<user@example.com>`.
//!
//! Encoding does not percent-escape its inputs, so names or addresses that
//! contain `<`, `>` or `%` sequences do not decode back to the same pair.

use percent_encoding::percent_decode_str;
use url::Url;

use crate::diagnostics::{DiagnosticSink, TracingSink};
use crate::error::ConversionResult;
use crate::model::Identity;

const MAILTO: &str = "mailto:";

/// ## Summary
/// Builds `mailto:<name><<email>>`; the name is omitted when empty.
#[must_use]
pub fn to_mailto_string(email: &str, name: &str) -> String {
    let mut mailto = String::with_capacity(MAILTO.len() + name.len() + email.len() + 2);
    mailto.push_str(MAILTO);
    mailto.push_str(name);
    mailto.push('<');
    mailto.push_str(email);
    mailto.push('>');
    mailto
}

/// ## Summary
/// Builds the `mailto:` identity string and parses it as a URI.
///
/// ## Errors
/// Returns `ConversionError::InvalidUri` if the URI parser rejects the string.
pub fn to_mailto(email: &str, name: &str) -> ConversionResult<Url> {
    Ok(Url::parse(&to_mailto_string(email, name))?)
}

/// Decodes `mailto:` identity strings, reporting malformed input.
#[derive(Debug, Clone, Default)]
pub struct MailtoCodec<D = TracingSink> {
    diagnostics: D,
}

impl MailtoCodec {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<D: DiagnosticSink> MailtoCodec<D> {
    #[must_use]
    pub fn with_diagnostics(diagnostics: D) -> Self {
        Self { diagnostics }
    }

    /// ## Summary
    /// Decodes a `mailto:` identity URI.
    #[must_use]
    pub fn from_mailto_uri(&self, uri: &Url) -> Identity {
        self.from_mailto(uri.as_str())
    }

    /// ## Summary
    /// Percent-decodes `raw` and splits it into email and display name.
    ///
    /// Input without the `mailto:` prefix is returned whole as the email. A
    /// `mailto:` string without a complete `<...>` pair is also returned whole,
    /// with a warning.
    #[must_use]
    pub fn from_mailto(&self, raw: &str) -> Identity {
        let decoded = percent_decode_str(raw).decode_utf8_lossy().into_owned();
        if !decoded.starts_with(MAILTO) {
            return Identity::bare(decoded);
        }

        let Some(begin) = decoded[MAILTO.len()..]
            .find('<')
            .map(|idx| idx + MAILTO.len())
        else {
            self.diagnostics.warn(&format!("no mailto address: {decoded}"));
            return Identity::bare(decoded);
        };
        let Some(end) = decoded[begin..].find('>').map(|idx| idx + begin) else {
            self.diagnostics.warn(&format!("no mailto address: {decoded}"));
            return Identity::bare(decoded);
        };

        Identity::new(&decoded[begin + 1..end], &decoded[MAILTO.len()..begin])
    }
}

/// ## Summary
/// [`MailtoCodec::from_mailto`] reporting through `tracing`.
#[must_use]
pub fn from_mailto(raw: &str) -> Identity {
    MailtoCodec::new().from_mailto(raw)
}

/// ## Summary
/// [`MailtoCodec::from_mailto_uri`] reporting through `tracing`.
#[must_use]
pub fn from_mailto_uri(uri: &Url) -> Identity {
    MailtoCodec::new().from_mailto_uri(uri)
}
