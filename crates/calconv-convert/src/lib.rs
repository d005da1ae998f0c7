//! Conversion of calendar and contact values at the boundary between the
//! object model and the runtime's date-time and URI types.
//!
//! ## Overview
//!
//! - [`convert::DateTimeConverter`] maps [`model::DateTime`] to
//!   [`host::HostDateTime`] and back, resolving timezone identifiers through a
//!   [`timezone::NormalizeTimezone`] and a [`timezone::TimezoneLookup`].
//! - [`convert::MailtoCodec`] packs and unpacks `Name <email>` identities as
//!   `mailto:` URIs.
//!
//! Conversions never return errors. Unknown timezones degrade to floating time
//! and malformed `mailto:` strings are returned whole as the email; both are
//! reported through a [`diagnostics::DiagnosticSink`].
//!
//! ## Usage
//!
//! ```rust
//! use calconv_convert::convert::{from_host, from_mailto, to_host, to_mailto_string};
//! use calconv_convert::host::TimeSpec;
//! use calconv_convert::model::DateTime;
//!
//! let dt = DateTime::zoned(2026, 1, 15, 10, 0, 0, "W. Europe Standard Time");
//! let host = to_host(&dt);
//! assert_eq!(host.spec(), TimeSpec::TimeZone(chrono_tz::Tz::Europe__Berlin));
//! assert_eq!(from_host(&host).timezone, "Europe/Berlin");
//!
//! let mailto = to_mailto_string("jane@example.com", "Jane Doe");
//! assert_eq!(mailto, "mailto:Jane Doe<jane@example.com>");
//! assert_eq!(from_mailto(&mailto).name, "Jane Doe");
//! ```

pub mod convert;
pub mod diagnostics;
pub mod error;
pub mod host;
pub mod model;
pub mod timezone;
