//! Converters between the object model and host types.

mod datetime;
mod list;
mod mailto;

pub use datetime::{DateTimeConverter, from_host, time_spec, to_host};
pub use list::{from_host_string_list, to_host_string_list};
pub use mailto::{MailtoCodec, from_mailto, from_mailto_uri, to_mailto, to_mailto_string};
