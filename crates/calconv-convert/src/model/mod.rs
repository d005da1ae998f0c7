//! Object-model values handled by the converters.

mod datetime;
mod identity;

pub use datetime::DateTime;
pub use identity::Identity;
