//! Runtime-side values the object model is converted to and from.

mod datetime;

pub use datetime::{HostDateTime, TimeSpec};
