//! Integration tests for the conversion layer.

mod datetime_round_trip;
mod degradation;
mod helpers;
mod mailto;
mod string_list;
