//! Timezone identifier handling.
//!
//! - [`NormalizeTimezone`] maps legacy and vendor identifiers to canonical IANA names.
//! - [`TimezoneLookup`] checks and resolves canonical names against the timezone database.

mod lookup;
mod normalize;

pub use lookup::{SystemTimezones, TimezoneLookup};
pub use normalize::{IcuTimezoneNormalizer, NormalizeTimezone, normalize_tzid};
