//! Element-wise string list conversion.

/// ## Summary
/// Copies object-model strings into a host string list, preserving order.
#[must_use]
pub fn to_host_string_list<S: AsRef<str>>(items: &[S]) -> Vec<String> {
    items.iter().map(|s| s.as_ref().to_owned()).collect()
}

/// ## Summary
/// Copies host strings into an object-model string list, preserving order.
#[must_use]
pub fn from_host_string_list<S: AsRef<str>>(items: &[S]) -> Vec<String> {
    items.iter().map(|s| s.as_ref().to_owned()).collect()
}
