//! Named email identity, as found on organizers, attendees and contacts.

use serde::{Deserialize, Serialize};

/// An `(email, display name)` pair. Either part may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Identity {
    pub email: String,
    pub name: String,
}

impl Identity {
    #[must_use]
    pub fn new(email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: name.into(),
        }
    }

    /// Creates an identity with no display name.
    #[must_use]
    pub fn bare(email: impl Into<String>) -> Self {
        Self::new(email, String::new())
    }

    /// Splits into `(email, name)`.
    #[must_use]
    pub fn into_parts(self) -> (String, String) {
        (self.email, self.name)
    }
}

impl From<(String, String)> for Identity {
    fn from((email, name): (String, String)) -> Self {
        Self { email, name }
    }
}
