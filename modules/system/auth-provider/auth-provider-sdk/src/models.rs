//! Domain models shared by providers and the connection layer.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Verified principal attached to a connection.
///
/// Compared later against ACL expressions of the same scheme through
/// [`AuthenticationProvider::matches`](crate::AuthenticationProvider::matches).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Identity {
    scheme: String,
    id: String,
}

impl Identity {
    #[must_use]
    pub fn new(scheme: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            scheme: scheme.into(),
            id: id.into(),
        }
    }

    /// Scheme that granted this identity.
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Scheme-specific id string.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.scheme, self.id)
    }
}

/// Result of a single authentication attempt.
///
/// The host service knows a larger set of codes; providers only ever
/// produce these two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthStatus {
    Ok,
    AuthFailed,
}

impl AuthStatus {
    /// Wire code understood by the connection layer.
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::Ok => 0,
            Self::AuthFailed => -115,
        }
    }

    #[must_use]
    pub const fn is_ok(self) -> bool {
        matches!(self, Self::Ok)
    }
}

impl fmt::Display for AuthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok => f.write_str("OK"),
            Self::AuthFailed => f.write_str("AUTH_FAILED"),
        }
    }
}
