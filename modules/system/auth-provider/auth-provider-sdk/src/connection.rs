//! Per-connection authentication state.
//!
//! The session layer owns the identity list of a connection. Providers only
//! see it through [`ConnectionContext`], which lets them attach identities
//! without knowing anything else about the connection.

use crate::models::Identity;

/// Seam between providers and the connection that is being authenticated.
pub trait ConnectionContext {
    /// Attach a verified identity to the connection.
    fn add_auth_info(&mut self, identity: Identity);

    /// Identities attached so far, in arrival order.
    fn auth_info(&self) -> &[Identity];
}

/// Coarse authentication state of a connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionAuthState {
    /// No identity attached yet.
    Unauthenticated,
    /// At least one verified identity attached.
    Authenticated,
}

/// Identity list of a single connection.
///
/// Identities are kept in arrival order; attaching an identity that is
/// already present is a no-op.
#[derive(Debug, Clone, Default)]
pub struct ConnectionAuth {
    identities: Vec<Identity>,
}

impl ConnectionAuth {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> ConnectionAuthState {
        if self.identities.is_empty() {
            ConnectionAuthState::Unauthenticated
        } else {
            ConnectionAuthState::Authenticated
        }
    }

    #[must_use]
    pub fn has_identity(&self, identity: &Identity) -> bool {
        self.identities.contains(identity)
    }

    /// Identities granted by a single scheme.
    pub fn identities_for<'a>(&'a self, scheme: &'a str) -> impl Iterator<Item = &'a Identity> {
        self.identities.iter().filter(move |i| i.scheme() == scheme)
    }
}

impl ConnectionContext for ConnectionAuth {
    fn add_auth_info(&mut self, identity: Identity) {
        if !self.identities.contains(&identity) {
            self.identities.push(identity);
        }
    }

    fn auth_info(&self) -> &[Identity] {
        &self.identities
    }
}
