//! Provider API trait for authentication schemes.
//!
//! Every scheme (`key`, `ip`, `digest`, ...) is implemented as a provider.
//! The registry owns one shared instance per scheme and the connection layer
//! calls into it for every inbound authentication packet.

use std::sync::Arc;

use crate::connection::ConnectionContext;
use crate::models::AuthStatus;

/// Shared, immutable handle to a registered provider.
pub type ProviderHandle = Arc<dyn AuthenticationProvider>;

/// Capability set of an authentication scheme.
///
/// Providers are created once and shared by all connections, so they must not
/// keep per-connection mutable state. Anything they need (for example a shared
/// secret) is read fresh on each call.
pub trait AuthenticationProvider: Send + Sync {
    /// Stable scheme identifier, used as the registry key.
    fn scheme(&self) -> &str;

    /// Validate a credential for a connection.
    ///
    /// Called once per inbound authentication packet. On success the provider
    /// may attach an [`Identity`](crate::Identity) to `conn`. A rejected
    /// credential is reported as [`AuthStatus::AuthFailed`]; what happens to
    /// the connection afterwards is up to the caller.
    fn handle_authentication(
        &self,
        conn: &mut dyn ConnectionContext,
        credential: &[u8],
    ) -> AuthStatus;

    /// Whether a stored identity of this scheme satisfies an ACL expression.
    fn matches(&self, id: &str, acl_expr: &str) -> bool;

    /// Whether identities of this scheme stay valid for the lifetime of the
    /// connection without re-validation.
    fn is_authenticated(&self) -> bool;

    /// Syntactic well-formedness of an identity string, used when identities
    /// are persisted in ACLs independent of a live connection.
    fn is_valid(&self, id: &str) -> bool;
}
