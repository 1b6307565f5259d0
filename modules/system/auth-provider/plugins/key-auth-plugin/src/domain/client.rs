//! Provider trait implementation for the key auth provider.
//!
//! Implements `AuthenticationProvider` using the domain service.

use auth_provider_sdk::{AuthStatus, AuthenticationProvider, ConnectionContext};
use tracing::debug;

use super::service::KeyAuthProvider;
use crate::constants::KEY_SCHEME;

impl AuthenticationProvider for KeyAuthProvider {
    fn scheme(&self) -> &str {
        KEY_SCHEME
    }

    fn handle_authentication(
        &self,
        conn: &mut dyn ConnectionContext,
        credential: &[u8],
    ) -> AuthStatus {
        self.authenticate(conn, credential)
    }

    fn matches(&self, id: &str, acl_expr: &str) -> bool {
        let ok = id == acl_expr;
        debug!(id, acl_expr, ok, "Key ACL match");
        ok
    }

    fn is_authenticated(&self) -> bool {
        debug!("Key connections are always authenticated");
        true
    }

    fn is_valid(&self, id: &str) -> bool {
        debug!(id, "Key identity is always well-formed");
        true
    }
}
