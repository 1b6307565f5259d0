//! Well-known names of the `key` scheme.

/// Scheme identifier.
pub const KEY_SCHEME: &str = "key";

/// Data tree node holding the shared key.
pub const KEY_NODE_PATH: &str = "/key";

/// Type name to use in provider configuration entries.
pub const KEY_PROVIDER_TYPE: &str = "key_auth_plugin::KeyAuthProvider";
