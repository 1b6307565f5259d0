//! Immutable scheme -> provider registry and its builder.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use auth_provider_sdk::{AuthStatus, ConnectionContext, ProviderHandle, ServiceHandle};
use tracing::{debug, info, warn};

use super::catalog::ProviderCatalog;
use super::error::DomainError;
use crate::config::AuthProviderConfig;

/// Scheme -> provider mapping.
///
/// Produced once by [`ProviderRegistryBuilder::build`] and read-only
/// afterwards, so lookups need no locking. Share it behind an `Arc`.
#[derive(Clone, Default)]
pub struct ProviderRegistry {
    providers: BTreeMap<String, ProviderHandle>,
}

impl ProviderRegistry {
    #[must_use]
    pub fn builder() -> ProviderRegistryBuilder {
        ProviderRegistryBuilder::default()
    }

    /// Provider registered for `scheme`, if any.
    ///
    /// `None` means the client used a scheme this service does not know; the
    /// caller should reject the packet, not treat it as a fault.
    #[must_use]
    pub fn get(&self, scheme: &str) -> Option<ProviderHandle> {
        self.providers.get(scheme).map(Arc::clone)
    }

    #[must_use]
    pub fn contains(&self, scheme: &str) -> bool {
        self.providers.contains_key(scheme)
    }

    /// Registered schemes in sorted order.
    #[must_use]
    pub fn list_providers(&self) -> Vec<String> {
        self.providers.keys().cloned().collect()
    }

    /// Space-separated list of registered schemes, for diagnostics.
    #[must_use]
    pub fn describe(&self) -> String {
        self.providers
            .keys()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Route one authentication packet to the provider of `scheme`.
    ///
    /// An unknown scheme is rejected with [`AuthStatus::AuthFailed`].
    pub fn authenticate(
        &self,
        conn: &mut dyn ConnectionContext,
        scheme: &str,
        credential: &[u8],
    ) -> AuthStatus {
        match self.providers.get(scheme) {
            Some(provider) => provider.handle_authentication(conn, credential),
            None => {
                warn!(scheme, "No auth provider registered for scheme");
                AuthStatus::AuthFailed
            }
        }
    }

    fn insert(&mut self, provider: ProviderHandle) {
        let scheme = provider.scheme().to_owned();
        if self.providers.insert(scheme.clone(), provider).is_some() {
            debug!(scheme = %scheme, "Replaced previously registered auth provider");
        }
    }
}

impl fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderRegistry")
            .field("schemes", &self.providers.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Startup-time description of a registry.
///
/// Built-in providers are registered first, then every configured entry in
/// ascending `<N>` order. A later provider for an already registered scheme
/// replaces the earlier one.
#[derive(Clone, Default)]
pub struct ProviderRegistryBuilder {
    builtins: Vec<ProviderHandle>,
    catalog: ProviderCatalog,
    config: AuthProviderConfig,
}

impl ProviderRegistryBuilder {
    #[must_use]
    pub fn with_builtin(mut self, provider: ProviderHandle) -> Self {
        self.builtins.push(provider);
        self
    }

    #[must_use]
    pub fn with_catalog(mut self, catalog: ProviderCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    #[must_use]
    pub fn with_config(mut self, config: AuthProviderConfig) -> Self {
        self.config = config;
        self
    }

    /// Instantiate every provider and produce the registry.
    ///
    /// A configured entry that cannot be instantiated is logged and skipped;
    /// it never prevents the remaining entries or the built-ins from being
    /// registered.
    #[must_use]
    #[tracing::instrument(skip_all, fields(builtins = self.builtins.len(), prefix = %self.config.prefix))]
    pub fn build(&self, service: &ServiceHandle) -> ProviderRegistry {
        let mut registry = ProviderRegistry::default();

        for provider in &self.builtins {
            debug!(scheme = provider.scheme(), "Registering built-in auth provider");
            registry.insert(Arc::clone(provider));
        }

        for key in self.config.malformed_keys() {
            let err = DomainError::invalid_entry_key(key);
            warn!(key, error = %err, "Skipping auth provider entry");
        }

        for entry in self.config.provider_entries() {
            match self.catalog.instantiate(&entry.type_name, service) {
                Ok(provider) => {
                    info!(
                        key = %entry.key,
                        type_name = %entry.type_name,
                        scheme = provider.scheme(),
                        "Loaded auth provider"
                    );
                    registry.insert(provider);
                }
                Err(e) => {
                    warn!(
                        key = %entry.key,
                        type_name = %entry.type_name,
                        error = %e,
                        "Problems loading auth provider, skipping"
                    );
                }
            }
        }

        info!(providers = %registry.describe(), "Auth provider registry built");
        registry
    }
}

impl fmt::Debug for ProviderRegistryBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderRegistryBuilder")
            .field(
                "builtins",
                &self.builtins.iter().map(|p| p.scheme()).collect::<Vec<_>>(),
            )
            .field("catalog", &self.catalog.type_names())
            .field("config", &self.config)
            .finish()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use auth_provider_sdk::{
        AuthenticationProvider, ConnectionAuth, Identity, ProviderError, ProviderFactory,
    };
    use tracing_test::traced_test;

    use super::*;

    /// Accepts everything and grants `<scheme>:<tag>`.
    struct Tagged {
        scheme: &'static str,
        tag: &'static str,
    }

    impl AuthenticationProvider for Tagged {
        fn scheme(&self) -> &str {
            self.scheme
        }

        fn handle_authentication(
            &self,
            conn: &mut dyn ConnectionContext,
            _credential: &[u8],
        ) -> AuthStatus {
            conn.add_auth_info(Identity::new(self.scheme, self.tag));
            AuthStatus::Ok
        }

        fn matches(&self, id: &str, acl_expr: &str) -> bool {
            id == acl_expr
        }

        fn is_authenticated(&self) -> bool {
            true
        }

        fn is_valid(&self, _id: &str) -> bool {
            true
        }
    }

    fn builtin(scheme: &'static str) -> ProviderHandle {
        Arc::new(Tagged {
            scheme,
            tag: "builtin",
        })
    }

    fn alpha() -> Result<ProviderHandle, ProviderError> {
        Ok(Arc::new(Tagged {
            scheme: "alpha",
            tag: "configured",
        }))
    }

    fn ip_override(_: &ServiceHandle) -> Result<ProviderHandle, ProviderError> {
        Ok(Arc::new(Tagged {
            scheme: "ip",
            tag: "configured",
        }))
    }

    fn broken() -> Result<ProviderHandle, ProviderError> {
        Err(ProviderError::Construction("boom".to_owned()))
    }

    fn catalog() -> ProviderCatalog {
        ProviderCatalog::new()
            .with_factory(ProviderFactory::new("test::Alpha").no_arg(alpha))
            .with_factory(ProviderFactory::new("test::IpOverride").with_service(ip_override))
            .with_factory(ProviderFactory::new("test::Broken").no_arg(broken))
            .with_factory(ProviderFactory::new("test::NoCtor"))
    }

    fn builder(config: AuthProviderConfig) -> ProviderRegistryBuilder {
        ProviderRegistry::builder()
            .with_builtin(builtin("ip"))
            .with_builtin(builtin("digest"))
            .with_catalog(catalog())
            .with_config(config)
    }

    #[test]
    fn builtins_are_registered_without_config() {
        let registry = builder(AuthProviderConfig::default()).build(&ServiceHandle::detached());

        assert_eq!(registry.list_providers(), ["digest", "ip"]);
        assert_eq!(registry.describe(), "digest ip");
    }

    #[test]
    fn configured_provider_is_registered() {
        let cfg = AuthProviderConfig::default().with_provider(1, "test::Alpha");
        let registry = builder(cfg).build(&ServiceHandle::detached());

        assert_eq!(registry.list_providers(), ["alpha", "digest", "ip"]);
        assert!(registry.contains("alpha"));
    }

    #[test]
    fn unknown_scheme_lookup_returns_none() {
        let registry = builder(AuthProviderConfig::default()).build(&ServiceHandle::detached());
        assert!(registry.get("kerberos").is_none());
    }

    #[test]
    fn configured_provider_replaces_builtin_of_same_scheme() {
        let cfg = AuthProviderConfig::default().with_provider(1, "test::IpOverride");
        let registry = builder(cfg).build(&ServiceHandle::detached());

        let mut conn = ConnectionAuth::new();
        let status = registry.authenticate(&mut conn, "ip", b"");

        assert_eq!(status, AuthStatus::Ok);
        assert_eq!(conn.auth_info(), [Identity::new("ip", "configured")]);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    #[traced_test]
    fn failing_entries_are_skipped_and_logged() {
        let cfg = AuthProviderConfig::default()
            .with_provider(1, "test::Broken")
            .with_provider(2, "test::DoesNotExist")
            .with_provider(3, "test::NoCtor")
            .with_provider(4, "test::Alpha");
        let registry = builder(cfg).build(&ServiceHandle::detached());

        assert_eq!(registry.list_providers(), ["alpha", "digest", "ip"]);
        assert!(logs_contain("Problems loading auth provider"));
        assert!(logs_contain("test::Broken"));
        assert!(logs_contain("unknown provider type 'test::DoesNotExist'"));
        assert!(logs_contain("has no usable constructor"));
    }

    #[test]
    #[traced_test]
    fn malformed_entry_key_is_skipped() {
        let mut cfg = AuthProviderConfig::default();
        cfg.entries
            .insert("authProvider.first".to_owned(), "test::Alpha".to_owned());
        let registry = builder(cfg).build(&ServiceHandle::detached());

        assert!(!registry.contains("alpha"));
        assert!(logs_contain("authProvider.first"));
    }

    #[test]
    fn building_twice_yields_same_schemes() {
        let cfg = AuthProviderConfig::default()
            .with_provider(1, "test::Alpha")
            .with_provider(2, "test::Broken");
        let builder = builder(cfg);

        let first = builder.build(&ServiceHandle::detached());
        let second = builder.build(&ServiceHandle::detached());
        assert_eq!(first.list_providers(), second.list_providers());
    }

    #[test]
    #[traced_test]
    fn unknown_scheme_is_rejected_on_authenticate() {
        let registry = ProviderRegistry::default();
        let mut conn = ConnectionAuth::new();

        let status = registry.authenticate(&mut conn, "nope", b"cred");

        assert_eq!(status, AuthStatus::AuthFailed);
        assert!(conn.auth_info().is_empty());
        assert!(logs_contain("No auth provider registered for scheme"));
    }
}
