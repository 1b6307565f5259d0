//! Catalog of provider factories keyed by type name.

use std::collections::HashMap;

use auth_provider_sdk::{ProviderFactory, ProviderHandle, ServiceHandle};
use tracing::debug;

use super::error::DomainError;

/// Type name -> factory table used to instantiate configured providers.
///
/// Registering a factory under an existing type name replaces it.
#[derive(Debug, Clone, Default)]
pub struct ProviderCatalog {
    factories: HashMap<&'static str, ProviderFactory>,
}

impl ProviderCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog of every factory linked into the binary.
    #[must_use]
    pub fn from_inventory() -> Self {
        let mut catalog = Self::new();
        for factory in inventory::iter::<ProviderFactory> {
            catalog.register(*factory);
        }
        debug!(count = catalog.len(), "Collected linked provider factories");
        catalog
    }

    pub fn register(&mut self, factory: ProviderFactory) {
        self.factories.insert(factory.type_name(), factory);
    }

    #[must_use]
    pub fn with_factory(mut self, factory: ProviderFactory) -> Self {
        self.register(factory);
        self
    }

    #[must_use]
    pub fn get(&self, type_name: &str) -> Option<&ProviderFactory> {
        self.factories.get(type_name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    /// Registered type names, sorted.
    #[must_use]
    pub fn type_names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.factories.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Build a provider of the given type.
    ///
    /// The service-handle constructor is tried first; if it is missing or
    /// fails, the no-argument constructor is used.
    ///
    /// # Errors
    ///
    /// - `UnknownProviderType` if no factory is registered for `type_name`
    /// - `NoUsableConstructor` if the factory has no constructor at all
    /// - `Construction` if the last constructor tried fails
    pub fn instantiate(
        &self,
        type_name: &str,
        service: &ServiceHandle,
    ) -> Result<ProviderHandle, DomainError> {
        let factory = self
            .get(type_name)
            .ok_or_else(|| DomainError::unknown_provider_type(type_name))?;

        let mut last_err = None;
        if let Some(ctor) = factory.service_constructor() {
            match ctor(service) {
                Ok(provider) => return Ok(provider),
                Err(e) => {
                    debug!(
                        type_name,
                        error = %e,
                        "Service-handle constructor failed, trying no-arg constructor"
                    );
                    last_err = Some(e);
                }
            }
        }

        match (factory.no_arg_constructor(), last_err) {
            (Some(ctor), _) => ctor().map_err(|e| DomainError::construction(type_name, e)),
            (None, Some(e)) => Err(DomainError::construction(type_name, e)),
            (None, None) => Err(DomainError::no_usable_constructor(type_name)),
        }
    }
}
