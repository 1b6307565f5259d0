//! Provider factories.
//!
//! Configuration names provider *types*; a factory maps such a type name to
//! the constructors able to build it. Plugins submit their factory at link
//! time:
//!
//! ```ignore
//! inventory::submit! {
//!     ProviderFactory::new("my_plugin::MyProvider").with_service(MyProvider::from_service)
//! }
//! ```
//!
//! The registry collects every linked factory with
//! `inventory::iter::<ProviderFactory>`.

use std::fmt;

use crate::api::ProviderHandle;
use crate::error::ProviderError;
use crate::service::ServiceHandle;

/// Constructor taking the service handle.
pub type ServiceConstructor = fn(&ServiceHandle) -> Result<ProviderHandle, ProviderError>;

/// Constructor taking no arguments.
pub type NoArgConstructor = fn() -> Result<ProviderHandle, ProviderError>;

/// Type-name keyed constructor pair for a configurable provider.
///
/// The service-handle constructor is preferred; the no-argument constructor
/// is the fallback when the former is absent or fails.
#[derive(Clone, Copy)]
pub struct ProviderFactory {
    type_name: &'static str,
    with_service: Option<ServiceConstructor>,
    no_arg: Option<NoArgConstructor>,
}

impl ProviderFactory {
    /// Factory without constructors. Add at least one before submitting it.
    #[must_use]
    pub const fn new(type_name: &'static str) -> Self {
        Self {
            type_name,
            with_service: None,
            no_arg: None,
        }
    }

    #[must_use]
    pub const fn with_service(self, ctor: ServiceConstructor) -> Self {
        Self {
            with_service: Some(ctor),
            ..self
        }
    }

    #[must_use]
    pub const fn no_arg(self, ctor: NoArgConstructor) -> Self {
        Self {
            no_arg: Some(ctor),
            ..self
        }
    }

    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    #[must_use]
    pub const fn service_constructor(&self) -> Option<ServiceConstructor> {
        self.with_service
    }

    #[must_use]
    pub const fn no_arg_constructor(&self) -> Option<NoArgConstructor> {
        self.no_arg
    }

    #[must_use]
    pub const fn has_constructor(&self) -> bool {
        self.with_service.is_some() || self.no_arg.is_some()
    }
}

impl fmt::Debug for ProviderFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderFactory")
            .field("type_name", &self.type_name)
            .field("with_service", &self.with_service.is_some())
            .field("no_arg", &self.no_arg.is_some())
            .finish()
    }
}

inventory::collect!(ProviderFactory);
