//! Domain layer for the auth provider registry.

pub mod catalog;
pub mod error;
pub mod hub;
pub mod registry;

pub use catalog::ProviderCatalog;
pub use error::DomainError;
pub use hub::{ProviderHub, RegistryState};
pub use registry::{ProviderRegistry, ProviderRegistryBuilder};
