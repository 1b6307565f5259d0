//! Auth Provider Registry
//!
//! Owns the scheme -> provider mapping of the service. Built-in providers are
//! registered explicitly; additional providers are named by type in the
//! configuration and built from factories linked into the binary.
//!
//! Hosts either build an immutable [`ProviderRegistry`] during startup and
//! hand it to the connection layer, or keep a [`ProviderHub`] that performs
//! the same build lazily on first lookup.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod config;
pub mod domain;
pub mod infra;

pub use config::AuthProviderConfig;
pub use domain::{
    DomainError, ProviderCatalog, ProviderHub, ProviderRegistry, ProviderRegistryBuilder,
    RegistryState,
};
pub use infra::InMemorySecretStore;
