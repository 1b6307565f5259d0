//! Infrastructure adapters for the auth provider registry.

pub mod memory_store;

pub use memory_store::InMemorySecretStore;
