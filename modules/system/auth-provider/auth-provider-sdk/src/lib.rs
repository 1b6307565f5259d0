//! Auth Provider SDK
//!
//! This crate provides the public API shared by the auth provider registry,
//! its plugins, and the connection layer that consumes them:
//!
//! - [`AuthenticationProvider`] - Capability set every authentication scheme implements
//! - [`Identity`] / [`AuthStatus`] - Authentication result models
//! - [`ConnectionContext`] / [`ConnectionAuth`] - Per-connection identity list
//! - [`SecretReader`] / [`ServiceHandle`] - Read access to the service data store
//! - [`ProviderFactory`] - Link-time constructor entries for configurable providers
//!
//! ## Usage
//!
//! Consumers resolve a provider by scheme and hand it the raw credential:
//!
//! ```ignore
//! let provider = registry.get("key").ok_or(UnknownScheme)?;
//! let status = provider.handle_authentication(&mut conn, b"25");
//! if status.is_ok() {
//!     // identities are now available via conn.auth_info()
//! }
//! ```
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod api;
pub mod connection;
pub mod error;
pub mod factory;
pub mod models;
pub mod secret;
pub mod service;

// Re-export main types at crate root
pub use api::{AuthenticationProvider, ProviderHandle};
pub use connection::{ConnectionAuth, ConnectionAuthState, ConnectionContext};
pub use error::{ProviderError, SecretReadError};
pub use factory::{NoArgConstructor, ProviderFactory, ServiceConstructor};
pub use models::{AuthStatus, Identity};
pub use secret::SecretReader;
pub use service::ServiceHandle;
