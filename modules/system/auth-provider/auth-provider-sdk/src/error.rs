//! Error types for the auth provider SDK.

use thiserror::Error;

/// Errors returned by provider constructors.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The provider could not be constructed.
    #[error("construction failed: {0}")]
    Construction(String),

    /// A capability the provider needs is not available from the service handle.
    #[error("missing dependency: {0}")]
    MissingDependency(String),
}

/// Errors raised by a secret store read.
///
/// An absent node is not an error; readers report it as `Ok(None)`.
#[derive(Debug, Clone, Error)]
pub enum SecretReadError {
    #[error("secret store unavailable: {0}")]
    Unavailable(String),
}
