//! Domain errors for the auth provider registry.
//!
//! None of these abort registry initialization: each one is logged and the
//! offending configuration entry is skipped.

use auth_provider_sdk::ProviderError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("unknown provider type '{type_name}'")]
    UnknownProviderType { type_name: String },

    #[error("provider type '{type_name}' has no usable constructor")]
    NoUsableConstructor { type_name: String },

    #[error("failed to construct provider '{type_name}': {source}")]
    Construction {
        type_name: String,
        #[source]
        source: ProviderError,
    },

    #[error("invalid provider entry key '{key}': expected '<prefix>.<N>'")]
    InvalidEntryKey { key: String },
}

impl DomainError {
    #[must_use]
    pub fn unknown_provider_type(type_name: impl Into<String>) -> Self {
        Self::UnknownProviderType {
            type_name: type_name.into(),
        }
    }

    #[must_use]
    pub fn no_usable_constructor(type_name: impl Into<String>) -> Self {
        Self::NoUsableConstructor {
            type_name: type_name.into(),
        }
    }

    #[must_use]
    pub fn construction(type_name: impl Into<String>, source: ProviderError) -> Self {
        Self::Construction {
            type_name: type_name.into(),
            source,
        }
    }

    #[must_use]
    pub fn invalid_entry_key(key: impl Into<String>) -> Self {
        Self::InvalidEntryKey { key: key.into() }
    }
}
