//! Key auth provider registration.
//!
//! Submits the provider factory so the registry can build it when a
//! configuration entry names [`KEY_PROVIDER_TYPE`]. The crate only has to be
//! linked into the binary.

use std::sync::Arc;

use auth_provider_sdk::{ProviderError, ProviderFactory, ProviderHandle, ServiceHandle};

use crate::constants::KEY_PROVIDER_TYPE;
use crate::domain::KeyAuthProvider;

fn from_service(service: &ServiceHandle) -> Result<ProviderHandle, ProviderError> {
    Ok(Arc::new(KeyAuthProvider::new(service.clone())))
}

/// Factory for the `key` provider.
pub const FACTORY: ProviderFactory =
    ProviderFactory::new(KEY_PROVIDER_TYPE).with_service(from_service);

inventory::submit! { FACTORY }
