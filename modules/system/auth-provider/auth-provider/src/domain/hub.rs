//! Lazily initialized provider registry.
//!
//! For hosts that resolve providers on demand instead of building the
//! registry during startup. The first `initialize` (or lookup) builds the
//! registry exactly once, even under concurrent callers; later calls only
//! read it.

use std::fmt;
use std::sync::OnceLock;
use std::sync::atomic::{AtomicU8, Ordering};

use auth_provider_sdk::{AuthStatus, ConnectionContext, ProviderHandle, ServiceHandle};
use tracing::{info, warn};

use super::registry::{ProviderRegistry, ProviderRegistryBuilder};

/// Lifecycle of a [`ProviderHub`]. `Initialized` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryState {
    Uninitialized,
    Initializing,
    Initialized,
}

const UNINITIALIZED: u8 = 0;
const INITIALIZING: u8 = 1;
const INITIALIZED: u8 = 2;

/// Registry that is built on first use.
pub struct ProviderHub {
    builder: ProviderRegistryBuilder,
    registry: OnceLock<ProviderRegistry>,
    state: AtomicU8,
}

impl ProviderHub {
    #[must_use]
    pub fn new(builder: ProviderRegistryBuilder) -> Self {
        Self {
            builder,
            registry: OnceLock::new(),
            state: AtomicU8::new(UNINITIALIZED),
        }
    }

    #[must_use]
    pub fn state(&self) -> RegistryState {
        match self.state.load(Ordering::Acquire) {
            UNINITIALIZED => RegistryState::Uninitialized,
            INITIALIZING => RegistryState::Initializing,
            _ => RegistryState::Initialized,
        }
    }

    /// Build the registry if that has not happened yet.
    ///
    /// Concurrent first callers block until the single build pass finishes;
    /// every caller gets the same registry. Subsequent calls are no-ops.
    ///
    /// If the build unwinds, the hub returns to `Uninitialized` and the next
    /// call retries.
    pub fn initialize(&self, service: &ServiceHandle) -> &ProviderRegistry {
        self.registry.get_or_init(|| {
            let guard = InitGuard::enter(&self.state);
            info!("Initializing auth provider registry");
            let registry = self.builder.build(service);
            guard.complete();
            registry
        })
    }

    /// Registry, if it has been built already.
    #[must_use]
    pub fn registry(&self) -> Option<&ProviderRegistry> {
        self.registry.get()
    }

    /// Provider for `scheme`, initializing the registry on first use.
    #[must_use]
    pub fn get_provider(&self, service: &ServiceHandle, scheme: &str) -> Option<ProviderHandle> {
        self.initialize(service).get(scheme)
    }

    /// Registered schemes; empty before initialization.
    #[must_use]
    pub fn list_providers(&self) -> Vec<String> {
        self.registry
            .get()
            .map(ProviderRegistry::list_providers)
            .unwrap_or_default()
    }

    /// Route one authentication packet, initializing the registry on first use.
    pub fn authenticate(
        &self,
        service: &ServiceHandle,
        conn: &mut dyn ConnectionContext,
        scheme: &str,
        credential: &[u8],
    ) -> AuthStatus {
        if let Some(provider) = self.get_provider(service, scheme) {
            provider.handle_authentication(conn, credential)
        } else {
            warn!(scheme, "Authentication packet for unrecognized scheme");
            AuthStatus::AuthFailed
        }
    }
}

impl fmt::Debug for ProviderHub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderHub")
            .field("state", &self.state())
            .field("registry", &self.registry.get())
            .finish_non_exhaustive()
    }
}

/// Marks the hub `Initializing` for the duration of a build pass.
///
/// Dropped without [`InitGuard::complete`] (the build panicked) it restores
/// `Uninitialized`.
struct InitGuard<'a> {
    state: &'a AtomicU8,
}

impl<'a> InitGuard<'a> {
    fn enter(state: &'a AtomicU8) -> Self {
        state.store(INITIALIZING, Ordering::Release);
        Self { state }
    }

    fn complete(self) {
        self.state.store(INITIALIZED, Ordering::Release);
        std::mem::forget(self);
    }
}

impl Drop for InitGuard<'_> {
    fn drop(&mut self) {
        self.state.store(UNINITIALIZED, Ordering::Release);
    }
}
