//! In-memory data store nodes.
//!
//! Stands in for the service data tree in tests and in the bootstrap binary.
//! Only the read side is exposed to providers, through [`SecretReader`].

use std::collections::HashMap;

use auth_provider_sdk::{SecretReadError, SecretReader};
use parking_lot::RwLock;

/// Path -> bytes map shared between writers and providers.
#[derive(Debug, Default)]
pub struct InMemorySecretStore {
    nodes: RwLock<HashMap<String, Vec<u8>>>,
}

impl InMemorySecretStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create or overwrite the node at `path`.
    pub fn set(&self, path: impl Into<String>, data: impl Into<Vec<u8>>) {
        self.nodes.write().insert(path.into(), data.into());
    }

    /// Delete the node at `path`. Returns `true` if it existed.
    pub fn remove(&self, path: &str) -> bool {
        self.nodes.write().remove(path).is_some()
    }

    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        self.nodes.read().contains_key(path)
    }
}

impl<K, V> FromIterator<(K, V)> for InMemorySecretStore
where
    K: Into<String>,
    V: Into<Vec<u8>>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let nodes = iter
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            nodes: RwLock::new(nodes),
        }
    }
}

impl SecretReader for InMemorySecretStore {
    fn read(&self, path: &str) -> Result<Option<Vec<u8>>, SecretReadError> {
        Ok(self.nodes.read().get(path).cloned())
    }
}
