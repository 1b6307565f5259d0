//! Read access to the service data store.

use crate::error::SecretReadError;

/// Capability to read a node of the service data store.
///
/// Providers depend on this instead of on a concrete store so tests can
/// substitute their own. Any `Fn(&str) -> Result<Option<Vec<u8>>, _>` closure
/// is a reader as well.
pub trait SecretReader: Send + Sync {
    /// Read the raw bytes stored at `path`.
    ///
    /// Returns `Ok(None)` when no node exists at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`SecretReadError`] if the store cannot be queried.
    fn read(&self, path: &str) -> Result<Option<Vec<u8>>, SecretReadError>;
}

impl<F> SecretReader for F
where
    F: Fn(&str) -> Result<Option<Vec<u8>>, SecretReadError> + Send + Sync,
{
    fn read(&self, path: &str) -> Result<Option<Vec<u8>>, SecretReadError> {
        self(path)
    }
}
