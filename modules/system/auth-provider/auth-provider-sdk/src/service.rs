//! Service handle passed to provider constructors.

use std::fmt;
use std::sync::Arc;

use crate::error::SecretReadError;
use crate::secret::SecretReader;

/// Capabilities the hosting service exposes to providers.
///
/// Cheap to clone. A detached handle has no data store attached; every read
/// through it reports an absent node.
#[derive(Clone, Default)]
pub struct ServiceHandle {
    secrets: Option<Arc<dyn SecretReader>>,
}

impl ServiceHandle {
    #[must_use]
    pub fn new(secrets: Arc<dyn SecretReader>) -> Self {
        Self {
            secrets: Some(secrets),
        }
    }

    /// Handle without a data store.
    #[must_use]
    pub fn detached() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.secrets.is_some()
    }

    /// Read a node of the data store.
    ///
    /// # Errors
    ///
    /// Propagates [`SecretReadError`] from the attached reader.
    pub fn read_secret(&self, path: &str) -> Result<Option<Vec<u8>>, SecretReadError> {
        match &self.secrets {
            Some(reader) => reader.read(path),
            None => Ok(None),
        }
    }
}

impl fmt::Debug for ServiceHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceHandle")
            .field("attached", &self.is_attached())
            .finish()
    }
}
