//! Configuration for the auth provider registry.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Registry configuration.
///
/// ```yaml
/// auth_provider:
///   prefix: authProvider
///   entries:
///     authProvider.1: "key_auth_plugin::KeyAuthProvider"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AuthProviderConfig {
    /// Namespace of provider entries. Only keys of the form `<prefix>.<N>`
    /// name providers.
    pub prefix: String,

    /// Flat configuration namespace; values are provider type names.
    pub entries: BTreeMap<String, String>,
}

impl Default for AuthProviderConfig {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
            entries: BTreeMap::new(),
        }
    }
}

fn default_prefix() -> String {
    "authProvider".to_owned()
}

/// A configured provider entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderEntry {
    /// Full configuration key, e.g. `authProvider.1`.
    pub key: String,
    /// Numeric suffix of the key.
    pub index: u64,
    /// Provider type to instantiate.
    pub type_name: String,
}

impl AuthProviderConfig {
    /// Add an entry under `<prefix>.<index>`.
    #[must_use]
    pub fn with_provider(mut self, index: u64, type_name: impl Into<String>) -> Self {
        let key = format!("{}.{index}", self.prefix);
        self.entries.insert(key, type_name.into());
        self
    }

    /// Provider entries ordered by their numeric suffix.
    #[must_use]
    pub fn provider_entries(&self) -> Vec<ProviderEntry> {
        let mut out: Vec<ProviderEntry> = self
            .entries
            .iter()
            .filter_map(|(key, type_name)| {
                let index = self.suffix(key)?.parse::<u64>().ok()?;
                Some(ProviderEntry {
                    key: key.clone(),
                    index,
                    type_name: type_name.clone(),
                })
            })
            .collect();
        out.sort_by(|a, b| a.index.cmp(&b.index).then_with(|| a.key.cmp(&b.key)));
        out
    }

    /// Keys inside the namespace whose suffix is not an integer.
    pub fn malformed_keys(&self) -> impl Iterator<Item = &str> {
        self.entries
            .keys()
            .filter(|key| {
                self.suffix(key)
                    .is_some_and(|suffix| suffix.parse::<u64>().is_err())
            })
            .map(String::as_str)
    }

    fn suffix<'a>(&self, key: &'a str) -> Option<&'a str> {
        key.strip_prefix(self.prefix.as_str())?.strip_prefix('.')
    }
}
