#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Key Auth Provider Plugin
//!
//! Reference implementation of the `key` scheme. The shared secret is an
//! ASCII integer stored at `/key` in the service data tree; a credential is
//! accepted when it is a multiple of that integer.
//!
//! ## Behavior
//!
//! - **No key stored**: every credential is accepted. This lets the key itself
//!   be written through a connection authenticated with this scheme.
//! - **Key `0`**: the check is disabled.
//! - **Undecodable key or credential**: accepted.
//! - Every accepted connection is granted the identity `key:<stored key>`,
//!   regardless of which multiple it presented.
//!
//! The scheme exercises the provider contract only. It is not a security
//! boundary.
//!
//! ## Configuration
//!
//! ```yaml
//! auth_provider:
//!   entries:
//!     authProvider.1: "key_auth_plugin::KeyAuthProvider"
//! ```

pub mod constants;
pub mod domain;
pub mod module;

pub use constants::{KEY_NODE_PATH, KEY_PROVIDER_TYPE, KEY_SCHEME};
pub use domain::{KeyAuthProvider, validate};
