//! Domain layer for the key auth provider.

pub mod client;
pub mod service;

pub use service::{KeyAuthProvider, validate};
