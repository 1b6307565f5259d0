//! Service implementation for the key auth provider.

use auth_provider_sdk::{AuthStatus, ConnectionContext, Identity, SecretReadError, ServiceHandle};
use tracing::{debug, error, info};

use crate::constants::{KEY_NODE_PATH, KEY_SCHEME};

/// `key` scheme provider.
///
/// Holds only the service handle; the key is read from the data tree on
/// every call, so a rewritten key takes effect for the next packet.
#[derive(Debug, Clone)]
pub struct KeyAuthProvider {
    service: ServiceHandle,
}

impl KeyAuthProvider {
    #[must_use]
    pub fn new(service: ServiceHandle) -> Self {
        info!(attached = service.is_attached(), "Key auth provider loaded");
        Self { service }
    }

    /// Current shared key, or `None` if no key node exists.
    ///
    /// # Errors
    ///
    /// Returns [`SecretReadError`] if the data tree cannot be read.
    pub fn get_key(&self) -> Result<Option<Vec<u8>>, SecretReadError> {
        self.service.read_secret(KEY_NODE_PATH)
    }

    pub(crate) fn authenticate(
        &self,
        conn: &mut dyn ConnectionContext,
        credential: &[u8],
    ) -> AuthStatus {
        let key = match self.get_key() {
            Ok(key) => key,
            Err(e) => {
                error!(error = %e, "Failed to read shared key");
                return AuthStatus::AuthFailed;
            }
        };

        let key_str = match &key {
            Some(key) => {
                let key_str = display_string(key);
                if !validate(key, credential) {
                    info!(
                        key = %key_str,
                        credential = %display_string(credential),
                        "Key authentication failed"
                    );
                    return AuthStatus::AuthFailed;
                }
                key_str
            }
            None => {
                debug!("No shared key configured, accepting credential");
                String::new()
            }
        };

        debug!(id = %key_str, "Key authentication succeeded");
        conn.add_auth_info(Identity::new(KEY_SCHEME, key_str));
        AuthStatus::Ok
    }
}

/// Check a credential against the shared key.
///
/// Both values are ASCII decimal 32-bit signed integers. The credential is
/// valid when it is a multiple of the key; a key of `0` accepts everything.
/// If either value does not decode (including values outside the `i32`
/// range) the credential is accepted.
#[must_use]
pub fn validate(key: &[u8], credential: &[u8]) -> bool {
    let (Some(key_val), Some(auth_val)) = (decode_integer(key), decode_integer(credential)) else {
        return true;
    };
    key_val == 0 || auth_val.wrapping_rem(key_val) == 0
}

fn decode_integer(bytes: &[u8]) -> Option<i32> {
    std::str::from_utf8(bytes).ok()?.parse().ok()
}

// Non UTF-8 input renders as the empty string.
fn display_string(bytes: &[u8]) -> String {
    std::str::from_utf8(bytes)
        .map(str::to_owned)
        .unwrap_or_default()
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::sync::Arc;

    use auth_provider_sdk::{ConnectionAuth, ConnectionAuthState};
    use tracing_test::traced_test;

    use super::*;

    fn provider_with_key(key: Option<&'static str>) -> KeyAuthProvider {
        let reader = move |path: &str| -> Result<Option<Vec<u8>>, SecretReadError> {
            assert_eq!(path, KEY_NODE_PATH);
            Ok(key.map(|k| k.as_bytes().to_vec()))
        };
        KeyAuthProvider::new(ServiceHandle::new(Arc::new(reader)))
    }

    #[test]
    fn multiples_of_key_are_valid() {
        for k in 1..=25_i32 {
            for n in 1..=40_i32 {
                let key = k.to_string();
                let auth = (k * n).to_string();
                assert!(validate(key.as_bytes(), auth.as_bytes()), "{k} * {n}");
            }
        }
    }

    #[test]
    fn non_multiples_are_invalid() {
        for k in 2..=25_i32 {
            for a in (1..=200_i32).filter(|a| a % k != 0) {
                let key = k.to_string();
                let auth = a.to_string();
                assert!(!validate(key.as_bytes(), auth.as_bytes()), "{a} % {k}");
            }
        }
    }

    #[test]
    fn negative_values_follow_remainder_sign_rules() {
        assert!(validate(b"-5", b"25"));
        assert!(validate(b"5", b"-25"));
        assert!(!validate(b"-5", b"26"));
        assert!(validate(b"-1", i32::MIN.to_string().as_bytes()));
    }

    #[test]
    fn zero_key_accepts_any_integer() {
        for auth in ["0", "1", "7", "-13", "2147483647"] {
            assert!(validate(b"0", auth.as_bytes()));
        }
    }

    #[test]
    fn undecodable_inputs_are_accepted() {
        assert!(validate(b"5", b"abc"));
        assert!(validate(b"5", b""));
        assert!(validate(b"5", b" 25"));
        assert!(validate(b"five", b"26"));
        assert!(validate(&[0xff, 0xfe], b"26"));
        assert!(validate(b"5", b"99999999999999999999999"));
    }

    #[test]
    fn values_outside_i32_range_are_accepted() {
        assert!(validate(b"5", b"2147483651"));
        assert!(validate(b"5", b"3000000001"));
        assert!(validate(b"5", b"-2147483649"));
        assert!(validate(b"3000000000", b"7"));

        // Boundaries still decode and are checked.
        assert!(!validate(b"5", b"2147483647"));
        assert!(validate(b"2147483647", b"2147483647"));
        assert!(validate(b"2", i32::MIN.to_string().as_bytes()));
    }

    #[test]
    fn no_key_accepts_every_credential() {
        let provider = provider_with_key(None);
        let credentials: [&[u8]; 4] = [b"99999", b"", b"not-a-number", &[0xff]];
        for credential in credentials {
            let mut conn = ConnectionAuth::new();
            assert_eq!(
                provider.authenticate(&mut conn, credential),
                AuthStatus::Ok
            );
        }
    }

    #[test]
    fn no_key_grants_empty_key_identity() {
        let provider = provider_with_key(None);
        let mut conn = ConnectionAuth::new();

        assert_eq!(provider.authenticate(&mut conn, b"99999"), AuthStatus::Ok);
        assert_eq!(conn.auth_info(), [Identity::new("key", "")]);
    }

    #[test]
    fn multiple_of_key_grants_key_identity() {
        let provider = provider_with_key(Some("5"));
        let mut conn = ConnectionAuth::new();

        assert_eq!(provider.authenticate(&mut conn, b"25"), AuthStatus::Ok);
        assert_eq!(conn.auth_info(), [Identity::new("key", "5")]);
    }

    #[test]
    #[traced_test]
    fn non_multiple_is_rejected_without_identity() {
        let provider = provider_with_key(Some("5"));
        let mut conn = ConnectionAuth::new();

        assert_eq!(
            provider.authenticate(&mut conn, b"26"),
            AuthStatus::AuthFailed
        );
        assert_eq!(conn.state(), ConnectionAuthState::Unauthenticated);
        assert!(logs_contain("Key authentication failed"));
    }

    #[test]
    fn zero_key_bypasses_check() {
        let provider = provider_with_key(Some("0"));
        let mut conn = ConnectionAuth::new();

        assert_eq!(provider.authenticate(&mut conn, b"7"), AuthStatus::Ok);
        assert_eq!(conn.auth_info(), [Identity::new("key", "0")]);
    }

    #[test]
    fn different_multiples_collapse_to_one_identity() {
        let provider = provider_with_key(Some("5"));
        let mut conn = ConnectionAuth::new();

        assert_eq!(provider.authenticate(&mut conn, b"25"), AuthStatus::Ok);
        assert_eq!(provider.authenticate(&mut conn, b"125"), AuthStatus::Ok);
        assert_eq!(conn.auth_info(), [Identity::new("key", "5")]);
    }

    #[test]
    fn non_utf8_key_accepts_with_empty_identity() {
        let reader = |_: &str| -> Result<Option<Vec<u8>>, SecretReadError> {
            Ok(Some(vec![0xff, 0x35]))
        };
        let provider = KeyAuthProvider::new(ServiceHandle::new(Arc::new(reader)));
        let mut conn = ConnectionAuth::new();

        assert_eq!(provider.authenticate(&mut conn, b"26"), AuthStatus::Ok);
        assert_eq!(conn.auth_info(), [Identity::new("key", "")]);
    }

    #[test]
    fn store_failure_rejects_credential() {
        let reader = |_: &str| -> Result<Option<Vec<u8>>, SecretReadError> {
            Err(SecretReadError::Unavailable("session expired".to_owned()))
        };
        let provider = KeyAuthProvider::new(ServiceHandle::new(Arc::new(reader)));
        let mut conn = ConnectionAuth::new();

        assert_eq!(
            provider.authenticate(&mut conn, b"25"),
            AuthStatus::AuthFailed
        );
        assert!(conn.auth_info().is_empty());
    }

    #[test]
    fn detached_service_behaves_as_no_key() {
        let provider = KeyAuthProvider::new(ServiceHandle::detached());
        assert!(provider.get_key().unwrap().is_none());

        let mut conn = ConnectionAuth::new();
        assert_eq!(provider.authenticate(&mut conn, b"26"), AuthStatus::Ok);
    }
}
