/*
[INPUT]:  API key, secret and passphrase (explicit or from environment)
[OUTPUT]: Immutable credentials with redacted Debug output
[POS]:    Auth layer - credential ownership for the signing pipeline
[UPDATE]: When credential sources or variable names change
*/

use std::fmt;

use secrecy::{ExposeSecret, SecretString};

use crate::http::{OkxError, Result};

const API_KEY_VARS: [&str; 2] = ["OKX_API_KEY", "api_key"];
const SECRET_KEY_VARS: [&str; 2] = ["OKX_SECRET_KEY", "secret_key"];
const PASSPHRASE_VARS: [&str; 2] = ["OKX_PASSPHRASE", "passphrase"];

/// OKX API credentials.
///
/// All three values are wrapped in [`SecretString`], so they are zeroed on
/// drop and never show up in `Debug` output or log events.
pub struct Credentials {
    api_key: SecretString,
    api_secret: SecretString,
    passphrase: SecretString,
}

impl Credentials {
    pub fn new(
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
        passphrase: impl Into<String>,
    ) -> Self {
        Self {
            api_key: SecretString::from(api_key.into()),
            api_secret: SecretString::from(api_secret.into()),
            passphrase: SecretString::from(passphrase.into()),
        }
    }

    /// Load credentials from the process environment.
    ///
    /// A `.env` file in the working directory (or a parent) is read first if
    /// present. Looks for `OKX_API_KEY`, `OKX_SECRET_KEY` and `OKX_PASSPHRASE`,
    /// falling back to `api_key`, `secret_key` and `passphrase`.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build credentials from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |names: &[&str]| {
            names
                .iter()
                .find_map(|name| lookup(*name).filter(|value| !value.is_empty()))
                .ok_or_else(|| OkxError::Config(format!("missing environment variable {}", names[0])))
        };

        Ok(Self::new(
            read(&API_KEY_VARS)?,
            read(&SECRET_KEY_VARS)?,
            read(&PASSPHRASE_VARS)?,
        ))
    }

    pub fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }

    pub fn passphrase(&self) -> &str {
        self.passphrase.expose_secret()
    }

    /// Raw secret bytes, only for keying the HMAC
    pub(crate) fn secret_bytes(&self) -> &[u8] {
        self.api_secret.expose_secret().as_bytes()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"[REDACTED]")
            .field("api_secret", &"[REDACTED]")
            .field("passphrase", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_debug_redacts_everything() {
        let creds = Credentials::new("key-123", "secret-456", "pass-789");
        let rendered = format!("{creds:?}");
        assert!(!rendered.contains("key-123"));
        assert!(!rendered.contains("secret-456"));
        assert!(!rendered.contains("pass-789"));
        assert!(rendered.contains("[REDACTED]"));
    }

    #[test]
    fn test_accessors() {
        let creds = Credentials::new("key", "secret", "pass");
        assert_eq!(creds.api_key(), "key");
        assert_eq!(creds.passphrase(), "pass");
        assert_eq!(creds.secret_bytes(), b"secret");
    }

    #[test]
    fn test_from_lookup_prefers_prefixed_names() {
        let creds = Credentials::from_lookup(lookup_from(&[
            ("OKX_API_KEY", "k1"),
            ("api_key", "k2"),
            ("secret_key", "s"),
            ("passphrase", "p"),
        ]))
        .unwrap();
        assert_eq!(creds.api_key(), "k1");
        assert_eq!(creds.secret_bytes(), b"s");
        assert_eq!(creds.passphrase(), "p");
    }

    #[test]
    fn test_from_lookup_missing_variable() {
        let err = Credentials::from_lookup(lookup_from(&[
            ("OKX_API_KEY", "k"),
            ("OKX_SECRET_KEY", ""),
            ("OKX_PASSPHRASE", "p"),
        ]))
        .unwrap_err();
        match err {
            OkxError::Config(message) => assert!(message.contains("OKX_SECRET_KEY")),
            other => panic!("Expected Config error, got {other:?}"),
        }
    }
}
