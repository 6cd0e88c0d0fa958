//! Client credentials and cached token pairs.
//!
//! All credential types implement custom Debug to redact sensitive data.

use serde::{Deserialize, Serialize};

use crate::error::{Error, ErrorKind, Result};

/// OAuth client registration used to authenticate against a token endpoint.
///
/// `client_secret` is redacted in Debug output.
#[derive(Clone)]
pub struct ClientCredentials {
    client_id: String,
    client_secret: String,
}

impl std::fmt::Debug for ClientCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientCredentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .finish()
    }
}

impl ClientCredentials {
    /// Create client credentials.
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    /// The client id.
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub(crate) fn client_secret(&self) -> &str {
        &self.client_secret
    }
}

/// The bearer/refresh token pair persisted between process runs.
///
/// Serialized as a JSON object with exactly the keys `access_token` and
/// `refresh_token`. Both values are redacted in Debug output.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachedCredentials {
    /// Bearer token presented on API requests.
    pub access_token: String,
    /// Refresh token used for the next grant.
    pub refresh_token: String,
}

impl std::fmt::Debug for CachedCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CachedCredentials")
            .field("access_token", &"[REDACTED]")
            .field("refresh_token", &"[REDACTED]")
            .finish()
    }
}

impl CachedCredentials {
    /// Create a token pair.
    pub fn new(access_token: impl Into<String>, refresh_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: refresh_token.into(),
        }
    }
}

/// Tokens a manager starts from before anything has been cached.
#[derive(Clone, Default)]
pub struct InitialTokens {
    pub(crate) bearer_token: String,
    pub(crate) refresh_token: String,
}

impl std::fmt::Debug for InitialTokens {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InitialTokens")
            .field("bearer_token", &"[REDACTED]")
            .field("refresh_token", &"[REDACTED]")
            .finish()
    }
}

impl InitialTokens {
    /// Create the initial token pair.
    pub fn new(bearer_token: impl Into<String>, refresh_token: impl Into<String>) -> Self {
        Self {
            bearer_token: bearer_token.into(),
            refresh_token: refresh_token.into(),
        }
    }
}

/// Read a required environment variable.
pub(crate) fn required_env(name: &str) -> Result<String> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(Error::new(ErrorKind::EnvVar(name.to_string()))),
    }
}

/// Read an optional environment variable, treating empty values as unset.
pub(crate) fn optional_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

/// Serializes tests that set or clear process environment variables.
#[cfg(test)]
pub(crate) static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
