//! Cached bearer-token management.
//!
//! A [`TokenManager`] hands out the current bearer token for one provider and
//! refreshes it on demand through the provider's token endpoint, persisting
//! the resulting token pair so later processes start from it.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{info, instrument, warn};

use crate::credentials::{optional_env, required_env, CachedCredentials, ClientCredentials, InitialTokens};
use crate::error::{Error, ErrorKind, Result};
use crate::oauth::{GrantShape, TokenEndpoint};
use crate::provider::Provider;
use crate::storage::{FileTokenStorage, TokenStorage};

/// Environment variable overriding the token cache directory.
pub const TOKEN_DIR_ENV: &str = "BUSBAR_TOKEN_DIR";

/// Environment variable switching managers built by `from_env` to offline mode.
pub const OFFLINE_ENV: &str = "BUSBAR_OFFLINE";

/// Whether refreshes may reach the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RefreshMode {
    /// Refreshes call the token endpoint.
    #[default]
    Live,
    /// Refreshes are skipped entirely; no request is sent and the cache is
    /// left untouched. Used for sandboxed runs.
    Offline,
}

/// Obtains and caches an OAuth 2.0 bearer token for one provider.
pub struct TokenManager {
    provider: Provider,
    endpoint: TokenEndpoint,
    client: ClientCredentials,
    initial: InitialTokens,
    storage: Arc<dyn TokenStorage>,
    cache_key: String,
    mode: RefreshMode,
    http_client: reqwest::Client,
}

impl std::fmt::Debug for TokenManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenManager")
            .field("provider", &self.provider)
            .field("endpoint", &self.endpoint)
            .field("client", &self.client)
            .field("cache_key", &self.cache_key)
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}

impl TokenManager {
    /// Start building a manager for `provider`.
    pub fn builder(provider: Provider) -> TokenManagerBuilder {
        TokenManagerBuilder::new(provider)
    }

    /// Build a manager from environment variables.
    ///
    /// With `P` the provider's [`env_prefix`](Provider::env_prefix):
    /// - `P_CLIENT_ID`, `P_CLIENT_SECRET` (required)
    /// - `P_BEARER_TOKEN`, `P_REFRESH_TOKEN` (initial tokens, optional)
    /// - `P_TOKEN_URL` (optional for Google and HubSpot)
    /// - `P_HOST` and, for Workday, `WORKDAY_TENANT` when `P_TOKEN_URL` is unset
    /// - `BUSBAR_TOKEN_DIR`, `BUSBAR_OFFLINE` (optional)
    pub fn from_env(provider: Provider) -> Result<Self> {
        let prefix = provider.env_prefix();

        let client = ClientCredentials::new(
            required_env(&format!("{prefix}_CLIENT_ID"))?,
            required_env(&format!("{prefix}_CLIENT_SECRET"))?,
        );
        let initial = InitialTokens::new(
            optional_env(&format!("{prefix}_BEARER_TOKEN")).unwrap_or_default(),
            optional_env(&format!("{prefix}_REFRESH_TOKEN")).unwrap_or_default(),
        );

        let mut builder = TokenManager::builder(provider)
            .with_client_credentials(client)
            .with_initial_tokens(initial);

        if let Some(url) = optional_env(&format!("{prefix}_TOKEN_URL")) {
            builder = builder.with_token_url(url);
        } else if let Some(host) = optional_env(&format!("{prefix}_HOST")) {
            let tenant = match provider {
                Provider::Workday(_) => required_env("WORKDAY_TENANT")?,
                _ => String::new(),
            };
            if let Some(url) = provider.tenant_token_url(&host, &tenant) {
                builder = builder.with_token_url(url);
            }
        }

        builder = builder.with_storage(Arc::new(FileTokenStorage::from_env()?));

        if optional_env(OFFLINE_ENV).is_some_and(|v| is_truthy(&v)) {
            builder = builder.with_mode(RefreshMode::Offline);
        }

        builder.build()
    }

    /// The provider this manager refreshes against.
    pub fn provider(&self) -> Provider {
        self.provider
    }

    /// The token endpoint in use.
    pub fn endpoint(&self) -> &TokenEndpoint {
        &self.endpoint
    }

    /// Storage key of the cached credentials.
    pub fn cache_key(&self) -> &str {
        &self.cache_key
    }

    /// Current refresh mode.
    pub fn mode(&self) -> RefreshMode {
        self.mode
    }

    /// Return the cached bearer token, or the initial one when nothing is
    /// cached.
    ///
    /// Never touches the network and never fails: an unreadable cache is
    /// logged and treated as absent.
    pub fn get_bearer_token(&self) -> String {
        match self.load_cached() {
            Some(creds) if !creds.access_token.is_empty() => creds.access_token,
            _ => self.initial.bearer_token.clone(),
        }
    }

    /// Refresh the bearer token and cache the new token pair.
    ///
    /// The refresh token comes from the cache, falling back to the initial
    /// one. On success the cache is replaced wholesale; if the provider did
    /// not rotate the refresh token, the one just used is kept. On failure
    /// the cache is left as it was and the error is returned unchanged.
    #[instrument(skip(self), fields(provider = %self.provider, key = %self.cache_key))]
    pub async fn refresh_bearer_token(&self) -> Result<()> {
        if self.mode == RefreshMode::Offline {
            info!("offline mode, skipping token refresh");
            return Ok(());
        }

        let refresh_token = self.current_refresh_token();
        if refresh_token.is_empty() {
            return Err(Error::new(ErrorKind::InvalidInput(
                "no refresh token available".to_string(),
            )));
        }

        let token = self
            .endpoint
            .refresh(&self.http_client, &self.client, &refresh_token)
            .await?;

        let refresh_token = token
            .refresh_token
            .filter(|rt| !rt.is_empty())
            .unwrap_or(refresh_token);
        let creds = CachedCredentials::new(token.access_token, refresh_token);

        // The cache lock may be held by another process; wait for it off the
        // async worker threads.
        let storage = Arc::clone(&self.storage);
        let key = self.cache_key.clone();
        tokio::task::spawn_blocking(move || storage.save(&key, &creds)).await??;
        info!("bearer token refreshed");

        Ok(())
    }

    /// Credentials currently held in the cache.
    pub fn cached_credentials(&self) -> Result<Option<CachedCredentials>> {
        self.storage.load(&self.cache_key)
    }

    /// Whether the cache holds credentials for this manager's key.
    pub fn has_cached_credentials(&self) -> Result<bool> {
        self.storage.exists(&self.cache_key)
    }

    /// Remove the cached credentials; the manager falls back to its initial
    /// tokens afterwards.
    pub fn clear_cache(&self) -> Result<()> {
        self.storage.delete(&self.cache_key)
    }

    fn current_refresh_token(&self) -> String {
        match self.load_cached() {
            Some(creds) if !creds.refresh_token.is_empty() => creds.refresh_token,
            _ => self.initial.refresh_token.clone(),
        }
    }

    fn load_cached(&self) -> Option<CachedCredentials> {
        match self.storage.load(&self.cache_key) {
            Ok(creds) => creds,
            Err(e) => {
                warn!(key = %self.cache_key, error = %e, "ignoring unreadable token cache");
                None
            }
        }
    }
}

/// Builder for [`TokenManager`].
#[derive(Default)]
pub struct TokenManagerBuilder {
    provider: Option<Provider>,
    token_url: Option<String>,
    grant_shape: Option<GrantShape>,
    client: Option<ClientCredentials>,
    initial: InitialTokens,
    storage: Option<Arc<dyn TokenStorage>>,
    storage_dir: Option<PathBuf>,
    cache_key: Option<String>,
    mode: RefreshMode,
    http_client: Option<reqwest::Client>,
}

impl TokenManagerBuilder {
    fn new(provider: Provider) -> Self {
        Self {
            provider: Some(provider),
            ..Default::default()
        }
    }

    /// Set the OAuth client id and secret.
    pub fn with_client_credentials(mut self, client: ClientCredentials) -> Self {
        self.client = Some(client);
        self
    }

    /// Set the tokens used before anything is cached.
    pub fn with_initial_tokens(mut self, initial: InitialTokens) -> Self {
        self.initial = initial;
        self
    }

    /// Override the token endpoint URL.
    pub fn with_token_url(mut self, url: impl Into<String>) -> Self {
        self.token_url = Some(url.into());
        self
    }

    /// Override the provider's grant shape.
    pub fn with_grant_shape(mut self, shape: GrantShape) -> Self {
        self.grant_shape = Some(shape);
        self
    }

    /// Use a custom token storage.
    pub fn with_storage(mut self, storage: Arc<dyn TokenStorage>) -> Self {
        self.storage = Some(storage);
        self
    }

    /// Keep token files under `dir` instead of the default directory.
    pub fn with_storage_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.storage_dir = Some(dir.into());
        self
    }

    /// Override the storage key (defaults to the provider's cache key).
    pub fn with_cache_key(mut self, key: impl Into<String>) -> Self {
        self.cache_key = Some(key.into());
        self
    }

    /// Set the refresh mode.
    pub fn with_mode(mut self, mode: RefreshMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set a custom HTTP client.
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Build the manager.
    pub fn build(self) -> Result<TokenManager> {
        let provider = self
            .provider
            .ok_or_else(|| Error::new(ErrorKind::Config("provider is required".to_string())))?;

        let client = self.client.ok_or_else(|| {
            Error::new(ErrorKind::Config(
                "client credentials are required".to_string(),
            ))
        })?;

        let token_url = self
            .token_url
            .or_else(|| provider.default_token_url().map(String::from))
            .ok_or_else(|| {
                Error::new(ErrorKind::Config(format!(
                    "{provider} requires an explicit token URL"
                )))
            })?;
        let shape = self.grant_shape.unwrap_or_else(|| provider.grant_shape());
        let endpoint = TokenEndpoint::new(&token_url, shape)?;

        let storage: Arc<dyn TokenStorage> = match (self.storage, self.storage_dir) {
            (Some(storage), _) => storage,
            (None, Some(dir)) => Arc::new(FileTokenStorage::with_path(dir)),
            (None, None) => Arc::new(FileTokenStorage::new()?),
        };

        Ok(TokenManager {
            provider,
            endpoint,
            client,
            initial: self.initial,
            storage,
            cache_key: self.cache_key.unwrap_or_else(|| provider.cache_key()),
            mode: self.mode,
            http_client: self.http_client.unwrap_or_default(),
        })
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
