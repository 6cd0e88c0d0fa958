//! # saas-auth
//!
//! OAuth 2.0 refresh-token management for SaaS APIs.
//!
//! A [`TokenManager`] returns the bearer token cached for a provider and
//! refreshes it through the provider's token endpoint. Providers differ only
//! in the shape of the grant request ([`GrantShape`]), so one manager type
//! covers all of them:
//!
//! | Provider | Method | Client credentials | Cache key |
//! |---|---|---|---|
//! | Google | POST | Basic auth | `google` |
//! | Adobe Workfront | GET | Basic auth | `workfront` |
//! | HubSpot | POST | form body | `hubspot` |
//! | Workday | POST | Basic auth | `workday_<account>` |
//!
//! ## Security
//!
//! - Tokens and secrets are redacted in Debug output
//! - Tracing skips credential parameters
//! - Cache files are written with mode 0600 on Unix
//!
//! ## Example
//!
//! ```rust,ignore
//! use busbar_saas_auth::{ClientCredentials, InitialTokens, Provider, TokenManager};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), busbar_saas_auth::Error> {
//!     let manager = TokenManager::builder(Provider::Google)
//!         .with_client_credentials(ClientCredentials::new("client-id", "client-secret"))
//!         .with_initial_tokens(InitialTokens::new("ya29.initial", "1//refresh"))
//!         .build()?;
//!
//!     manager.refresh_bearer_token().await?;
//!     let bearer = manager.get_bearer_token();
//!
//!     Ok(())
//! }
//! ```

mod credentials;
mod error;
mod manager;
mod oauth;
mod provider;
mod storage;

pub use credentials::{CachedCredentials, ClientCredentials, InitialTokens};
pub use error::{Error, ErrorKind, Result};
pub use manager::{RefreshMode, TokenManager, TokenManagerBuilder, OFFLINE_ENV, TOKEN_DIR_ENV};
pub use oauth::{CredentialPlacement, GrantMethod, GrantShape, TokenEndpoint, TokenResponse};
pub use provider::{Provider, WorkdayAccount, GOOGLE_TOKEN_URL, HUBSPOT_TOKEN_URL};
pub use storage::{default_token_dir, FileTokenStorage, MemoryTokenStorage, TokenStorage};
