//! # busbar-saas-api
//!
//! OAuth token caching for SaaS APIs and typed bindings for the Workday
//! Integrations SOAP service.
//!
//! ## Security
//!
//! - Tokens and secrets are redacted in Debug output
//! - Tracing skips credential parameters
//! - Error messages never carry token values
//!
//! ## Crates
//!
//! - **busbar-saas-auth** - Refresh-token managers for Google, Adobe Workfront,
//!   HubSpot and Workday, with a locked on-disk token cache
//! - **busbar-wd-integrations** - Workday Integrations request/response types,
//!   faults and operation descriptors
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use busbar_saas_api::auth::{Provider, TokenManager, WorkdayAccount};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // WORKDAY_CLIENT_ID, WORKDAY_CLIENT_SECRET, WORKDAY_REFRESH_TOKEN,
//!     // WORKDAY_HOST and WORKDAY_TENANT
//!     let manager = TokenManager::from_env(Provider::Workday(WorkdayAccount::IntegrationSystem))?;
//!
//!     manager.refresh_bearer_token().await?;
//!     let bearer = manager.get_bearer_token();
//!
//!     Ok(())
//! }
//! ```

#[cfg(feature = "auth")]
pub use busbar_saas_auth as auth;
#[cfg(feature = "workday")]
pub use busbar_wd_integrations as workday;
