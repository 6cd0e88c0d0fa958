//! Provider presets.
//!
//! Each preset fixes the grant shape, default token endpoint, cache key and
//! environment variable prefix for one SaaS provider.

use serde::{Deserialize, Serialize};

use crate::oauth::GrantShape;

/// Google OAuth 2.0 token endpoint.
pub const GOOGLE_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";

/// HubSpot OAuth token endpoint.
pub const HUBSPOT_TOKEN_URL: &str = "https://api.hubapi.com/oauth/v1/token";

/// Workday account type a token was issued for.
///
/// Workday tenants hand out separate refresh tokens per API client and
/// account, so each account gets its own cache file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkdayAccount {
    /// Integration System User.
    IntegrationSystem,
    /// Human administrator account.
    Administrator,
    /// Read-only reporting account.
    ReadOnly,
}

impl WorkdayAccount {
    /// Short name used in cache keys and CLI arguments.
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkdayAccount::IntegrationSystem => "isu",
            WorkdayAccount::Administrator => "admin",
            WorkdayAccount::ReadOnly => "readonly",
        }
    }
}

impl std::fmt::Display for WorkdayAccount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for WorkdayAccount {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "isu" | "integration" | "integration_system" => Ok(WorkdayAccount::IntegrationSystem),
            "admin" | "administrator" => Ok(WorkdayAccount::Administrator),
            "readonly" | "read_only" => Ok(WorkdayAccount::ReadOnly),
            other => Err(crate::Error::new(crate::ErrorKind::InvalidInput(format!(
                "unknown Workday account type: {other}"
            )))),
        }
    }
}

/// SaaS provider whose token endpoint a manager talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "provider", content = "account")]
pub enum Provider {
    Google,
    Workfront,
    HubSpot,
    Workday(WorkdayAccount),
}

impl Provider {
    /// Resolve a provider from its CLI name.
    ///
    /// Workday defaults to the integration system account when `account` is
    /// not given; other providers reject an account.
    pub fn from_name(name: &str, account: Option<WorkdayAccount>) -> crate::Result<Self> {
        let provider = match name.to_ascii_lowercase().as_str() {
            "google" => Provider::Google,
            "workfront" => Provider::Workfront,
            "hubspot" => Provider::HubSpot,
            "workday" => {
                return Ok(Provider::Workday(
                    account.unwrap_or(WorkdayAccount::IntegrationSystem),
                ))
            }
            other => {
                return Err(crate::Error::new(crate::ErrorKind::InvalidInput(format!(
                    "unknown provider: {other}"
                ))))
            }
        };

        match account {
            Some(_) => Err(crate::Error::new(crate::ErrorKind::InvalidInput(format!(
                "{} has no account types",
                provider.name()
            )))),
            None => Ok(provider),
        }
    }

    /// How this provider expects the refresh grant to be sent.
    pub fn grant_shape(&self) -> GrantShape {
        match self {
            Provider::Google | Provider::Workday(_) => GrantShape::POST_BASIC,
            Provider::Workfront => GrantShape::GET_BASIC,
            Provider::HubSpot => GrantShape::POST_BODY,
        }
    }

    /// Token endpoint when it does not depend on a tenant or domain.
    ///
    /// Workfront and Workday endpoints live on the customer's own host; see
    /// [`Provider::tenant_token_url`].
    pub fn default_token_url(&self) -> Option<&'static str> {
        match self {
            Provider::Google => Some(GOOGLE_TOKEN_URL),
            Provider::HubSpot => Some(HUBSPOT_TOKEN_URL),
            Provider::Workfront | Provider::Workday(_) => None,
        }
    }

    /// Token endpoint for a tenant-hosted provider.
    ///
    /// - Workfront: `host` is the customer domain prefix (`acme` for
    ///   `acme.my.workfront.com`); `tenant` is ignored.
    /// - Workday: `host` is the service host (`wd2-impl-services1.workday.com`)
    ///   and `tenant` the tenant name.
    ///
    /// Returns `None` for providers with a fixed endpoint.
    pub fn tenant_token_url(&self, host: &str, tenant: &str) -> Option<String> {
        match self {
            Provider::Workfront => Some(format!(
                "https://{host}.my.workfront.com/integrations/oauth2/api/v1/token"
            )),
            Provider::Workday(_) => Some(format!("https://{host}/ccx/oauth2/{tenant}/token")),
            Provider::Google | Provider::HubSpot => None,
        }
    }

    /// Storage key for this provider's cached credentials.
    pub fn cache_key(&self) -> String {
        match self {
            Provider::Google => "google".to_string(),
            Provider::Workfront => "workfront".to_string(),
            Provider::HubSpot => "hubspot".to_string(),
            Provider::Workday(account) => format!("workday_{}", account.as_str()),
        }
    }

    /// Prefix for this provider's environment variables.
    pub fn env_prefix(&self) -> &'static str {
        match self {
            Provider::Google => "GOOGLE",
            Provider::Workfront => "WORKFRONT",
            Provider::HubSpot => "HUBSPOT",
            Provider::Workday(_) => "WORKDAY",
        }
    }

    /// Human-readable provider name.
    pub fn name(&self) -> &'static str {
        match self {
            Provider::Google => "Google",
            Provider::Workfront => "Adobe Workfront",
            Provider::HubSpot => "HubSpot",
            Provider::Workday(_) => "Workday",
        }
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Provider::Workday(account) => write!(f, "{} ({})", self.name(), account),
            _ => f.write_str(self.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oauth::{CredentialPlacement, GrantMethod};

    #[test]
    fn test_grant_shapes() {
        assert_eq!(Provider::Google.grant_shape(), GrantShape::POST_BASIC);
        assert_eq!(Provider::Workfront.grant_shape().method, GrantMethod::Get);
        assert_eq!(
            Provider::HubSpot.grant_shape().credentials,
            CredentialPlacement::Body
        );
        assert_eq!(
            Provider::Workday(WorkdayAccount::ReadOnly).grant_shape(),
            GrantShape::POST_BASIC
        );
    }

    #[test]
    fn test_cache_keys_are_distinct_per_workday_account() {
        assert_eq!(Provider::Google.cache_key(), "google");
        assert_eq!(
            Provider::Workday(WorkdayAccount::IntegrationSystem).cache_key(),
            "workday_isu"
        );
        assert_ne!(
            Provider::Workday(WorkdayAccount::Administrator).cache_key(),
            Provider::Workday(WorkdayAccount::ReadOnly).cache_key()
        );
    }

    #[test]
    fn test_token_urls() {
        assert_eq!(
            Provider::Google.default_token_url(),
            Some("https://oauth2.googleapis.com/token")
        );
        assert_eq!(Provider::Workfront.default_token_url(), None);
        assert_eq!(
            Provider::Workfront.tenant_token_url("acme", "").as_deref(),
            Some("https://acme.my.workfront.com/integrations/oauth2/api/v1/token")
        );
        assert_eq!(
            Provider::Workday(WorkdayAccount::IntegrationSystem)
                .tenant_token_url("wd2-impl-services1.workday.com", "acme_preview")
                .as_deref(),
            Some("https://wd2-impl-services1.workday.com/ccx/oauth2/acme_preview/token")
        );
        assert_eq!(Provider::HubSpot.tenant_token_url("x", "y"), None);
    }

    #[test]
    fn test_workday_account_from_str() {
        assert_eq!(
            "ISU".parse::<WorkdayAccount>().unwrap(),
            WorkdayAccount::IntegrationSystem
        );
        assert_eq!(
            "administrator".parse::<WorkdayAccount>().unwrap(),
            WorkdayAccount::Administrator
        );
        assert!("superuser".parse::<WorkdayAccount>().is_err());
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Provider::from_name("Google", None).unwrap(), Provider::Google);
        assert_eq!(
            Provider::from_name("workday", None).unwrap(),
            Provider::Workday(WorkdayAccount::IntegrationSystem)
        );
        assert_eq!(
            Provider::from_name("workday", Some(WorkdayAccount::ReadOnly)).unwrap(),
            Provider::Workday(WorkdayAccount::ReadOnly)
        );
        assert!(Provider::from_name("hubspot", Some(WorkdayAccount::Administrator)).is_err());
        assert!(Provider::from_name("salesforce", None).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Provider::HubSpot.to_string(), "HubSpot");
        assert_eq!(
            Provider::Workday(WorkdayAccount::Administrator).to_string(),
            "Workday (admin)"
        );
    }
}
