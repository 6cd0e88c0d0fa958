//! Refresh and cache the bearer token for one provider.
//!
//! Client credentials and initial tokens come from the environment; see
//! `TokenManager::from_env`. The token itself is never printed.
//!
//! ```sh
//! export WORKDAY_CLIENT_ID=... WORKDAY_CLIENT_SECRET=... WORKDAY_REFRESH_TOKEN=...
//! export WORKDAY_HOST=wd2-impl-services1.workday.com WORKDAY_TENANT=acme_preview
//! cargo run --bin refresh-token -- workday --account isu
//! ```

use anyhow::Context;
use busbar_saas_auth::{
    FileTokenStorage, Provider, RefreshMode, TokenManager, TokenStorage, WorkdayAccount,
};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

/// Refresh and cache a SaaS OAuth bearer token
#[derive(Parser, Debug)]
#[command(name = "refresh-token", version, about, long_about = None)]
struct Args {
    /// Provider whose token is refreshed
    #[arg(value_enum, required_unless_present = "list")]
    provider: Option<ProviderArg>,

    /// Workday account type (Workday only, defaults to isu)
    #[arg(long, value_enum)]
    account: Option<AccountArg>,

    /// Delete the cached token instead of refreshing it
    #[arg(long)]
    clear: bool,

    /// List cached token keys in the token directory and exit
    #[arg(long, conflicts_with_all = ["provider", "clear", "account"])]
    list: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ProviderArg {
    Google,
    Workfront,
    Hubspot,
    Workday,
}

impl ProviderArg {
    fn name(self) -> &'static str {
        match self {
            ProviderArg::Google => "google",
            ProviderArg::Workfront => "workfront",
            ProviderArg::Hubspot => "hubspot",
            ProviderArg::Workday => "workday",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum AccountArg {
    Isu,
    Admin,
    Readonly,
}

impl From<AccountArg> for WorkdayAccount {
    fn from(account: AccountArg) -> Self {
        match account {
            AccountArg::Isu => WorkdayAccount::IntegrationSystem,
            AccountArg::Admin => WorkdayAccount::Administrator,
            AccountArg::Readonly => WorkdayAccount::ReadOnly,
        }
    }
}

impl Args {
    fn provider(&self) -> anyhow::Result<Provider> {
        let name = self.provider.context("a provider is required")?.name();
        Ok(Provider::from_name(name, self.account.map(WorkdayAccount::from))?)
    }
}

fn list_cached() -> anyhow::Result<()> {
    let storage = FileTokenStorage::from_env()?;
    let keys = storage.list()?;

    if keys.is_empty() {
        println!("No cached tokens in {}", storage.base_path().display());
    }
    for key in keys {
        println!("{key}");
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    if args.list {
        return list_cached();
    }

    let provider = args.provider()?;
    let manager =
        TokenManager::from_env(provider).with_context(|| format!("configuring {provider}"))?;

    if args.clear {
        if manager.has_cached_credentials()? {
            manager.clear_cache()?;
            println!("Cleared cached token for {provider}");
        } else {
            println!("No cached token for {provider}");
        }
        return Ok(());
    }

    if manager.mode() == RefreshMode::Offline {
        println!("Offline mode: {provider} token not refreshed");
        return Ok(());
    }

    manager
        .refresh_bearer_token()
        .await
        .with_context(|| format!("refreshing {provider} token"))?;

    println!(
        "Refreshed {} token (cache key {})",
        provider,
        manager.cache_key()
    );
    Ok(())
}
