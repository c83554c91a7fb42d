use crate::dispatch::GET_DEVELOPER_APP_KEYS;
use crate::dto::{AccountDetailsResponse, AccountFundsResponse, DeveloperApplication};
use crate::endpoints::Endpoint;
use crate::error::{BetfairError, Result};
use crate::session::Session;
use tracing::{info, warn};

/// Pick the application key for `name` with the requested delayed-data flag.
///
/// Every active version whose flag matches is a candidate; when several
/// exist across matching applications, the last one in response order wins.
pub fn select_application_key<'a>(
    apps: &'a [DeveloperApplication],
    name: &str,
    delayed_data: bool,
) -> Option<&'a str> {
    let mut candidates = apps
        .iter()
        .filter(|app| app.app_name == name)
        .flat_map(|app| app.app_versions.iter())
        .filter(|version| version.active && version.delayed_data == delayed_data);

    let mut selected = candidates.next()?;
    let mut matches = 1usize;
    for version in candidates {
        selected = version;
        matches += 1;
    }

    if matches > 1 {
        warn!(
            app = name,
            delayed_data, matches, "several active versions match, using the last one"
        );
    }

    Some(selected.application_key.as_str())
}

impl Session {
    /// Applications registered to the logged-in account.
    pub async fn get_developer_app_keys(&self) -> Result<Vec<DeveloperApplication>> {
        self.dispatch_empty(Endpoint::Account, GET_DEVELOPER_APP_KEYS).await
    }

    pub async fn get_account_funds(&self) -> Result<AccountFundsResponse> {
        self.dispatch_empty(Endpoint::Account, "getAccountFunds").await
    }

    pub async fn get_account_details(&self) -> Result<AccountDetailsResponse> {
        self.dispatch_empty(Endpoint::Account, "getAccountDetails").await
    }

    /// Resolve and install the application key used for subsequent calls.
    ///
    /// The developer application list is fetched on first use and cached for
    /// the lifetime of the session.
    pub async fn set_used_application(&mut self, name: &str, delayed_data: bool) -> Result<()> {
        if self.developer_apps().is_none() {
            let apps = self.get_developer_app_keys().await?;
            info!(count = apps.len(), "fetched developer applications");
            self.cache_developer_apps(apps);
        }

        let key = self
            .developer_apps()
            .and_then(|apps| select_application_key(apps, name, delayed_data))
            .map(str::to_string)
            .ok_or_else(|| BetfairError::ApplicationNotFound(name.to_string()))?;

        info!(app = name, delayed_data, "using application key");
        self.set_application_key(key);
        Ok(())
    }
}
