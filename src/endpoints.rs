use crate::error::{BetfairError, Result};
use std::collections::HashMap;
use std::fmt;

const CERT_LOGIN_URL: &str = "https://identitysso-api.betfair.com/api/certlogin";
const REST_LOGIN_URL: &str = "https://identitysso.betfair.com/api/login";
const UK_BETTING_URL: &str = "https://api.betfair.com/exchange/betting/rest/v1.0/";
const UK_ACCOUNT_URL: &str = "https://api.betfair.com/exchange/account/rest/v1.0/";
const AU_BETTING_URL: &str = "https://api-au.betfair.com/exchange/betting/rest/v1.0/";
const AU_ACCOUNT_URL: &str = "https://api-au.betfair.com/exchange/account/rest/v1.0/";

/// Logical service names, one base URL each per region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    CertLogin,
    RestLogin,
    Betting,
    Account,
}

impl Endpoint {
    pub const ALL: [Endpoint; 4] = [
        Endpoint::CertLogin,
        Endpoint::RestLogin,
        Endpoint::Betting,
        Endpoint::Account,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Endpoint::CertLogin => "certLogin",
            Endpoint::RestLogin => "restLogin",
            Endpoint::Betting => "betting",
            Endpoint::Account => "account",
        }
    }

    /// Login endpoints take a form body, no session token and no method segment.
    pub fn is_login(&self) -> bool {
        matches!(self, Endpoint::CertLogin | Endpoint::RestLogin)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable `(region, endpoint) -> base URL` table.
///
/// Built once and shared by reference (sessions hold it in an `Arc`).
#[derive(Debug, Clone, Default)]
pub struct EndpointRegistry {
    regions: HashMap<String, HashMap<Endpoint, String>>,
}

impl EndpointRegistry {
    /// The production table with the `UK` and `AU` regions.
    pub fn betfair() -> Self {
        Self::default()
            .with_base_url("UK", Endpoint::CertLogin, CERT_LOGIN_URL)
            .with_base_url("UK", Endpoint::RestLogin, REST_LOGIN_URL)
            .with_base_url("UK", Endpoint::Betting, UK_BETTING_URL)
            .with_base_url("UK", Endpoint::Account, UK_ACCOUNT_URL)
            .with_base_url("AU", Endpoint::CertLogin, CERT_LOGIN_URL)
            .with_base_url("AU", Endpoint::RestLogin, REST_LOGIN_URL)
            .with_base_url("AU", Endpoint::Betting, AU_BETTING_URL)
            .with_base_url("AU", Endpoint::Account, AU_ACCOUNT_URL)
    }

    /// A single region whose services all live under `host`, using the
    /// production path layout. Handy for proxies and mock servers.
    pub fn for_host(region: &str, host: &str) -> Self {
        let host = host.trim_end_matches('/');
        Self::default()
            .with_base_url(region, Endpoint::CertLogin, format!("{host}/api/certlogin"))
            .with_base_url(region, Endpoint::RestLogin, format!("{host}/api/login"))
            .with_base_url(
                region,
                Endpoint::Betting,
                format!("{host}/exchange/betting/rest/v1.0/"),
            )
            .with_base_url(
                region,
                Endpoint::Account,
                format!("{host}/exchange/account/rest/v1.0/"),
            )
    }

    pub fn with_base_url(
        mut self,
        region: impl Into<String>,
        endpoint: Endpoint,
        url: impl Into<String>,
    ) -> Self {
        self.regions
            .entry(region.into())
            .or_default()
            .insert(endpoint, url.into());
        self
    }

    pub fn contains_region(&self, region: &str) -> bool {
        self.regions.contains_key(region)
    }

    pub fn base_url(&self, region: &str, endpoint: Endpoint) -> Result<&str> {
        self.regions
            .get(region)
            .and_then(|services| services.get(&endpoint))
            .map(String::as_str)
            .ok_or_else(|| BetfairError::UnknownEndpoint {
                region: region.to_string(),
                endpoint: endpoint.to_string(),
            })
    }

    /// Full URL for `method` on `endpoint`. Login endpoints ignore `method`.
    pub fn resolve(&self, region: &str, endpoint: Endpoint, method: &str) -> Result<String> {
        let base = self.base_url(region, endpoint)?;
        if endpoint.is_login() {
            return Ok(base.to_string());
        }

        let mut url = String::with_capacity(base.len() + method.len() + 1);
        url.push_str(base);
        if !base.ends_with('/') {
            url.push('/');
        }
        url.push_str(method);
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_host_trims_trailing_slash() {
        let registry = EndpointRegistry::for_host("UK", "http://127.0.0.1:1234/");
        let url = registry
            .resolve("UK", Endpoint::Account, "getAccountFunds")
            .unwrap();
        assert_eq!(
            url,
            "http://127.0.0.1:1234/exchange/account/rest/v1.0/getAccountFunds"
        );
    }

    #[test]
    fn test_base_without_slash_gets_separator() {
        let registry =
            EndpointRegistry::default().with_base_url("UK", Endpoint::Betting, "http://h/betting");
        let url = registry.resolve("UK", Endpoint::Betting, "listVenues").unwrap();
        assert_eq!(url, "http://h/betting/listVenues");
    }
}
