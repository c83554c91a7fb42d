use crate::endpoints::Endpoint;
use crate::error::{BetfairError, Result};
use crate::session::Session;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::StatusCode;
use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

/// `X-Application` value sent on the certificate login call.
pub const PACKAGE_ID: &str = env!("CARGO_PKG_NAME");

/// The one authenticated call that must work before an application key is known.
pub const GET_DEVELOPER_APP_KEYS: &str = "getDeveloperAppKeys";

const X_APPLICATION: &str = "x-application";
const X_AUTHENTICATION: &str = "x-authentication";
const APPLICATION_JSON: &str = "application/json";
const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";

#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Empty,
    Json(String),
    Form(Vec<(String, String)>),
}

/// Headers for one call.
///
/// - `Accept` is always JSON; `Content-Type` is JSON except for the login
///   endpoints, which post a form.
/// - `X-Application` carries `application_key`, the package id on
///   `certLogin`, and is left out for `getDeveloperAppKeys`.
/// - `X-Authentication` carries `token` on every non-login call.
pub fn build_headers(
    endpoint: Endpoint,
    method: &str,
    application_key: &str,
    token: &str,
) -> Result<HeaderMap> {
    let mut headers = HeaderMap::with_capacity(4);
    headers.insert(ACCEPT, HeaderValue::from_static(APPLICATION_JSON));

    if endpoint.is_login() {
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(FORM_URLENCODED));
    } else {
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON));
        let mut auth = HeaderValue::from_str(token)?;
        auth.set_sensitive(true);
        headers.insert(X_AUTHENTICATION, auth);
    }

    if method != GET_DEVELOPER_APP_KEYS {
        let app = match endpoint {
            Endpoint::CertLogin => PACKAGE_ID,
            _ => application_key,
        };
        headers.insert(X_APPLICATION, HeaderValue::from_str(app)?);
    }

    Ok(headers)
}

pub(crate) fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    serde_json::from_slice(body).map_err(BetfairError::DecodeError)
}

impl Session {
    /// Send one POST to `endpoint`/`method` and return the raw response body.
    pub async fn dispatch(
        &self,
        endpoint: Endpoint,
        method: &str,
        body: RequestBody,
    ) -> Result<Vec<u8>> {
        let url = self.registry().resolve(self.region(), endpoint, method)?;
        let headers = build_headers(endpoint, method, self.application_key(), self.token())?;

        let request = self.transport().client().post(&url).headers(headers);
        let request = match body {
            RequestBody::Empty => request,
            RequestBody::Json(json) => request.body(json),
            RequestBody::Form(fields) => request.form(&fields),
        };

        let response = request.send().await?;
        let status = response.status();
        debug!(%url, %status, "API response status");

        if status != StatusCode::OK {
            return Err(BetfairError::HttpError(status));
        }

        let bytes = response.bytes().await?;
        debug!(%url, len = bytes.len(), "API response body received");
        Ok(bytes.to_vec())
    }

    /// Serialize `query` as the JSON body and decode the response into `R`.
    pub async fn dispatch_json<Q, R>(
        &self,
        endpoint: Endpoint,
        method: &str,
        query: &Q,
    ) -> Result<R>
    where
        Q: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let json = serde_json::to_string(query).map_err(BetfairError::EncodeError)?;
        debug!(method, "API request: {}", json);
        let body = self.dispatch(endpoint, method, RequestBody::Json(json)).await?;
        decode(&body)
    }

    /// Call a method that takes no body and decode the response into `R`.
    pub async fn dispatch_empty<R>(&self, endpoint: Endpoint, method: &str) -> Result<R>
    where
        R: DeserializeOwned,
    {
        let body = self.dispatch(endpoint, method, RequestBody::Empty).await?;
        decode(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authenticated_call_carries_key_and_token() {
        let headers = build_headers(Endpoint::Betting, "listEvents", "app-key", "tok").unwrap();

        assert_eq!(headers[X_APPLICATION], "app-key");
        assert_eq!(headers[X_AUTHENTICATION], "tok");
        assert_eq!(headers[ACCEPT], APPLICATION_JSON);
        assert_eq!(headers[CONTENT_TYPE], APPLICATION_JSON);
    }

    #[test]
    fn test_developer_app_keys_omits_application_header() {
        let headers =
            build_headers(Endpoint::Account, GET_DEVELOPER_APP_KEYS, "app-key", "tok").unwrap();

        assert!(!headers.contains_key(X_APPLICATION));
        assert_eq!(headers[X_AUTHENTICATION], "tok");
    }

    #[test]
    fn test_cert_login_uses_package_id_without_token() {
        let headers = build_headers(Endpoint::CertLogin, "", "", "").unwrap();

        assert_eq!(headers[X_APPLICATION], PACKAGE_ID);
        assert_eq!(headers[CONTENT_TYPE], FORM_URLENCODED);
        assert!(!headers.contains_key(X_AUTHENTICATION));
    }

    #[test]
    fn test_rest_login_sends_application_key() {
        let headers = build_headers(Endpoint::RestLogin, "", "app-key", "").unwrap();

        assert_eq!(headers[X_APPLICATION], "app-key");
        assert_eq!(headers[CONTENT_TYPE], FORM_URLENCODED);
        assert!(!headers.contains_key(X_AUTHENTICATION));
    }

    #[test]
    fn test_token_with_newline_is_rejected() {
        let result = build_headers(Endpoint::Account, "getAccountFunds", "k", "bad\ntoken");
        assert!(matches!(result, Err(BetfairError::InvalidHeader(_))));
    }
}
