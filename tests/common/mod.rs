#![allow(dead_code)]

use betfair_rest::{Credentials, EndpointRegistry, Session, TransportConfig};
use mockito::{Mock, ServerGuard};
use std::path::PathBuf;
use std::sync::Arc;

pub const APP_KEY: &str = "app-key";
pub const TOKEN: &str = "T";

pub fn registry(server: &ServerGuard) -> Arc<EndpointRegistry> {
    Arc::new(EndpointRegistry::for_host("UK", &server.url()))
}

pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

pub fn cert_credentials() -> Credentials {
    Credentials::non_interactive(
        "user",
        "pass",
        "UK",
        fixture("client.crt"),
        fixture("client.key"),
    )
}

pub async fn mock_rest_login(server: &mut ServerGuard, body: &str) -> Mock {
    server
        .mock("POST", "/api/login")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await
}

pub async fn mock_cert_login(server: &mut ServerGuard, body: &str) -> Mock {
    server
        .mock("POST", "/api/certlogin")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await
}

/// An interactive session logged in against `server` with token `T`.
pub async fn interactive_session(server: &mut ServerGuard) -> Session {
    let _login = mock_rest_login(
        server,
        r#"{"token":"T","product":"app-key","status":"SUCCESS","error":""}"#,
    )
    .await;
    let credentials = Credentials::interactive("user", "pass", "UK", APP_KEY);
    Session::login(&credentials, registry(server), &TransportConfig::default())
        .await
        .unwrap()
}

/// A certificate session logged in against `server` with token `T`.
pub async fn cert_session(server: &mut ServerGuard) -> Session {
    let _login = mock_cert_login(server, r#"{"sessionToken":"T","loginStatus":"SUCCESS"}"#).await;
    Session::login(
        &cert_credentials(),
        registry(server),
        &TransportConfig::default(),
    )
    .await
    .unwrap()
}
