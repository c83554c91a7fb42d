use betfair_rest::{BetfairError, Credentials, Transport, TransportConfig};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use tempfile::tempdir;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn test_interactive_transport_has_no_client_identity() {
    let credentials = Credentials::interactive("user", "pass", "UK", "key");
    let transport = Transport::build(&credentials, &TransportConfig::default()).unwrap();
    assert!(!transport.has_client_identity());
}

#[test]
fn test_certificate_transport_attaches_identity() {
    let credentials = Credentials::non_interactive(
        "user",
        "pass",
        "UK",
        fixture("client.crt"),
        fixture("client.key"),
    );
    let config = TransportConfig {
        accept_invalid_certs: false,
        timeout: Some(Duration::from_secs(10)),
    };

    let transport = Transport::build(&credentials, &config).unwrap();
    assert!(transport.has_client_identity());
}

#[test]
fn test_missing_certificate_file() {
    let missing = fixture("nope.crt");
    let credentials =
        Credentials::non_interactive("user", "pass", "UK", missing.clone(), fixture("client.key"));

    let err = Transport::build(&credentials, &TransportConfig::default()).unwrap_err();
    assert!(matches!(err, BetfairError::CertificateNotFound(ref path) if *path == missing));
}

#[test]
fn test_missing_key_file() {
    let missing = fixture("nope.key");
    let credentials =
        Credentials::non_interactive("user", "pass", "UK", fixture("client.crt"), missing.clone());

    let err = Transport::build(&credentials, &TransportConfig::default()).unwrap_err();
    assert!(matches!(err, BetfairError::CertificateNotFound(ref path) if *path == missing));
}

#[test]
fn test_unparseable_pair_is_load_error() {
    let dir = tempdir().unwrap();
    let cert = dir.path().join("client.crt");
    let key = dir.path().join("client.key");
    fs::write(&cert, "this is not a certificate").unwrap();
    fs::write(&key, "neither is this a key").unwrap();

    let credentials = Credentials::non_interactive("user", "pass", "UK", cert, key);
    let err = Transport::build(&credentials, &TransportConfig::default()).unwrap_err();
    assert!(matches!(err, BetfairError::CertificateLoadError(_)));
}

#[test]
fn test_key_swapped_for_certificate_is_load_error() {
    let credentials = Credentials::non_interactive(
        "user",
        "pass",
        "UK",
        fixture("client.crt"),
        fixture("client.crt"),
    );
    let err = Transport::build(&credentials, &TransportConfig::default()).unwrap_err();
    assert!(matches!(err, BetfairError::CertificateLoadError(_)));
}

#[test]
fn test_mismatched_key_is_load_error() {
    let credentials = Credentials::non_interactive(
        "user",
        "pass",
        "UK",
        fixture("client.crt"),
        fixture("other.key"),
    );
    let err = Transport::build(&credentials, &TransportConfig::default()).unwrap_err();
    assert!(matches!(err, BetfairError::CertificateLoadError(_)));
}

#[test]
fn test_accept_invalid_certs_is_opt_in() {
    assert!(!TransportConfig::default().accept_invalid_certs);

    let credentials = Credentials::interactive("user", "pass", "UK", "key");
    let config = TransportConfig {
        accept_invalid_certs: true,
        timeout: None,
    };
    assert!(Transport::build(&credentials, &config).is_ok());
}
