use crate::credentials::Credentials;
use crate::error::{BetfairError, Result};
use reqwest::{Client, Identity};
use std::fs;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, warn};

/// HTTP client settings applied to every session transport.
#[derive(Debug, Clone, Default)]
pub struct TransportConfig {
    /// Skip server certificate verification. Off unless explicitly enabled.
    pub accept_invalid_certs: bool,
    /// Overall per-request deadline. `None` leaves reqwest's default (no timeout).
    pub timeout: Option<Duration>,
}

/// The HTTP client a session sends every request through.
#[derive(Debug, Clone)]
pub struct Transport {
    client: Client,
    client_identity: bool,
}

impl Transport {
    /// Build a transport for `credentials`.
    ///
    /// Certificate credentials attach the PEM certificate/key pair as the TLS
    /// client identity; interactive credentials get a plain client.
    pub fn build(credentials: &Credentials, config: &TransportConfig) -> Result<Self> {
        let mut builder = Client::builder();

        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        if config.accept_invalid_certs {
            warn!("TLS server certificate verification is disabled");
            builder = builder.danger_accept_invalid_certs(true);
        }

        let client_identity = match credentials {
            Credentials::Interactive(_) => false,
            Credentials::NonInteractive(c) => {
                let identity = load_identity(&c.cert_path, &c.key_path)?;
                builder = builder.identity(identity);
                true
            }
        };

        // rustls only checks that the key belongs to the certificate here
        let client = builder.build().map_err(|e| {
            if client_identity {
                BetfairError::CertificateLoadError(e.to_string())
            } else {
                BetfairError::Transport(e)
            }
        })?;
        debug!(client_identity, "built HTTP transport");

        Ok(Self {
            client,
            client_identity,
        })
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn has_client_identity(&self) -> bool {
        self.client_identity
    }
}

fn load_identity(cert_path: &Path, key_path: &Path) -> Result<Identity> {
    for path in [cert_path, key_path] {
        if !path.exists() {
            return Err(BetfairError::CertificateNotFound(path.to_path_buf()));
        }
    }

    let cert_pem = fs::read(cert_path)?;
    let key_pem = fs::read(key_path)?;

    let certs = rustls_pemfile::certs(&mut BufReader::new(cert_pem.as_slice()))
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| BetfairError::CertificateLoadError(format!("{}: {e}", cert_path.display())))?;
    if certs.is_empty() {
        return Err(BetfairError::CertificateLoadError(format!(
            "no certificate found in {}",
            cert_path.display()
        )));
    }

    let key = rustls_pemfile::private_key(&mut BufReader::new(key_pem.as_slice()))
        .map_err(|e| BetfairError::CertificateLoadError(format!("{}: {e}", key_path.display())))?;
    if key.is_none() {
        return Err(BetfairError::CertificateLoadError(format!(
            "no private key found in {}",
            key_path.display()
        )));
    }

    // reqwest wants the certificate chain and key in one PEM buffer
    let mut pem = cert_pem;
    if !pem.ends_with(b"\n") {
        pem.push(b'\n');
    }
    pem.extend_from_slice(&key_pem);

    Identity::from_pem(&pem).map_err(|e| BetfairError::CertificateLoadError(e.to_string()))
}
