use crate::credentials::Credentials;
use crate::error::{BetfairError, Result};
use crate::transport::TransportConfig;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;

pub const CONFIG_FILE: &str = "config.toml";

fn default_region() -> String {
    "UK".to_string()
}

#[derive(Clone, Deserialize)]
pub struct BetfairConfig {
    pub username: String,
    pub password: String,
    #[serde(default = "default_region")]
    pub region: String,
    #[serde(default)]
    pub app_key: Option<String>,
    #[serde(default)]
    pub cert_path: Option<PathBuf>,
    #[serde(default)]
    pub key_path: Option<PathBuf>,
    /// Application to resolve the key for after a certificate login.
    #[serde(default)]
    pub app_name: Option<String>,
    #[serde(default)]
    pub delayed_data: bool,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    #[serde(default)]
    pub accept_invalid_certs: bool,
}

impl std::fmt::Debug for BetfairConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BetfairConfig")
            .field("username", &self.username)
            .field("password", &"***")
            .field("region", &self.region)
            .field("app_key", &self.app_key)
            .field("cert_path", &self.cert_path)
            .field("key_path", &self.key_path)
            .field("app_name", &self.app_name)
            .field("delayed_data", &self.delayed_data)
            .field("timeout_secs", &self.timeout_secs)
            .field("accept_invalid_certs", &self.accept_invalid_certs)
            .finish()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub betfair: BetfairConfig,
}

impl Config {
    /// Load `config.toml` from the working directory, then apply environment
    /// overrides.
    pub fn new() -> Result<Self> {
        Self::from_file(CONFIG_FILE)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())?;
        let config = Self::from_toml_str(&config_str)?.with_env_overrides();
        info!("Config: {:?}", config);
        Ok(config)
    }

    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// `BETFAIR_USERNAME` and `BETFAIR_PASSWORD` take precedence over the file.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(username) = std::env::var("BETFAIR_USERNAME") {
            self.betfair.username = username;
        }
        if let Ok(password) = std::env::var("BETFAIR_PASSWORD") {
            self.betfair.password = password;
        }
        self
    }

    /// Certificate credentials when both cert and key paths are set,
    /// interactive credentials otherwise.
    pub fn credentials(&self) -> Result<Credentials> {
        let b = &self.betfair;
        match (&b.cert_path, &b.key_path) {
            (Some(cert), Some(key)) => Ok(Credentials::non_interactive(
                b.username.as_str(),
                b.password.as_str(),
                b.region.as_str(),
                cert.as_path(),
                key.as_path(),
            )),
            (None, None) => Ok(Credentials::interactive(
                b.username.as_str(),
                b.password.as_str(),
                b.region.as_str(),
                b.app_key.clone().unwrap_or_default(),
            )),
            _ => Err(BetfairError::Config(
                "cert_path and key_path must be set together".to_string(),
            )),
        }
    }

    pub fn transport_config(&self) -> TransportConfig {
        TransportConfig {
            accept_invalid_certs: self.betfair.accept_invalid_certs,
            timeout: self.betfair.timeout_secs.map(Duration::from_secs),
        }
    }
}
