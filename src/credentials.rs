use crate::endpoints::Endpoint;
use crate::error::{BetfairError, Result};
use std::fmt;
use std::path::PathBuf;

/// Which login flow a credential drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialKind {
    Interactive,
    NonInteractive,
}

/// Username/password credentials with an application key.
///
/// Also used as the request view of every session: a certificate session
/// carries one of these with an empty key until the key is resolved.
#[derive(Clone, PartialEq, Eq)]
pub struct InteractiveCredentials {
    pub username: String,
    pub password: String,
    pub region: String,
    pub application_key: String,
}

/// Username/password credentials authenticated by a client certificate.
#[derive(Clone, PartialEq, Eq)]
pub struct NonInteractiveCredentials {
    pub username: String,
    pub password: String,
    pub region: String,
    pub cert_path: PathBuf,
    pub key_path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credentials {
    Interactive(InteractiveCredentials),
    NonInteractive(NonInteractiveCredentials),
}

impl Credentials {
    /// Build credentials from positional values.
    ///
    /// Four values `(username, password, region, app_key)` yield interactive
    /// credentials; five values `(username, password, region, cert, key)`
    /// yield certificate credentials. Fields are not validated here.
    pub fn new<S: AsRef<str>>(params: &[S]) -> Result<Self> {
        match params {
            [username, password, region, app_key] => Ok(Self::interactive(
                username.as_ref(),
                password.as_ref(),
                region.as_ref(),
                app_key.as_ref(),
            )),
            [username, password, region, cert, key] => Ok(Self::non_interactive(
                username.as_ref(),
                password.as_ref(),
                region.as_ref(),
                cert.as_ref(),
                key.as_ref(),
            )),
            _ => Err(BetfairError::InvalidCredentialArity(params.len())),
        }
    }

    pub fn interactive(
        username: impl Into<String>,
        password: impl Into<String>,
        region: impl Into<String>,
        application_key: impl Into<String>,
    ) -> Self {
        Self::Interactive(InteractiveCredentials {
            username: username.into(),
            password: password.into(),
            region: region.into(),
            application_key: application_key.into(),
        })
    }

    pub fn non_interactive(
        username: impl Into<String>,
        password: impl Into<String>,
        region: impl Into<String>,
        cert_path: impl Into<PathBuf>,
        key_path: impl Into<PathBuf>,
    ) -> Self {
        Self::NonInteractive(NonInteractiveCredentials {
            username: username.into(),
            password: password.into(),
            region: region.into(),
            cert_path: cert_path.into(),
            key_path: key_path.into(),
        })
    }

    pub fn kind(&self) -> CredentialKind {
        match self {
            Self::Interactive(_) => CredentialKind::Interactive,
            Self::NonInteractive(_) => CredentialKind::NonInteractive,
        }
    }

    pub fn username(&self) -> &str {
        match self {
            Self::Interactive(c) => &c.username,
            Self::NonInteractive(c) => &c.username,
        }
    }

    pub fn password(&self) -> &str {
        match self {
            Self::Interactive(c) => &c.password,
            Self::NonInteractive(c) => &c.password,
        }
    }

    pub fn region(&self) -> &str {
        match self {
            Self::Interactive(c) => &c.region,
            Self::NonInteractive(c) => &c.region,
        }
    }

    /// The interactive-shaped view used to sign requests after login.
    pub fn request_credentials(&self) -> InteractiveCredentials {
        match self {
            Self::Interactive(c) => c.clone(),
            Self::NonInteractive(c) => InteractiveCredentials {
                username: c.username.clone(),
                password: c.password.clone(),
                region: c.region.clone(),
                application_key: String::new(),
            },
        }
    }

    pub fn login_endpoint(&self) -> Endpoint {
        match self {
            Self::Interactive(_) => Endpoint::RestLogin,
            Self::NonInteractive(_) => Endpoint::CertLogin,
        }
    }
}

impl fmt::Debug for InteractiveCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InteractiveCredentials")
            .field("username", &self.username)
            .field("password", &"***")
            .field("region", &self.region)
            .field("application_key", &self.application_key)
            .finish()
    }
}

impl fmt::Debug for NonInteractiveCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NonInteractiveCredentials")
            .field("username", &self.username)
            .field("password", &"***")
            .field("region", &self.region)
            .field("cert_path", &self.cert_path)
            .field("key_path", &self.key_path)
            .finish()
    }
}
