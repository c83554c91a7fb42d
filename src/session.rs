use crate::credentials::{CredentialKind, Credentials, InteractiveCredentials};
use crate::dispatch::{decode, RequestBody};
use crate::dto::{CertLoginResponse, DeveloperApplication, InteractiveLoginResponse, LOGIN_SUCCESS};
use crate::endpoints::EndpointRegistry;
use crate::error::{BetfairError, Result};
use crate::transport::{Transport, TransportConfig};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// Type alias for a session shared between tasks
pub type SharedSession = Arc<Mutex<Session>>;

/// Login progress of a session.
///
/// `Authenticated` and `Failed` are terminal; a new session is needed to retry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginState {
    Unauthenticated,
    LoggingIn,
    Authenticated,
    Failed(String),
}

/// An authenticated handle every API call goes through.
///
/// Calls that change the session (the application-key resolver) take
/// `&mut self`. Wrap it in a [`SharedSession`] to use it from several tasks.
#[derive(Debug)]
pub struct Session {
    token: String,
    kind: CredentialKind,
    request_credentials: InteractiveCredentials,
    transport: Transport,
    registry: Arc<EndpointRegistry>,
    developer_apps: Option<Vec<DeveloperApplication>>,
    state: LoginState,
}

impl Session {
    /// Log in against the production endpoints with default transport settings.
    pub async fn new(credentials: &Credentials) -> Result<Self> {
        Self::login(
            credentials,
            Arc::new(EndpointRegistry::betfair()),
            &TransportConfig::default(),
        )
        .await
    }

    /// Build the transport, then log in with the flow matching the credential kind.
    ///
    /// Only a successfully authenticated session is ever returned.
    pub async fn login(
        credentials: &Credentials,
        registry: Arc<EndpointRegistry>,
        config: &TransportConfig,
    ) -> Result<Self> {
        let transport = Transport::build(credentials, config)?;

        let mut session = Self {
            token: String::new(),
            kind: credentials.kind(),
            request_credentials: credentials.request_credentials(),
            transport,
            registry,
            developer_apps: None,
            state: LoginState::Unauthenticated,
        };

        session.transition(LoginState::LoggingIn);
        match session.authenticate(credentials).await {
            Ok(token) => {
                session.token = token;
                session.transition(LoginState::Authenticated);
                info!(
                    username = %session.request_credentials.username,
                    region = %session.request_credentials.region,
                    "logged in"
                );
                Ok(session)
            }
            Err(err) => {
                warn!("login failed: {}", err);
                session.transition(LoginState::Failed(err.to_string()));
                Err(err)
            }
        }
    }

    fn transition(&mut self, next: LoginState) {
        debug!(from = ?self.state, to = ?next, "login state change");
        self.state = next;
    }

    async fn authenticate(&self, credentials: &Credentials) -> Result<String> {
        let form = vec![
            ("username".to_string(), credentials.username().to_string()),
            ("password".to_string(), credentials.password().to_string()),
        ];

        let body = self
            .dispatch(credentials.login_endpoint(), "", RequestBody::Form(form))
            .await?;

        match self.kind {
            CredentialKind::Interactive => {
                let response: InteractiveLoginResponse = decode(&body)?;
                if response.status != LOGIN_SUCCESS {
                    let reason = if response.error.is_empty() {
                        response.status
                    } else {
                        response.error
                    };
                    return Err(BetfairError::LoginFailed(reason));
                }
                Ok(response.token)
            }
            CredentialKind::NonInteractive => {
                let response: CertLoginResponse = decode(&body)?;
                if response.login_status != LOGIN_SUCCESS {
                    return Err(BetfairError::LoginFailed(response.login_status));
                }
                Ok(response.session_token)
            }
        }
    }

    pub fn into_shared(self) -> SharedSession {
        Arc::new(Mutex::new(self))
    }

    pub fn state(&self) -> &LoginState {
        &self.state
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn kind(&self) -> CredentialKind {
        self.kind
    }

    pub fn region(&self) -> &str {
        &self.request_credentials.region
    }

    pub fn request_credentials(&self) -> &InteractiveCredentials {
        &self.request_credentials
    }

    pub fn application_key(&self) -> &str {
        &self.request_credentials.application_key
    }

    /// Use `key` for `X-Application` on subsequent calls.
    pub fn set_application_key(&mut self, key: impl Into<String>) {
        self.request_credentials.application_key = key.into();
    }

    pub fn transport(&self) -> &Transport {
        &self.transport
    }

    pub fn registry(&self) -> &EndpointRegistry {
        &self.registry
    }

    /// Applications fetched by the resolver, if it has run.
    pub fn developer_apps(&self) -> Option<&[DeveloperApplication]> {
        self.developer_apps.as_deref()
    }

    pub(crate) fn cache_developer_apps(&mut self, apps: Vec<DeveloperApplication>) {
        self.developer_apps = Some(apps);
    }
}
