//! # betfair-rest
//!
//! Session authentication and request dispatch for the Betfair Exchange REST
//! API. A [`Session`] is opened with either interactive credentials
//! (username, password, application key) or certificate credentials
//! (username, password, client certificate and key), and every betting and
//! account call is signed through it.
//!
//! ## Quick Start
//!
//! ```no_run
//! use betfair_rest::{Credentials, Session};
//! use betfair_rest::dto::{MarketFilter, Query};
//!
//! # async fn example() -> betfair_rest::Result<()> {
//! let credentials = Credentials::new(&["username", "password", "UK", "app-key"])?;
//! let session = Session::new(&credentials).await?;
//!
//! let query = Query::with_filter(MarketFilter {
//!     event_type_ids: Some(vec!["1".to_string()]), // Soccer
//!     ..Default::default()
//! });
//! let events = session.list_events(&query, &[]).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Certificate login
//!
//! Certificate sessions start without an application key. Resolve one from
//! the account's registered applications before calling the betting API:
//!
//! ```no_run
//! use betfair_rest::{Credentials, Session};
//!
//! # async fn example() -> betfair_rest::Result<()> {
//! let credentials = Credentials::new(&[
//!     "username", "password", "UK", "client-2048.crt", "client-2048.key",
//! ])?;
//! let mut session = Session::new(&credentials).await?;
//! session.set_used_application("MyApp", true).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Configuration
//!
//! The `betfair` binary and [`Config`] read a `config.toml`:
//!
//! ```toml
//! [betfair]
//! username = "your_username"
//! password = "your_password"
//! region = "UK"
//! cert_path = "/path/to/client-2048.crt"
//! key_path = "/path/to/client-2048.key"
//! app_name = "MyApp"
//! delayed_data = true
//! ```

pub mod account;
pub mod betting;
pub mod config;
pub mod credentials;
pub mod dispatch;
pub mod dto;
pub mod endpoints;
pub mod error;
pub mod session;
pub mod transport;

// Re-export commonly used types at the crate root
pub use betting::Visitor;
pub use config::Config;
pub use credentials::{
    CredentialKind, Credentials, InteractiveCredentials, NonInteractiveCredentials,
};
pub use dispatch::RequestBody;
pub use endpoints::{Endpoint, EndpointRegistry};
pub use error::{BetfairError, Result};
pub use session::{LoginState, Session, SharedSession};
pub use transport::{Transport, TransportConfig};
