pub mod account;
pub mod common;
pub mod login;
pub mod market;

// Re-export commonly used types for convenience
pub use account::*;
pub use common::*;
pub use login::{CertLoginResponse, InteractiveLoginResponse, LOGIN_SUCCESS};
pub use market::*;
