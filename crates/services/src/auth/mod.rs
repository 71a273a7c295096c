mod provider;
mod reset;

pub use provider::{AuthConfig, AuthProvider, AuthSession, AuthUser, HttpAuthProvider};
pub use reset::{PasswordResetFlow, ResetLinkTokens, SessionValidity};
