//! `eventgate-auth`: authentication, session state and route guarding.
//!
//! This crate is intentionally decoupled from HTTP and from the screens.

pub mod authorize;
pub mod credentials;
pub mod identity;
pub mod roles;
pub mod seed;
pub mod session;

pub use authorize::{Access, DASHBOARD_PATH, LOGIN_PATH, Unauthorized, authorize, authorize_explained};
pub use credentials::{AuthError, CredentialRecord, CredentialStore};
pub use identity::Identity;
pub use roles::{Role, UnknownRole};
pub use session::{Session, SessionEvent, SessionStore};
