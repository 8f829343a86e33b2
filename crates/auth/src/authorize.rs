//! Route guard.

use thiserror::Error;

use crate::{Role, Session};

/// Public entry point for unauthenticated users.
pub const LOGIN_PATH: &str = "/login";

/// Generic authenticated entry point; forwards to the role's landing screen.
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Outcome of a guard check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Allow,
    /// Silent navigation to another path. Never shown to the user as an error.
    RedirectTo(&'static str),
}

impl Access {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Access::Allow)
    }
}

/// Why a guard check did not allow access.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Unauthorized {
    #[error("no authenticated identity")]
    Unauthenticated,

    #[error("role '{role}' is not one of {required:?}")]
    RoleMismatch { role: Role, required: Vec<Role> },
}

impl Unauthorized {
    /// Where the guard sends the user for this denial.
    pub fn redirect_path(&self) -> &'static str {
        match self {
            Unauthorized::Unauthenticated => LOGIN_PATH,
            Unauthorized::RoleMismatch { .. } => DASHBOARD_PATH,
        }
    }
}

/// Decide whether `session` may view a screen restricted to `required` roles.
///
/// An empty `required` slice means "any authenticated identity".
pub fn authorize(session: &Session, required: &[Role]) -> Access {
    match authorize_explained(session, required) {
        Ok(()) => Access::Allow,
        Err(denial) => Access::RedirectTo(denial.redirect_path()),
    }
}

/// Same decision as [`authorize`], keeping the reason (for logs).
///
/// - No IO
/// - No panics
pub fn authorize_explained(session: &Session, required: &[Role]) -> Result<(), Unauthorized> {
    let identity = session.identity().ok_or(Unauthorized::Unauthenticated)?;

    if !required.is_empty() && !required.contains(&identity.role) {
        return Err(Unauthorized::RoleMismatch {
            role: identity.role,
            required: required.to_vec(),
        });
    }

    Ok(())
}
