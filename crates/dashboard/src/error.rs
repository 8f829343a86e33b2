use thiserror::Error;

use eventgate_auth::AuthError;
use eventgate_catalog::ScanError;
use eventgate_core::DomainError;

use crate::screens::{CartError, FormError, ScanTaskError};
use crate::{NavigationError, Notification, Route};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DashboardError {
    #[error(transparent)]
    Navigation(#[from] NavigationError),

    /// The action belongs to a screen other than the one shown.
    #[error("action requires screen {expected:?}, current screen is {actual:?}")]
    WrongScreen { expected: Route, actual: Route },

    #[error("no authenticated identity")]
    NotSignedIn,

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Form(#[from] FormError),

    #[error(transparent)]
    Cart(#[from] CartError),

    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error(transparent)]
    ScanTask(#[from] ScanTaskError),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl DashboardError {
    /// User-facing notification for failures that have one.
    pub fn notification(&self) -> Option<Notification> {
        match self {
            DashboardError::Auth(err) => Some(crate::screens::login::failure_notification(err)),
            DashboardError::Form(err) => Some(crate::screens::organizer::rejected_notification(err)),
            DashboardError::Cart(err @ CartError::SoldOut(_)) => {
                Some(Notification::destructive("Événement complet", err.to_string()))
            }
            DashboardError::ScanTask(err @ ScanTaskError::EmptyCode) => {
                Some(Notification::destructive("Erreur", err.to_string()))
            }
            _ => None,
        }
    }
}
