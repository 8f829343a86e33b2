use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use eventgate_auth::{Session, SessionStore};
use eventgate_dashboard::Dashboard;

/// Shared by all handlers. One dashboard per process.
///
/// The guard returned by [`AppState::lock`] must not be held across an await.
#[derive(Clone)]
pub struct AppState {
    dashboard: Arc<Mutex<Dashboard>>,
    session: Arc<SessionStore>,
}

impl AppState {
    pub fn new(dashboard: Dashboard) -> Self {
        let session = Arc::clone(dashboard.session_store());
        Self {
            dashboard: Arc::new(Mutex::new(dashboard)),
            session,
        }
    }

    pub fn lock(&self) -> MutexGuard<'_, Dashboard> {
        self.dashboard.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Current session without taking the dashboard lock.
    pub fn session(&self) -> Session {
        self.session.snapshot()
    }
}
