//! The dashboard: one user's session, location and screen.
//!
//! All transitions go through `&mut self`. Callers that share a dashboard
//! serialise access themselves and must not hold it across an await; scans
//! are split into [`Dashboard::start_scan`] and [`Dashboard::finish_scan`] for
//! that reason.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, warn};

use eventgate_auth::{
    CredentialStore, DASHBOARD_PATH, Identity, Role, Session, SessionEvent, SessionStore,
};
use eventgate_catalog::{InMemoryCatalog, ReferenceData};
use eventgate_core::{DomainError, EventId, UserId};
use eventgate_events::{Event as _, Subscription};

use crate::navigator::{History, Navigation, resolve};
use crate::routes::{ORGANIZER_EVENTS_PATH, ROOT_PATH};
use crate::screens::admin::{self, AdminEventsView, AdminUsersView, EventAction, UserAction};
use crate::screens::login::{self, LoginForm, LoginView};
use crate::screens::organizer::{self, CreateEventView, EventDraft, EventForm, OrganizerEventsView};
use crate::screens::participant::{Cart, CartError, ParticipantEventsView, ParticipantTicketsView};
use crate::screens::scanner::{
    PendingScan, ScanOutcome, ScanReport, ScanTaskError, ScannerState, ScannerView,
};
use crate::screens::{ScreenState, ScreenView};
use crate::{DashboardConfig, DashboardError, Notification, Route, Sidebar};

/// Everything needed to render the current location.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page {
    pub location: String,
    pub route: Route,
    pub view: ScreenView,
    pub sidebar: Option<Sidebar>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginOutcome {
    pub identity: Identity,
    pub location: String,
    pub notification: Notification,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventSubmission {
    pub draft: EventDraft,
    pub notification: Notification,
    pub location: String,
}

pub struct Dashboard {
    config: DashboardConfig,
    credentials: Arc<CredentialStore>,
    reference: Arc<dyn ReferenceData>,
    session: Arc<SessionStore>,
    changes: Subscription<SessionEvent>,
    history: History,
    route: Route,
    screen: ScreenState,
}

impl Dashboard {
    /// A dashboard positioned on `/`, which resolves against the current session.
    pub fn new(
        config: DashboardConfig,
        credentials: Arc<CredentialStore>,
        reference: Arc<dyn ReferenceData>,
        session: Arc<SessionStore>,
    ) -> Result<Self, DashboardError> {
        let changes = session.subscribe();
        let nav = resolve(ROOT_PATH, &session.snapshot())?;
        Ok(Self {
            config,
            credentials,
            reference,
            session,
            changes,
            history: History::new(nav.location.clone()),
            route: nav.route,
            screen: ScreenState::for_route(nav.route),
        })
    }

    /// Seeded accounts and catalog with a fresh, empty session.
    pub fn demo(config: DashboardConfig) -> Result<Self, DashboardError> {
        Self::new(
            config,
            Arc::new(CredentialStore::demo()),
            Arc::new(InMemoryCatalog::seeded()),
            Arc::new(SessionStore::new()),
        )
    }

    pub fn location(&self) -> &str {
        self.history.current()
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn session(&self) -> Session {
        self.session.snapshot()
    }

    pub fn session_store(&self) -> &Arc<SessionStore> {
        &self.session
    }

    /// Go to `path` (link or direct entry).
    pub fn navigate(&mut self, path: &str) -> Result<Navigation, DashboardError> {
        self.sync_session()?;
        let nav = resolve(path, &self.session.snapshot())?;
        if nav.location != self.history.current() {
            self.history.push(nav.location.clone());
        }
        self.enter(nav.route, false);
        Ok(nav)
    }

    /// `None` when there is no earlier entry.
    pub fn back(&mut self) -> Result<Option<Navigation>, DashboardError> {
        self.sync_session()?;
        let Some(path) = self.history.back().map(str::to_string) else {
            return Ok(None);
        };
        self.revisit(&path).map(Some)
    }

    pub fn forward(&mut self) -> Result<Option<Navigation>, DashboardError> {
        self.sync_session()?;
        let Some(path) = self.history.forward().map(str::to_string) else {
            return Ok(None);
        };
        self.revisit(&path).map(Some)
    }

    /// Apply session changes published since the last call.
    ///
    /// Any change resets the screen state and re-resolves the current
    /// location. Returns `true` when something changed.
    pub fn sync_session(&mut self) -> Result<bool, DashboardError> {
        let changes = self.changes.drain();
        if changes.is_empty() {
            return Ok(false);
        }
        for change in &changes {
            debug!(event = change.event_type(), "session change");
        }

        let current = self.history.current().to_string();
        self.revisit(&current)?;
        self.enter(self.route, true);
        Ok(true)
    }

    /// Render the current location.
    pub fn page(&mut self) -> Result<Page, DashboardError> {
        self.sync_session()?;
        if let ScreenState::Scanner(state) = &mut self.screen {
            state.settle();
        }
        let session = self.session.snapshot();
        let location = self.history.current().to_string();
        let today = self.config.today();
        let reference = self.reference.as_ref();

        let view = match (self.route, &self.screen) {
            (Route::Login, ScreenState::Login(form)) => ScreenView::Login(LoginView::new(form)),
            (Route::Login, _) => ScreenView::Login(LoginView::new(&LoginForm::default())),
            (Route::OrganizerEvents, _) => ScreenView::OrganizerEvents(OrganizerEventsView::new(
                reference,
                signed_in(&session)?,
                today,
            )),
            (Route::CreateEvent, ScreenState::CreateEvent(form)) => {
                ScreenView::CreateEvent(CreateEventView::new(form))
            }
            (Route::CreateEvent, _) => {
                ScreenView::CreateEvent(CreateEventView::new(&EventForm::default()))
            }
            (Route::Scanner, ScreenState::Scanner(state)) => {
                ScreenView::Scanner(ScannerView::new(state, reference))
            }
            (Route::Scanner, _) => {
                ScreenView::Scanner(ScannerView::new(&ScannerState::default(), reference))
            }
            (Route::ParticipantEvents, ScreenState::ParticipantEvents(cart)) => {
                ScreenView::ParticipantEvents(ParticipantEventsView::new(reference, cart))
            }
            (Route::ParticipantEvents, _) => ScreenView::ParticipantEvents(
                ParticipantEventsView::new(reference, &Cart::default()),
            ),
            (Route::ParticipantTickets, _) => ScreenView::ParticipantTickets(
                ParticipantTicketsView::new(reference, signed_in(&session)?),
            ),
            (Route::AdminUsers, _) => ScreenView::AdminUsers(AdminUsersView::new(&self.credentials)),
            (Route::AdminEvents, _) => ScreenView::AdminEvents(AdminEventsView::new(
                reference,
                &self.credentials,
                today,
            )),
            (Route::Root | Route::Dashboard | Route::NotFound, _) => ScreenView::NotFound {
                path: location.clone(),
            },
        };

        Ok(Page {
            sidebar: Sidebar::for_session(&session, &location),
            location,
            route: self.route,
            view,
        })
    }

    /// Check credentials and open a session, then land on the role's screen.
    pub fn login(&mut self, email: &str, password: &str) -> Result<LoginOutcome, DashboardError> {
        self.sync_session()?;
        let identity = match self.credentials.authenticate(email, password) {
            Ok(identity) => identity,
            Err(err) => {
                warn!(%email, "login rejected");
                return Err(err.into());
            }
        };

        self.session.login(identity.clone());
        let nav = self.navigate(DASHBOARD_PATH)?;
        Ok(LoginOutcome {
            notification: login::success_notification(&identity),
            identity,
            location: nav.location,
        })
    }

    /// Close the session; returns the resulting location.
    pub fn logout(&mut self) -> Result<String, DashboardError> {
        self.session.logout();
        self.sync_session()?;
        Ok(self.location().to_string())
    }

    /// Pre-fill the login form with a demo account.
    pub fn fill_demo(&mut self, role: Role) -> Result<LoginForm, DashboardError> {
        self.sync_session()?;
        match (self.route, &mut self.screen) {
            (Route::Login, ScreenState::Login(form)) => {
                form.fill_demo(role);
                Ok(form.clone())
            }
            (actual, _) => Err(wrong_screen(Route::Login, actual)),
        }
    }

    pub fn start_scan(&mut self, code: &str) -> Result<PendingScan, DashboardError> {
        self.sync_session()?;
        let reference = Arc::clone(&self.reference);
        let delay = self.config.scan_delay;
        let pending = self.scanner()?.start(code, reference, delay)?;
        Ok(pending)
    }

    /// Apply a scan outcome. Fails with `Cancelled` if the scanner screen was
    /// left (or reset) since the scan started.
    pub fn finish_scan(
        &mut self,
        pending_id: u64,
        outcome: ScanOutcome,
    ) -> Result<ScanReport, DashboardError> {
        self.sync_session()?;
        let scanner = match self.scanner() {
            Ok(scanner) => scanner,
            Err(_) => {
                info!(scan_id = pending_id, "scan cancelled by navigation");
                return Err(ScanTaskError::Cancelled.into());
            }
        };
        Ok(scanner.finish(pending_id, outcome)?)
    }

    pub fn reset_scan(&mut self) -> Result<(), DashboardError> {
        self.sync_session()?;
        self.scanner()?.reset();
        Ok(())
    }

    pub fn add_to_cart(&mut self, id: EventId) -> Result<Vec<EventId>, DashboardError> {
        self.sync_session()?;
        let reference = Arc::clone(&self.reference);
        let cart = self.cart()?;
        let event = reference.event(id).ok_or(CartError::UnknownEvent(id))?;
        cart.add(event)?;
        Ok(cart.ids())
    }

    pub fn remove_from_cart(&mut self, id: EventId) -> Result<Vec<EventId>, DashboardError> {
        self.sync_session()?;
        let cart = self.cart()?;
        cart.remove(id);
        Ok(cart.ids())
    }

    /// Validate the create-event form. On success the form is left for the
    /// organizer's event list; the draft is never added to the catalog.
    pub fn submit_event(&mut self, form: EventForm) -> Result<EventSubmission, DashboardError> {
        self.sync_session()?;
        let organizer = signed_in(&self.session.snapshot())?;
        let stored = match (self.route, &mut self.screen) {
            (Route::CreateEvent, ScreenState::CreateEvent(stored)) => stored,
            (actual, _) => return Err(wrong_screen(Route::CreateEvent, actual)),
        };
        *stored = form;
        let draft = stored.validate(organizer)?;

        info!(organizer_id = %organizer, name = %draft.name, "event draft accepted");
        let nav = self.navigate(ORGANIZER_EVENTS_PATH)?;
        Ok(EventSubmission {
            notification: organizer::created_notification(&draft),
            draft,
            location: nav.location,
        })
    }

    pub fn moderate_user(
        &mut self,
        id: UserId,
        action: UserAction,
    ) -> Result<Notification, DashboardError> {
        self.sync_session()?;
        self.expect_route(Route::AdminUsers)?;
        self.credentials
            .identity(id)
            .ok_or_else(|| DomainError::not_found("user", id))?;
        info!(user_id = %id, ?action, "user moderation");
        Ok(admin::user_notification(action, id))
    }

    pub fn moderate_event(
        &mut self,
        id: EventId,
        action: EventAction,
    ) -> Result<Notification, DashboardError> {
        self.sync_session()?;
        self.expect_route(Route::AdminEvents)?;
        self.reference
            .event(id)
            .ok_or_else(|| DomainError::not_found("event", id))?;
        info!(event_id = %id, ?action, "event moderation");
        Ok(admin::event_notification(action))
    }

    fn revisit(&mut self, path: &str) -> Result<Navigation, DashboardError> {
        let nav = resolve(path, &self.session.snapshot())?;
        if nav.redirected() {
            self.history.replace(nav.location.clone());
        }
        self.enter(nav.route, false);
        Ok(nav)
    }

    fn enter(&mut self, route: Route, force_reset: bool) {
        if force_reset || route != self.route {
            self.screen = ScreenState::for_route(route);
        }
        self.route = route;
    }

    fn expect_route(&self, expected: Route) -> Result<(), DashboardError> {
        if self.route == expected {
            Ok(())
        } else {
            Err(wrong_screen(expected, self.route))
        }
    }

    fn scanner(&mut self) -> Result<&mut ScannerState, DashboardError> {
        match (self.route, &mut self.screen) {
            (Route::Scanner, ScreenState::Scanner(state)) => Ok(state),
            (actual, _) => Err(wrong_screen(Route::Scanner, actual)),
        }
    }

    fn cart(&mut self) -> Result<&mut Cart, DashboardError> {
        match (self.route, &mut self.screen) {
            (Route::ParticipantEvents, ScreenState::ParticipantEvents(cart)) => Ok(cart),
            (actual, _) => Err(wrong_screen(Route::ParticipantEvents, actual)),
        }
    }
}

fn wrong_screen(expected: Route, actual: Route) -> DashboardError {
    DashboardError::WrongScreen { expected, actual }
}

fn signed_in(session: &Session) -> Result<UserId, DashboardError> {
    session
        .identity()
        .map(|i| i.id)
        .ok_or(DashboardError::NotSignedIn)
}
