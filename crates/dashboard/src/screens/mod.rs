//! Per-screen views and screen-local state.
//!
//! A view is a pure function of reference data, the session and the screen's
//! local state. Local state lives in [`ScreenState`] and is dropped whenever
//! the current route changes.

pub mod admin;
pub mod login;
pub mod organizer;
pub mod participant;
pub mod scanner;

use serde::Serialize;

use crate::Route;

pub use admin::{AdminEventsView, AdminUsersView, EventAction, UserAction};
pub use login::{LoginForm, LoginView};
pub use organizer::{CreateEventView, EventDraft, EventForm, FormError, OrganizerEventsView};
pub use participant::{Cart, CartError, ParticipantEventsView, ParticipantTicketsView};
pub use scanner::{PendingScan, ScanReport, ScanTaskError, ScannerState, ScannerView};

/// Rendered content of the current screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum ScreenView {
    Login(LoginView),
    OrganizerEvents(OrganizerEventsView),
    CreateEvent(CreateEventView),
    Scanner(ScannerView),
    ParticipantEvents(ParticipantEventsView),
    ParticipantTickets(ParticipantTicketsView),
    AdminUsers(AdminUsersView),
    AdminEvents(AdminEventsView),
    NotFound { path: String },
}

/// Volatile state owned by the screen currently shown.
#[derive(Debug, Default)]
pub enum ScreenState {
    #[default]
    Stateless,
    Login(LoginForm),
    CreateEvent(EventForm),
    Scanner(ScannerState),
    ParticipantEvents(Cart),
}

impl ScreenState {
    /// Fresh state for a screen that was just entered.
    pub fn for_route(route: Route) -> Self {
        match route {
            Route::Login => ScreenState::Login(LoginForm::default()),
            Route::CreateEvent => ScreenState::CreateEvent(EventForm::default()),
            Route::Scanner => ScreenState::Scanner(ScannerState::default()),
            Route::ParticipantEvents => ScreenState::ParticipantEvents(Cart::default()),
            Route::Root
            | Route::Dashboard
            | Route::OrganizerEvents
            | Route::ParticipantTickets
            | Route::AdminUsers
            | Route::AdminEvents
            | Route::NotFound => ScreenState::Stateless,
        }
    }
}
