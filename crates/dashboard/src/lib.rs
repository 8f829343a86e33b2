//! `eventgate-dashboard`: the role-based dashboard state machine.
//!
//! If you're new to this crate, it is structured like:
//! - `routes.rs`: the navigation surface (path → route → required roles)
//! - `redirect.rs`: role → landing path
//! - `navigator.rs`: path resolution through the guard + history stack
//! - `screens/`: per-screen views and screen-local state
//! - `dashboard.rs`: ties session, navigation and screens together

pub mod config;
pub mod dashboard;
pub mod error;
pub mod navigator;
pub mod notification;
pub mod redirect;
pub mod routes;
pub mod screens;
pub mod sidebar;

pub use config::DashboardConfig;
pub use dashboard::{Dashboard, EventSubmission, LoginOutcome, Page};
pub use error::DashboardError;
pub use navigator::{History, Navigation, NavigationError, resolve};
pub use notification::{Notification, NotificationVariant};
pub use redirect::landing_path_for;
pub use routes::Route;
pub use sidebar::{MenuItem, Sidebar};
