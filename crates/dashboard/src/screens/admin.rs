//! Administrator screens: users and event moderation.
//!
//! Moderation actions are simulated: they produce a notification and change
//! nothing in the catalog or the credential set.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use eventgate_auth::{CredentialStore, Identity, Role};
use eventgate_catalog::{EventStatus, ReferenceData};
use eventgate_core::{EventId, UserId};

use crate::Notification;

pub const UNKNOWN_ORGANIZER: &str = "Organisateur inconnu";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserAction {
    Activate,
    Suspend,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventAction {
    Approve,
    Suspend,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UserStats {
    pub total: usize,
    pub organizers: usize,
    pub participants: usize,
    pub administrators: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdminUsersView {
    pub users: Vec<Identity>,
    pub stats: UserStats,
}

impl AdminUsersView {
    pub fn new(credentials: &CredentialStore) -> Self {
        let users = credentials.identities();
        let mut stats = UserStats {
            total: users.len(),
            ..UserStats::default()
        };
        for user in &users {
            match user.role {
                Role::Organizer => stats.organizers += 1,
                Role::Participant => stats.participants += 1,
                Role::Administrator => stats.administrators += 1,
            }
        }
        Self { users, stats }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModeratedEvent {
    pub id: EventId,
    pub name: String,
    pub date: NaiveDate,
    pub venue: String,
    pub organizer_name: String,
    pub status: EventStatus,
    pub sold: u32,
    pub capacity: u32,
    pub fill_percent: u32,
    pub revenue: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EventStats {
    pub total: usize,
    pub active: usize,
    pub ended: usize,
    pub revenue: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdminEventsView {
    pub events: Vec<ModeratedEvent>,
    pub stats: EventStats,
}

impl AdminEventsView {
    pub fn new(
        reference: &dyn ReferenceData,
        credentials: &CredentialStore,
        today: NaiveDate,
    ) -> Self {
        let events: Vec<ModeratedEvent> = reference
            .events()
            .iter()
            .map(|e| ModeratedEvent {
                id: e.id,
                name: e.name.clone(),
                date: e.date,
                venue: e.venue.clone(),
                organizer_name: credentials
                    .identity(e.organizer_id)
                    .map(|i| i.display_name.clone())
                    .unwrap_or_else(|| UNKNOWN_ORGANIZER.to_string()),
                status: e.status(today),
                sold: e.sold,
                capacity: e.capacity,
                fill_percent: e.fill_percent(),
                revenue: e.revenue(),
            })
            .collect();

        let stats = EventStats {
            total: events.len(),
            active: events.iter().filter(|e| e.status == EventStatus::Active).count(),
            ended: events.iter().filter(|e| e.status == EventStatus::Ended).count(),
            revenue: events.iter().map(|e| e.revenue).sum(),
        };

        Self { events, stats }
    }
}

pub fn user_notification(action: UserAction, user: UserId) -> Notification {
    match action {
        UserAction::Activate => {
            Notification::info("Utilisateur activé", format!("L'utilisateur {user} a été activé"))
        }
        UserAction::Suspend => Notification::destructive(
            "Utilisateur suspendu",
            format!("L'utilisateur {user} a été suspendu"),
        ),
    }
}

pub fn event_notification(action: EventAction) -> Notification {
    match action {
        EventAction::Approve => {
            Notification::info("Événement approuvé", "L'événement a été approuvé avec succès")
        }
        EventAction::Suspend => {
            Notification::destructive("Événement suspendu", "L'événement a été suspendu")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eventgate_catalog::{InMemoryCatalog, seed};

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn user_stats_count_each_role() {
        let view = AdminUsersView::new(&CredentialStore::demo());
        assert_eq!(
            view.stats,
            UserStats {
                total: 3,
                organizers: 1,
                participants: 1,
                administrators: 1,
            }
        );
        assert_eq!(view.users[0].id, UserId::new(1));
    }

    #[test]
    fn event_status_depends_on_today() {
        let catalog = InMemoryCatalog::seeded();
        let credentials = CredentialStore::demo();

        let before = AdminEventsView::new(&catalog, &credentials, day(2025, 1, 1));
        assert_eq!(before.stats.active, 3);
        assert_eq!(before.stats.ended, 0);

        let after = AdminEventsView::new(&catalog, &credentials, day(2025, 8, 1));
        let tech = after.events.iter().find(|e| e.id == EventId::new(3)).unwrap();
        assert_eq!(tech.status, EventStatus::Ended);
        assert_eq!(after.stats.ended, 1);
        assert_eq!(after.stats.total, 3);
    }

    #[test]
    fn revenue_is_sold_times_price() {
        let view = AdminEventsView::new(
            &InMemoryCatalog::seeded(),
            &CredentialStore::demo(),
            day(2025, 1, 1),
        );
        let expected: u64 = 234 * 15_000 + 89 * 20_000 + 156 * 50_000;
        assert_eq!(view.stats.revenue, expected);
        assert!(view.events.iter().all(|e| e.organizer_name == "Jean Organisateur"));
    }

    #[test]
    fn unknown_organizer_falls_back() {
        let mut events = seed::events();
        events[0].organizer_id = UserId::new(42);
        let catalog = InMemoryCatalog::new(events, seed::tickets());
        let view = AdminEventsView::new(&catalog, &CredentialStore::demo(), day(2025, 1, 1));
        assert_eq!(view.events[0].organizer_name, UNKNOWN_ORGANIZER);
    }

    #[test]
    fn moderation_is_notification_only() {
        assert_eq!(event_notification(EventAction::Approve).title, "Événement approuvé");
        assert_eq!(
            event_notification(EventAction::Suspend).variant,
            crate::NotificationVariant::Destructive
        );
        assert_eq!(user_notification(UserAction::Activate, UserId::new(2)).title, "Utilisateur activé");
    }
}
