use eventgate_auth::Role;

use crate::routes::{ADMIN_USERS_PATH, ORGANIZER_EVENTS_PATH, PARTICIPANT_EVENTS_PATH};

/// Landing screen for a role, used when an identity reaches `/dashboard`.
///
/// None of these is `/dashboard` itself, so forwarding cannot loop.
pub fn landing_path_for(role: Role) -> &'static str {
    match role {
        Role::Organizer => ORGANIZER_EVENTS_PATH,
        Role::Participant => PARTICIPANT_EVENTS_PATH,
        Role::Administrator => ADMIN_USERS_PATH,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Route;
    use eventgate_auth::DASHBOARD_PATH;

    #[test]
    fn landing_paths() {
        assert_eq!(landing_path_for(Role::Organizer), "/organisateur/events");
        assert_eq!(landing_path_for(Role::Participant), "/participant/events");
        assert_eq!(landing_path_for(Role::Administrator), "/admin/users");
    }

    #[test]
    fn landing_paths_are_screens_the_role_may_view() {
        for role in Role::ALL {
            let path = landing_path_for(role);
            assert_ne!(path, DASHBOARD_PATH);
            assert!(Route::from_path(path).required_roles().contains(&role));
        }
    }
}
