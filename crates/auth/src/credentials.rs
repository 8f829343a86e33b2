//! Credential lookup (the authenticator).

use std::collections::HashMap;

use thiserror::Error;

use eventgate_core::UserId;

use crate::Identity;

/// Authentication failure.
///
/// Unknown email and wrong password are deliberately indistinguishable.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    #[error("Email ou mot de passe incorrect")]
    InvalidCredentials,
}

/// One seeded `(email, password, identity)` triple. The email is the identity's.
#[derive(Clone, PartialEq, Eq)]
pub struct CredentialRecord {
    identity: Identity,
    password: String,
}

impl CredentialRecord {
    pub fn new(identity: Identity, password: impl Into<String>) -> Self {
        Self {
            identity,
            password: password.into(),
        }
    }

    pub fn email(&self) -> &str {
        &self.identity.email
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }
}

impl core::fmt::Debug for CredentialRecord {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CredentialRecord")
            .field("identity", &self.identity)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Read-only credential set, keyed by email.
#[derive(Debug, Clone, Default)]
pub struct CredentialStore {
    records: HashMap<String, CredentialRecord>,
}

impl CredentialStore {
    /// Build a store from records. A later record for the same email wins.
    pub fn new(records: impl IntoIterator<Item = CredentialRecord>) -> Self {
        let records = records
            .into_iter()
            .map(|r| (r.email().to_string(), r))
            .collect();
        Self { records }
    }

    /// Store seeded with the demo accounts.
    pub fn demo() -> Self {
        Self::new(crate::seed::demo_accounts())
    }

    /// Map `(email, password)` to the seeded identity.
    ///
    /// - Exact, case-sensitive comparison of both fields
    /// - No IO, no side effects
    pub fn authenticate(&self, email: &str, password: &str) -> Result<Identity, AuthError> {
        match self.records.get(email) {
            Some(record) if record.password == password => Ok(record.identity.clone()),
            _ => Err(AuthError::InvalidCredentials),
        }
    }

    /// All seeded identities, ordered by id.
    pub fn identities(&self) -> Vec<Identity> {
        let mut out: Vec<Identity> = self.records.values().map(|r| r.identity.clone()).collect();
        out.sort_by_key(|i| i.id);
        out
    }

    pub fn identity(&self, id: UserId) -> Option<&Identity> {
        self.records
            .values()
            .map(|r| &r.identity)
            .find(|i| i.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Role;
    use crate::seed::{self, demo_credentials};

    #[test]
    fn demo_accounts_authenticate_to_their_role() {
        let store = CredentialStore::demo();
        for role in Role::ALL {
            let (email, password) = demo_credentials(role);
            let identity = store.authenticate(email, password).unwrap();
            assert_eq!(identity.role, role);
            assert_eq!(identity.email, email);
        }
    }

    #[test]
    fn organizer_login_yields_seeded_identity() {
        let store = CredentialStore::demo();
        let identity = store
            .authenticate("organisateur@example.com", "organisateur123")
            .unwrap();
        assert_eq!(identity.id, UserId::new(1));
        assert_eq!(identity.display_name, "Jean Organisateur");
        assert_eq!(identity.role, Role::Organizer);
    }

    #[test]
    fn wrong_password_and_unknown_email_fail_identically() {
        let store = CredentialStore::demo();
        let wrong_password = store.authenticate(seed::ADMIN_EMAIL, "admin124");
        let unknown_email = store.authenticate("nobody@example.com", seed::ADMIN_PASSWORD);
        assert_eq!(wrong_password, Err(AuthError::InvalidCredentials));
        assert_eq!(wrong_password, unknown_email);
    }

    #[test]
    fn comparison_is_case_sensitive_and_unnormalized() {
        let store = CredentialStore::demo();
        assert!(store.authenticate("Admin@example.com", seed::ADMIN_PASSWORD).is_err());
        assert!(store.authenticate(seed::ADMIN_EMAIL, "ADMIN123").is_err());
        assert!(store.authenticate(" admin@example.com", seed::ADMIN_PASSWORD).is_err());
        assert!(store.authenticate(seed::ADMIN_EMAIL, "admin123 ").is_err());
    }

    #[test]
    fn one_account_cannot_use_another_accounts_password() {
        let store = CredentialStore::demo();
        assert!(
            store
                .authenticate(seed::ORGANIZER_EMAIL, seed::PARTICIPANT_PASSWORD)
                .is_err()
        );
    }

    #[test]
    fn identities_are_sorted_by_id() {
        let ids: Vec<u32> = CredentialStore::demo()
            .identities()
            .iter()
            .map(|i| i.id.get())
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn debug_output_redacts_passwords() {
        let rendered = format!("{:?}", CredentialStore::demo());
        assert!(!rendered.contains("admin123"));
        assert!(rendered.contains("<redacted>"));
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn seeded_pairs() -> Vec<(&'static str, &'static str)> {
            Role::ALL.into_iter().map(demo_credentials).collect()
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 512,
                ..ProptestConfig::default()
            })]

            /// Property: authentication succeeds iff the pair is exactly a seeded pair.
            #[test]
            fn succeeds_only_for_exact_seeded_pairs(
                email in prop_oneof![
                    Just("organisateur@example.com".to_string()),
                    Just("participant@example.com".to_string()),
                    Just("admin@example.com".to_string()),
                    "[a-zA-Z0-9@.]{0,30}",
                ],
                password in prop_oneof![
                    Just("organisateur123".to_string()),
                    Just("participant123".to_string()),
                    Just("admin123".to_string()),
                    "[a-zA-Z0-9]{0,20}",
                ],
            ) {
                let store = CredentialStore::demo();
                let expected = seeded_pairs()
                    .into_iter()
                    .any(|(e, p)| e == email && p == password);

                match store.authenticate(&email, &password) {
                    Ok(identity) => {
                        prop_assert!(expected);
                        prop_assert_eq!(identity.email, email);
                    }
                    Err(err) => {
                        prop_assert!(!expected);
                        prop_assert_eq!(err, AuthError::InvalidCredentials);
                    }
                }
            }
        }
    }
}
