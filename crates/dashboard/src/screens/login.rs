use serde::Serialize;

use eventgate_auth::seed::demo_credentials;
use eventgate_auth::{AuthError, Identity, Role};

use crate::Notification;

/// Login form fields as typed so far.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    /// Pre-fill the form with the demo account for `role`.
    pub fn fill_demo(&mut self, role: Role) {
        let (email, password) = demo_credentials(role);
        self.email = email.to_string();
        self.password = password.to_string();
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DemoAccount {
    pub role: Role,
    pub email: &'static str,
    pub password: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginView {
    pub title: &'static str,
    pub email: String,
    pub demo_accounts: Vec<DemoAccount>,
}

impl LoginView {
    pub fn new(form: &LoginForm) -> Self {
        let demo_accounts = Role::ALL
            .into_iter()
            .map(|role| {
                let (email, password) = demo_credentials(role);
                DemoAccount {
                    role,
                    email,
                    password,
                }
            })
            .collect();

        Self {
            title: crate::sidebar::BRAND,
            email: form.email.clone(),
            demo_accounts,
        }
    }
}

pub fn success_notification(identity: &Identity) -> Notification {
    Notification::info(
        "Connexion réussie",
        format!("Bienvenue {} !", identity.display_name),
    )
}

pub fn failure_notification(err: &AuthError) -> Notification {
    Notification::destructive("Erreur de connexion", err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use eventgate_auth::CredentialStore;

    #[test]
    fn demo_fill_authenticates_for_every_role() {
        let store = CredentialStore::demo();
        for role in Role::ALL {
            let mut form = LoginForm::default();
            form.fill_demo(role);
            let identity = store.authenticate(&form.email, &form.password).unwrap();
            assert_eq!(identity.role, role);
        }
    }

    #[test]
    fn view_never_echoes_the_typed_password() {
        let form = LoginForm {
            email: "someone@example.com".into(),
            password: "secret-typed".into(),
        };
        let json = serde_json::to_string(&LoginView::new(&form)).unwrap();
        assert!(!json.contains("secret-typed"));
        assert!(json.contains("someone@example.com"));
    }

    #[test]
    fn notifications() {
        let identity = CredentialStore::demo()
            .authenticate("participant@example.com", "participant123")
            .unwrap();
        assert_eq!(
            success_notification(&identity).description,
            "Bienvenue Marie Participante !"
        );
        let failure = failure_notification(&AuthError::InvalidCredentials);
        assert_eq!(failure.description, "Email ou mot de passe incorrect");
        assert_eq!(failure.variant, crate::NotificationVariant::Destructive);
    }
}
