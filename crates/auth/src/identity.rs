use serde::{Deserialize, Serialize};

use eventgate_core::{Entity, UserId};

use crate::Role;

/// An authenticated user.
///
/// Identities are immutable: a new login replaces the whole value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Identity {
    pub id: UserId,
    pub display_name: String,
    pub email: String,
    pub role: Role,
}

impl Identity {
    pub fn new(
        id: UserId,
        display_name: impl Into<String>,
        email: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            id,
            display_name: display_name.into(),
            email: email.into(),
            role,
        }
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.role == role
    }
}

impl Entity for Identity {
    type Id = UserId;

    fn id(&self) -> Self::Id {
        self.id
    }
}
