use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Dashboard role. Every identity has exactly one.
///
/// Wire names follow the product's vocabulary (`organisateur`, `participant`,
/// `administrateur`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "organisateur")]
    Organizer,
    #[serde(rename = "participant")]
    Participant,
    #[serde(rename = "administrateur")]
    Administrator,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Organizer, Role::Participant, Role::Administrator];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Organizer => "organisateur",
            Role::Participant => "participant",
            Role::Administrator => "administrateur",
        }
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown role '{0}'")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| UnknownRole(s.to_string()))
    }
}
