//! Team domain model

use super::common::EntityId;
use serde::{Deserialize, Serialize};

/// Team entity as seen by the signup flow
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: EntityId,
    pub name: String,
    pub display_name: String,
    pub email: String,
    /// Identifier of the team's standing open invitation
    pub invite_id: EntityId,
}

impl Default for Team {
    fn default() -> Self {
        Self {
            id: EntityId::new(),
            name: String::new(),
            display_name: String::new(),
            email: String::new(),
            invite_id: EntityId::new(),
        }
    }
}

/// Membership of a user in a team, with the team-level role flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub team_id: EntityId,
    pub user_id: EntityId,
    pub team_admin: bool,
}
