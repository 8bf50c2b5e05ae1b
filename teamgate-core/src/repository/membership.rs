//! Team membership store

use crate::domain::{EntityId, TeamMember};
use crate::error::Result;
use async_trait::async_trait;

/// Origin tag of membership updates
pub const MEMBERSHIP_UPDATE: &str = "membership_store.update";

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MembershipRepository: Send + Sync {
    /// `None` when the user is not a member of the team
    async fn find(&self, user_id: &EntityId, team_id: &EntityId) -> Result<Option<TeamMember>>;

    async fn set_team_admin(
        &self,
        user_id: &EntityId,
        team_id: &EntityId,
        team_admin: bool,
    ) -> Result<TeamMember>;
}
