//! Team store

use crate::domain::{EntityId, Team};
use crate::error::Result;
use async_trait::async_trait;

/// Origin tag of lookups by team id
pub const TEAM_GET: &str = "team_store.get";
/// Origin tag of lookups by invite id
pub const TEAM_GET_BY_INVITE_ID: &str = "team_store.get_by_invite_id";

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// Fetch a team by id. A missing team is a [`crate::error::LookupError`]
    /// tagged [`TEAM_GET`].
    async fn get(&self, id: &EntityId) -> Result<Team>;

    /// Fetch the team whose standing invite id is `invite_id`. A missing
    /// team is a lookup error tagged [`TEAM_GET_BY_INVITE_ID`].
    async fn get_by_invite_id(&self, invite_id: &str) -> Result<Team>;
}
