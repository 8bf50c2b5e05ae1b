//! User store

use crate::domain::{EntityId, User};
use crate::error::Result;
use async_trait::async_trait;

/// Origin tag of lookups by user id
pub const USER_GET: &str = "user_store.get";

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fetch a user by id; unknown ids fail with a lookup error tagged [`USER_GET`].
    async fn get(&self, id: &EntityId) -> Result<User>;

    async fn set_system_admin(&self, id: &EntityId, system_admin: bool) -> Result<User>;
}
