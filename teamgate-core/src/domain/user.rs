//! User domain model

use super::common::EntityId;
use serde::{Deserialize, Serialize};

/// User entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: EntityId,
    pub email: String,
    /// System-level role flag
    pub system_admin: bool,
}

impl Default for User {
    fn default() -> Self {
        Self {
            id: EntityId::new(),
            email: String::new(),
            system_admin: false,
        }
    }
}

/// The authenticated caller of an operation.
///
/// Only the identity is trusted; role facts are always read fresh from the
/// stores at decision time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: EntityId,
}

impl Session {
    pub fn new(user_id: EntityId) -> Self {
        Self { user_id }
    }
}
