//! Common types for domain models

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Length of every identifier handed out by the system.
pub const ENTITY_ID_LEN: usize = 26;

lazy_static::lazy_static! {
    static ref ENTITY_ID_REGEX: regex::Regex = regex::Regex::new(r"^[a-z0-9]{26}$").unwrap();
}

/// Opaque 26-character identifier for users, teams and invite ids.
///
/// New ids are a random UUIDv4 rendered in z-base-32, which only uses
/// lowercase letters and digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EntityId(String);

/// Returned when a string does not have the shape of an [`EntityId`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("malformed id: {0:?}")]
pub struct MalformedId(pub String);

impl EntityId {
    pub fn new() -> Self {
        let encoded = base32::encode(base32::Alphabet::Z, Uuid::new_v4().as_bytes());
        EntityId(encoded)
    }

    /// Parse an id string, rejecting anything that is not 26 lowercase
    /// alphanumerics.
    pub fn parse(s: &str) -> Result<Self, MalformedId> {
        if ENTITY_ID_REGEX.is_match(s) {
            Ok(EntityId(s.to_string()))
        } else {
            Err(MalformedId(s.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for EntityId {
    type Err = MalformedId;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EntityId::parse(s)
    }
}

impl TryFrom<String> for EntityId {
    type Error = MalformedId;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        EntityId::parse(&s)
    }
}

impl From<EntityId> for String {
    fn from(id: EntityId) -> Self {
        id.0
    }
}

impl AsRef<str> for EntityId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
