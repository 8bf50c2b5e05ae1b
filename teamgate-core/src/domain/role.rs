//! Role domain models

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Role enumeration, ordered by privilege.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[default]
    Member,
    TeamAdmin,
    SystemAdmin,
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "" | "member" => Ok(Self::Member),
            "team_admin" => Ok(Self::TeamAdmin),
            "system_admin" => Ok(Self::SystemAdmin),
            _ => Err(format!("Unknown role: {}", s)),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Member => write!(f, "member"),
            Self::TeamAdmin => write!(f, "team_admin"),
            Self::SystemAdmin => write!(f, "system_admin"),
        }
    }
}

/// The complete set of roles a user holds in one scope.
///
/// `Member` is implied and never stored; an empty set is a plain member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RoleSet {
    pub team_admin: bool,
    pub system_admin: bool,
}

impl RoleSet {
    pub const MEMBER: RoleSet = RoleSet {
        team_admin: false,
        system_admin: false,
    };

    pub fn of(role: Role) -> Self {
        let mut set = Self::MEMBER;
        set.insert(role);
        set
    }

    pub fn insert(&mut self, role: Role) {
        match role {
            Role::Member => {}
            Role::TeamAdmin => self.team_admin = true,
            Role::SystemAdmin => self.system_admin = true,
        }
    }

    pub fn contains(&self, role: Role) -> bool {
        match role {
            Role::Member => true,
            Role::TeamAdmin => self.team_admin,
            Role::SystemAdmin => self.system_admin,
        }
    }

    /// Highest privilege held
    pub fn level(&self) -> Role {
        if self.system_admin {
            Role::SystemAdmin
        } else if self.team_admin {
            Role::TeamAdmin
        } else {
            Role::Member
        }
    }

    pub fn roles(&self) -> Vec<Role> {
        [Role::TeamAdmin, Role::SystemAdmin]
            .into_iter()
            .filter(|r| self.contains(*r))
            .collect()
    }
}

impl std::str::FromStr for RoleSet {
    type Err = String;

    /// Parses a space and/or comma separated list of role names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut set = RoleSet::MEMBER;
        for name in s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|n| !n.is_empty())
        {
            set.insert(name.parse()?);
        }
        Ok(set)
    }
}

impl std::fmt::Display for RoleSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<String> = self.roles().iter().map(ToString::to_string).collect();
        f.write_str(&names.join(" "))
    }
}

/// Input for changing a user's roles.
///
/// Field names follow the request body of the user-management API. An empty
/// `team_id` addresses system scope.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct RoleChangeInput {
    #[validate(length(max = 64))]
    pub user_id: String,
    #[serde(default)]
    #[validate(length(max = 64))]
    pub team_id: String,
    #[serde(default)]
    #[validate(length(max = 256))]
    pub new_roles: String,
}
