//! Role-change authorization rules.
//!
//! `authorize` is a pure decision over facts the caller has just read from
//! the stores. Rules are checked in a fixed order and the first failing rule
//! names the denial.

use crate::domain::{EntityId, Role, RoleSet};
use crate::error::AppError;

/// What the stores say about the caller, relative to the target team.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActorFacts {
    pub user_id: EntityId,
    pub system_admin: bool,
    /// Actor belongs to the target team (always false in system scope)
    pub team_member: bool,
    /// Actor is team-admin of the target team
    pub team_admin: bool,
}

impl ActorFacts {
    fn administers_team(&self) -> bool {
        self.team_member && self.team_admin
    }
}

/// Everything the rules look at for one role change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleChangeFacts {
    /// `None` when the request has no authenticated session
    pub actor: Option<ActorFacts>,
    pub target_user_id: EntityId,
    /// `None` addresses system scope
    pub team_id: Option<EntityId>,
    pub target_member: bool,
    /// Target's roles before the change
    pub current: RoleSet,
    /// Target's complete role set after the change
    pub requested: RoleSet,
}

impl RoleChangeFacts {
    pub fn changes(&self, role: Role) -> bool {
        self.current.contains(role) != self.requested.contains(role)
    }

    pub fn is_self_change(&self) -> bool {
        self.actor
            .as_ref()
            .map(|a| a.user_id == self.target_user_id)
            .unwrap_or(false)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoleDecision {
    Authorized,
    Forbidden(String),
}

impl RoleDecision {
    pub fn is_authorized(&self) -> bool {
        matches!(self, RoleDecision::Authorized)
    }

    pub fn into_result(self) -> Result<(), AppError> {
        match self {
            RoleDecision::Authorized => Ok(()),
            RoleDecision::Forbidden(reason) => Err(AppError::Forbidden(reason)),
        }
    }
}

fn deny(reason: &str) -> RoleDecision {
    RoleDecision::Forbidden(reason.to_string())
}

/// Decide whether the actor may set the target's roles to `requested`.
pub fn authorize(facts: &RoleChangeFacts) -> RoleDecision {
    let Some(actor) = facts.actor.as_ref() else {
        return deny("authentication required");
    };

    if facts.changes(Role::SystemAdmin) && !actor.system_admin {
        return deny("only a system admin can change the system admin role");
    }

    if facts.changes(Role::TeamAdmin) {
        if facts.team_id.is_none() {
            return deny("changing the team admin role requires a team");
        }
        if !actor.system_admin && !actor.administers_team() {
            return deny("only a team admin of the team can change the team admin role");
        }
    }

    let is_self = actor.user_id == facts.target_user_id;
    if is_self && facts.requested.level() > facts.current.level() {
        return deny("users cannot elevate their own role");
    }

    // system-admin grants are team-agnostic
    let system_only = facts.changes(Role::SystemAdmin) && !facts.changes(Role::TeamAdmin);
    if facts.team_id.is_some() && !(system_only && actor.system_admin) {
        if !facts.target_member {
            return deny("target user is not a member of the team");
        }
        if !actor.system_admin && !actor.team_member {
            return deny("actor is not a member of the team");
        }
    }

    if !is_self && !actor.system_admin && !actor.administers_team() {
        return deny("insufficient privileges to change another user's roles");
    }

    RoleDecision::Authorized
}
