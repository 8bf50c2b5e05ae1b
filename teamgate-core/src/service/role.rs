//! Role change service

use crate::domain::{EntityId, Role, RoleChangeInput, RoleSet, Session};
use crate::error::{AppError, Result};
use crate::policy::role_change::{self, ActorFacts, RoleChangeFacts, RoleDecision};
use crate::repository::{MembershipRepository, TeamRepository, UserRepository};
use std::sync::Arc;
use validator::Validate;

pub struct RoleService<U: UserRepository, M: MembershipRepository, T: TeamRepository> {
    users: Arc<U>,
    memberships: Arc<M>,
    teams: Arc<T>,
}

impl<U: UserRepository, M: MembershipRepository, T: TeamRepository> RoleService<U, M, T> {
    pub fn new(users: Arc<U>, memberships: Arc<M>, teams: Arc<T>) -> Self {
        Self {
            users,
            memberships,
            teams,
        }
    }

    /// Check whether `actor` may set the target's roles to `input.new_roles`.
    ///
    /// Role and membership facts are read from the stores on every call,
    /// never taken from the session. Returns the facts the decision was
    /// based on.
    pub async fn authorize_role_change(
        &self,
        actor: Option<&Session>,
        input: RoleChangeInput,
    ) -> Result<RoleChangeFacts> {
        let result = self.decide(actor, &input).await;

        let outcome = match &result {
            Ok(_) => "authorized",
            Err(e) => e.kind(),
        };
        metrics::counter!("teamgate_role_changes_total", "outcome" => outcome).increment(1);

        result
    }

    /// Authorize and then persist a role change. Returns the target's new
    /// role set.
    pub async fn update_roles(
        &self,
        actor: Option<&Session>,
        input: RoleChangeInput,
    ) -> Result<RoleSet> {
        let facts = self.authorize_role_change(actor, input).await?;

        // team flag first: it is the write that can fail on a vanished
        // membership, and it is the one undone if the system flag fails
        let team_written = match &facts.team_id {
            Some(team_id) if facts.changes(Role::TeamAdmin) => {
                self.memberships
                    .set_team_admin(&facts.target_user_id, team_id, facts.requested.team_admin)
                    .await?;
                Some(team_id)
            }
            _ => None,
        };

        if facts.changes(Role::SystemAdmin) {
            if let Err(e) = self
                .users
                .set_system_admin(&facts.target_user_id, facts.requested.system_admin)
                .await
            {
                if let Some(team_id) = team_written {
                    if let Err(undo) = self
                        .memberships
                        .set_team_admin(&facts.target_user_id, team_id, facts.current.team_admin)
                        .await
                    {
                        tracing::error!(
                            target_user_id = %facts.target_user_id,
                            team_id = %team_id,
                            "Failed to restore team admin flag: {}",
                            undo
                        );
                    }
                }
                return Err(e);
            }
        }

        tracing::info!(
            target_user_id = %facts.target_user_id,
            team_id = ?facts.team_id.as_ref().map(EntityId::as_str),
            roles = %facts.requested,
            "Updated user roles"
        );

        Ok(facts.requested)
    }

    async fn decide(
        &self,
        actor: Option<&Session>,
        input: &RoleChangeInput,
    ) -> Result<RoleChangeFacts> {
        let Some(session) = actor else {
            tracing::warn!("Role change attempted without a session");
            return Err(AppError::Forbidden("authentication required".to_string()));
        };

        input.validate()?;

        let target_user_id = EntityId::parse(&input.user_id)
            .map_err(|_| AppError::Forbidden(format!("invalid user id {:?}", input.user_id)))?;

        let team_id = match input.team_id.trim() {
            "" => None,
            raw => Some(
                EntityId::parse(raw)
                    .map_err(|_| AppError::Forbidden(format!("invalid team id {:?}", raw)))?,
            ),
        };

        let requested: RoleSet = input.new_roles.parse().map_err(AppError::Validation)?;

        let target = self.users.get(&target_user_id).await?;
        let actor_user = self.users.get(&session.user_id).await?;

        let (target_membership, actor_membership) = match &team_id {
            Some(team_id) => {
                self.teams.get(team_id).await?;
                let target_membership = self.memberships.find(&target.id, team_id).await?;
                let actor_membership = if actor_user.id == target.id {
                    target_membership.clone()
                } else {
                    self.memberships.find(&actor_user.id, team_id).await?
                };
                (target_membership, actor_membership)
            }
            None => (None, None),
        };

        let facts = RoleChangeFacts {
            actor: Some(ActorFacts {
                user_id: actor_user.id.clone(),
                system_admin: actor_user.system_admin,
                team_member: actor_membership.is_some(),
                team_admin: actor_membership.map(|m| m.team_admin).unwrap_or(false),
            }),
            target_user_id: target.id.clone(),
            team_id,
            target_member: target_membership.is_some(),
            current: RoleSet {
                team_admin: target_membership.map(|m| m.team_admin).unwrap_or(false),
                system_admin: target.system_admin,
            },
            requested,
        };

        match role_change::authorize(&facts) {
            RoleDecision::Authorized => {
                tracing::debug!(
                    actor_id = %actor_user.id,
                    target_user_id = %facts.target_user_id,
                    "Role change authorized"
                );
                Ok(facts)
            }
            RoleDecision::Forbidden(reason) => {
                tracing::warn!(
                    actor_id = %actor_user.id,
                    target_user_id = %facts.target_user_id,
                    reason = %reason,
                    "Role change denied"
                );
                Err(AppError::Forbidden(reason))
            }
        }
    }
}
