//! Invitation signup validation

use crate::clock::Clock;
use crate::domain::{EntityId, InvitationLink, InvitationPayload, SignupRequest, ValidatedSignup};
use crate::error::{AppError, LookupError, Result};
use crate::policy::invitation;
use crate::repository::team::TEAM_GET;
use crate::repository::{SignupSettingsRepository, TeamRepository};
use std::sync::Arc;
use validator::Validate;

/// Decides whether a signup request may create an account.
pub struct SignupService<S: SignupSettingsRepository, T: TeamRepository> {
    settings: Arc<S>,
    teams: Arc<T>,
    clock: Arc<dyn Clock>,
    base_url: String,
}

impl<S: SignupSettingsRepository, T: TeamRepository> SignupService<S, T> {
    pub fn new(settings: Arc<S>, teams: Arc<T>, clock: Arc<dyn Clock>, base_url: String) -> Self {
        Self {
            settings,
            teams,
            clock,
            base_url,
        }
    }

    /// Validate an invitation-based signup and resolve the team it joins.
    ///
    /// A request carrying a signed payload (or just a signature) always takes
    /// the token path; otherwise the team invite id is used.
    pub async fn validate_invitation(&self, request: SignupRequest) -> Result<ValidatedSignup> {
        let result = self.validate(&request).await;

        let outcome = match &result {
            Ok(_) => "valid",
            Err(e) => e.kind(),
        };
        metrics::counter!("teamgate_signup_validations_total", "outcome" => outcome).increment(1);

        match &result {
            Ok(signup) => tracing::info!(team_id = %signup.team.id, "Signup invitation accepted"),
            Err(e) => tracing::warn!(reason = e.kind(), "Signup invitation rejected: {}", e),
        }

        result
    }

    async fn validate(&self, request: &SignupRequest) -> Result<ValidatedSignup> {
        let settings = self.settings.current().await?;

        invitation::ensure_signup_enabled(&settings)?;

        if request.has_token() {
            let payload = invitation::validate_token(
                request.payload.as_deref().unwrap_or_default(),
                request.signature.as_deref().unwrap_or_default(),
                &settings.invite_salt,
                self.clock.now_ms(),
            )?;

            let team_id = EntityId::parse(&payload.team_id).map_err(|_| {
                LookupError::not_found(TEAM_GET, format!("Team {} not found", payload.team_id))
            })?;
            let team = self.teams.get(&team_id).await?;

            invitation::check_accepted_domain(&payload.email, &settings)?;

            return Ok(ValidatedSignup {
                team,
                email: Some(payload.email),
                display_name: Some(payload.display_name).filter(|d| !d.is_empty()),
            });
        }

        if let Some(invite_id) = request.invite_id.as_deref().filter(|i| !i.is_empty()) {
            let team = self.teams.get_by_invite_id(invite_id).await?;

            if let Some(email) = request.email.as_deref() {
                request.validate()?;
                invitation::check_accepted_domain(email, &settings)?;
            }

            return Ok(ValidatedSignup {
                team,
                email: request.email.clone(),
                display_name: None,
            });
        }

        Err(AppError::SignupLinkInvalid)
    }

    /// Produce a signed signup link inviting `email` to a team.
    pub async fn issue_link(&self, team_id: &EntityId, email: &str) -> Result<InvitationLink> {
        let settings = self.settings.current().await?;
        if settings.invite_salt.is_empty() {
            return Err(AppError::Internal(anyhow::anyhow!(
                "Invite salt is not configured"
            )));
        }

        let team = self.teams.get(team_id).await?;
        let payload = InvitationPayload::for_team(&team, email, self.clock.now_ms());
        let signed = invitation::issue(&payload, &settings.invite_salt);

        tracing::debug!(team_id = %team.id, "Issued signup link");
        InvitationLink::build(&self.base_url, &signed.payload, &signed.signature, None)
    }
}
