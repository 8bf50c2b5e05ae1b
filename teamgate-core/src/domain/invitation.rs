//! Invitation domain types

use super::common::EntityId;
use super::team::Team;
use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use url::Url;
use validator::Validate;

/// Path of the signup page that consumes invitation links
pub const SIGNUP_PATH: &str = "signup_user_complete/";

/// Fields carried inside a signed invitation link.
///
/// On the wire this is a flat string-to-string JSON map with the keys
/// `display_name`, `email`, `id`, `name` and `time`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvitationPayload {
    /// Team id as written by the inviter; resolved against the team store later
    pub team_id: String,
    pub team_name: Option<String>,
    pub display_name: String,
    pub email: String,
    /// Issue time in milliseconds since the Unix epoch
    pub time_ms: i64,
}

impl InvitationPayload {
    pub fn for_team(team: &Team, email: impl Into<String>, time_ms: i64) -> Self {
        Self {
            team_id: team.id.to_string(),
            team_name: Some(team.name.clone()),
            display_name: team.display_name.clone(),
            email: email.into(),
            time_ms,
        }
    }

    /// Serialize to the flat map form. Keys come out sorted.
    pub fn to_json(&self) -> String {
        let mut map = BTreeMap::new();
        map.insert("display_name", self.display_name.clone());
        map.insert("email", self.email.clone());
        map.insert("id", self.team_id.clone());
        if let Some(name) = &self.team_name {
            map.insert("name", name.clone());
        }
        map.insert("time", self.time_ms.to_string());
        // a map of strings always serializes
        serde_json::to_string(&map).unwrap_or_default()
    }

    /// Parse the flat map form. Anything that is not a string map with
    /// `id`, `email` and an integer `time` is an invalid link.
    pub fn from_json(raw: &str) -> Result<Self> {
        let mut map: HashMap<String, String> =
            serde_json::from_str(raw).map_err(|_| AppError::SignupLinkInvalid)?;

        let team_id = map.remove("id").ok_or(AppError::SignupLinkInvalid)?;
        let email = map.remove("email").ok_or(AppError::SignupLinkInvalid)?;
        let time_ms = map
            .remove("time")
            .and_then(|t| t.trim().parse::<i64>().ok())
            .ok_or(AppError::SignupLinkInvalid)?;

        Ok(Self {
            team_id,
            team_name: map.remove("name"),
            display_name: map.remove("display_name").unwrap_or_default(),
            email,
            time_ms,
        })
    }
}

/// A signup attempt as received from the HTTP layer.
///
/// `d`/`h` carry a signed invitation payload and its signature, `iid` a team
/// invite id. `email` is the address typed into the signup form.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct SignupRequest {
    #[serde(rename = "d", default)]
    pub payload: Option<String>,
    #[serde(rename = "h", default)]
    pub signature: Option<String>,
    #[serde(rename = "iid", default)]
    pub invite_id: Option<String>,
    #[serde(default)]
    #[validate(email)]
    pub email: Option<String>,
}

impl SignupRequest {
    /// Build a request from an URL query string (`d=..&h=..&iid=..`).
    pub fn from_query(query: &str) -> Self {
        let mut request = Self::default();
        for (key, value) in url::form_urlencoded::parse(query.trim_start_matches('?').as_bytes()) {
            let value = Some(value.into_owned());
            match &*key {
                "d" => request.payload = value,
                "h" => request.signature = value,
                "iid" => request.invite_id = value,
                "email" => request.email = value,
                _ => {}
            }
        }
        request
    }

    /// Build a request from a full signup link.
    pub fn from_link(link: &str) -> Result<Self> {
        let url = Url::parse(link)
            .map_err(|e| AppError::Validation(format!("Invalid signup link: {}", e)))?;
        Ok(Self::from_query(url.query().unwrap_or_default()))
    }

    /// True when the request carries any part of a signed token
    pub fn has_token(&self) -> bool {
        is_present(&self.payload) || is_present(&self.signature)
    }

    pub fn has_invite_id(&self) -> bool {
        is_present(&self.invite_id)
    }
}

fn is_present(value: &Option<String>) -> bool {
    value.as_deref().map(|v| !v.is_empty()).unwrap_or(false)
}

/// Outcome of a successful signup validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidatedSignup {
    pub team: Team,
    /// Email the account must be created with, when the invitation fixes one
    pub email: Option<String>,
    pub display_name: Option<String>,
}

/// A rendered invitation link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvitationLink(pub String);

impl InvitationLink {
    pub fn build(
        base_url: &str,
        payload: &str,
        signature: &str,
        invite_id: Option<&EntityId>,
    ) -> Result<Self> {
        let mut url = Url::parse(&format!("{}/", base_url.trim_end_matches('/')))
            .and_then(|base| base.join(SIGNUP_PATH))
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Invalid signup base URL: {}", e)))?;

        {
            let mut query = url.query_pairs_mut();
            query.append_pair("d", payload).append_pair("h", signature);
            if let Some(iid) = invite_id {
                query.append_pair("iid", iid.as_str());
            }
        }

        Ok(Self(url.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for InvitationLink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
