//! Common test utilities: in-memory stores and fixtures

#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::Arc;
use teamgate_core::clock::FixedClock;
use teamgate_core::domain::{EntityId, SignupSettings, Team, TeamMember, User};
use teamgate_core::error::{LookupError, Result};
use teamgate_core::repository::membership::MEMBERSHIP_UPDATE;
use teamgate_core::repository::team::{TEAM_GET, TEAM_GET_BY_INVITE_ID};
use teamgate_core::repository::user::USER_GET;
use teamgate_core::repository::{
    MembershipRepository, StaticSignupSettings, TeamRepository, UserRepository,
};
use teamgate_core::service::{RoleService, SignupService};
use tokio::sync::RwLock;

pub const TEST_SALT: &str = "test-invite-salt-for-integration";
pub const NOW_MS: i64 = 1_700_000_000_000;
pub const HOUR_MS: i64 = 60 * 60 * 1000;
pub const BASE_URL: &str = "http://localhost:8065";

// ============================================================================
// Test Repositories
// ============================================================================

pub struct TestTeamRepository {
    teams: RwLock<Vec<Team>>,
}

impl TestTeamRepository {
    pub fn new() -> Self {
        Self {
            teams: RwLock::new(vec![]),
        }
    }

    pub async fn add_team(&self, team: Team) {
        self.teams.write().await.push(team);
    }
}

impl Default for TestTeamRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TeamRepository for TestTeamRepository {
    async fn get(&self, id: &EntityId) -> Result<Team> {
        let teams = self.teams.read().await;
        teams
            .iter()
            .find(|t| &t.id == id)
            .cloned()
            .ok_or_else(|| LookupError::not_found(TEAM_GET, format!("Team {} not found", id)).into())
    }

    async fn get_by_invite_id(&self, invite_id: &str) -> Result<Team> {
        let teams = self.teams.read().await;
        teams
            .iter()
            .find(|t| t.invite_id.as_str() == invite_id)
            .cloned()
            .ok_or_else(|| {
                LookupError::not_found(TEAM_GET_BY_INVITE_ID, "No team with that invite id").into()
            })
    }
}

pub struct TestUserRepository {
    users: RwLock<Vec<User>>,
}

impl TestUserRepository {
    pub fn new() -> Self {
        Self {
            users: RwLock::new(vec![]),
        }
    }

    pub async fn add_user(&self, user: User) {
        self.users.write().await.push(user);
    }
}

impl Default for TestUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for TestUserRepository {
    async fn get(&self, id: &EntityId) -> Result<User> {
        let users = self.users.read().await;
        users
            .iter()
            .find(|u| &u.id == id)
            .cloned()
            .ok_or_else(|| LookupError::not_found(USER_GET, format!("User {} not found", id)).into())
    }

    async fn set_system_admin(&self, id: &EntityId, system_admin: bool) -> Result<User> {
        let mut users = self.users.write().await;
        let user = users
            .iter_mut()
            .find(|u| &u.id == id)
            .ok_or_else(|| LookupError::not_found(USER_GET, format!("User {} not found", id)))?;
        user.system_admin = system_admin;
        Ok(user.clone())
    }
}

pub struct TestMembershipRepository {
    members: RwLock<Vec<TeamMember>>,
}

impl TestMembershipRepository {
    pub fn new() -> Self {
        Self {
            members: RwLock::new(vec![]),
        }
    }

    pub async fn add_member(&self, user_id: &EntityId, team_id: &EntityId, team_admin: bool) {
        self.members.write().await.push(TeamMember {
            team_id: team_id.clone(),
            user_id: user_id.clone(),
            team_admin,
        });
    }
}

impl Default for TestMembershipRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MembershipRepository for TestMembershipRepository {
    async fn find(&self, user_id: &EntityId, team_id: &EntityId) -> Result<Option<TeamMember>> {
        let members = self.members.read().await;
        Ok(members
            .iter()
            .find(|m| &m.user_id == user_id && &m.team_id == team_id)
            .cloned())
    }

    async fn set_team_admin(
        &self,
        user_id: &EntityId,
        team_id: &EntityId,
        team_admin: bool,
    ) -> Result<TeamMember> {
        let mut members = self.members.write().await;
        let member = members
            .iter_mut()
            .find(|m| &m.user_id == user_id && &m.team_id == team_id)
            .ok_or_else(|| LookupError::not_found(MEMBERSHIP_UPDATE, "Membership not found"))?;
        member.team_admin = team_admin;
        Ok(member.clone())
    }
}

// ============================================================================
// Fixtures
// ============================================================================

pub fn test_settings() -> SignupSettings {
    SignupSettings {
        invite_salt: TEST_SALT.to_string(),
        ..Default::default()
    }
}

pub fn test_team(name: &str) -> Team {
    Team {
        name: name.to_string(),
        display_name: name.to_string(),
        email: format!("{}@simulator.amazonses.com", name),
        ..Default::default()
    }
}

pub fn test_user(system_admin: bool) -> User {
    User {
        email: format!("success+{}@simulator.amazonses.com", EntityId::new()),
        system_admin,
        ..Default::default()
    }
}

pub struct SignupHarness {
    pub settings: Arc<StaticSignupSettings>,
    pub teams: Arc<TestTeamRepository>,
    pub clock: Arc<FixedClock>,
    pub service: SignupService<StaticSignupSettings, TestTeamRepository>,
}

impl SignupHarness {
    pub fn new(settings: SignupSettings) -> Self {
        let settings = Arc::new(StaticSignupSettings::new(settings));
        let teams = Arc::new(TestTeamRepository::new());
        let clock = Arc::new(FixedClock::new(NOW_MS));
        let service = SignupService::new(
            settings.clone(),
            teams.clone(),
            clock.clone(),
            BASE_URL.to_string(),
        );
        Self {
            settings,
            teams,
            clock,
            service,
        }
    }
}

pub struct RoleHarness {
    pub users: Arc<TestUserRepository>,
    pub members: Arc<TestMembershipRepository>,
    pub teams: Arc<TestTeamRepository>,
    pub service: RoleService<TestUserRepository, TestMembershipRepository, TestTeamRepository>,
}

impl RoleHarness {
    pub fn new() -> Self {
        let users = Arc::new(TestUserRepository::new());
        let members = Arc::new(TestMembershipRepository::new());
        let teams = Arc::new(TestTeamRepository::new());
        let service = RoleService::new(users.clone(), members.clone(), teams.clone());
        Self {
            users,
            members,
            teams,
            service,
        }
    }
}
