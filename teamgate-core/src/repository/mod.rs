//! Data access layer (Repository pattern)
//!
//! Storage itself lives outside this crate; these traits are the narrow
//! views the services need.

pub mod membership;
pub mod settings;
pub mod team;
pub mod user;

pub use membership::MembershipRepository;
pub use settings::{SignupSettingsRepository, StaticSignupSettings};
pub use team::TeamRepository;
pub use user::UserRepository;
