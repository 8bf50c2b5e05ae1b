//! Domain models for Teamgate Core

pub mod common;
pub mod invitation;
pub mod role;
pub mod settings;
pub mod team;
pub mod user;

pub use common::*;
pub use invitation::*;
pub use role::*;
pub use settings::*;
pub use team::*;
pub use user::*;
