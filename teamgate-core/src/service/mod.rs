//! Business logic layer

pub mod role;
pub mod signup;

pub use role::RoleService;
pub use signup::SignupService;
