//! Pure authorization and validation policy.
//!
//! Nothing in here touches storage or the clock; services gather the facts
//! and hand them over.

pub mod invitation;
pub mod role_change;

pub use invitation::{SignedInvitation, INVITATION_VALIDITY_MS};
pub use role_change::{authorize, ActorFacts, RoleChangeFacts, RoleDecision};
