//! Data Transfer Objects
//!
//! Pass inputs and the report handed back to the host.

mod requests;
mod responses;

pub use requests::GuildBatch;
pub use responses::{ActionFailure, CelebrationReport, RoleAction};
