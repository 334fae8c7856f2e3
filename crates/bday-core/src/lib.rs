//! # bday-core
//!
//! Domain layer for the birthday celebration engine: guild settings, roster
//! entities, value objects, and the ports every external collaborator
//! implements. This crate has no infrastructure dependencies.

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    BirthDate, Channel, EligibilityDecision, Embed, GuildMember, GuildSettings, MemberEventRecord,
    OutgoingMessage, ResolvedContext, Role,
};
pub use error::DomainError;
pub use traits::{
    CustomMessageRepository, ObjectResolver, PermissionOracle, PlatformActions, RepoResult,
    TimeSignalProvider,
};
pub use value_objects::{Mention, Permissions, Snowflake, SnowflakeParseError};
