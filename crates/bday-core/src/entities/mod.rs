//! Domain entities - core business objects

mod channel;
mod context;
mod decision;
mod event_record;
mod guild_settings;
mod member;
mod message;
mod role;

pub use channel::Channel;
pub use context::ResolvedContext;
pub use decision::EligibilityDecision;
pub use event_record::{BirthDate, MemberEventRecord};
pub use guild_settings::GuildSettings;
pub use member::GuildMember;
pub use message::{Embed, OutgoingMessage};
pub use role::Role;
