//! Platform ports - what the celebration pass needs from the chat platform
//!
//! Implemented by the host process (gateway client, REST client, cache).
//! Resolution returns `Ok(None)` for "no such object"; the service treats an
//! `Err` the same way.

use async_trait::async_trait;

use crate::entities::{Channel, GuildMember, OutgoingMessage, Role};
use crate::error::DomainError;
use crate::value_objects::{Permissions, Snowflake};

/// Result type for port operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Object Resolver
// ============================================================================

#[async_trait]
pub trait ObjectResolver: Send + Sync {
    /// Resolve a text channel in the guild
    async fn resolve_channel(&self, guild_id: Snowflake, channel_id: Snowflake)
        -> RepoResult<Option<Channel>>;

    /// Resolve a role by id; the returned role may belong to another guild
    async fn resolve_role(&self, guild_id: Snowflake, role_id: Snowflake) -> RepoResult<Option<Role>>;

    /// Resolve a live member of the guild
    async fn resolve_member(&self, guild_id: Snowflake, user_id: Snowflake)
        -> RepoResult<Option<GuildMember>>;
}

// ============================================================================
// Permission Oracle
// ============================================================================

#[async_trait]
pub trait PermissionOracle: Send + Sync {
    /// The bot's effective guild-level permissions
    async fn guild_permissions(&self, guild_id: Snowflake) -> RepoResult<Permissions>;

    /// The bot's effective permissions in a channel (overwrites applied)
    async fn channel_permissions(&self, channel: &Channel) -> RepoResult<Permissions>;

    /// Whether the bot may grant and revoke roles
    async fn can_manage_roles(&self, guild_id: Snowflake) -> bool {
        self.guild_permissions(guild_id)
            .await
            .is_ok_and(|perms| perms.has(Permissions::MANAGE_ROLES))
    }

    /// Whether the bot may post into the channel
    async fn can_post_in(&self, channel: &Channel) -> bool {
        self.channel_permissions(channel)
            .await
            .is_ok_and(|perms| perms.can_post())
    }
}

// ============================================================================
// Platform Actions
// ============================================================================

#[async_trait]
pub trait PlatformActions: Send + Sync {
    /// Give a role to a member; granting a held role is a no-op downstream
    async fn grant_role(&self, member: &GuildMember, role: &Role) -> RepoResult<()>;

    /// Take a role from a member
    async fn revoke_role(&self, member: &GuildMember, role: &Role) -> RepoResult<()>;

    /// Post a message into a channel
    async fn send(&self, channel: &Channel, message: OutgoingMessage) -> RepoResult<()>;
}
