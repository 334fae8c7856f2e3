//! Repository traits (ports) - persisted data the celebration pass reads

use async_trait::async_trait;

use super::platform::RepoResult;
use crate::value_objects::Snowflake;

// ============================================================================
// Custom Message Repository
// ============================================================================

#[async_trait]
pub trait CustomMessageRepository: Send + Sync {
    /// Birthday message templates an administrator saved for the guild
    ///
    /// May be empty.
    async fn custom_messages(&self, guild_id: Snowflake) -> RepoResult<Vec<String>>;
}
