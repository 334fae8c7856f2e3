//! Outcome of a celebration pass

use bday_core::Snowflake;
use serde::Serialize;

/// Which role operation failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleAction {
    Grant,
    Revoke,
}

/// A role grant or revoke the platform rejected
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionFailure {
    pub user_id: Snowflake,
    pub action: RoleAction,
    pub code: &'static str,
    pub message: String,
}

/// What one guild pass did
///
/// Returned by value; the service keeps nothing after the pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CelebrationReport {
    pub guild_id: Snowflake,
    /// Neither the birthday role nor the channel was usable
    pub inert: bool,
    pub granted: Vec<Snowflake>,
    pub revoked: Vec<Snowflake>,
    /// Members named in the birthday message
    pub messaged: Vec<Snowflake>,
    /// Members with a record that got neither role nor message
    pub skipped: Vec<Snowflake>,
    /// Records whose member could not be resolved
    pub unresolved: Vec<Snowflake>,
    pub message_sent: bool,
    pub failures: Vec<ActionFailure>,
}

impl CelebrationReport {
    pub fn new(guild_id: Snowflake) -> Self {
        Self {
            guild_id,
            ..Self::default()
        }
    }

    /// Report for a guild with nothing usable configured
    pub fn inert(guild_id: Snowflake) -> Self {
        Self {
            guild_id,
            inert: true,
            ..Self::default()
        }
    }

    /// Whether every platform call issued succeeded
    #[inline]
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// Role grants plus revokes issued successfully
    #[inline]
    pub fn role_actions(&self) -> usize {
        self.granted.len() + self.revoked.len()
    }
}
