//! Member entity - a live roster entry for one user in one guild

use serde::{Deserialize, Serialize};

use crate::value_objects::{Mention, Snowflake};

/// Guild member as resolved from the platform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuildMember {
    pub guild_id: Snowflake,
    pub user_id: Snowflake,
    pub username: String,
    #[serde(default)]
    pub role_ids: Vec<Snowflake>,
}

impl GuildMember {
    /// Create a member holding no roles
    pub fn new(guild_id: Snowflake, user_id: Snowflake, username: impl Into<String>) -> Self {
        Self {
            guild_id,
            user_id,
            username: username.into(),
            role_ids: Vec::new(),
        }
    }

    /// Builder-style role assignment, mostly for fixtures
    pub fn with_role(mut self, role_id: Snowflake) -> Self {
        if !self.has_role(role_id) {
            self.role_ids.push(role_id);
        }
        self
    }

    /// Check if member has a specific role
    #[inline]
    pub fn has_role(&self, role_id: Snowflake) -> bool {
        self.role_ids.contains(&role_id)
    }

    /// Mention markup that pings this member
    #[inline]
    pub fn mention(&self) -> Mention {
        Mention::User(self.user_id)
    }
}
