//! Role entity

use serde::{Deserialize, Serialize};

use crate::value_objects::{Mention, Snowflake};

/// Role as resolved from the platform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: Snowflake,
    pub guild_id: Snowflake,
    pub name: String,
    #[serde(default)]
    pub color: u32,
}

impl Role {
    pub fn new(id: Snowflake, guild_id: Snowflake, name: impl Into<String>) -> Self {
        Self {
            id,
            guild_id,
            name: name.into(),
            color: 0,
        }
    }

    /// Whether the role lives in the given guild
    #[inline]
    pub fn belongs_to(&self, guild_id: Snowflake) -> bool {
        self.guild_id == guild_id
    }

    #[inline]
    pub fn mention(&self) -> Mention {
        Mention::Role(self.id)
    }
}
