//! Guild settings - per-guild birthday configuration written by administrators

use serde::{Deserialize, Serialize};

use crate::value_objects::{Mention, Snowflake};

/// Birthday configuration for one guild
///
/// Read-only to the celebration pass. Every handle is optional; an unset
/// channel or role simply disables that half of the celebration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuildSettings {
    pub guild_id: Snowflake,
    #[serde(default)]
    pub birthday_channel_id: Option<Snowflake>,
    #[serde(default)]
    pub birthday_role_id: Option<Snowflake>,
    #[serde(default)]
    pub trusted_role_id: Option<Snowflake>,
    /// Only trusted-role holders receive the birthday role
    #[serde(default)]
    pub trusted_prevents_role: bool,
    /// Only trusted-role holders are included in the birthday message
    #[serde(default)]
    pub trusted_prevents_message: bool,
    /// Hour of day (0-23, member local time) the message goes out
    #[serde(default)]
    pub message_time: u8,
    /// Role id, "everyone", "here", or anything else for no ping
    #[serde(default)]
    pub mention_setting: String,
    #[serde(default = "default_use_embed")]
    pub use_embed: bool,
}

fn default_use_embed() -> bool {
    true
}

impl GuildSettings {
    /// Settings with nothing configured
    pub fn new(guild_id: Snowflake) -> Self {
        Self {
            guild_id,
            birthday_channel_id: None,
            birthday_role_id: None,
            trusted_role_id: None,
            trusted_prevents_role: false,
            trusted_prevents_message: false,
            message_time: 0,
            mention_setting: String::new(),
            use_embed: default_use_embed(),
        }
    }

    /// Role id named by the mention setting, if it is one
    pub fn mention_role_id(&self) -> Option<Snowflake> {
        Snowflake::parse_setting(&self.mention_setting)
    }

    /// Broadcast mention named by the mention setting, if it is one
    pub fn mention_broadcast(&self) -> Option<Mention> {
        Mention::broadcast(&self.mention_setting)
    }

    /// Whether both trusted gates are switched on
    #[inline]
    pub fn trusted_gates_both(&self) -> bool {
        self.trusted_prevents_role && self.trusted_prevents_message
    }
}
