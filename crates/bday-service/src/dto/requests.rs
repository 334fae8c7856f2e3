//! Input snapshot for one guild pass

use bday_core::{GuildMember, GuildSettings, MemberEventRecord};
use serde::Deserialize;

/// Settings, today's birthday records, and the full roster for one guild
///
/// Each pass works on its own snapshot, so batches share no mutable state.
#[derive(Debug, Clone, Deserialize)]
pub struct GuildBatch {
    pub settings: GuildSettings,
    #[serde(default)]
    pub records: Vec<MemberEventRecord>,
    #[serde(default)]
    pub roster: Vec<GuildMember>,
}

impl GuildBatch {
    pub fn new(
        settings: GuildSettings,
        records: Vec<MemberEventRecord>,
        roster: Vec<GuildMember>,
    ) -> Self {
        Self {
            settings,
            records,
            roster,
        }
    }
}
