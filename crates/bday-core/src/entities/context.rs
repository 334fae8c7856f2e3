//! Resolved context - the live handles one celebration pass works with

use super::{Channel, GuildMember, Role};

/// Channel and role handles after capability normalisation
///
/// A handle is `None` when it was never configured, failed to resolve, or the
/// bot cannot use it (no role management / cannot post).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedContext {
    pub channel: Option<Channel>,
    pub birthday_role: Option<Role>,
    pub trusted_role: Option<Role>,
}

impl ResolvedContext {
    /// Nothing usable configured: no role to give and nowhere to post
    #[inline]
    pub fn is_inert(&self) -> bool {
        self.channel.is_none() && self.birthday_role.is_none()
    }

    /// Whether the member holds the trusted role (false when there is none)
    pub fn is_trusted(&self, member: &GuildMember) -> bool {
        self.trusted_role
            .as_ref()
            .is_some_and(|role| member.has_role(role.id))
    }
}
