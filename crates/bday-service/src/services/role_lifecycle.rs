//! Birthday role lifecycle
//!
//! Grants the birthday role to today's eligible members and sweeps it off
//! everyone else in the roster who still holds it.

use std::collections::HashSet;

use bday_core::{DomainError, GuildMember, MemberEventRecord, PlatformActions, Role, Snowflake};
use tracing::{debug, info, warn};

use crate::dto::{ActionFailure, RoleAction};

/// Result of the grant and revoke passes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleLifecycleOutcome {
    pub granted: Vec<Snowflake>,
    pub revoked: Vec<Snowflake>,
    pub failures: Vec<ActionFailure>,
}

/// Applies role grants and revokes through the platform
pub struct RoleLifecycleManager<'a> {
    actions: &'a dyn PlatformActions,
}

impl<'a> RoleLifecycleManager<'a> {
    pub fn new(actions: &'a dyn PlatformActions) -> Self {
        Self { actions }
    }

    /// Roster members without a record today who still hold the role
    ///
    /// Membership in today's records is by user id only; whatever happened to
    /// those members upstream does not matter here.
    pub fn stale_holders<'m>(
        roster: &'m [GuildMember],
        records: &[MemberEventRecord],
        role: &Role,
    ) -> Vec<&'m GuildMember> {
        let celebrated: HashSet<Snowflake> = records.iter().map(|r| r.user_id).collect();

        roster
            .iter()
            .filter(|member| !celebrated.contains(&member.user_id))
            .filter(|member| member.has_role(role.id))
            .collect()
    }

    /// Run the grant pass then the revoke pass
    ///
    /// A rejected call is recorded and the remaining calls still go out.
    pub async fn apply(
        &self,
        role: &Role,
        grants: &[GuildMember],
        roster: &[GuildMember],
        records: &[MemberEventRecord],
    ) -> RoleLifecycleOutcome {
        let mut outcome = RoleLifecycleOutcome::default();

        for member in grants {
            match self.actions.grant_role(member, role).await {
                Ok(()) => {
                    info!(user_id = %member.user_id, role_id = %role.id, "Birthday role granted");
                    outcome.granted.push(member.user_id);
                }
                Err(err) => {
                    outcome
                        .failures
                        .push(Self::failure(member, RoleAction::Grant, &err));
                }
            }
        }

        let stale = Self::stale_holders(roster, records, role);
        debug!(count = stale.len(), role_id = %role.id, "Stale birthday role holders");

        for member in stale {
            match self.actions.revoke_role(member, role).await {
                Ok(()) => {
                    info!(user_id = %member.user_id, role_id = %role.id, "Birthday role removed");
                    outcome.revoked.push(member.user_id);
                }
                Err(err) => {
                    outcome
                        .failures
                        .push(Self::failure(member, RoleAction::Revoke, &err));
                }
            }
        }

        outcome
    }

    fn failure(member: &GuildMember, action: RoleAction, err: &DomainError) -> ActionFailure {
        warn!(
            user_id = %member.user_id,
            action = ?action,
            error = %err,
            "Birthday role action failed"
        );
        ActionFailure {
            user_id: member.user_id,
            action,
            code: err.code(),
            message: err.to_string(),
        }
    }
}
