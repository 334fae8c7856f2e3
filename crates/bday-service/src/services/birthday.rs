//! Birthday service
//!
//! Runs one celebration pass per guild: resolves the configured handles,
//! decides who is celebrated, applies the birthday role, and posts the
//! announcement.

use bday_core::{
    Channel, GuildMember, GuildSettings, MemberEventRecord, OutgoingMessage, RepoResult,
    ResolvedContext, Role, Snowflake,
};
use futures::future::join_all;
use tracing::{debug, error, info, instrument, warn};

use crate::dto::{CelebrationReport, GuildBatch};

use super::context::ServiceContext;
use super::eligibility::{EligibilityEvaluator, EligibilityInput};
use super::error::{ServiceError, ServiceResult};
use super::message::MessageComposer;
use super::role_lifecycle::RoleLifecycleManager;

/// Birthday service
pub struct BirthdayService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> BirthdayService<'a> {
    /// Create a new BirthdayService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Celebrate today's birthdays in one guild
    ///
    /// `records` are today's candidates; `roster` is every member of the
    /// guild and drives the role sweep.
    ///
    /// # Errors
    /// Returns `ServiceError::Delivery`, carrying the report so far, if the
    /// announcement body could not be sent. Role grant and revoke failures
    /// are collected in the report instead.
    #[instrument(skip_all, fields(guild_id = %settings.guild_id, records = records.len()))]
    pub async fn celebrate_birthdays(
        &self,
        settings: &GuildSettings,
        records: &[MemberEventRecord],
        roster: &[GuildMember],
    ) -> ServiceResult<CelebrationReport> {
        let resolved = self.resolve_context(settings).await;
        if resolved.is_inert() {
            debug!("No usable birthday role or channel, nothing to do");
            return Ok(CelebrationReport::inert(settings.guild_id));
        }

        let mut report = CelebrationReport::new(settings.guild_id);
        if records.is_empty() {
            info!("No birthdays today");
        }

        let mut grants = Vec::new();
        let mut recipients = Vec::new();

        for record in records {
            let Some(member) = self.resolve_member(settings.guild_id, record.user_id).await else {
                report.unresolved.push(record.user_id);
                continue;
            };

            let signals = self.ctx.signals();
            let input = EligibilityInput::for_member(settings, &resolved, &member).with_signals(
                signals.is_role_due(record),
                signals.is_message_due(settings.message_time, record),
            );
            let evaluation = EligibilityEvaluator::explain(input);

            let grant = evaluation.decision.grant_role && resolved.birthday_role.is_some();
            let include = evaluation.decision.include_in_message && resolved.channel.is_some();

            if !grant && !include {
                debug!(
                    user_id = %member.user_id,
                    role = ?evaluation.role,
                    message = ?evaluation.message,
                    "Member not celebrated"
                );
                report.skipped.push(member.user_id);
                continue;
            }

            if include {
                recipients.push(member.clone());
            }
            if grant {
                grants.push(member);
            }
        }

        if let Some(role) = &resolved.birthday_role {
            let outcome = RoleLifecycleManager::new(self.ctx.actions())
                .apply(role, &grants, roster, records)
                .await;
            report.granted = outcome.granted;
            report.revoked = outcome.revoked;
            report.failures = outcome.failures;
        }

        if let Some(channel) = &resolved.channel {
            if !recipients.is_empty() {
                if let Err(err) = self.announce(settings, channel, &recipients).await {
                    return Err(ServiceError::delivery(report, err));
                }
                report.messaged = recipients.iter().map(|m| m.user_id).collect();
                report.message_sent = true;
            }
        }

        info!(
            granted = report.granted.len(),
            revoked = report.revoked.len(),
            messaged = report.messaged.len(),
            skipped = report.skipped.len(),
            failures = report.failures.len(),
            "Birthday pass complete"
        );

        Ok(report)
    }

    /// Celebrate several guilds concurrently
    ///
    /// Every guild gets its own outcome; a failure in one leaves the others untouched.
    #[instrument(skip_all, fields(guilds = batches.len()))]
    pub async fn celebrate_guilds(
        &self,
        batches: &[GuildBatch],
    ) -> Vec<(Snowflake, ServiceResult<CelebrationReport>)> {
        let passes = batches.iter().map(|batch| async move {
            let guild_id = batch.settings.guild_id;
            let result = self
                .celebrate_birthdays(&batch.settings, &batch.records, &batch.roster)
                .await;
            if let Err(err) = &result {
                error!(guild_id = %guild_id, code = err.error_code(), error = %err, "Birthday pass failed");
            }
            (guild_id, result)
        });

        join_all(passes).await
    }

    /// Resolve the configured handles and drop those the bot cannot use
    async fn resolve_context(&self, settings: &GuildSettings) -> ResolvedContext {
        let guild_id = settings.guild_id;

        let mut channel = match settings.birthday_channel_id {
            Some(id) => self.resolve_channel(guild_id, id).await,
            None => None,
        };
        let mut birthday_role = match settings.birthday_role_id {
            Some(id) => self.resolve_role(guild_id, id).await,
            None => None,
        };
        let trusted_role = match settings.trusted_role_id {
            Some(id) => self.resolve_role(guild_id, id).await,
            None => None,
        };

        if birthday_role.is_some() && !self.ctx.permissions().can_manage_roles(guild_id).await {
            warn!("Missing MANAGE_ROLES, birthday role disabled for this pass");
            birthday_role = None;
        }

        if let Some(ch) = &channel {
            if !self.ctx.permissions().can_post_in(ch).await {
                warn!(channel_id = %ch.id, "Cannot post in birthday channel, message disabled for this pass");
                channel = None;
            }
        }

        ResolvedContext {
            channel,
            birthday_role,
            trusted_role,
        }
    }

    async fn resolve_channel(&self, guild_id: Snowflake, channel_id: Snowflake) -> Option<Channel> {
        let found = Self::found(
            self.ctx.resolver().resolve_channel(guild_id, channel_id).await,
            "channel",
            channel_id,
        )?;
        if found.guild_id != guild_id {
            warn!(channel_id = %channel_id, "Birthday channel belongs to another guild, ignoring");
            return None;
        }
        Some(found)
    }

    async fn resolve_role(&self, guild_id: Snowflake, role_id: Snowflake) -> Option<Role> {
        let found = Self::found(
            self.ctx.resolver().resolve_role(guild_id, role_id).await,
            "role",
            role_id,
        )?;
        if !found.belongs_to(guild_id) {
            warn!(role_id = %role_id, "Role belongs to another guild, ignoring");
            return None;
        }
        Some(found)
    }

    async fn resolve_member(&self, guild_id: Snowflake, user_id: Snowflake) -> Option<GuildMember> {
        Self::found(
            self.ctx.resolver().resolve_member(guild_id, user_id).await,
            "member",
            user_id,
        )
    }

    /// Collapse a lookup to "found or not"; errors are logged and count as absent
    fn found<T>(result: RepoResult<Option<T>>, kind: &'static str, id: Snowflake) -> Option<T> {
        match result {
            Ok(Some(object)) => Some(object),
            Ok(None) => {
                debug!(kind, id = %id, "Not found");
                None
            }
            Err(err) => {
                warn!(kind, id = %id, error = %err, "Lookup failed, treating as absent");
                None
            }
        }
    }

    /// Compose and post the announcement, mention prefix first
    async fn announce(
        &self,
        settings: &GuildSettings,
        channel: &Channel,
        recipients: &[GuildMember],
    ) -> RepoResult<()> {
        let mention_role = match settings.mention_role_id() {
            Some(id) => Self::found(
                self.ctx.resolver().resolve_role(settings.guild_id, id).await,
                "role",
                id,
            ),
            None => None,
        };

        let custom = match self.ctx.custom_messages().custom_messages(settings.guild_id).await {
            Ok(templates) => templates,
            Err(err) => {
                warn!(error = %err, "Could not load custom birthday messages, using defaults");
                Vec::new()
            }
        };

        let composer = MessageComposer::new(self.ctx.style());
        let announcement = self.ctx.with_rng(|rng| {
            composer.compose(settings, recipients, custom, mention_role.as_ref(), rng)
        });

        // The body goes out even when the ping is rejected.
        if let Some(prefix) = announcement.prefix {
            if let Err(err) = self
                .ctx
                .actions()
                .send(channel, OutgoingMessage::plain(prefix.to_string()))
                .await
            {
                warn!(channel_id = %channel.id, mention = %prefix, error = %err, "Mention prefix rejected, sending message anyway");
            }
        }
        self.ctx.actions().send(channel, announcement.body).await?;

        info!(channel_id = %channel.id, recipients = recipients.len(), "Birthday message sent");
        Ok(())
    }
}
