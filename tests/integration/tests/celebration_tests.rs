//! Celebration pass integration tests
//!
//! Every test runs the full `BirthdayService` against an in-memory guild.
//!
//! Run with: cargo test -p integration-tests --test celebration_tests

use std::sync::Arc;

use bday_core::{GuildMember, OutgoingMessage, Permissions, Snowflake};
use bday_service::{BirthdayService, GuildBatch, RoleAction};
use integration_tests::*;

fn ids(raw: &[u64]) -> Vec<Snowflake> {
    raw.iter().copied().map(Snowflake::new).collect()
}

fn guild_with(members: &[GuildMember]) -> FakeGuild {
    members
        .iter()
        .cloned()
        .fold(FakeGuild::standard(GUILD), FakeGuild::with_member)
}

// ============================================================================
// End-to-end Scenarios
// ============================================================================

#[tokio::test]
async fn test_role_only_due_grants_without_message() {
    let guild = Arc::new(guild_with(&[member(GUILD, 1)]));
    let ctx = test_context(&guild, StaticSignals::new().role_due(&[1])).unwrap();

    let report = BirthdayService::new(&ctx)
        .celebrate_birthdays(&standard_settings(GUILD), &[record(1)], &[member(GUILD, 1)])
        .await
        .unwrap();

    assert_eq!(guild.granted(), ids(&[1]));
    assert!(guild.sent().is_empty());
    assert_eq!(report.granted, ids(&[1]));
    assert!(!report.message_sent);
    assert!(report.messaged.is_empty());
}

#[tokio::test]
async fn test_two_members_named_in_one_message() {
    let roster = [member(GUILD, 1), member(GUILD, 2)];
    let guild = Arc::new(guild_with(&roster));
    let ctx = test_context(&guild, StaticSignals::new().message_due(&[1, 2])).unwrap();

    let report = BirthdayService::new(&ctx)
        .celebrate_birthdays(&standard_settings(GUILD), &[record(1), record(2)], &roster)
        .await
        .unwrap();

    let sent = guild.sent();
    assert_eq!(sent.len(), 1);
    assert!(sent[0].text().contains("<@1> and <@2>"), "{}", sent[0].text());
    assert!(!sent[0].text().contains("@Users"));
    assert!(guild.granted().is_empty());
    assert_eq!(report.messaged, ids(&[1, 2]));
    assert!(report.message_sent);
}

#[tokio::test]
async fn test_role_disabled_without_manage_roles_still_sends() {
    // Member 2 is a stale holder; without the role handle nobody is swept.
    let roster = [member(GUILD, 1), member(GUILD, 2).with_role(BIRTHDAY_ROLE)];
    let guild = Arc::new(guild_with(&roster).with_guild_permissions(Permissions::POST));
    let ctx = test_context(&guild, StaticSignals::all_due(&[1])).unwrap();

    let report = BirthdayService::new(&ctx)
        .celebrate_birthdays(&standard_settings(GUILD), &[record(1)], &roster)
        .await
        .unwrap();

    assert!(guild.granted().is_empty());
    assert!(guild.revoked().is_empty());
    assert_eq!(guild.sent().len(), 1);
    assert_eq!(report.role_actions(), 0);
    assert!(report.message_sent);
}

#[tokio::test]
async fn test_inert_guild_stops_after_resolution() {
    let guild = Arc::new(
        guild_with(&[member(GUILD, 1)])
            .with_guild_permissions(Permissions::empty())
            .with_channel_permissions(Permissions::VIEW_CHANNEL),
    );
    let ctx = test_context(&guild, StaticSignals::all_due(&[1])).unwrap();

    let report = BirthdayService::new(&ctx)
        .celebrate_birthdays(&standard_settings(GUILD), &[record(1)], &[member(GUILD, 1)])
        .await
        .unwrap();

    assert!(report.inert);
    assert!(guild.calls().is_empty());
    assert_eq!(guild.member_lookups(), 0);
}

#[tokio::test]
async fn test_unconfigured_guild_is_inert() {
    let guild = Arc::new(guild_with(&[member(GUILD, 1)]));
    let ctx = test_context(&guild, StaticSignals::all_due(&[1])).unwrap();

    let report = BirthdayService::new(&ctx)
        .celebrate_birthdays(
            &bday_core::GuildSettings::new(GUILD),
            &[record(1)],
            &[member(GUILD, 1)],
        )
        .await
        .unwrap();

    assert!(report.inert);
    assert_eq!(guild.member_lookups(), 0);
}

// ============================================================================
// Role Lifecycle
// ============================================================================

#[tokio::test]
async fn test_role_swept_from_members_without_record() {
    let roster = [
        member(GUILD, 1),
        member(GUILD, 2).with_role(BIRTHDAY_ROLE),
        member(GUILD, 3).with_role(BIRTHDAY_ROLE),
        member(GUILD, 4),
    ];
    let guild = Arc::new(guild_with(&roster));
    let ctx = test_context(&guild, StaticSignals::new().role_due(&[1, 3])).unwrap();

    let report = BirthdayService::new(&ctx)
        .celebrate_birthdays(&standard_settings(GUILD), &[record(1), record(3)], &roster)
        .await
        .unwrap();

    assert_eq!(guild.granted(), ids(&[1, 3]));
    assert_eq!(guild.revoked(), ids(&[2]));
    assert_eq!(report.revoked, ids(&[2]));
}

#[tokio::test]
async fn test_member_with_record_keeps_role_when_not_due() {
    let roster = [member(GUILD, 1).with_role(BIRTHDAY_ROLE)];
    let guild = Arc::new(guild_with(&roster));
    let ctx = test_context(&guild, StaticSignals::new()).unwrap();

    let report = BirthdayService::new(&ctx)
        .celebrate_birthdays(&standard_settings(GUILD), &[record(1)], &roster)
        .await
        .unwrap();

    assert!(guild.calls().is_empty());
    assert_eq!(report.skipped, ids(&[1]));
}

#[tokio::test]
async fn test_rejected_grant_does_not_block_message() {
    let roster = [member(GUILD, 1), member(GUILD, 2)];
    let guild = Arc::new(guild_with(&roster).rejecting_roles_for(Snowflake::new(1)));
    let ctx = test_context(&guild, StaticSignals::all_due(&[1, 2])).unwrap();

    let report = BirthdayService::new(&ctx)
        .celebrate_birthdays(&standard_settings(GUILD), &[record(1), record(2)], &roster)
        .await
        .unwrap();

    assert_eq!(guild.granted(), ids(&[1, 2]));
    assert_eq!(report.granted, ids(&[2]));
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].user_id, Snowflake::new(1));
    assert_eq!(report.failures[0].action, RoleAction::Grant);
    assert!(!report.is_clean());
    assert!(report.message_sent);
    assert_eq!(report.messaged, ids(&[1, 2]));
}

// ============================================================================
// Trusted Gating
// ============================================================================

#[tokio::test]
async fn test_both_gates_skip_untrusted_member() {
    let roster = [member(GUILD, 1), member(GUILD, 2).with_role(TRUSTED_ROLE)];
    let guild = Arc::new(guild_with(&roster));
    let ctx = test_context(&guild, StaticSignals::all_due(&[1, 2])).unwrap();

    let report = BirthdayService::new(&ctx)
        .celebrate_birthdays(&trusted_settings(GUILD, true, true), &[record(1), record(2)], &roster)
        .await
        .unwrap();

    assert_eq!(guild.granted(), ids(&[2]));
    assert_eq!(report.messaged, ids(&[2]));
    assert_eq!(report.skipped, ids(&[1]));
}

#[tokio::test]
async fn test_single_gate_only_blocks_its_axis() {
    let roster = [member(GUILD, 1)];
    let guild = Arc::new(guild_with(&roster));
    let ctx = test_context(&guild, StaticSignals::all_due(&[1])).unwrap();

    let report = BirthdayService::new(&ctx)
        .celebrate_birthdays(&trusted_settings(GUILD, true, false), &[record(1)], &roster)
        .await
        .unwrap();

    assert!(guild.granted().is_empty());
    assert_eq!(report.messaged, ids(&[1]));
    assert!(report.skipped.is_empty());
}

#[tokio::test]
async fn test_gates_ignored_when_trusted_role_missing() {
    let roster = [member(GUILD, 1)];
    let guild = Arc::new(guild_with(&roster).failing_lookup(TRUSTED_ROLE));
    let ctx = test_context(&guild, StaticSignals::all_due(&[1])).unwrap();

    let report = BirthdayService::new(&ctx)
        .celebrate_birthdays(&trusted_settings(GUILD, true, true), &[record(1)], &roster)
        .await
        .unwrap();

    assert_eq!(report.granted, ids(&[1]));
    assert_eq!(report.messaged, ids(&[1]));
}

// ============================================================================
// Resolution
// ============================================================================

#[tokio::test]
async fn test_unresolved_member_is_skipped() {
    let roster = [member(GUILD, 1)];
    let guild = Arc::new(guild_with(&roster).failing_lookup(Snowflake::new(1)));
    let ctx = test_context(&guild, StaticSignals::all_due(&[1, 9])).unwrap();

    let report = BirthdayService::new(&ctx)
        .celebrate_birthdays(&standard_settings(GUILD), &[record(1), record(9)], &roster)
        .await
        .unwrap();

    assert_eq!(report.unresolved, ids(&[1, 9]));
    assert!(guild.calls().is_empty());
    assert!(!report.message_sent);
}

#[tokio::test]
async fn test_cannot_post_disables_message_only() {
    let roster = [member(GUILD, 1)];
    let guild = Arc::new(guild_with(&roster).with_channel_permissions(Permissions::VIEW_CHANNEL));
    let ctx = test_context(&guild, StaticSignals::all_due(&[1])).unwrap();

    let report = BirthdayService::new(&ctx)
        .celebrate_birthdays(&standard_settings(GUILD), &[record(1)], &roster)
        .await
        .unwrap();

    assert_eq!(report.granted, ids(&[1]));
    assert!(guild.sent().is_empty());
    assert!(!report.message_sent);
}

// ============================================================================
// Message Delivery
// ============================================================================

#[tokio::test]
async fn test_mention_prefix_sent_before_body() {
    let roster = [member(GUILD, 1)];
    let guild = Arc::new(guild_with(&roster));
    let ctx = test_context(&guild, StaticSignals::all_due(&[1])).unwrap();

    let mut settings = standard_settings(GUILD);
    settings.mention_setting = PING_ROLE.to_string();

    BirthdayService::new(&ctx)
        .celebrate_birthdays(&settings, &[record(1)], &roster)
        .await
        .unwrap();

    let sent = guild.sent();
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[0], OutgoingMessage::plain(format!("<@&{PING_ROLE}>")));
    assert!(sent[1].is_embed());
}

#[tokio::test]
async fn test_broadcast_mention_is_case_insensitive() {
    let roster = [member(GUILD, 1)];
    let guild = Arc::new(guild_with(&roster));
    let ctx = test_context(&guild, StaticSignals::new().message_due(&[1])).unwrap();

    let mut settings = standard_settings(GUILD);
    settings.mention_setting = "EveryOne".to_string();

    BirthdayService::new(&ctx)
        .celebrate_birthdays(&settings, &[record(1)], &roster)
        .await
        .unwrap();

    assert_eq!(guild.sent()[0], OutgoingMessage::plain("@everyone"));
}

#[tokio::test]
async fn test_foreign_mention_role_sends_no_prefix() {
    let foreign = Snowflake::new(77);
    let roster = [member(GUILD, 1)];
    let guild = Arc::new(guild_with(&roster).with_foreign_role(foreign, OTHER_GUILD));
    let ctx = test_context(&guild, StaticSignals::new().message_due(&[1])).unwrap();

    let mut settings = standard_settings(GUILD);
    settings.mention_setting = foreign.to_string();

    BirthdayService::new(&ctx)
        .celebrate_birthdays(&settings, &[record(1)], &roster)
        .await
        .unwrap();

    let sent = guild.sent();
    assert_eq!(sent.len(), 1);
    assert!(sent[0].text().contains("<@1>"));
}

#[tokio::test]
async fn test_plain_message_when_embeds_disabled() {
    let roster = [member(GUILD, 1)];
    let guild = Arc::new(guild_with(&roster).with_custom_messages(["Cake time for @Users!"]));
    let ctx = test_context(&guild, StaticSignals::new().message_due(&[1])).unwrap();

    let mut settings = standard_settings(GUILD);
    settings.use_embed = false;

    BirthdayService::new(&ctx)
        .celebrate_birthdays(&settings, &[record(1)], &roster)
        .await
        .unwrap();

    let sent = guild.sent();
    assert_eq!(sent.len(), 1);
    assert!(!sent[0].is_embed());
}

#[tokio::test]
async fn test_embed_uses_configured_color() {
    let roster = [member(GUILD, 1)];
    let guild = Arc::new(guild_with(&roster));
    let ctx = test_context(&guild, StaticSignals::new().message_due(&[1])).unwrap();

    BirthdayService::new(&ctx)
        .celebrate_birthdays(&standard_settings(GUILD), &[record(1)], &roster)
        .await
        .unwrap();

    match &guild.sent()[0] {
        OutgoingMessage::Embed(embed) => assert_eq!(embed.color, TEST_EMBED_COLOR),
        OutgoingMessage::Plain { .. } => panic!("expected embed"),
    }
}

#[tokio::test]
async fn test_custom_message_store_failure_falls_back_to_defaults() {
    let roster = [member(GUILD, 1)];
    let guild = Arc::new(guild_with(&roster).failing_custom_messages());
    let ctx = test_context(&guild, StaticSignals::new().message_due(&[1])).unwrap();

    let report = BirthdayService::new(&ctx)
        .celebrate_birthdays(&standard_settings(GUILD), &[record(1)], &roster)
        .await
        .unwrap();

    assert!(report.message_sent);
    assert!(guild.sent()[0].text().contains("<@1>"));
}

#[tokio::test]
async fn test_send_failure_is_returned_with_report() {
    let roster = [member(GUILD, 1), member(GUILD, 2).with_role(BIRTHDAY_ROLE)];
    let guild = Arc::new(guild_with(&roster).failing_sends());
    let ctx = test_context(&guild, StaticSignals::all_due(&[1])).unwrap();

    let err = BirthdayService::new(&ctx)
        .celebrate_birthdays(&standard_settings(GUILD), &[record(1)], &roster)
        .await
        .unwrap_err();

    assert!(err.is_external());
    assert_eq!(err.error_code(), "PLATFORM_ERROR");
    assert_eq!(guild.granted(), ids(&[1]));

    let report = err.report().expect("delivery error carries the report");
    assert_eq!(report.granted, ids(&[1]));
    assert_eq!(report.revoked, ids(&[2]));
    assert!(!report.message_sent);
    assert!(report.messaged.is_empty());
}

#[tokio::test]
async fn test_rejected_mention_prefix_still_sends_message() {
    let roster = [member(GUILD, 1), member(GUILD, 2).with_role(BIRTHDAY_ROLE)];
    let guild = Arc::new(
        guild_with(&roster).rejecting_message(OutgoingMessage::plain("@everyone")),
    );
    let ctx = test_context(&guild, StaticSignals::all_due(&[1])).unwrap();

    let mut settings = standard_settings(GUILD);
    settings.mention_setting = "everyone".to_string();

    let report = BirthdayService::new(&ctx)
        .celebrate_birthdays(&settings, &[record(1)], &roster)
        .await
        .unwrap();

    let sent = guild.sent();
    assert_eq!(sent.len(), 1);
    assert!(sent[0].is_embed());
    assert!(sent[0].text().contains("<@1>"));
    assert!(report.message_sent);
    assert_eq!(report.messaged, ids(&[1]));
    assert_eq!(report.granted, ids(&[1]));
    assert_eq!(report.revoked, ids(&[2]));
}

// ============================================================================
// Batches
// ============================================================================

#[tokio::test]
async fn test_batch_failure_is_isolated_per_guild() {
    let roster = [member(GUILD, 1)];
    let healthy = Arc::new(guild_with(&roster));
    let broken = Arc::new(guild_with(&roster).failing_sends());

    let batch = vec![GuildBatch::new(
        standard_settings(GUILD),
        vec![record(1)],
        roster.to_vec(),
    )];

    let ok_ctx = test_context(&healthy, StaticSignals::all_due(&[1])).unwrap();
    let ok = BirthdayService::new(&ok_ctx).celebrate_guilds(&batch).await;
    assert_eq!(ok.len(), 1);
    assert!(ok[0].1.is_ok());

    let err_ctx = test_context(&broken, StaticSignals::all_due(&[1])).unwrap();
    let failed = BirthdayService::new(&err_ctx).celebrate_guilds(&batch).await;
    assert_eq!(failed[0].0, GUILD);
    assert!(failed[0].1.is_err());
}

#[tokio::test]
async fn test_batch_runs_every_guild() {
    let guild = Arc::new(
        FakeGuild::standard(GUILD)
            .with_member(member(GUILD, 1))
            .with_member(member(OTHER_GUILD, 2)),
    );
    let ctx = test_context(&guild, StaticSignals::all_due(&[1, 2])).unwrap();

    let batches = vec![
        GuildBatch::new(standard_settings(GUILD), vec![record(1)], vec![member(GUILD, 1)]),
        // Member 2 belongs to another guild; nothing is configured there either.
        GuildBatch::new(
            bday_core::GuildSettings::new(OTHER_GUILD),
            vec![record(2)],
            vec![member(OTHER_GUILD, 2)],
        ),
    ];

    let results = BirthdayService::new(&ctx).celebrate_guilds(&batches).await;
    assert_eq!(results.len(), 2);

    let first = results[0].1.as_ref().unwrap();
    assert_eq!(results[0].0, GUILD);
    assert_eq!(first.granted, ids(&[1]));

    let second = results[1].1.as_ref().unwrap();
    assert_eq!(results[1].0, OTHER_GUILD);
    assert!(second.inert);
}

#[tokio::test]
async fn test_report_serializes_for_host() {
    let roster = [member(GUILD, 1)];
    let guild = Arc::new(guild_with(&roster));
    let ctx = test_context(&guild, StaticSignals::all_due(&[1])).unwrap();

    let report = BirthdayService::new(&ctx)
        .celebrate_birthdays(&standard_settings(GUILD), &[record(1)], &roster)
        .await
        .unwrap();

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["guild_id"], GUILD.to_string());
    assert_eq!(json["message_sent"], true);
    assert_eq!(json["granted"][0], "1");
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_config_drives_embed_color() {
    let config = test_config(&[("EMBED_COLOR", "#123456"), ("APP_ENV", "production")]).unwrap();
    assert_eq!(config.style.embed_color, 0x0012_3456);
    assert!(config.logging.json);
}
