//! Birthday message composition
//!
//! Builds the announcement text: member list, template, mention prefix, and
//! embed-or-plain container.

use bday_common::MessageStyle;
use bday_core::{GuildMember, GuildSettings, Mention, OutgoingMessage, Role};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::warn;

/// Token in a template replaced by the member list
pub const USERS_PLACEHOLDER: &str = "@Users";

/// Built-in templates, always part of the pool
pub const DEFAULT_TEMPLATES: &[&str] = &[
    "Happy birthday to @Users!",
    "Everyone wish @Users a happy birthday!",
    "It's @Users's birthday today! Have a great one!",
    "Hey @Users, happy birthday! Hope it's a good one.",
    "Birthday alert! Send @Users some love today.",
];

/// Announcement ready to send
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedAnnouncement {
    /// Sent alone, before the body
    pub prefix: Option<Mention>,
    pub body: OutgoingMessage,
}

/// Composes birthday announcements with the configured styling
#[derive(Debug, Clone, Copy)]
pub struct MessageComposer {
    style: MessageStyle,
}

impl MessageComposer {
    pub fn new(style: MessageStyle) -> Self {
        Self { style }
    }

    /// "A", "A and B", "A, B, and C"
    pub fn join_with_and<S: AsRef<str>>(items: &[S]) -> String {
        match items {
            [] => String::new(),
            [only] => only.as_ref().to_string(),
            [first, second] => format!("{} and {}", first.as_ref(), second.as_ref()),
            [init @ .., last] => {
                let head: Vec<&str> = init.iter().map(AsRef::as_ref).collect();
                format!("{}, and {}", head.join(", "), last.as_ref())
            }
        }
    }

    /// Custom templates plus the built-in defaults
    ///
    /// Custom templates without the placeholder would name nobody, so they are dropped.
    pub fn template_pool(custom: Vec<String>) -> Vec<String> {
        let mut pool: Vec<String> = custom
            .into_iter()
            .filter(|template| {
                let usable = template.contains(USERS_PLACEHOLDER);
                if !usable {
                    warn!(template = %template, "Custom birthday message has no @Users placeholder, ignoring");
                }
                usable
            })
            .collect();
        pool.extend(DEFAULT_TEMPLATES.iter().map(|t| (*t).to_string()));
        pool
    }

    /// Uniform pick; the pool always holds the defaults
    pub fn pick_template<'p, R: Rng + ?Sized>(pool: &'p [String], rng: &mut R) -> &'p str {
        pool.choose(rng)
            .map_or(DEFAULT_TEMPLATES[0], String::as_str)
    }

    /// Substitute every placeholder with the joined member mentions
    pub fn render(template: &str, recipients: &[GuildMember]) -> String {
        let mentions: Vec<String> = recipients.iter().map(|m| m.mention().to_string()).collect();
        template.replace(USERS_PLACEHOLDER, &Self::join_with_and(&mentions))
    }

    /// Ping that precedes the announcement
    ///
    /// `mention_role` is what the resolver returned for the mention setting; a
    /// role from another guild counts as unresolved.
    pub fn mention_prefix(settings: &GuildSettings, mention_role: Option<&Role>) -> Option<Mention> {
        match mention_role {
            Some(role) if role.belongs_to(settings.guild_id) => Some(role.mention()),
            _ => settings.mention_broadcast(),
        }
    }

    /// Wrap text per the guild's embed preference
    pub fn wrap(&self, settings: &GuildSettings, text: String) -> OutgoingMessage {
        if settings.use_embed {
            OutgoingMessage::embed(text, self.style.embed_color)
        } else {
            OutgoingMessage::plain(text)
        }
    }

    /// Build the full announcement
    ///
    /// `recipients` must be non-empty.
    pub fn compose<R: Rng + ?Sized>(
        &self,
        settings: &GuildSettings,
        recipients: &[GuildMember],
        custom_templates: Vec<String>,
        mention_role: Option<&Role>,
        rng: &mut R,
    ) -> ComposedAnnouncement {
        let pool = Self::template_pool(custom_templates);
        let template = Self::pick_template(&pool, rng);
        let text = Self::render(template, recipients);

        ComposedAnnouncement {
            prefix: Self::mention_prefix(settings, mention_role),
            body: self.wrap(settings, text),
        }
    }
}
