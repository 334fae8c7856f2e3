//! Outgoing message - content handed to the platform's send capability

use serde::{Deserialize, Serialize};

/// Rich container wrapping the birthday text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Embed {
    pub description: String,
    pub color: u32,
}

/// A single message to post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OutgoingMessage {
    Plain { content: String },
    Embed(Embed),
}

impl OutgoingMessage {
    pub fn plain(content: impl Into<String>) -> Self {
        Self::Plain {
            content: content.into(),
        }
    }

    pub fn embed(description: impl Into<String>, color: u32) -> Self {
        Self::Embed(Embed {
            description: description.into(),
            color,
        })
    }

    /// The human-readable text regardless of container
    pub fn text(&self) -> &str {
        match self {
            Self::Plain { content } => content,
            Self::Embed(embed) => &embed.description,
        }
    }

    #[inline]
    pub fn is_embed(&self) -> bool {
        matches!(self, Self::Embed(_))
    }
}
