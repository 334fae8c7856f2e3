//! Mention markup understood by the chat platform

use std::fmt;

use super::Snowflake;

/// Something a message can ping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mention {
    User(Snowflake),
    Role(Snowflake),
    Everyone,
    Here,
}

impl Mention {
    /// Parse the broadcast keywords ("everyone" / "here"), case-insensitively
    ///
    /// The whole setting must be the keyword; "@here" or " here" is no ping.
    pub fn broadcast(raw: &str) -> Option<Self> {
        if raw.eq_ignore_ascii_case("everyone") {
            Some(Self::Everyone)
        } else if raw.eq_ignore_ascii_case("here") {
            Some(Self::Here)
        } else {
            None
        }
    }
}

impl fmt::Display for Mention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::User(id) => write!(f, "<@{id}>"),
            Self::Role(id) => write!(f, "<@&{id}>"),
            Self::Everyone => f.write_str("@everyone"),
            Self::Here => f.write_str("@here"),
        }
    }
}
