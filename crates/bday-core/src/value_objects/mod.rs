//! Value objects - immutable types that represent domain concepts

mod mention;
mod permissions;
mod snowflake;

pub use mention::Mention;
pub use permissions::Permissions;
pub use snowflake::{Snowflake, SnowflakeParseError};
