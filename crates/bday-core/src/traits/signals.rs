//! Time signals - "is it this member's birthday right now?"

use crate::entities::MemberEventRecord;

/// Pure predicates over stored birthday data
///
/// Implementations own the notion of "now"; the celebration pass only sees
/// the booleans.
pub trait TimeSignalProvider: Send + Sync {
    /// Whether the member should hold the birthday role right now
    fn is_role_due(&self, record: &MemberEventRecord) -> bool;

    /// Whether the member's birthday message goes out in this run
    ///
    /// `message_time` is the guild's configured hour of day.
    fn is_message_due(&self, message_time: u8, record: &MemberEventRecord) -> bool;
}
