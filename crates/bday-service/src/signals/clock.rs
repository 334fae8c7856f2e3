//! Wall-clock birthday signals
//!
//! Default `TimeSignalProvider`: a member's birthday runs from local midnight
//! to local midnight in their own time zone, and the message goes out during
//! the guild's configured local hour.

use bday_core::{DomainError, MemberEventRecord, TimeSignalProvider};
use chrono::{DateTime, NaiveDateTime, Timelike, Utc};
use chrono_tz::Tz;
use tracing::debug;

/// Parse an IANA zone name
pub fn parse_zone(name: &str) -> Result<Tz, DomainError> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| DomainError::InvalidTimeZone(name.to_string()))
}

/// Birthday signals based on the current time, or a pinned instant
#[derive(Debug, Clone, Copy, Default)]
pub struct BirthdayClock {
    pinned: Option<DateTime<Utc>>,
}

impl BirthdayClock {
    /// Follow the system clock
    pub fn system() -> Self {
        Self { pinned: None }
    }

    /// Always report the given instant
    pub fn at(now: DateTime<Utc>) -> Self {
        Self { pinned: Some(now) }
    }

    fn now(&self) -> DateTime<Utc> {
        self.pinned.unwrap_or_else(Utc::now)
    }

    /// The member's wall-clock time; unknown zones count as UTC
    pub fn local_now(&self, record: &MemberEventRecord) -> NaiveDateTime {
        let now = self.now();
        match record.time_zone.as_deref().map(parse_zone) {
            Some(Ok(zone)) => now.with_timezone(&zone).naive_local(),
            Some(Err(err)) => {
                debug!(user_id = %record.user_id, error = %err, "Falling back to UTC");
                now.naive_utc()
            }
            None => now.naive_utc(),
        }
    }
}

impl TimeSignalProvider for BirthdayClock {
    fn is_role_due(&self, record: &MemberEventRecord) -> bool {
        record
            .birthday
            .is_celebrated_on(self.local_now(record).date())
    }

    fn is_message_due(&self, message_time: u8, record: &MemberEventRecord) -> bool {
        let local = self.local_now(record);
        record.birthday.is_celebrated_on(local.date()) && local.hour() == u32::from(message_time)
    }
}
