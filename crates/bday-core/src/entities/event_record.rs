//! Member event record - stored birthday data for one member
//!
//! The celebration pass only reads these; deciding whether "today" matches is
//! the job of a `TimeSignalProvider`.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Month and day of a birthday, year-agnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawBirthDate")]
pub struct BirthDate {
    month: u32,
    day: u32,
}

#[derive(Deserialize)]
struct RawBirthDate {
    month: u32,
    day: u32,
}

impl TryFrom<RawBirthDate> for BirthDate {
    type Error = DomainError;

    fn try_from(raw: RawBirthDate) -> Result<Self, Self::Error> {
        Self::new(raw.month, raw.day)
    }
}

impl BirthDate {
    /// Validate against a leap year so Feb 29 is accepted
    pub fn new(month: u32, day: u32) -> Result<Self, DomainError> {
        if NaiveDate::from_ymd_opt(2000, month, day).is_none() {
            return Err(DomainError::InvalidBirthday { month, day });
        }
        Ok(Self { month, day })
    }

    #[inline]
    pub fn month(&self) -> u32 {
        self.month
    }

    #[inline]
    pub fn day(&self) -> u32 {
        self.day
    }

    #[inline]
    pub fn is_leap_day(&self) -> bool {
        self.month == 2 && self.day == 29
    }

    /// Whether the birthday is celebrated on the given calendar date
    ///
    /// Feb 29 birthdays move to Feb 28 in common years.
    pub fn is_celebrated_on(&self, date: NaiveDate) -> bool {
        if self.is_leap_day() && NaiveDate::from_ymd_opt(date.year(), 2, 29).is_none() {
            return date.month() == 2 && date.day() == 28;
        }
        date.month() == self.month && date.day() == self.day
    }
}

/// Birthday data for one member of one guild
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberEventRecord {
    pub user_id: Snowflake,
    pub birthday: BirthDate,
    /// IANA zone name, e.g. "America/New_York"
    #[serde(default)]
    pub time_zone: Option<String>,
}

impl MemberEventRecord {
    pub fn new(user_id: Snowflake, birthday: BirthDate) -> Self {
        Self {
            user_id,
            birthday,
            time_zone: None,
        }
    }

    pub fn with_time_zone(mut self, zone: impl Into<String>) -> Self {
        self.time_zone = Some(zone.into());
        self
    }
}
