//! Time signal providers

mod clock;

pub use clock::{parse_zone, BirthdayClock};
