//! # bday-service
//!
//! Application layer: eligibility rules, the birthday role lifecycle, message
//! composition, and the per-guild celebration pass.

pub mod dto;
pub mod services;
pub mod signals;

pub use dto::{ActionFailure, CelebrationReport, GuildBatch, RoleAction};
pub use services::{BirthdayService, ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult};
pub use signals::BirthdayClock;
