//! Business logic services
//!
//! Eligibility rules, the role lifecycle, message composition, and the
//! orchestrator that ties them to the platform ports.

pub mod birthday;
pub mod context;
pub mod eligibility;
pub mod error;
pub mod message;
pub mod role_lifecycle;

// Re-export all services for convenience
pub use birthday::BirthdayService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use eligibility::{AxisOutcome, EligibilityEvaluator, EligibilityInput, Evaluation};
pub use error::{ServiceError, ServiceResult};
pub use message::{ComposedAnnouncement, MessageComposer, DEFAULT_TEMPLATES, USERS_PLACEHOLDER};
pub use role_lifecycle::{RoleLifecycleManager, RoleLifecycleOutcome};
