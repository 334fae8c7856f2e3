//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Invalid birthday: month {month}, day {day}")]
    InvalidBirthday { month: u32, day: u32 },

    #[error("Unknown time zone: {0}")]
    InvalidTimeZone(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Platform call failed: {0}")]
    Platform(String),

    #[error("Repository error: {0}")]
    Repository(String),
}

impl DomainError {
    /// Get an error code string for logs and reports
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidBirthday { .. } => "INVALID_BIRTHDAY",
            Self::InvalidTimeZone(_) => "INVALID_TIME_ZONE",
            Self::Platform(_) => "PLATFORM_ERROR",
            Self::Repository(_) => "REPOSITORY_ERROR",
        }
    }

    /// Check if this came from a collaborator outside the core
    pub fn is_external(&self) -> bool {
        matches!(self, Self::Platform(_) | Self::Repository(_))
    }

    /// Create a platform error from any displayable failure
    pub fn platform(msg: impl std::fmt::Display) -> Self {
        Self::Platform(msg.to_string())
    }

    /// Create a repository error from any displayable failure
    pub fn repository(msg: impl std::fmt::Display) -> Self {
        Self::Repository(msg.to_string())
    }
}
