//! Service layer error types
//!
//! Provides a unified error type for all service operations.

use bday_common::AppError;
use bday_core::DomainError;
use std::fmt;

use crate::dto::CelebrationReport;

/// Service layer error type
#[derive(Debug)]
pub enum ServiceError {
    /// Validation error
    Validation(String),

    /// The birthday message was rejected after role changes were applied
    ///
    /// Carries the report of everything the pass already did.
    Delivery {
        report: Box<CelebrationReport>,
        source: DomainError,
    },
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(msg) => write!(f, "Validation error: {msg}"),
            Self::Delivery { source, .. } => write!(f, "Birthday message not delivered: {source}"),
        }
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Delivery { source, .. } => Some(source),
            Self::Validation(_) => None,
        }
    }
}

impl ServiceError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a delivery error around the pass report
    pub fn delivery(report: CelebrationReport, source: DomainError) -> Self {
        Self::Delivery {
            report: Box::new(report),
            source,
        }
    }

    /// What the pass did before failing, if it got that far
    pub fn report(&self) -> Option<&CelebrationReport> {
        match self {
            Self::Delivery { report, .. } => Some(&**report),
            Self::Validation(_) => None,
        }
    }

    /// Whether the chat platform or storage rejected a call
    pub fn is_external(&self) -> bool {
        match self {
            Self::Delivery { source, .. } => source.is_external(),
            Self::Validation(_) => false,
        }
    }

    /// Get the error code for logs and reports
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Delivery { source, .. } => source.code(),
        }
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Validation(msg) => AppError::Validation(msg),
            ServiceError::Delivery { source, .. } => AppError::Domain(source),
        }
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;
