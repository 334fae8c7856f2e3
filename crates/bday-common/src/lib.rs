//! # bday-common
//!
//! Shared utilities including configuration, error handling, and telemetry.

pub mod config;
pub mod error;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use config::{
    parse_color, AppConfig, AppSettings, ConfigError, Environment, LoggingConfig, MessageStyle,
};
pub use error::{AppError, AppResult};
pub use telemetry::{
    init_tracing_with_config, try_init_tracing_with_config, TracingConfig, TracingError,
};
