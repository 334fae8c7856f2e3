//! Configuration structs

mod app_config;

pub use app_config::{
    parse_color, AppConfig, AppSettings, ConfigError, Environment, LoggingConfig, MessageStyle,
};
