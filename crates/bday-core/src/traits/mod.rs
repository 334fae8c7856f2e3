//! Ports - interfaces to the collaborators outside the core

mod platform;
mod repositories;
mod signals;

pub use platform::{ObjectResolver, PermissionOracle, PlatformActions, RepoResult};
pub use repositories::CustomMessageRepository;
pub use signals::TimeSignalProvider;
