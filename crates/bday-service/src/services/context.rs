//! Service context - dependency container for services
//!
//! Holds every collaborator port plus shared styling and the template RNG.

use std::sync::Arc;

use bday_common::MessageStyle;
use bday_core::traits::{
    CustomMessageRepository, ObjectResolver, PermissionOracle, PlatformActions, TimeSignalProvider,
};
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::error::{ServiceError, ServiceResult};
use crate::signals::BirthdayClock;

/// Service context containing all dependencies
///
/// Cheap to clone; every pass borrows it. It provides access to:
/// - Platform ports (resolution, permissions, role and message actions)
/// - The custom message repository
/// - Time signals
/// - Message styling and the template RNG
#[derive(Clone)]
pub struct ServiceContext {
    // Platform
    resolver: Arc<dyn ObjectResolver>,
    permissions: Arc<dyn PermissionOracle>,
    actions: Arc<dyn PlatformActions>,

    // Repositories
    custom_messages: Arc<dyn CustomMessageRepository>,

    // Signals
    signals: Arc<dyn TimeSignalProvider>,

    // Styling
    style: MessageStyle,
    rng: Arc<Mutex<StdRng>>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        resolver: Arc<dyn ObjectResolver>,
        permissions: Arc<dyn PermissionOracle>,
        actions: Arc<dyn PlatformActions>,
        custom_messages: Arc<dyn CustomMessageRepository>,
        signals: Arc<dyn TimeSignalProvider>,
        style: MessageStyle,
        rng: StdRng,
    ) -> Self {
        Self {
            resolver,
            permissions,
            actions,
            custom_messages,
            signals,
            style,
            rng: Arc::new(Mutex::new(rng)),
        }
    }

    /// Start a builder
    pub fn builder() -> ServiceContextBuilder {
        ServiceContextBuilder::new()
    }

    // === Platform ===

    pub fn resolver(&self) -> &dyn ObjectResolver {
        self.resolver.as_ref()
    }

    pub fn permissions(&self) -> &dyn PermissionOracle {
        self.permissions.as_ref()
    }

    pub fn actions(&self) -> &dyn PlatformActions {
        self.actions.as_ref()
    }

    // === Repositories ===

    pub fn custom_messages(&self) -> &dyn CustomMessageRepository {
        self.custom_messages.as_ref()
    }

    // === Signals ===

    pub fn signals(&self) -> &dyn TimeSignalProvider {
        self.signals.as_ref()
    }

    // === Styling ===

    pub fn style(&self) -> MessageStyle {
        self.style
    }

    /// Run `f` with exclusive access to the template RNG
    ///
    /// `f` must not await; the lock is held for its whole run.
    pub fn with_rng<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> T {
        let mut rng = self.rng.lock();
        f(&mut *rng)
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("ports", &"...")
            .field("style", &self.style)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
///
/// Signals default to the system `BirthdayClock`, styling to
/// `MessageStyle::default()`, and the RNG to an entropy seed.
pub struct ServiceContextBuilder {
    resolver: Option<Arc<dyn ObjectResolver>>,
    permissions: Option<Arc<dyn PermissionOracle>>,
    actions: Option<Arc<dyn PlatformActions>>,
    custom_messages: Option<Arc<dyn CustomMessageRepository>>,
    signals: Option<Arc<dyn TimeSignalProvider>>,
    style: MessageStyle,
    rng: Option<StdRng>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            resolver: None,
            permissions: None,
            actions: None,
            custom_messages: None,
            signals: None,
            style: MessageStyle::default(),
            rng: None,
        }
    }

    /// Use one platform client for resolution, permissions, and actions
    pub fn platform<P>(self, platform: Arc<P>) -> Self
    where
        P: ObjectResolver + PermissionOracle + PlatformActions + 'static,
    {
        self.resolver(platform.clone())
            .permissions(platform.clone())
            .actions(platform)
    }

    pub fn resolver(mut self, resolver: Arc<dyn ObjectResolver>) -> Self {
        self.resolver = Some(resolver);
        self
    }

    pub fn permissions(mut self, permissions: Arc<dyn PermissionOracle>) -> Self {
        self.permissions = Some(permissions);
        self
    }

    pub fn actions(mut self, actions: Arc<dyn PlatformActions>) -> Self {
        self.actions = Some(actions);
        self
    }

    pub fn custom_messages(mut self, repo: Arc<dyn CustomMessageRepository>) -> Self {
        self.custom_messages = Some(repo);
        self
    }

    pub fn signals(mut self, signals: Arc<dyn TimeSignalProvider>) -> Self {
        self.signals = Some(signals);
        self
    }

    pub fn style(mut self, style: MessageStyle) -> Self {
        self.style = style;
        self
    }

    /// Fix the template RNG seed (tests, replays)
    pub fn rng_seed(mut self, seed: u64) -> Self {
        self.rng = Some(StdRng::seed_from_u64(seed));
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.resolver
                .ok_or_else(|| ServiceError::validation("resolver is required"))?,
            self.permissions
                .ok_or_else(|| ServiceError::validation("permissions is required"))?,
            self.actions
                .ok_or_else(|| ServiceError::validation("actions is required"))?,
            self.custom_messages
                .ok_or_else(|| ServiceError::validation("custom_messages is required"))?,
            self.signals
                .unwrap_or_else(|| Arc::new(BirthdayClock::system())),
            self.style,
            self.rng.unwrap_or_else(StdRng::from_entropy),
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
