//! # Subscription handle.
//!
//! A [`Subscription`] is returned by every successful subscribe call. It
//! exposes the record's event name and handler and knows how to remove
//! exactly that record again.
//!
//! ## Rules
//! - `unsubscribe()` is idempotent and never fails.
//! - Dropping the handle does **not** unsubscribe; the record stays live.
//! - The handle holds the registry weakly: once every `Conductor` clone is
//!   gone, `unsubscribe()` is a no-op and `is_live()` is `false`.

use std::fmt;
use std::sync::{Arc, Weak};

use crate::core::registry::Registry;
use crate::handlers::HandlerRef;

/// Handle to one registered listener.
pub struct Subscription<P> {
    id: u64,
    event: Arc<str>,
    handler: HandlerRef<P>,
    registry: Weak<Registry<P>>,
}

impl<P: 'static> Subscription<P> {
    pub(crate) fn new(
        id: u64,
        event: Arc<str>,
        handler: HandlerRef<P>,
        registry: Weak<Registry<P>>,
    ) -> Self {
        Self {
            id,
            event,
            handler,
            registry,
        }
    }

    /// Registry-unique id of this record (registration order).
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Event name this record listens to.
    pub fn event_name(&self) -> &str {
        &self.event
    }

    /// Handler invoked for matching publishes.
    pub fn handler(&self) -> &HandlerRef<P> {
        &self.handler
    }

    /// True while the record is still registered.
    pub fn is_live(&self) -> bool {
        self.registry
            .upgrade()
            .is_some_and(|reg| reg.is_live(&self.event, self.id))
    }

    /// Removes this record (and only this record) from the registry.
    ///
    /// Calling it again, or after the registry is gone, does nothing.
    pub fn unsubscribe(&self) {
        let Some(registry) = self.registry.upgrade() else {
            return;
        };
        if registry.remove(&self.event, self.id) {
            tracing::debug!(
                subscription_id = self.id,
                event = %self.event,
                handler = self.handler.name(),
                "subscription removed"
            );
        }
    }
}

impl<P> Clone for Subscription<P> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            event: Arc::clone(&self.event),
            handler: Arc::clone(&self.handler),
            registry: Weak::clone(&self.registry),
        }
    }
}

impl<P: 'static> fmt::Debug for Subscription<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("event", &self.event)
            .field("handler", &self.handler.name())
            .finish()
    }
}
