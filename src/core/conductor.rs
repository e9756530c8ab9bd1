//! # Conductor - the subscription registry front end.
//!
//! [`Conductor`] registers handlers under event names and fans published
//! payloads out to them, synchronously and in registration order.
//!
//! ## Architecture
//! ```text
//! subscribe("A", h) ──► validate ──► Registry.insert ──► Subscription { id, "A", h }
//!
//! publish("A", p) ──► validate ──► Registry.snapshot("A")   (lock held only here)
//!                                      │
//!                                      ├─► h1.handle(Some(&p))
//!                                      ├─► h2.handle(Some(&p))   Err ─► abort, return ConductorError::Handler
//!                                      └─► ...
//! ```
//!
//! ## Rules
//! - Validation happens before any mutation; a failed call changes nothing.
//! - Handlers run on the caller's thread with no registry lock held, so they may
//!   subscribe, unsubscribe or publish re-entrantly.
//! - Records added during a publish are not notified by it; records removed
//!   during it follow [`DeliveryPolicy`](crate::DeliveryPolicy).
//! - Clones share one registry.

use std::any::type_name;
use std::sync::Arc;

use crate::config::Config;
use crate::core::builder::SubscribeBuilder;
use crate::core::registry::Registry;
use crate::core::subscription::Subscription;
use crate::error::{ConductorError, HandlerError};
use crate::handlers::{Bound, HandlerFn, HandlerRef};

/// In-process publish/subscribe registry for payloads of type `P`.
///
/// ### Properties
/// - **Synchronous**: `publish()` returns after every matching handler ran (or one failed).
/// - **Ordered**: handlers are invoked in the order they were subscribed.
/// - **Cloneable**: cheap to clone (internally holds an `Arc`-backed registry).
pub struct Conductor<P> {
    registry: Arc<Registry<P>>,
}

impl<P: 'static> Conductor<P> {
    /// Creates an empty registry with default settings.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Creates an empty registry with the given settings.
    pub fn with_config(config: Config) -> Self {
        Self {
            registry: Arc::new(Registry::new(config)),
        }
    }

    /// Settings this registry was built with.
    pub fn config(&self) -> &Config {
        self.registry.config()
    }

    /// Subscribes an infallible closure to `event`.
    ///
    /// # Errors
    /// [`ConductorError::InvalidArgument`] if `event` is empty.
    ///
    /// # Example
    /// ```
    /// use std::sync::{Arc, Mutex};
    /// use conductor::Conductor;
    ///
    /// let bus: Conductor<&'static str> = Conductor::new();
    /// let log = Arc::new(Mutex::new(Vec::new()));
    ///
    /// let sink = Arc::clone(&log);
    /// let sub = bus.subscribe("greet", move |p| sink.lock().unwrap().push(p.copied()))?;
    ///
    /// bus.publish("greet", "hello")?;
    /// bus.publish("greet", None)?;
    /// sub.unsubscribe();
    /// bus.publish("greet", "ignored")?;
    ///
    /// assert_eq!(*log.lock().unwrap(), vec![Some("hello"), None]);
    /// # Ok::<(), conductor::ConductorError>(())
    /// ```
    pub fn subscribe<F>(&self, event: &str, f: F) -> Result<Subscription<P>, ConductorError>
    where
        F: Fn(Option<&P>) + Send + Sync + 'static,
    {
        let handler = HandlerFn::arc(
            type_name::<F>(),
            move |payload: Option<&P>| -> Result<(), HandlerError> {
                f(payload);
                Ok(())
            },
        );
        self.subscribe_handler(event, handler)
    }

    /// Subscribes a fallible closure to `event`.
    ///
    /// An `Err` from the closure aborts the publish that invoked it.
    ///
    /// # Errors
    /// [`ConductorError::InvalidArgument`] if `event` is empty.
    pub fn try_subscribe<F>(&self, event: &str, f: F) -> Result<Subscription<P>, ConductorError>
    where
        F: Fn(Option<&P>) -> Result<(), HandlerError> + Send + Sync + 'static,
    {
        self.subscribe_handler(event, HandlerFn::arc(type_name::<F>(), f))
    }

    /// Subscribes a closure permanently bound to `context`.
    ///
    /// Every invocation receives this exact context object.
    ///
    /// # Errors
    /// [`ConductorError::InvalidArgument`] if `event` is empty.
    pub fn subscribe_bound<C, F>(
        &self,
        event: &str,
        context: Arc<C>,
        f: F,
    ) -> Result<Subscription<P>, ConductorError>
    where
        C: Send + Sync + 'static,
        F: Fn(&C, Option<&P>) + Send + Sync + 'static,
    {
        let handler = Bound::arc(
            type_name::<F>(),
            context,
            move |ctx: &C, payload: Option<&P>| -> Result<(), HandlerError> {
                f(ctx, payload);
                Ok(())
            },
        );
        self.subscribe_handler(event, handler)
    }

    /// Subscribes an existing handler reference, stored as-is.
    ///
    /// Subscribing the same handler twice creates two independent records.
    ///
    /// # Errors
    /// [`ConductorError::InvalidArgument`] if `event` is empty.
    pub fn subscribe_handler(
        &self,
        event: &str,
        handler: HandlerRef<P>,
    ) -> Result<Subscription<P>, ConductorError> {
        validate_event(event)?;
        Ok(self.attach(event, handler))
    }

    /// Starts a fluent subscription for `event`.
    ///
    /// Validation is deferred to [`SubscribeBuilder::subscribe`].
    pub fn subscriber(&self, event: impl Into<String>) -> SubscribeBuilder<P> {
        SubscribeBuilder::new(self.clone(), event)
    }

    /// Publishes `payload` to every subscription of `event`.
    ///
    /// Pass a `P` to deliver `Some(&payload)`, or `None` to deliver no payload.
    /// Publishing to an event without subscribers is a no-op.
    ///
    /// # Errors
    /// - [`ConductorError::InvalidArgument`] if `event` is empty (no handler runs).
    /// - [`ConductorError::Handler`] if a handler fails; handlers after it are skipped.
    pub fn publish(&self, event: &str, payload: impl Into<Option<P>>) -> Result<(), ConductorError> {
        validate_event(event)?;
        let payload = payload.into();
        let targets = self.registry.snapshot(event);
        tracing::trace!(event, matched = targets.len(), "publishing");

        let recheck = self.registry.delivery().rechecks_liveness();
        for entry in targets {
            if recheck && !self.registry.is_live(event, entry.id) {
                continue;
            }
            if let Err(source) = entry.handler.handle(payload.as_ref()) {
                let handler = entry.handler.name().to_string();
                tracing::warn!(
                    event,
                    subscription_id = entry.id,
                    handler = %handler,
                    error = %source,
                    "handler failed; remaining deliveries aborted"
                );
                return Err(ConductorError::Handler {
                    event: event.to_string(),
                    handler,
                    source,
                });
            }
        }
        Ok(())
    }

    /// Total number of live subscriptions.
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    /// True if there are no live subscriptions.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of live subscriptions for `event`.
    pub fn subscriber_count(&self, event: &str) -> usize {
        self.registry.count(event)
    }

    /// Sorted list of event names with at least one live subscription.
    pub fn event_names(&self) -> Vec<String> {
        self.registry.names()
    }

    /// True if the subscription with this id is still live.
    pub fn contains(&self, id: u64) -> bool {
        self.registry.contains(id)
    }

    /// Inserts a validated record and builds its handle.
    pub(crate) fn attach(&self, event: &str, handler: HandlerRef<P>) -> Subscription<P> {
        let event: Arc<str> = Arc::from(event);
        let id = self.registry.insert(&event, Arc::clone(&handler));
        tracing::debug!(
            subscription_id = id,
            event = %event,
            handler = handler.name(),
            "subscription created"
        );
        Subscription::new(id, event, handler, Arc::downgrade(&self.registry))
    }
}

impl<P> Clone for Conductor<P> {
    fn clone(&self) -> Self {
        Self {
            registry: Arc::clone(&self.registry),
        }
    }
}

impl<P: 'static> Default for Conductor<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: 'static> std::fmt::Debug for Conductor<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Conductor")
            .field("subscriptions", &self.len())
            .field("events", &self.event_names())
            .field("config", self.config())
            .finish()
    }
}

pub(crate) fn validate_event(event: &str) -> Result<(), ConductorError> {
    if event.is_empty() {
        return Err(ConductorError::empty_event_name());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policies::DeliveryPolicy;
    use parking_lot::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counter() -> (Arc<AtomicUsize>, impl Fn(Option<&u32>) + Send + Sync + 'static) {
        let calls = Arc::new(AtomicUsize::new(0));
        let c = Arc::clone(&calls);
        (calls, move |_: Option<&u32>| {
            c.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[test]
    fn test_new_registry_is_empty() {
        let bus: Conductor<u32> = Conductor::new();
        assert!(bus.is_empty());
        assert!(bus.event_names().is_empty());
    }

    #[test]
    fn test_subscribe_records_name_and_grows_by_one() {
        let bus: Conductor<u32> = Conductor::new();
        let (_, h) = counter();
        let sub = bus.subscribe("tick", h).unwrap();

        assert_eq!(sub.event_name(), "tick");
        assert_eq!(bus.len(), 1);
        assert!(sub.is_live());
        assert!(bus.contains(sub.id()));
    }

    #[test]
    fn test_empty_event_name_rejected_without_mutation() {
        let bus: Conductor<u32> = Conductor::new();
        let (calls, h) = counter();

        let err = bus.subscribe("", h).unwrap_err();
        assert!(err.is_invalid_argument());
        assert_eq!(bus.len(), 0);

        let err = bus.publish("", 1).unwrap_err();
        assert!(err.is_invalid_argument());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_publish_without_subscribers_is_noop() {
        let bus: Conductor<u32> = Conductor::new();
        assert!(bus.publish("nobody", 7).is_ok());
    }

    #[test]
    fn test_handlers_run_in_registration_order() {
        let bus: Conductor<u32> = Conductor::new();
        let order = Arc::new(Mutex::new(Vec::new()));
        for tag in ["first", "second", "third"] {
            let o = Arc::clone(&order);
            bus.subscribe("e", move |_| o.lock().push(tag)).unwrap();
        }

        bus.publish("e", 0).unwrap();
        assert_eq!(*order.lock(), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_failing_handler_aborts_remaining() {
        let bus: Conductor<u32> = Conductor::new();
        let (before, h_before) = counter();
        let (after, h_after) = counter();
        bus.subscribe("e", h_before).unwrap();
        bus.try_subscribe("e", |_| Err("boom".into())).unwrap();
        bus.subscribe("e", h_after).unwrap();

        let err = bus.publish("e", 1).unwrap_err();
        assert_eq!(err.as_label(), "handler_failed");
        assert_eq!(before.load(Ordering::SeqCst), 1);
        assert_eq!(after.load(Ordering::SeqCst), 0);
        assert_eq!(bus.len(), 3);
    }

    #[test]
    fn test_skip_removed_policy_skips_unsubscribed_mid_publish() {
        let bus: Conductor<u32> =
            Conductor::with_config(Config::default().with_delivery(DeliveryPolicy::SkipRemoved));
        let (calls, h) = counter();

        let victim: Arc<Mutex<Option<Subscription<u32>>>> = Arc::new(Mutex::new(None));
        let v = Arc::clone(&victim);
        bus.subscribe("e", move |_| {
            if let Some(sub) = v.lock().as_ref() {
                sub.unsubscribe();
            }
        })
        .unwrap();
        *victim.lock() = Some(bus.subscribe("e", h).unwrap());

        bus.publish("e", 1).unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(bus.subscriber_count("e"), 1);
    }

    #[test]
    fn test_clones_share_registry() {
        let bus: Conductor<u32> = Conductor::new();
        let other = bus.clone();
        let (calls, h) = counter();
        other.subscribe("e", h).unwrap();

        bus.publish("e", 3).unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(bus.len(), 1);
    }

    #[test]
    fn test_unsubscribe_after_registry_dropped_is_noop() {
        let bus: Conductor<u32> = Conductor::new();
        let (_, h) = counter();
        let sub = bus.subscribe("e", h).unwrap();
        drop(bus);

        assert!(!sub.is_live());
        sub.unsubscribe();
    }

    #[test]
    fn test_debug_lists_events() {
        let bus: Conductor<u32> = Conductor::new();
        let (_, h) = counter();
        bus.subscribe("tick", h).unwrap();

        let out = format!("{bus:?}");
        assert!(out.contains("subscriptions: 1"), "{out}");
        assert!(out.contains("\"tick\""), "{out}");
        assert!(out.contains("Snapshot"), "{out}");
    }

    #[test]
    fn test_handler_unsubscribing_itself_runs_once() {
        for policy in [DeliveryPolicy::Snapshot, DeliveryPolicy::SkipRemoved] {
            let bus: Conductor<u32> =
                Conductor::with_config(Config::default().with_delivery(policy));
            let calls = Arc::new(AtomicUsize::new(0));
            let me: Arc<Mutex<Option<Subscription<u32>>>> = Arc::new(Mutex::new(None));

            let (c, m) = (Arc::clone(&calls), Arc::clone(&me));
            let sub = bus
                .subscribe("once", move |_| {
                    c.fetch_add(1, Ordering::SeqCst);
                    if let Some(sub) = m.lock().as_ref() {
                        sub.unsubscribe();
                    }
                })
                .unwrap();
            *me.lock() = Some(sub);

            bus.publish("once", 1).unwrap();
            bus.publish("once", 2).unwrap();
            assert_eq!(calls.load(Ordering::SeqCst), 1, "policy {policy:?}");
            assert!(bus.is_empty());
        }
    }
}
