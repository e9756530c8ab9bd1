use std::borrow::Cow;
use std::sync::Arc;

use crate::core::conductor::{validate_event, Conductor};
use crate::core::subscription::Subscription;
use crate::error::{ConductorError, HandlerError};
use crate::handlers::{Bound, HandlerFn, HandlerRef};

/// Builder for a subscription with fluent API.
///
/// Nothing is registered until [`subscribe`](Self::subscribe) is called; a
/// builder without a handler fails there with `InvalidArgument`.
///
/// ```
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicU64, Ordering};
/// use conductor::Conductor;
///
/// struct Totals { sum: AtomicU64 }
///
/// let bus: Conductor<u64> = Conductor::new();
/// let totals = Arc::new(Totals { sum: AtomicU64::new(0) });
///
/// bus.subscriber("paid")
///     .bind(Arc::clone(&totals), |t: &Totals, amount: Option<&u64>| {
///         t.sum.fetch_add(amount.copied().unwrap_or(0), Ordering::SeqCst);
///         Ok(())
///     })
///     .subscribe()?;
///
/// bus.publish("paid", 40)?;
/// bus.publish("paid", 2)?;
/// assert_eq!(totals.sum.load(Ordering::SeqCst), 42);
/// # Ok::<(), conductor::ConductorError>(())
/// ```
pub struct SubscribeBuilder<P> {
    conductor: Conductor<P>,
    event: String,
    handler: Option<HandlerRef<P>>,
}

impl<P: 'static> SubscribeBuilder<P> {
    /// Creates a builder targeting `event` on `conductor`.
    pub fn new(conductor: Conductor<P>, event: impl Into<String>) -> Self {
        Self {
            conductor,
            event: event.into(),
            handler: None,
        }
    }

    /// Uses an existing handler reference.
    pub fn handler(mut self, handler: HandlerRef<P>) -> Self {
        self.handler = Some(handler);
        self
    }

    /// Uses a named, fallible closure.
    pub fn handler_fn<F>(mut self, name: impl Into<Cow<'static, str>>, f: F) -> Self
    where
        F: Fn(Option<&P>) -> Result<(), HandlerError> + Send + Sync + 'static,
    {
        self.handler = Some(HandlerFn::arc(name, f));
        self
    }

    /// Uses a fallible closure permanently bound to `context`.
    pub fn bind<C, F>(mut self, context: Arc<C>, f: F) -> Self
    where
        C: Send + Sync + 'static,
        F: Fn(&C, Option<&P>) -> Result<(), HandlerError> + Send + Sync + 'static,
    {
        self.handler = Some(Bound::arc(std::any::type_name::<F>(), context, f));
        self
    }

    /// Validates and registers the subscription.
    ///
    /// # Errors
    /// [`ConductorError::InvalidArgument`] if the event name is empty or no handler was set.
    pub fn subscribe(self) -> Result<Subscription<P>, ConductorError> {
        validate_event(&self.event)?;
        let handler = self.handler.ok_or_else(ConductorError::missing_handler)?;
        Ok(self.conductor.attach(&self.event, handler))
    }
}

impl<P: 'static> std::fmt::Debug for SubscribeBuilder<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubscribeBuilder")
            .field("event", &self.event)
            .field("handler", &self.handler.as_ref().map(|h| h.name().to_string()))
            .finish()
    }
}
