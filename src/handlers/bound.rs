//! # Context-bound handler (`Bound`)
//!
//! [`Bound`] permanently ties a handler closure to a context object. The
//! context is captured once, when the handler is built, and every invocation
//! receives exactly that object as its first argument; no caller can
//! substitute another one.
//!
//! ```text
//! Bound { context: Arc<C>, f } ──handle(p)──► f(&*context, p)
//! ```

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::error::HandlerError;
use crate::handlers::handler::Handler;

/// Handler bound to a shared context object.
pub struct Bound<C, F> {
    name: Cow<'static, str>,
    context: Arc<C>,
    f: F,
}

impl<C, F> Bound<C, F> {
    /// Binds `f` to `context`.
    pub fn new(name: impl Into<Cow<'static, str>>, context: Arc<C>, f: F) -> Self {
        Self {
            name: name.into(),
            context,
            f,
        }
    }

    /// Binds and returns the handler as a shared handle.
    pub fn arc(name: impl Into<Cow<'static, str>>, context: Arc<C>, f: F) -> Arc<Self> {
        Arc::new(Self::new(name, context, f))
    }

    /// The context every invocation observes.
    pub fn context(&self) -> &Arc<C> {
        &self.context
    }
}

impl<C, F> fmt::Debug for Bound<C, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bound")
            .field("name", &self.name)
            .field("context", &std::any::type_name::<C>())
            .finish()
    }
}

impl<P, C, F> Handler<P> for Bound<C, F>
where
    C: Send + Sync + 'static,
    F: Fn(&C, Option<&P>) -> Result<(), HandlerError> + Send + Sync + 'static,
{
    fn handle(&self, payload: Option<&P>) -> Result<(), HandlerError> {
        (self.f)(self.context.as_ref(), payload)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    struct Counter {
        hits: AtomicU32,
    }

    #[test]
    fn test_invocation_sees_bound_context() {
        let ctx = Arc::new(Counter {
            hits: AtomicU32::new(0),
        });
        let expected = Arc::clone(&ctx);
        let h = Bound::new(
            "counter",
            Arc::clone(&ctx),
            move |c: &Counter, _: Option<&()>| -> Result<(), HandlerError> {
                assert!(std::ptr::eq(c, Arc::as_ptr(&expected)));
                c.hits.fetch_add(1, Ordering::SeqCst);
                Ok(())
            },
        );

        Handler::<()>::handle(&h, None).unwrap();
        Handler::<()>::handle(&h, Some(&())).unwrap();
        assert_eq!(ctx.hits.load(Ordering::SeqCst), 2);
        assert!(Arc::ptr_eq(h.context(), &ctx));
    }
}
