//! # Function-backed handler (`HandlerFn`)
//!
//! [`HandlerFn`] wraps a closure `F: Fn(Option<&P>) -> Result<(), HandlerError>`.
//! The closure is called once per matching publish; shared state goes through
//! `Arc<...>` captured by the closure.
//!
//! ## Example
//! ```rust
//! use conductor::{HandlerError, HandlerFn, HandlerRef};
//!
//! let h: HandlerRef<u32> = HandlerFn::arc("even-only", |n: Option<&u32>| {
//!     match n {
//!         Some(n) if n % 2 == 1 => Err(HandlerError::from(format!("odd: {n}"))),
//!         _ => Ok(()),
//!     }
//! });
//!
//! assert_eq!(h.name(), "even-only");
//! assert!(h.handle(Some(&2)).is_ok());
//! assert!(h.handle(Some(&3)).is_err());
//! ```

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::error::HandlerError;
use crate::handlers::handler::Handler;

/// Function-backed handler implementation.
pub struct HandlerFn<F> {
    name: Cow<'static, str>,
    f: F,
}

impl<F> HandlerFn<F> {
    /// Creates a new function-backed handler.
    ///
    /// Prefer [`HandlerFn::arc`] when you immediately need a [`HandlerRef`](crate::HandlerRef).
    pub fn new(name: impl Into<Cow<'static, str>>, f: F) -> Self {
        Self {
            name: name.into(),
            f,
        }
    }

    /// Creates the handler and returns it as a shared handle.
    pub fn arc(name: impl Into<Cow<'static, str>>, f: F) -> Arc<Self> {
        Arc::new(Self::new(name, f))
    }
}

impl<F> fmt::Debug for HandlerFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerFn").field("name", &self.name).finish()
    }
}

impl<P, F> Handler<P> for HandlerFn<F>
where
    F: Fn(Option<&P>) -> Result<(), HandlerError> + Send + Sync + 'static,
{
    fn handle(&self, payload: Option<&P>) -> Result<(), HandlerError> {
        (self.f)(payload)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::HandlerRef;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_closure_receives_payload() {
        let seen = Arc::new(AtomicUsize::new(0));
        let s = Arc::clone(&seen);
        let h: HandlerRef<usize> =
            HandlerFn::arc("sum", move |n: Option<&usize>| -> Result<(), HandlerError> {
                s.fetch_add(n.copied().unwrap_or(100), Ordering::SeqCst);
                Ok(())
            });

        h.handle(Some(&5)).unwrap();
        h.handle(None).unwrap();
        assert_eq!(seen.load(Ordering::SeqCst), 105);
        assert_eq!(h.name(), "sum");
    }

    #[test]
    fn test_closure_error_is_returned() {
        let h: HandlerRef<()> =
            HandlerFn::arc("fails", |_: Option<&()>| -> Result<(), HandlerError> {
                Err("nope".into())
            });
        let err = h.handle(None).unwrap_err();
        assert_eq!(err.to_string(), "nope");
    }
}
