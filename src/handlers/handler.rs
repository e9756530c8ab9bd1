//! # Event handler abstraction.
//!
//! Provides [`Handler`] the callable invoked by `publish` for every matching
//! subscription, and [`HandlerRef`] the shared handle the registry stores.
//!
//! ## Rules
//! - Handlers run synchronously on the publisher's thread, in registration order.
//! - Returning `Err` aborts delivery to the handlers after this one.
//! - A panic unwinds through `publish` unchanged; the registry stays consistent
//!   because no lock is held while handlers run.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use conductor::{Conductor, Handler, HandlerError, HandlerRef};
//!
//! struct Audit;
//!
//! impl Handler<String> for Audit {
//!     fn handle(&self, payload: Option<&String>) -> Result<(), HandlerError> {
//!         if payload.is_none() {
//!             return Err("audit entries need a payload".into());
//!         }
//!         Ok(())
//!     }
//!
//!     fn name(&self) -> &str { "audit" }
//! }
//!
//! let bus: Conductor<String> = Conductor::new();
//! let audit: HandlerRef<String> = Arc::new(Audit);
//! let sub = bus.subscribe_handler("orders", audit.clone()).unwrap();
//! assert!(Arc::ptr_eq(sub.handler(), &audit));
//! ```

use std::sync::Arc;

use crate::error::HandlerError;

/// Shared handle to a handler (`Arc<dyn Handler<P>>`).
pub type HandlerRef<P> = Arc<dyn Handler<P>>;

/// Synchronous listener for payloads of type `P`.
///
/// ### Implementation requirements
/// - Keep work short; a slow handler delays every handler registered after it.
/// - May call back into the same registry (`subscribe`, `unsubscribe`, `publish`).
pub trait Handler<P>: Send + Sync + 'static {
    /// Processes one publish.
    ///
    /// `payload` is `None` when the event was published without one.
    fn handle(&self, payload: Option<&P>) -> Result<(), HandlerError>;

    /// Returns the handler name used in logs and in `ConductorError::Handler`.
    ///
    /// The default uses `type_name::<Self>()`, which can be verbose - override it when possible.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}
