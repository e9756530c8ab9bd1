//! # Handler abstractions.
//!
//! This module provides the callable side of a subscription:
//! - [`Handler`] - trait invoked synchronously for each matching publish
//! - [`HandlerRef`] - shared reference to a handler (`Arc<dyn Handler<P>>`)
//! - [`HandlerFn`] - closure-backed implementation
//! - [`Bound`] - closure permanently bound to a context object

mod bound;
mod handler;
mod handler_fn;

pub use bound::Bound;
pub use handler::{Handler, HandlerRef};
pub use handler_fn::HandlerFn;
