//! # conductor
//!
//! **Conductor** is a lightweight, in-process publish/subscribe registry.
//!
//! Callers register interest in a named event; publishers fan a payload out to
//! every handler currently registered for that name, synchronously and in
//! registration order, on the publisher's own thread.
//!
//! ## Architecture
//! ```text
//!   subscribe("orders", h1)   subscribe("orders", h2)   subscribe("refunds", h3)
//!            │                         │                          │
//!            ▼                         ▼                          ▼
//! ┌───────────────────────────────────────────────────────────────────────┐
//! │  Conductor<P>  (Arc-backed, cloneable)                                │
//! │    Registry: Mutex<HashMap<event_name, Vec<Entry { id, handler }>>>   │
//! │      "orders"  → [#1 h1, #2 h2]                                       │
//! │      "refunds" → [#3 h3]                                              │
//! └───────────────────────────────┬───────────────────────────────────────┘
//!                                 │ publish("orders", p)
//!                                 ▼
//!                    snapshot [#1 h1, #2 h2]  (lock released)
//!                                 │
//!                     h1.handle(Some(&p)) ─► h2.handle(Some(&p))
//! ```
//!
//! ### Lifecycle
//! ```text
//! subscribe ──► Subscription (Live) ──unsubscribe()──► Removed
//!                                     unsubscribe() again ─► no-op
//! ```
//!
//! ## Features
//! | Area              | Description                                                      | Key types                                   |
//! |-------------------|------------------------------------------------------------------|---------------------------------------------|
//! | **Registry**      | Subscribe, publish, introspect.                                  | [`Conductor`], [`Subscription`]             |
//! | **Handlers**      | Closures, trait objects, context-bound closures.                 | [`Handler`], [`HandlerFn`], [`Bound`]       |
//! | **Builder**       | Fluent subscription with deferred validation.                    | [`SubscribeBuilder`]                        |
//! | **Policies**      | Delivery to subscriptions removed during a running publish.      | [`DeliveryPolicy`]                          |
//! | **Errors**        | Typed errors for validation and handler failures.                | [`ConductorError`], [`HandlerError`]        |
//! | **Configuration** | Registry construction settings.                                  | [`Config`]                                  |
//! | **Process-wide**  | Shared registry over `serde_json::Value` payloads.               | [`global()`], [`subscribe()`], [`publish()`]|
//!
//! ## Logging
//! Registry operations emit [`tracing`] events (`debug` for subscription
//! changes, `trace` for publishes, `warn` for handler failures). Install any
//! `tracing` subscriber in the application to see them.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicU32, Ordering};
//! use conductor::{Conductor, ConductorError};
//!
//! fn main() -> Result<(), ConductorError> {
//!     let bus: Conductor<u32> = Conductor::new();
//!     let total = Arc::new(AtomicU32::new(0));
//!
//!     let t = Arc::clone(&total);
//!     let sub = bus.subscribe("score", move |points| {
//!         t.fetch_add(points.copied().unwrap_or(0), Ordering::SeqCst);
//!     })?;
//!
//!     bus.publish("score", 10)?;
//!     bus.publish("other", 99)?;
//!     sub.unsubscribe();
//!     bus.publish("score", 10)?;
//!
//!     assert_eq!(total.load(Ordering::SeqCst), 10);
//!     Ok(())
//! }
//! ```
mod config;
mod core;
mod error;
mod handlers;
mod policies;

// ---- Public re-exports ----

pub use crate::core::{global, publish, subscribe, Conductor, SubscribeBuilder, Subscription};
pub use config::Config;
pub use error::{ConductorError, HandlerError};
pub use handlers::{Bound, Handler, HandlerFn, HandlerRef};
pub use policies::DeliveryPolicy;
