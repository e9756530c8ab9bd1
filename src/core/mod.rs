//! Registry core: membership and delivery.
//!
//! The public API from this module is [`Conductor`], its [`Subscription`]
//! handles, the [`SubscribeBuilder`] and the process-wide [`global()`] instance.
//!
//! Internal modules:
//! - [`registry`]: id-keyed membership state guarded by a mutex;
//! - [`conductor`]: validation, snapshot-then-dispatch publish;
//! - [`subscription`]: per-record handle with idempotent unsubscribe;
//! - [`builder`]: fluent subscription with deferred validation;
//! - [`process`]: lazily created process-wide registry.

mod builder;
mod conductor;
mod process;
mod registry;
mod subscription;

pub use builder::SubscribeBuilder;
pub use conductor::Conductor;
pub use process::{global, publish, subscribe};
pub use subscription::Subscription;
