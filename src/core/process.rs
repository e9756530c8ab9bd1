//! # Process-wide registry.
//!
//! [`global()`] is a single [`Conductor`] shared by the whole process. It is
//! created empty on first use, lives for the process lifetime and is never torn
//! down. Payloads are [`serde_json::Value`], so unrelated parts of a program can
//! exchange arbitrary data without agreeing on a Rust type.
//!
//! Prefer an owned `Conductor<P>` where possible: separate instances do not
//! share state, which keeps tests independent of each other.

use once_cell::sync::Lazy;
use serde_json::Value;

use crate::core::conductor::Conductor;
use crate::core::subscription::Subscription;
use crate::error::ConductorError;

static GLOBAL: Lazy<Conductor<Value>> = Lazy::new(Conductor::new);

/// Returns the process-wide registry.
pub fn global() -> &'static Conductor<Value> {
    &GLOBAL
}

/// Subscribes `f` to `event` on the process-wide registry.
///
/// # Errors
/// [`ConductorError::InvalidArgument`] if `event` is empty.
pub fn subscribe<F>(event: &str, f: F) -> Result<Subscription<Value>, ConductorError>
where
    F: Fn(Option<&Value>) + Send + Sync + 'static,
{
    global().subscribe(event, f)
}

/// Publishes `payload` to `event` on the process-wide registry.
///
/// # Errors
/// See [`Conductor::publish`].
pub fn publish(event: &str, payload: impl Into<Option<Value>>) -> Result<(), ConductorError> {
    global().publish(event, payload)
}
