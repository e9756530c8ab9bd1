//! Error types used by the conductor registry and its handlers.
//!
//! This module defines:
//!
//! - [`ConductorError`] errors raised by registry operations (`subscribe`, `publish`).
//! - [`HandlerError`] the boxed error a fallible handler returns to abort delivery.
//!
//! [`ConductorError`] provides helper methods (`as_label`, `as_message`) for logging/metrics.

use thiserror::Error;

/// Error returned by a fallible handler.
///
/// Any `std::error::Error` converts into it with `?` or `.into()`.
pub type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// # Errors produced by the subscription registry.
///
/// Validation failures are raised before any mutation, so a failed `subscribe`
/// never leaves a partial record behind. Handler failures abort the remaining
/// deliveries of the `publish` call that hit them.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum ConductorError {
    /// An argument was missing or empty.
    #[error("invalid argument `{param}`: {reason}")]
    InvalidArgument {
        /// Name of the offending parameter (`event_name`, `handler`).
        param: &'static str,
        /// Short description of what is wrong with it.
        reason: &'static str,
    },

    /// A handler returned an error during `publish`; later handlers were not invoked.
    #[error("handler `{handler}` failed on event `{event}`: {source}")]
    Handler {
        /// Event being published.
        event: String,
        /// Name of the failing handler.
        handler: String,
        /// The error the handler returned.
        source: HandlerError,
    },
}

impl ConductorError {
    pub(crate) fn empty_event_name() -> Self {
        ConductorError::InvalidArgument {
            param: "event_name",
            reason: "must not be empty",
        }
    }

    pub(crate) fn missing_handler() -> Self {
        ConductorError::InvalidArgument {
            param: "handler",
            reason: "missing",
        }
    }

    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use conductor::{Conductor, ConductorError};
    ///
    /// let bus: Conductor<u32> = Conductor::new();
    /// let err = bus.publish("", None).unwrap_err();
    /// assert_eq!(err.as_label(), "invalid_argument");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            ConductorError::InvalidArgument { .. } => "invalid_argument",
            ConductorError::Handler { .. } => "handler_failed",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            ConductorError::InvalidArgument { param, reason } => {
                format!("{param}: {reason}")
            }
            ConductorError::Handler {
                event,
                handler,
                source,
            } => {
                format!("event={event} handler={handler} error={source}")
            }
        }
    }

    /// True for validation failures raised by `subscribe`/`publish`.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, ConductorError::InvalidArgument { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_display() {
        let err = ConductorError::empty_event_name();
        assert_eq!(
            err.to_string(),
            "invalid argument `event_name`: must not be empty"
        );
        assert_eq!(err.as_label(), "invalid_argument");
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_missing_handler_message() {
        let err = ConductorError::missing_handler();
        assert_eq!(err.as_message(), "handler: missing");
    }

    #[test]
    fn test_handler_error_keeps_source() {
        let err = ConductorError::Handler {
            event: "orders".into(),
            handler: "audit".into(),
            source: "disk full".into(),
        };
        assert_eq!(err.as_label(), "handler_failed");
        assert!(!err.is_invalid_argument());
        assert_eq!(
            err.to_string(),
            "handler `audit` failed on event `orders`: disk full"
        );
        let source = std::error::Error::source(&err).map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("disk full"));
    }
}
