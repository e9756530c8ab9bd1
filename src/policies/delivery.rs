//! # Delivery policy for re-entrant unsubscribes.
//!
//! `publish` takes a snapshot of the matching subscriptions before invoking
//! any handler. [`DeliveryPolicy`] decides what happens to a snapshotted
//! subscription that is removed *while that same publish is still running*
//! (typically by an earlier handler in the same fan-out).
//!
//! ```text
//! publish("A") ──► snapshot [s1, s2, s3]
//!                    │
//!                    ├─► s1.handle()  ── s1 calls s2.unsubscribe()
//!                    ├─► s2 ?         Snapshot    → s2.handle() still runs
//!                    │                SkipRemoved → s2 is skipped
//!                    └─► s3.handle()
//! ```
//!
//! Independent of the policy:
//! - subscriptions added during a publish are never notified by that publish;
//! - every subscription present when publish began is visited at most once, in order.

/// Policy controlling delivery to subscriptions removed mid-publish.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeliveryPolicy {
    /// Deliver to everything that matched when publish began (default).
    Snapshot,
    /// Re-check liveness before each handler and skip removed subscriptions.
    SkipRemoved,
}

impl DeliveryPolicy {
    /// True if liveness must be re-checked before each invocation.
    #[inline]
    pub fn rechecks_liveness(self) -> bool {
        matches!(self, DeliveryPolicy::SkipRemoved)
    }
}

impl Default for DeliveryPolicy {
    /// Returns [`DeliveryPolicy::Snapshot`].
    fn default() -> Self {
        DeliveryPolicy::Snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_snapshot() {
        assert_eq!(DeliveryPolicy::default(), DeliveryPolicy::Snapshot);
        assert!(!DeliveryPolicy::Snapshot.rechecks_liveness());
        assert!(DeliveryPolicy::SkipRemoved.rechecks_liveness());
    }
}
