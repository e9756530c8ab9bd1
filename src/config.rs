//! # Registry configuration.
//!
//! Provides [`Config`] settings applied when a [`Conductor`](crate::Conductor)
//! is constructed. The registry never re-reads them afterwards.
//!
//! ## Sentinel values
//! - `channels_capacity = 0` → no pre-allocation of the per-name index

use crate::policies::DeliveryPolicy;

/// Construction settings for a [`Conductor`](crate::Conductor).
///
/// ## Field semantics
/// - `delivery`: what happens to subscriptions removed during a running publish
/// - `channels_capacity`: expected number of distinct event names (`0` = none reserved)
#[derive(Clone, Debug)]
pub struct Config {
    /// Re-entrancy rule for unsubscribes that happen mid-publish.
    pub delivery: DeliveryPolicy,

    /// Number of distinct event names to reserve room for up front.
    pub channels_capacity: usize,
}

impl Config {
    /// Returns the index pre-allocation as an `Option`.
    ///
    /// - `None` → start with an unallocated index
    /// - `Some(n)` → reserve room for `n` event names
    #[inline]
    pub fn reserved_channels(&self) -> Option<usize> {
        if self.channels_capacity == 0 {
            None
        } else {
            Some(self.channels_capacity)
        }
    }

    /// Returns a copy with the given delivery policy.
    #[must_use]
    pub fn with_delivery(mut self, delivery: DeliveryPolicy) -> Self {
        self.delivery = delivery;
        self
    }
}

impl Default for Config {
    /// Default configuration:
    ///
    /// - `delivery = DeliveryPolicy::Snapshot`
    /// - `channels_capacity = 0` (grow on demand)
    fn default() -> Self {
        Self {
            delivery: DeliveryPolicy::default(),
            channels_capacity: 0,
        }
    }
}
