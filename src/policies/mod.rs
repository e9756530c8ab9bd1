//! Delivery policies.
//!
//! ## Contents
//! - [`DeliveryPolicy`] whether a subscription removed during an in-progress
//!   publish still receives that publish.
//!
//! ## Quick wiring
//! ```text
//! Config { delivery: DeliveryPolicy, .. }
//!      └─► Conductor::publish checks delivery.rechecks_liveness()
//!          before each handler of the snapshot
//! ```

mod delivery;

pub use delivery::DeliveryPolicy;
