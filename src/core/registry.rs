//! # Subscription registry - shared membership state.
//!
//! [`Registry`] owns every live subscription record, grouped by event name.
//! Each record carries a registry-unique id; removal is by id, so two
//! subscriptions with the same name and the same handler stay independent.
//!
//! ## Architecture
//! ```text
//! Registry
//!   └─ Mutex<HashMap<event_name, Vec<Entry { id, handler }>>>
//!        "orders"  → [#1 h_a, #4 h_b]   (push order == registration order)
//!        "refunds" → [#2 h_c]
//! ```
//!
//! ## Rules
//! - Ids start at 1 and are assigned under the lock, so per-name order matches id order.
//! - A name whose last record is removed is dropped from the index.
//! - The lock is never held while a handler runs; `publish` works on a [`snapshot`](Registry::snapshot).

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::config::Config;
use crate::handlers::HandlerRef;
use crate::policies::DeliveryPolicy;

/// One live subscription record.
pub(crate) struct Entry<P> {
    pub(crate) id: u64,
    pub(crate) handler: HandlerRef<P>,
}

impl<P> Clone for Entry<P> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            handler: Arc::clone(&self.handler),
        }
    }
}

struct State<P> {
    channels: HashMap<Arc<str>, Vec<Entry<P>>>,
    next_id: u64,
}

/// Membership state shared by a `Conductor` and its subscriptions.
pub(crate) struct Registry<P> {
    state: Mutex<State<P>>,
    config: Config,
}

impl<P: 'static> Registry<P> {
    /// Creates an empty registry.
    pub(crate) fn new(config: Config) -> Self {
        let channels = match config.reserved_channels() {
            Some(n) => HashMap::with_capacity(n),
            None => HashMap::new(),
        };
        Self {
            state: Mutex::new(State {
                channels,
                next_id: 1,
            }),
            config,
        }
    }

    pub(crate) fn config(&self) -> &Config {
        &self.config
    }

    pub(crate) fn delivery(&self) -> DeliveryPolicy {
        self.config.delivery
    }

    /// Appends a record for `event` and returns its id.
    pub(crate) fn insert(&self, event: &Arc<str>, handler: HandlerRef<P>) -> u64 {
        let mut state = self.state.lock();
        let id = state.next_id;
        state.next_id += 1;
        state
            .channels
            .entry(Arc::clone(event))
            .or_default()
            .push(Entry { id, handler });
        id
    }

    /// Removes the record `id` under `event`.
    ///
    /// Returns `false` if it was already gone.
    pub(crate) fn remove(&self, event: &str, id: u64) -> bool {
        let mut state = self.state.lock();
        let Some(entries) = state.channels.get_mut(event) else {
            return false;
        };
        // Entries are sorted by id.
        let Ok(pos) = entries.binary_search_by_key(&id, |e| e.id) else {
            return false;
        };
        entries.remove(pos);
        if entries.is_empty() {
            state.channels.remove(event);
        }
        true
    }

    /// True if record `id` is still registered under `event`.
    pub(crate) fn is_live(&self, event: &str, id: u64) -> bool {
        let state = self.state.lock();
        state
            .channels
            .get(event)
            .is_some_and(|entries| entries.binary_search_by_key(&id, |e| e.id).is_ok())
    }

    /// True if record `id` is registered under any name.
    pub(crate) fn contains(&self, id: u64) -> bool {
        let state = self.state.lock();
        state
            .channels
            .values()
            .any(|entries| entries.binary_search_by_key(&id, |e| e.id).is_ok())
    }

    /// Copies the records currently registered under `event`, in registration order.
    pub(crate) fn snapshot(&self, event: &str) -> Vec<Entry<P>> {
        let state = self.state.lock();
        state.channels.get(event).cloned().unwrap_or_default()
    }

    /// Total number of live records.
    pub(crate) fn len(&self) -> usize {
        let state = self.state.lock();
        state.channels.values().map(Vec::len).sum()
    }

    /// Number of live records under `event`.
    pub(crate) fn count(&self, event: &str) -> usize {
        let state = self.state.lock();
        state.channels.get(event).map_or(0, Vec::len)
    }

    /// Sorted list of names with at least one live record.
    pub(crate) fn names(&self) -> Vec<String> {
        let state = self.state.lock();
        let mut names: Vec<String> = state.channels.keys().map(|k| k.to_string()).collect();
        names.sort_unstable();
        names
    }
}
