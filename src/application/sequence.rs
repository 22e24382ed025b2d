//! Last-request-wins bookkeeping for per-key asynchronous responses.
//!
//! A view that fires a request per selection (say, a user's profile image)
//! must not let a slow earlier response overwrite a newer one. Each request
//! takes a [`RequestTicket`]; only the ticket issued last for a key may store
//! its response.

use std::collections::HashMap;
use std::hash::Hash;

use parking_lot::Mutex;
use tracing::debug;

/// Handle for one in-flight request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTicket<K> {
    key: K,
    sequence: u64,
}

impl<K> RequestTicket<K> {
    #[must_use]
    pub fn key(&self) -> &K {
        &self.key
    }

    #[must_use]
    pub const fn sequence(&self) -> u64 {
        self.sequence
    }
}

#[derive(Debug)]
struct Slot<V> {
    issued: u64,
    value: Option<V>,
}

/// Tracks the latest request per key and the value it produced.
///
/// Thread-safe; tickets may be redeemed from any thread.
#[derive(Debug)]
pub struct ResponseSequencer<K, V> {
    slots: Mutex<HashMap<K, Slot<V>>>,
}

impl<K, V> ResponseSequencer<K, V>
where
    K: Eq + Hash + Clone + std::fmt::Debug,
{
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: Mutex::new(HashMap::new()),
        }
    }

    /// Start a request for `key`, superseding any earlier one.
    pub fn begin(&self, key: K) -> RequestTicket<K> {
        let mut slots = self.slots.lock();
        let slot = slots.entry(key.clone()).or_insert(Slot {
            issued: 0,
            value: None,
        });
        slot.issued += 1;
        RequestTicket {
            key,
            sequence: slot.issued,
        }
    }

    /// Store `value` if `ticket` is still the latest request for its key.
    ///
    /// Returns `false` (and drops the value) for superseded tickets.
    pub fn accept(&self, ticket: &RequestTicket<K>, value: V) -> bool {
        let mut slots = self.slots.lock();
        match slots.get_mut(&ticket.key) {
            Some(slot) if slot.issued == ticket.sequence => {
                slot.value = Some(value);
                true
            }
            Some(slot) => {
                debug!(
                    key = ?ticket.key,
                    sequence = ticket.sequence,
                    latest = slot.issued,
                    "dropping stale response"
                );
                false
            }
            None => false,
        }
    }

    /// Whether `ticket` has been superseded by a newer request.
    #[must_use]
    pub fn is_stale(&self, ticket: &RequestTicket<K>) -> bool {
        self.slots
            .lock()
            .get(&ticket.key)
            .map_or(true, |slot| slot.issued != ticket.sequence)
    }

    /// Drop the value stored for `key` and invalidate its outstanding tickets.
    ///
    /// The sequence counter is kept so tickets issued before the clear never
    /// match a ticket issued after it.
    pub fn clear(&self, key: &K) {
        if let Some(slot) = self.slots.lock().get_mut(key) {
            slot.issued += 1;
            slot.value = None;
        }
    }
}

impl<K, V> ResponseSequencer<K, V>
where
    K: Eq + Hash + Clone + std::fmt::Debug,
    V: Clone,
{
    /// The most recently accepted value for `key`.
    #[must_use]
    pub fn latest(&self, key: &K) -> Option<V> {
        self.slots.lock().get(key).and_then(|slot| slot.value.clone())
    }
}

impl<K, V> Default for ResponseSequencer<K, V>
where
    K: Eq + Hash + Clone + std::fmt::Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
