//! Synchronous observer notifications.
//!
//! A [`Signal`] holds a list of slots. [`Signal::emit`] runs each of them,
//! in the order they were connected, before returning. Nothing is queued:
//! the calendar widgets live on one UI thread and expect a setter's
//! observers to have run by the time the setter returns.
//!
//! Slots run against a copy of the slot list, so a slot may connect,
//! disconnect or emit on the signal that invoked it. A slot connected during
//! an emission first runs on the following one.
//!
//! # Example
//!
//! ```
//! use light_calendar_core::Signal;
//!
//! let day_tapped = Signal::<u32>::new();
//! let id = day_tapped.connect(|day| println!("tapped day {day}"));
//!
//! day_tapped.emit(18);
//! assert!(day_tapped.disconnect(id));
//! ```

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use slotmap::{SlotMap, new_key_type};

use crate::logging::targets;

new_key_type! {
    /// Handle for one connected slot, used with [`Signal::disconnect`].
    pub struct ConnectionId;
}

type Slot<Args> = Arc<dyn Fn(&Args) + Send + Sync>;

/// A list of callbacks invoked with `&Args` on every emission.
///
/// Use `()` as `Args` for plain "something changed" notifications.
pub struct Signal<Args> {
    slots: Mutex<SlotMap<ConnectionId, Slot<Args>>>,
}

impl<Args: 'static> Default for Signal<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args: 'static> Signal<Args> {
    /// Create a signal with no slots.
    pub fn new() -> Self {
        Self {
            slots: Mutex::new(SlotMap::with_key()),
        }
    }

    /// Add a slot. Keep the returned id to remove it again.
    pub fn connect<F>(&self, slot: F) -> ConnectionId
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        self.slots.lock().insert(Arc::new(slot))
    }

    /// Remove a slot. Returns `false` if `id` was not connected.
    pub fn disconnect(&self, id: ConnectionId) -> bool {
        self.slots.lock().remove(id).is_some()
    }

    /// Number of connected slots.
    pub fn connection_count(&self) -> usize {
        self.slots.lock().len()
    }

    /// Run every slot with `args`.
    pub fn emit(&self, args: Args) {
        let slots: Vec<Slot<Args>> = self.slots.lock().values().cloned().collect();
        if slots.is_empty() {
            return;
        }
        tracing::trace!(target: targets::SIGNAL, slots = slots.len(), "emit");

        for slot in slots {
            slot(&args);
        }
    }
}

impl<Args> fmt::Debug for Signal<Args> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("slots", &self.slots.lock().len())
            .finish()
    }
}

static_assertions::assert_impl_all!(Signal<()>: Send, Sync);
