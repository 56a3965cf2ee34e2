//! Window-resize subscriptions as explicit scoped resources.
//!
//! The hosting framework owns the actual event loop; a mounted view only
//! ever holds a [`SubscriptionId`] it is obligated to hand back on
//! deactivation. Modeling the listener as a resource keeps the lifecycle
//! contract testable without a window system.

use std::collections::BTreeSet;

/// Opaque handle for one active resize subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    /// Wraps a raw id issued by an external event source.
    #[must_use]
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Contract implemented by any resize event source.
pub trait ResizeEvents {
    fn subscribe(&mut self) -> SubscriptionId;
    fn unsubscribe(&mut self, id: SubscriptionId);
}

/// In-process event source for tests and headless hosts.
#[derive(Debug, Default)]
pub struct ResizeEventHub {
    next_id: u64,
    active: BTreeSet<SubscriptionId>,
}

impl ResizeEventHub {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    #[must_use]
    pub fn is_active(&self, id: SubscriptionId) -> bool {
        self.active.contains(&id)
    }
}

impl ResizeEvents for ResizeEventHub {
    fn subscribe(&mut self) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.active.insert(id);
        id
    }

    fn unsubscribe(&mut self, id: SubscriptionId) {
        self.active.remove(&id);
    }
}
