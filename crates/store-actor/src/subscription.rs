//! # Subscriptions
//!
//! A [`Subscription`] is the disposal handle returned when a listener is registered. The
//! store and the handle share a liveness flag; once the handle is dropped the store stops
//! calling the listener and prunes it on the next transition.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Keeps a listener registered for as long as it is alive.
#[must_use = "dropping a Subscription unsubscribes the listener"]
#[derive(Debug)]
pub struct Subscription {
    active: Arc<AtomicBool>,
}

impl Subscription {
    pub(crate) fn new() -> (Self, Arc<AtomicBool>) {
        let active = Arc::new(AtomicBool::new(true));
        (
            Self {
                active: Arc::clone(&active),
            },
            active,
        )
    }

    /// Stop receiving snapshots. Equivalent to dropping the handle.
    pub fn unsubscribe(self) {}

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.active.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drop_clears_flag() {
        let (subscription, flag) = Subscription::new();
        assert!(subscription.is_active());
        subscription.unsubscribe();
        assert!(!flag.load(Ordering::Acquire));
    }
}
