//! Ids for users created on this side of the wire.
//!
//! The service does not hand out usable ids for new records, so created users get one from
//! a range reserved for the client. Server ids are small integers; ours start at
//! [`CLIENT_ID_BASE`] and only go up, so the two spaces never meet.

use crate::model::UserId;
use std::sync::atomic::{AtomicU64, Ordering};

pub const CLIENT_ID_BASE: u64 = 1_000_000_000;

#[derive(Debug)]
pub struct IdAllocator {
    next: AtomicU64,
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::starting_at(CLIENT_ID_BASE)
    }

    /// Clamped to the reserved range.
    pub fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first.max(CLIENT_ID_BASE)),
        }
    }

    pub fn allocate(&self) -> UserId {
        UserId(self.next.fetch_add(1, Ordering::SeqCst))
    }

    pub fn is_client_id(id: UserId) -> bool {
        id.0 >= CLIENT_ID_BASE
    }
}
