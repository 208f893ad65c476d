use crate::model::{User, UserId};
use std::collections::BTreeSet;

/// Lifecycle of the list itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListStatus {
    /// Nothing requested yet.
    #[default]
    Idle,
    Loading,
    /// `items` reflects the last successful load plus confirmed local changes.
    Ready,
    /// The last load failed; `items` may be stale and should not be shown as current.
    Failed,
}

/// Lifecycle of the create form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CreateStatus {
    #[default]
    Idle,
    Creating,
}

/// The users store's entire observable state at one instant.
///
/// # Invariants
/// - `items` never holds two users with the same id.
/// - an id is in `pending_deletes` for at most one in-flight delete.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectionSnapshot {
    /// Users in arrival/creation order.
    pub items: Vec<User>,
    pub list_status: ListStatus,
    /// Last failure of any operation. Cleared when a load starts.
    pub last_error: Option<String>,
    pub pending_deletes: BTreeSet<UserId>,
    pub create_status: CreateStatus,
}

impl CollectionSnapshot {
    pub fn contains(&self, id: UserId) -> bool {
        self.items.iter().any(|user| user.id == id)
    }

    pub fn user(&self, id: UserId) -> Option<&User> {
        self.items.iter().find(|user| user.id == id)
    }

    pub fn is_deleting(&self, id: UserId) -> bool {
        self.pending_deletes.contains(&id)
    }

    pub fn is_loading(&self) -> bool {
        self.list_status == ListStatus::Loading
    }

    pub fn is_creating(&self) -> bool {
        self.create_status == CreateStatus::Creating
    }

    /// True when no operation is in flight.
    pub fn is_settled(&self) -> bool {
        !self.is_loading() && !self.is_creating() && self.pending_deletes.is_empty()
    }
}
