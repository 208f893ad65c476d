use crate::model::{UserDraft, UserId};

/// Requests the view may dispatch to the users store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserIntent {
    /// Full resync of the collection from the directory.
    Load,
    /// Delete one user; applied only after the directory confirms.
    Remove(UserId),
    /// Create a user from an already validated draft.
    Create(UserDraft),
}
