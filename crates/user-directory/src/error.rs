//! Error types for the users client.

use crate::validation::ValidationError;
use thiserror::Error;

/// Errors returned by [`UsersClient`](crate::clients::UsersClient) before or while
/// handing an intent to the store.
///
/// Directory failures are not here: they end up in the snapshot's `last_error`.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum UsersError {
    /// The draft was refused before dispatch.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The store task is gone or dropped the request.
    #[error("Users store unavailable: {0}")]
    StoreUnavailable(String),
}
