//! # Remote Directory Client
//!
//! The contract the users store relies on to reach the remote user directory, plus its
//! implementations.
//!
//! - [`Directory`] - the three operations (list, delete, create)
//! - [`HttpDirectory`] - reqwest-backed implementation
//! - [`mock::MockDirectory`] - scripted implementation for tests
//!
//! Each call resolves to a value or a [`DirectoryError`]. Nothing is retried here; calls can
//! only be "cancelled" by ignoring their result.

pub mod config;
pub mod error;
pub mod http;
pub mod ids;
pub mod mock;

pub use config::*;
pub use error::*;
pub use http::HttpDirectory;
pub use ids::*;

use crate::model::{User, UserDraft, UserId};
use async_trait::async_trait;

#[async_trait]
pub trait Directory: Send + Sync {
    /// All users, in the order the service sent them.
    async fn list_users(&self) -> Result<Vec<User>, DirectoryError>;

    /// Deletes `id`; echoes `id` back on any 2xx answer.
    async fn delete_user(&self, id: UserId) -> Result<UserId, DirectoryError>;

    /// Creates a user. The returned record carries a client-side id that cannot collide
    /// with server ids, and exactly the draft's fields.
    async fn create_user(&self, draft: UserDraft) -> Result<User, DirectoryError>;
}
