//! # User Directory
//!
//! A user-management store kept in sync with a remote REST user directory.
//!
//! ## Core Components
//!
//! - **[model]**: [`User`](model::User), the [`CollectionSnapshot`](model::CollectionSnapshot)
//!   the store publishes, and the [`UserIntent`](model::UserIntent)s it accepts.
//! - **[directory]**: the remote client contract ([`Directory`](directory::Directory)), its
//!   HTTP implementation and a scripted mock.
//! - **[store]**: the reduction rules ([`UsersReducer`](store::UsersReducer)) run by a
//!   [`store_actor::StoreActor`].
//! - **[clients]**: [`UsersClient`](clients::UsersClient), the typed API the view uses.
//! - **[view]**: what the screen shows for a snapshot.
//! - **[lifecycle]**: [`DirectorySystem`](lifecycle::DirectorySystem) starts and stops it all.
//!
//! ## Flow
//!
//! ```text
//! UsersClient::remove(id) → begin: id pending → listeners
//!                               └─ DELETE /users/{id}
//!                                      └─ apply: item removed, id no longer pending → listeners
//! ```
//!
//! ## Testing
//!
//! [`directory::mock::MockDirectory`] holds directory calls until the test releases them, so
//! completion order is part of the test.

pub mod clients;
pub mod directory;
pub mod error;
pub mod lifecycle;
pub mod model;
pub mod store;
pub mod validation;
pub mod view;
