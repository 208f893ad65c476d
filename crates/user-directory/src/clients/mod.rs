//! Typed wrappers around store handles.

pub mod users_client;

pub use users_client::UsersClient;
