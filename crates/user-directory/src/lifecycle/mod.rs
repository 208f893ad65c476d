//! # System Lifecycle
//!
//! Starting, wiring and stopping the users store.
//!
//! The store is constructed without dependencies; the [`Directory`](crate::directory::Directory)
//! is injected as the reducer context when the actor task is spawned. Shutdown is channel
//! driven: once every [`UsersClient`](crate::clients::UsersClient) clone is dropped the run
//! loop ends, listeners are dropped with it, and outcomes of calls still in flight are
//! discarded when they arrive.
//!
//! ```rust,ignore
//! let directory = Arc::new(HttpDirectory::new(DirectoryConfig::default())?);
//! let system = DirectorySystem::start(directory, 32).await?;
//!
//! let (_subscription, _) = system.users.subscribe(|snapshot| render(&snapshot)).await?;
//! system.users.remove(UserId(1)).await?;
//!
//! system.shutdown().await?;
//! ```
//!
//! Logging is initialized separately with
//! [`setup_tracing`](store_actor::tracing::setup_tracing).

pub mod directory_system;

pub use directory_system::*;
