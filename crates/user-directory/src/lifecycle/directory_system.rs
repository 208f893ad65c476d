use crate::clients::UsersClient;
use crate::directory::Directory;
use crate::error::UsersError;
use crate::store::UsersReducer;
use std::sync::Arc;
use store_actor::StoreActor;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// A running users store and the client to reach it.
pub struct DirectorySystem {
    /// Client for the users store. Clone it freely; the store lives until every clone is gone.
    pub users: UsersClient,

    handle: JoinHandle<()>,
}

impl DirectorySystem {
    /// Spawns the store with `directory` as its context. The snapshot starts empty and `Idle`.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(directory: Arc<dyn Directory>, buffer_size: usize) -> Self {
        let (actor, handle) = StoreActor::<UsersReducer>::new(buffer_size);
        let handle_task = tokio::spawn(actor.run(directory));
        Self {
            users: UsersClient::new(handle),
            handle: handle_task,
        }
    }

    /// Like [`new`](Self::new), then issues the initial `Load`, as the list does when it
    /// first appears.
    pub async fn start(
        directory: Arc<dyn Directory>,
        buffer_size: usize,
    ) -> Result<Self, UsersError> {
        let system = Self::new(directory, buffer_size);
        system.users.load().await?;
        Ok(system)
    }

    /// Drops this system's client and waits for the store task to finish.
    ///
    /// Clones of `users` held elsewhere keep the store alive; drop them first.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if the store stopped cleanly
    /// - `Err(String)` if the store task panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down users store...");
        drop(self.users);

        if let Err(e) = self.handle.await {
            error!("Store task failed: {:?}", e);
            return Err(format!("Store task failed: {:?}", e));
        }

        info!("Users store shutdown complete.");
        Ok(())
    }
}
