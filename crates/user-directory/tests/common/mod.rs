//! Shared test utilities.

#![allow(dead_code)]

pub mod directory_server;

use std::sync::Arc;
use std::time::Duration;
use store_actor::{StoreClient, Subscription};
use tokio::sync::mpsc;
use user_directory::clients::UsersClient;
use user_directory::model::{CollectionSnapshot, User, UserId};

/// Snapshots published by a store, in order.
pub struct Updates {
    pub rx: mpsc::UnboundedReceiver<Arc<CollectionSnapshot>>,
    pub subscription: Subscription,
}

/// Subscribes a channel-backed listener. Returns the stream and the snapshot current at
/// registration.
pub async fn watch(users: &UsersClient) -> (Updates, Arc<CollectionSnapshot>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let (subscription, current) = users
        .subscribe(move |snapshot| {
            let _ = tx.send(snapshot);
        })
        .await
        .expect("Failed to subscribe");
    (Updates { rx, subscription }, current)
}

impl Updates {
    /// Next published snapshot matching `pred`. Panics after 2s.
    pub async fn next_where(
        &mut self,
        pred: impl Fn(&CollectionSnapshot) -> bool,
    ) -> Arc<CollectionSnapshot> {
        tokio::time::timeout(Duration::from_secs(2), async {
            loop {
                let snapshot = self.rx.recv().await.expect("store stopped publishing");
                if pred(&snapshot) {
                    return snapshot;
                }
            }
        })
        .await
        .expect("timed out waiting for snapshot")
    }

    /// Next published snapshot, whatever it is. Panics after 2s.
    pub async fn next(&mut self) -> Arc<CollectionSnapshot> {
        self.next_where(|_| true).await
    }

    /// True if nothing was published within 50ms.
    pub async fn is_quiet(&mut self) -> bool {
        tokio::time::timeout(Duration::from_millis(50), self.rx.recv())
            .await
            .is_err()
    }
}

pub fn user(id: u64, name: &str) -> User {
    let handle = name.to_lowercase();
    User {
        id: UserId(id),
        name: name.to_string(),
        email: format!("{}@x.com", &handle[..1]),
        username: handle,
    }
}

pub fn ids(snapshot: &CollectionSnapshot) -> Vec<u64> {
    snapshot.items.iter().map(|user| user.id.0).collect()
}
