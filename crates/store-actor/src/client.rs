//! # Store Handle
//!
//! This module defines the generic handle used to talk to a running store.

use crate::error::FrameworkError;
use crate::message::{Dispatched, StoreRequest};
use crate::reducer::Reducer;
use crate::subscription::Subscription;
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};

/// ## StoreHandle
///
/// The `StoreHandle<R>` is the view-facing side of a `StoreActor<R>`. It forwards requests
/// over a Tokio mpsc channel and receives replies on oneshot channels.
///
/// * **Cloneable** – holds only a sender, so cloning is inexpensive.
/// * **Owns the store's lifetime** – the actor stops once the last handle is dropped.
/// * **Snapshots are shared, never mutated** – readers get an `Arc` of an immutable value.
pub struct StoreHandle<R: Reducer> {
    sender: mpsc::Sender<StoreRequest<R>>,
}

impl<R: Reducer> Clone for StoreHandle<R> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<R: Reducer> StoreHandle<R> {
    pub fn new(sender: mpsc::Sender<StoreRequest<R>>) -> Self {
        Self { sender }
    }

    /// Submits an intent. Resolves once the store has accepted or rejected it, not when the
    /// effect completes; completion is observed through snapshots.
    pub async fn dispatch(&self, intent: R::Intent) -> Result<Dispatched, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Dispatch { intent, respond_to })
            .await
            .map_err(|_| FrameworkError::StoreClosed)?;
        response.await.map_err(|_| FrameworkError::StoreDropped)?
    }

    pub async fn snapshot(&self) -> Result<Arc<R::State>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Snapshot { respond_to })
            .await
            .map_err(|_| FrameworkError::StoreClosed)?;
        response.await.map_err(|_| FrameworkError::StoreDropped)?
    }

    /// Registers `listener` to be called with every snapshot published from now on.
    ///
    /// Returns the disposal handle and the snapshot that was current at registration.
    /// The listener runs inside the store's task, so it must not block. A listener that
    /// panics is unsubscribed; the store keeps running.
    pub async fn subscribe<F>(
        &self,
        listener: F,
    ) -> Result<(Subscription, Arc<R::State>), FrameworkError>
    where
        F: FnMut(Arc<R::State>) + Send + 'static,
    {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Subscribe {
                listener: Box::new(listener),
                respond_to,
            })
            .await
            .map_err(|_| FrameworkError::StoreClosed)?;
        response.await.map_err(|_| FrameworkError::StoreDropped)?
    }

    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }
}
