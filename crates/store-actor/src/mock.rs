//! # Mock Store & Testing Guide
//!
//! Utilities for testing code that talks to a [`StoreHandle`] without spawning a
//! [`StoreActor`](crate::StoreActor) or running any effects.
//!
//! ## When to use a Mock vs a Real Store
//!
//! | Feature | Mock handle | Real store |
//! |---------|-------------|------------|
//! | **Effects** | Never run | Run against the injected context |
//! | **Determinism** | Test answers every request | Subject to scheduler |
//! | **Use Case** | Logic *around* the handle (validation, mapping) | Reducer and transition behavior |
//!
//! ## Pattern
//!
//! ```rust,ignore
//! let (handle, mut receiver) = create_mock_handle::<UsersReducer>(10);
//! let client = UsersClient::new(handle);
//!
//! let task = tokio::spawn(async move { client.load().await });
//!
//! let (intent, responder) = expect_dispatch(&mut receiver).await.expect("Expected Dispatch");
//! assert!(matches!(intent, UserIntent::Load));
//! responder.send(Ok(Dispatched::Started)).unwrap();
//! ```

use crate::client::StoreHandle;
use crate::message::{Dispatched, Response, StoreRequest};
use crate::reducer::Reducer;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Creates a handle and the receiver its requests arrive on.
pub fn create_mock_handle<R: Reducer>(
    buffer_size: usize,
) -> (StoreHandle<R>, mpsc::Receiver<StoreRequest<R>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (StoreHandle::new(sender), receiver)
}

/// Helper to verify that the next message is a Dispatch request
pub async fn expect_dispatch<R: Reducer>(
    receiver: &mut mpsc::Receiver<StoreRequest<R>>,
) -> Option<(R::Intent, Response<Dispatched>)> {
    match receiver.recv().await {
        Some(StoreRequest::Dispatch { intent, respond_to }) => Some((intent, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Snapshot request
pub async fn expect_snapshot<R: Reducer>(
    receiver: &mut mpsc::Receiver<StoreRequest<R>>,
) -> Option<Response<Arc<R::State>>> {
    match receiver.recv().await {
        Some(StoreRequest::Snapshot { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Checks that no request is waiting on the channel.
pub fn expect_idle<R: Reducer>(receiver: &mut mpsc::Receiver<StoreRequest<R>>) -> bool {
    matches!(
        receiver.try_recv(),
        Err(mpsc::error::TryRecvError::Empty | mpsc::error::TryRecvError::Disconnected)
    )
}
