//! # Store Messages
//!
//! This module defines the messages exchanged between a [`StoreHandle`](crate::StoreHandle)
//! and its [`StoreActor`](crate::StoreActor).

use crate::error::FrameworkError;
use crate::reducer::Reducer;
use crate::subscription::Subscription;
use std::sync::Arc;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by the store.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Callback invoked with every new snapshot.
pub type Listener<S> = Box<dyn FnMut(Arc<S>) + Send + 'static>;

/// Acknowledgement of a dispatched intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatched {
    /// The pending snapshot was published and the effect is running.
    Started,
    /// The reducer refused the intent; nothing changed.
    Rejected(String),
}

impl Dispatched {
    pub fn is_started(&self) -> bool {
        matches!(self, Dispatched::Started)
    }
}

/// Internal message type sent to the store.
///
/// - **Dispatch**: submit an intent. The reply tells whether it started.
/// - **Snapshot**: read the current snapshot.
/// - **Subscribe**: register a listener. The reply carries the disposal handle together
///   with the snapshot current at registration, so no transition can slip in between.
pub enum StoreRequest<R: Reducer> {
    Dispatch {
        intent: R::Intent,
        respond_to: Response<Dispatched>,
    },
    Snapshot {
        respond_to: Response<Arc<R::State>>,
    },
    Subscribe {
        listener: Listener<R::State>,
        respond_to: Response<(Subscription, Arc<R::State>)>,
    },
}

impl<R: Reducer> std::fmt::Debug for StoreRequest<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreRequest::Dispatch { intent, .. } => {
                f.debug_struct("Dispatch").field("intent", intent).finish()
            }
            StoreRequest::Snapshot { .. } => f.write_str("Snapshot"),
            StoreRequest::Subscribe { .. } => f.write_str("Subscribe"),
        }
    }
}
