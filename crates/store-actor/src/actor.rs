//! # Generic Store Actor
//!
//! This module defines the `StoreActor`, the component that owns a snapshot and serializes
//! every change to it. It is the "Server" side of the store: handles send requests, the actor
//! processes them one at a time in its own task.

use crate::client::StoreHandle;
use crate::message::{Dispatched, Listener, StoreRequest};
use crate::reducer::{Reducer, Transition};
use crate::subscription::Subscription;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

struct ListenerEntry<S> {
    active: Arc<AtomicBool>,
    listener: Listener<S>,
}

/// The generic actor that owns a store's snapshot.
///
/// # Architecture Note
/// The actor drains two channels:
///
/// * **requests** from [`StoreHandle`]s (dispatch, snapshot, subscribe), and
/// * **outcomes** from effect tasks it spawned for accepted intents.
///
/// Effects run concurrently on the Tokio runtime, but their outcomes come back through a
/// channel and are applied inside the run loop. No `Mutex` guards the snapshot: the loop is
/// its only writer.
///
/// # Usage Pattern
///
/// 1.  **Create**: `StoreActor::<MyReducer>::new(buffer)` returns the actor and a handle.
/// 2.  **Wire & Run**: spawn `actor.run(context)` with the reducer's dependencies.
/// 3.  **Use**: dispatch intents through the handle (or a domain wrapper around it).
///
/// # Implementation Details
///
/// * **Dispatch**: calls [`Reducer::begin`]. On `Start` the pending snapshot is published,
///   listeners are notified and [`Reducer::execute`] is spawned with a clone of the context.
///   On `Reject` nothing changes.
/// * **Outcome**: calls [`Reducer::apply`] and publishes the result.
/// * **Shutdown**: when every handle is gone the loop ends. Effects still in flight keep
///   running, but their outcomes find the channel closed and are dropped, so nothing is
///   applied to a store that no longer exists.
pub struct StoreActor<R: Reducer> {
    receiver: mpsc::Receiver<StoreRequest<R>>,
    outcomes: mpsc::UnboundedReceiver<R::Outcome>,
    outcome_sender: mpsc::UnboundedSender<R::Outcome>,
    state: Arc<R::State>,
    listeners: Vec<ListenerEntry<R::State>>,
    in_flight: usize,
}

impl<R: Reducer> StoreActor<R> {
    /// Creates a new `StoreActor` holding `R::State::default()` and its associated handle.
    ///
    /// `buffer_size` bounds the request channel. When it is full, handle calls wait.
    /// Zero is treated as one.
    pub fn new(buffer_size: usize) -> (Self, StoreHandle<R>) {
        let (sender, receiver) = mpsc::channel(buffer_size.max(1));
        let (outcome_sender, outcomes) = mpsc::unbounded_channel();
        let actor = Self {
            receiver,
            outcomes,
            outcome_sender,
            state: Arc::new(R::State::default()),
            listeners: Vec::new(),
            in_flight: 0,
        };
        (actor, StoreHandle::new(sender))
    }

    /// Runs the store's event loop until every handle has been dropped.
    ///
    /// # Context Injection
    /// `context` is cloned into each effect task, so dependencies (clients, configuration)
    /// are bound when the store starts rather than when it is constructed.
    pub async fn run(mut self, context: R::Context) {
        // "UsersReducer" instead of "user_directory::store::UsersReducer"
        let store_type = std::any::type_name::<R>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(store_type, "Store started");

        loop {
            tokio::select! {
                biased;
                Some(outcome) = self.outcomes.recv() => {
                    self.apply_outcome(store_type, outcome);
                }
                request = self.receiver.recv() => match request {
                    Some(request) => self.handle_request(store_type, request, &context),
                    None => break,
                },
            }
        }

        if self.in_flight > 0 {
            warn!(
                store_type,
                in_flight = self.in_flight,
                "Store torn down with effects in flight, their outcomes will be discarded"
            );
        }
        info!(store_type, listeners = self.listeners.len(), "Shutdown");
    }

    fn handle_request(
        &mut self,
        store_type: &'static str,
        request: StoreRequest<R>,
        context: &R::Context,
    ) {
        match request {
            StoreRequest::Dispatch { intent, respond_to } => {
                debug!(store_type, ?intent, "Dispatch");
                match R::begin(&self.state, &intent) {
                    Transition::Start(pending) => {
                        self.publish(store_type, pending);
                        self.spawn_effect(store_type, intent, context.clone());
                        let _ = respond_to.send(Ok(Dispatched::Started));
                    }
                    Transition::Reject(reason) => {
                        warn!(store_type, ?intent, %reason, "Intent rejected");
                        let _ = respond_to.send(Ok(Dispatched::Rejected(reason)));
                    }
                }
            }
            StoreRequest::Snapshot { respond_to } => {
                let _ = respond_to.send(Ok(Arc::clone(&self.state)));
            }
            StoreRequest::Subscribe {
                listener,
                respond_to,
            } => {
                let (subscription, active) = Subscription::new();
                self.listeners.push(ListenerEntry { active, listener });
                debug!(store_type, listeners = self.listeners.len(), "Subscribed");
                let _ = respond_to.send(Ok((subscription, Arc::clone(&self.state))));
            }
        }
    }

    fn spawn_effect(&mut self, store_type: &'static str, intent: R::Intent, context: R::Context) {
        let outcomes = self.outcome_sender.clone();
        self.in_flight += 1;
        tokio::spawn(async move {
            let outcome = R::execute(intent, context).await;
            if let Err(late) = outcomes.send(outcome) {
                debug!(store_type, outcome = ?late.0, "Store gone, outcome discarded");
            }
        });
    }

    fn apply_outcome(&mut self, store_type: &str, outcome: R::Outcome) {
        self.in_flight = self.in_flight.saturating_sub(1);
        debug!(store_type, ?outcome, in_flight = self.in_flight, "Apply");
        let current = Arc::unwrap_or_clone(std::mem::take(&mut self.state));
        self.publish(store_type, R::apply(current, outcome));
    }

    /// Swaps in the next snapshot and notifies every live listener with it.
    ///
    /// A listener that panics is dropped; the store and the other listeners carry on.
    fn publish(&mut self, store_type: &str, next: R::State) {
        self.state = Arc::new(next);
        let state = &self.state;
        self.listeners.retain_mut(|entry| {
            if !entry.active.load(Ordering::Acquire) {
                return false;
            }
            let notified = panic::catch_unwind(AssertUnwindSafe(|| {
                (entry.listener)(Arc::clone(state))
            }));
            if notified.is_err() {
                warn!(store_type, "Listener panicked, unsubscribing it");
                return false;
            }
            true
        });
    }
}
