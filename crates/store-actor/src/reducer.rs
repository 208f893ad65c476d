//! # Reducer Trait
//!
//! The `Reducer` trait is the contract a domain implements to have its state managed by the
//! generic [`StoreActor`](crate::StoreActor). It splits every intent into three steps:
//!
//! 1. [`Reducer::begin`] - synchronous, decides whether the intent may start and produces the
//!    "pending" snapshot (e.g. a loading flag).
//! 2. [`Reducer::execute`] - asynchronous, performs the side effect out-of-line and captures its
//!    result as an `Outcome`. It never touches the state.
//! 3. [`Reducer::apply`] - synchronous, folds the outcome into the next snapshot.
//!
//! Only `begin` and `apply` produce snapshots, and the actor calls both from its own task. That
//! task is the single linearization point of the store: outcomes are applied one at a time, in
//! completion order, and readers only ever see whole snapshots.
//!
//! Because `begin` and `apply` are plain functions they can be unit tested without a runtime:
//!
//! ```rust,ignore
//! let pending = match MyReducer::begin(&state, &intent) {
//!     Transition::Start(next) => next,
//!     Transition::Reject(reason) => panic!("{reason}"),
//! };
//! let next = MyReducer::apply(pending, outcome);
//! ```

use async_trait::async_trait;
use std::fmt::Debug;

/// What [`Reducer::begin`] decided for an intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition<S> {
    /// The intent is accepted. `S` is published as the pending snapshot and the effect runs.
    Start(S),
    /// The intent is refused. The snapshot is left alone and no effect runs.
    Reject(String),
}

/// State transitions and side effects of a store.
///
/// # Associated Types
/// - `State`: the snapshot value. Cloned for every transition, so keep it cheap or accept it.
/// - `Intent`: a named request for a transition (e.g. `Load`, `Remove(id)`).
/// - `Outcome`: the resolved result of an intent's effect, carrying whatever `apply` needs
///   to key the update (e.g. the id a delete was issued for).
/// - `Context`: dependencies injected at [`StoreActor::run`](crate::StoreActor::run) time and
///   cloned into every effect task. Use `()` if no dependencies are needed.
#[async_trait]
pub trait Reducer: Send + Sync + 'static {
    type State: Clone + Debug + Default + Send + Sync + 'static;

    type Intent: Debug + Send + 'static;

    type Outcome: Debug + Send + 'static;

    type Context: Clone + Send + Sync + 'static;

    /// Decide whether `intent` may start given the current snapshot.
    fn begin(state: &Self::State, intent: &Self::Intent) -> Transition<Self::State>;

    /// Run the side effect for an accepted intent.
    ///
    /// Failures must be captured inside the returned outcome; there is no error channel.
    async fn execute(intent: Self::Intent, ctx: Self::Context) -> Self::Outcome;

    /// Fold a completed outcome into the next snapshot.
    fn apply(state: Self::State, outcome: Self::Outcome) -> Self::State;
}
