//! # Store Actor
//!
//! This crate provides a small engine for keeping an in-memory snapshot consistent with a
//! remote source of truth while several asynchronous operations are in flight at once. It is
//! the **Actor Model** applied to a single state value: one task owns the snapshot, every
//! change to it is a message, and side effects report back as messages too.
//!
//! ## Architecture Overview
//!
//! ```text
//! Handle ──dispatch──→ StoreActor ──begin──→ pending snapshot ──→ listeners
//!                          │
//!                          └─spawn─→ execute (async effect)
//!                                        │
//!                      StoreActor ←──────┘ outcome
//!                          └──apply──→ next snapshot ──→ listeners
//! ```
//!
//! 1. **Reducer Layer** ([`Reducer`]) - your transition rules and side effects
//! 2. **Runtime Layer** ([`StoreActor`]) - message processing and the linearization point
//! 3. **Interface Layer** ([`StoreHandle`], [`StoreClient`]) - typed communication
//!
//! ## Example
//!
//! ```rust
//! use store_actor::{Dispatched, Reducer, StoreActor, Transition};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug, Default)]
//! struct Tally {
//!     total: u32,
//!     pending: usize,
//! }
//!
//! struct TallyReducer;
//!
//! #[async_trait]
//! impl Reducer for TallyReducer {
//!     type State = Tally;
//!     type Intent = u32;
//!     type Outcome = u32;
//!     type Context = ();
//!
//!     fn begin(state: &Tally, amount: &u32) -> Transition<Tally> {
//!         if *amount == 0 {
//!             return Transition::Reject("nothing to add".to_string());
//!         }
//!         Transition::Start(Tally { pending: state.pending + 1, ..state.clone() })
//!     }
//!
//!     async fn execute(amount: u32, _ctx: ()) -> u32 {
//!         amount
//!     }
//!
//!     fn apply(state: Tally, amount: u32) -> Tally {
//!         Tally { total: state.total + amount, pending: state.pending - 1 }
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, handle) = StoreActor::<TallyReducer>::new(10);
//!     tokio::spawn(actor.run(()));
//!
//!     assert_eq!(handle.dispatch(0).await.unwrap(), Dispatched::Rejected("nothing to add".to_string()));
//!     assert_eq!(handle.dispatch(5).await.unwrap(), Dispatched::Started);
//! }
//! ```
//!
//! ## Concurrency Model
//!
//! - The actor runs in its own Tokio task and is the only writer of the snapshot
//! - Effects run concurrently; their outcomes are applied **in completion order**
//! - Every transition produces a new `Arc` snapshot; readers never see a partial update
//! - Listeners are called synchronously inside the actor after each transition
//!
//! ## Testing
//!
//! See the [`mock`] module for helpers that answer handle requests directly.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod error;
pub mod message;
pub mod mock;
pub mod reducer;
pub mod subscription;
pub mod tracing;

pub use actor::StoreActor;
pub use client::StoreHandle;
pub use client_trait::StoreClient;
pub use error::FrameworkError;
pub use message::{Dispatched, Listener, Response, StoreRequest};
pub use reducer::{Reducer, Transition};
pub use subscription::Subscription;
