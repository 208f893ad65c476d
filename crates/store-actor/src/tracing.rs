//! # Observability & Tracing
//!
//! The [`setup_tracing`] function initializes structured logging for a store-based
//! application.
//!
//! ## What Gets Traced
//!
//! - **Store lifecycle**: startup, shutdown, effects still in flight at teardown
//! - **Transitions**: every dispatched intent and applied outcome (`debug`)
//! - **Rejections**: intents refused by the reducer (`warn`)
//!
//! ```bash
//! RUST_LOG=info cargo run      # Lifecycle only
//! RUST_LOG=debug cargo run     # Every intent and outcome with payloads
//! ```
//!
//! Log lines carry a `store_type` field (e.g. `store_type="UsersReducer"`) instead of the
//! module path, which is why targets are hidden.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
