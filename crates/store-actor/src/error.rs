//! # Framework Errors
//!
//! Errors raised by the store plumbing itself. Failures of the work a reducer
//! performs never show up here: they are reduced into the snapshot instead.

/// Errors that can occur while talking to a running store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FrameworkError {
    #[error("Store closed")]
    StoreClosed,
    #[error("Store dropped response channel")]
    StoreDropped,
}
