//! # StoreClient Trait
//!
//! Provides a common interface for domain-specific store wrappers, adding default `snapshot`
//! and `subscribe` methods built on top of a generic `StoreHandle`.
use crate::{FrameworkError, Reducer, StoreHandle, Subscription};
use async_trait::async_trait;
use std::sync::Arc;

/// Trait for domain clients to inherit the read side of a store.
///
/// Implementors only provide access to the inner handle and an error mapping; the typed
/// intent methods (e.g. `load`, `remove`) stay on the wrapper itself.
///
/// ```rust,ignore
/// #[async_trait]
/// impl StoreClient<UsersReducer> for UsersClient {
///     type Error = UsersError;
///
///     fn inner(&self) -> &StoreHandle<UsersReducer> {
///         &self.inner
///     }
///
///     fn map_error(e: FrameworkError) -> Self::Error {
///         UsersError::StoreUnavailable(e.to_string())
///     }
/// }
/// ```
#[async_trait]
pub trait StoreClient<R: Reducer>: Send + Sync {
    /// The domain-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic StoreHandle.
    fn inner(&self) -> &StoreHandle<R>;

    /// Map framework errors to the domain error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Read the current snapshot.
    #[tracing::instrument(skip(self))]
    async fn snapshot(&self) -> Result<Arc<R::State>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().snapshot().await.map_err(Self::map_error)
    }

    /// Register a listener; see [`StoreHandle::subscribe`].
    #[tracing::instrument(skip(self, listener))]
    async fn subscribe<F>(&self, listener: F) -> Result<(Subscription, Arc<R::State>), Self::Error>
    where
        F: FnMut(Arc<R::State>) + Send + 'static,
    {
        tracing::debug!("Sending request");
        self.inner()
            .subscribe(listener)
            .await
            .map_err(Self::map_error)
    }
}
