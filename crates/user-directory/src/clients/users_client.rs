//! # Users Client
//!
//! The view-facing API of the users store. It wraps a `StoreHandle<UsersReducer>` and turns
//! the three intents into methods; reads (`snapshot`, `subscribe`) come from [`StoreClient`].
use crate::error::UsersError;
use crate::model::{UserDraft, UserId, UserIntent};
use crate::store::UsersReducer;
use crate::validation::validate_draft;
use async_trait::async_trait;
use store_actor::{Dispatched, FrameworkError, StoreClient, StoreHandle};
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct UsersClient {
    inner: StoreHandle<UsersReducer>,
}

impl UsersClient {
    pub fn new(inner: StoreHandle<UsersReducer>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl StoreClient<UsersReducer> for UsersClient {
    type Error = UsersError;

    fn inner(&self) -> &StoreHandle<UsersReducer> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        UsersError::StoreUnavailable(e.to_string())
    }
}

impl UsersClient {
    /// Full resync from the directory. A no-op (`Rejected`) while a load is in flight.
    #[instrument(skip(self))]
    pub async fn load(&self) -> Result<Dispatched, UsersError> {
        debug!("Sending request");
        self.send(UserIntent::Load).await
    }

    #[instrument(skip(self))]
    pub async fn remove(&self, id: UserId) -> Result<Dispatched, UsersError> {
        debug!("Sending request");
        self.send(UserIntent::Remove(id)).await
    }

    /// Validates `draft` and dispatches it as entered. Invalid drafts never reach the store.
    #[instrument(skip(self, draft), fields(username = %draft.username))]
    pub async fn create(&self, draft: UserDraft) -> Result<Dispatched, UsersError> {
        validate_draft(&draft)?;
        debug!("Sending request");
        self.send(UserIntent::Create(draft)).await
    }

    async fn send(&self, intent: UserIntent) -> Result<Dispatched, UsersError> {
        self.inner.dispatch(intent).await.map_err(Self::map_error)
    }
}
