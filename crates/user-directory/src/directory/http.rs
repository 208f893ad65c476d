//! # HTTP Directory
//!
//! [`Directory`] implementation backed by a JSON REST service:
//!
//! | Operation | Request | Success |
//! |-----------|---------|---------|
//! | list | `GET /users` | JSON array of user records |
//! | delete | `DELETE /users/{id}` | any 2xx, body ignored |
//! | create | `POST /users` with `{name, email, username}` | any 2xx with a JSON body |
//!
//! The id the service returns for a created record is not trusted; see [`IdAllocator`].

use crate::directory::{Directory, DirectoryConfig, DirectoryError, IdAllocator, Latency};
use crate::model::{User, UserDraft, UserId};
use async_trait::async_trait;
use reqwest::{Client, Response, Url};
use std::time::Duration;
use tracing::{debug, instrument, warn};

const ERROR_BODY_LIMIT: usize = 200;

pub struct HttpDirectory {
    client: Client,
    users_url: String,
    latency: Latency,
    ids: IdAllocator,
}

impl HttpDirectory {
    pub fn new(config: DirectoryConfig) -> Result<Self, DirectoryError> {
        let base = Url::parse(&config.base_url)
            .map_err(|e| DirectoryError::InvalidUrl(format!("{}: {e}", config.base_url)))?;
        if base.cannot_be_a_base() {
            return Err(DirectoryError::InvalidUrl(config.base_url));
        }

        let client = Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()
            .map_err(DirectoryError::from_transport)?;

        Ok(Self {
            client,
            users_url: format!("{}/users", base.as_str().trim_end_matches('/')),
            latency: config.latency,
            ids: IdAllocator::new(),
        })
    }

    /// Replaces the id allocator, e.g. to continue a range across restarts.
    pub fn with_ids(mut self, ids: IdAllocator) -> Self {
        self.ids = ids;
        self
    }

    pub fn users_url(&self) -> &str {
        &self.users_url
    }

    fn user_url(&self, id: UserId) -> String {
        format!("{}/{}", self.users_url, id)
    }
}

async fn pause(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}

/// Returns the body of a 2xx response, or a `Server` error carrying the start of the body.
async fn success_body(response: Response) -> Result<Vec<u8>, DirectoryError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        warn!(status = status.as_u16(), "Directory rejected request");
        return Err(DirectoryError::Server {
            status: status.as_u16(),
            body: body.chars().take(ERROR_BODY_LIMIT).collect(),
        });
    }
    let body = response
        .bytes()
        .await
        .map_err(DirectoryError::from_transport)?;
    Ok(body.to_vec())
}

#[async_trait]
impl Directory for HttpDirectory {
    #[instrument(skip(self))]
    async fn list_users(&self) -> Result<Vec<User>, DirectoryError> {
        pause(self.latency.list).await;
        let response = self
            .client
            .get(&self.users_url)
            .send()
            .await
            .map_err(DirectoryError::from_transport)?;
        let body = success_body(response).await?;
        let users: Vec<User> = serde_json::from_slice(&body)?;
        debug!(url = %self.users_url, count = users.len(), "Listed users");
        Ok(users)
    }

    #[instrument(skip(self))]
    async fn delete_user(&self, id: UserId) -> Result<UserId, DirectoryError> {
        pause(self.latency.delete).await;
        let response = self
            .client
            .delete(self.user_url(id))
            .send()
            .await
            .map_err(DirectoryError::from_transport)?;
        success_body(response).await?;
        debug!(%id, "Deleted user");
        Ok(id)
    }

    #[instrument(skip(self, draft))]
    async fn create_user(&self, draft: UserDraft) -> Result<User, DirectoryError> {
        pause(self.latency.create).await;
        let response = self
            .client
            .post(&self.users_url)
            .json(&draft)
            .send()
            .await
            .map_err(DirectoryError::from_transport)?;
        let body = success_body(response).await?;
        let echoed: serde_json::Value = serde_json::from_slice(&body)?;

        let user = User::from_draft(self.ids.allocate(), draft);
        debug!(id = %user.id, server_id = %echoed["id"], "Created user");
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_users_url_ignores_trailing_slash() {
        let directory = HttpDirectory::new(DirectoryConfig::with_base_url("http://localhost:9/"))
            .expect("valid config");
        assert_eq!(directory.users_url(), "http://localhost:9/users");
        assert_eq!(directory.user_url(UserId(3)), "http://localhost:9/users/3");
    }

    #[tokio::test]
    async fn test_base_url_with_path_prefix() {
        let directory =
            HttpDirectory::new(DirectoryConfig::with_base_url("http://localhost:9/api/v1"))
                .expect("valid config");
        assert_eq!(directory.users_url(), "http://localhost:9/api/v1/users");
    }

    #[tokio::test]
    async fn test_invalid_base_url_is_rejected() {
        let result = HttpDirectory::new(DirectoryConfig::with_base_url("not a url"));
        assert!(matches!(result, Err(DirectoryError::InvalidUrl(_))));

        let result = HttpDirectory::new(DirectoryConfig::with_base_url("mailto:someone@example.com"));
        assert!(matches!(result, Err(DirectoryError::InvalidUrl(_))));
    }
}
