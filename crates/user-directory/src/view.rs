//! # List View Projection
//!
//! What the users screen shows for a given snapshot. Pure: re-derive it on every
//! notification instead of mutating it.

use crate::model::{CollectionSnapshot, ListStatus, User};

pub const EMPTY_MESSAGE: &str = "No users found. Add a new user above!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRow {
    pub user: User,
    /// A delete is in flight; the row's delete button is disabled.
    pub deleting: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListBody {
    Loading,
    /// The last load failed. Stale items are not shown.
    Error(String),
    Empty,
    Rows(Vec<UserRow>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserListView {
    pub body: ListBody,
    /// The create form's submit button shows progress and is disabled.
    pub creating: bool,
    /// A delete or create failure to show next to a valid list.
    pub notice: Option<String>,
}

impl UserListView {
    pub fn from_snapshot(snapshot: &CollectionSnapshot) -> Self {
        let body = match snapshot.list_status {
            ListStatus::Loading => ListBody::Loading,
            ListStatus::Failed => ListBody::Error(
                snapshot
                    .last_error
                    .clone()
                    .unwrap_or_else(|| "Failed to load users".to_string()),
            ),
            ListStatus::Idle | ListStatus::Ready if snapshot.items.is_empty() => ListBody::Empty,
            ListStatus::Idle | ListStatus::Ready => ListBody::Rows(
                snapshot
                    .items
                    .iter()
                    .map(|user| UserRow {
                        user: user.clone(),
                        deleting: snapshot.is_deleting(user.id),
                    })
                    .collect(),
            ),
        };

        let notice = match body {
            ListBody::Error(_) => None,
            _ => snapshot.last_error.clone(),
        };

        Self {
            body,
            creating: snapshot.is_creating(),
            notice,
        }
    }

    pub fn rows(&self) -> &[UserRow] {
        match &self.body {
            ListBody::Rows(rows) => rows,
            _ => &[],
        }
    }
}

impl ListBody {
    /// One-line rendering, used by the demo binary's log output.
    pub fn summary(&self) -> String {
        match self {
            ListBody::Loading => "Loading users...".to_string(),
            ListBody::Error(message) => format!("Error: {message}"),
            ListBody::Empty => EMPTY_MESSAGE.to_string(),
            ListBody::Rows(rows) => {
                let deleting = rows.iter().filter(|row| row.deleting).count();
                format!("{} users ({} deleting)", rows.len(), deleting)
            }
        }
    }
}
