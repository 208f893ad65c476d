//! # Users Store
//!
//! The reduction rules for the user collection, expressed as a [`Reducer`] and run by a
//! generic [`StoreActor`](store_actor::StoreActor).
//!
//! The snapshot is the product of three independent lifecycles:
//!
//! | Lifecycle | Start (`begin`) | Success (`apply`) | Failure (`apply`) |
//! |-----------|-----------------|-------------------|-------------------|
//! | list | `Loading`, error cleared | `Ready`, items replaced | `Failed`, items kept |
//! | delete `id` | `id` pending | pending cleared, item removed | pending cleared, item kept |
//! | create | `Creating` | `Idle`, item appended | `Idle`, nothing appended |
//!
//! Every failure path writes the shared `last_error` slot (last writer wins).

use crate::directory::{Directory, DirectoryError};
use crate::model::{CollectionSnapshot, CreateStatus, ListStatus, User, UserId, UserIntent};
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Arc;
use store_actor::{Reducer, Transition};
use tracing::warn;

/// Resolved result of a [`UserIntent`]'s directory call.
#[derive(Debug, Clone, PartialEq)]
pub enum UserOutcome {
    Loaded(Result<Vec<User>, DirectoryError>),
    /// `id` is the id the delete was issued for, whatever the directory echoed.
    Deleted {
        id: UserId,
        result: Result<UserId, DirectoryError>,
    },
    Created(Result<User, DirectoryError>),
}

pub struct UsersReducer;

#[async_trait]
impl Reducer for UsersReducer {
    type State = CollectionSnapshot;
    type Intent = UserIntent;
    type Outcome = UserOutcome;
    type Context = Arc<dyn Directory>;

    fn begin(state: &CollectionSnapshot, intent: &UserIntent) -> Transition<CollectionSnapshot> {
        match intent {
            UserIntent::Load => {
                if state.is_loading() {
                    return Transition::Reject("load already in flight".to_string());
                }
                Transition::Start(CollectionSnapshot {
                    list_status: ListStatus::Loading,
                    last_error: None,
                    ..state.clone()
                })
            }
            UserIntent::Remove(id) => {
                if state.is_deleting(*id) {
                    return Transition::Reject(format!("user {id} is already being deleted"));
                }
                if !state.contains(*id) {
                    return Transition::Reject(format!("user {id} is not in the collection"));
                }
                let mut next = state.clone();
                next.pending_deletes.insert(*id);
                Transition::Start(next)
            }
            UserIntent::Create(_) => {
                if state.is_creating() {
                    return Transition::Reject("a user is already being created".to_string());
                }
                Transition::Start(CollectionSnapshot {
                    create_status: CreateStatus::Creating,
                    ..state.clone()
                })
            }
        }
    }

    async fn execute(intent: UserIntent, directory: Arc<dyn Directory>) -> UserOutcome {
        match intent {
            UserIntent::Load => UserOutcome::Loaded(directory.list_users().await),
            UserIntent::Remove(id) => UserOutcome::Deleted {
                id,
                result: directory.delete_user(id).await,
            },
            UserIntent::Create(draft) => UserOutcome::Created(directory.create_user(draft).await),
        }
    }

    fn apply(mut state: CollectionSnapshot, outcome: UserOutcome) -> CollectionSnapshot {
        match outcome {
            UserOutcome::Loaded(Ok(users)) => {
                state.list_status = ListStatus::Ready;
                state.items = dedup_by_id(users);
            }
            UserOutcome::Loaded(Err(e)) => {
                state.list_status = ListStatus::Failed;
                state.last_error = Some(e.to_string());
            }
            UserOutcome::Deleted { id, result } => {
                state.pending_deletes.remove(&id);
                match result {
                    Ok(confirmed) => {
                        if confirmed != id {
                            warn!(%id, %confirmed, "Directory confirmed a different id");
                        }
                        state.items.retain(|user| user.id != id);
                    }
                    Err(e) => state.last_error = Some(e.to_string()),
                }
            }
            UserOutcome::Created(result) => {
                state.create_status = CreateStatus::Idle;
                match result {
                    Ok(user) if state.contains(user.id) => {
                        warn!(id = %user.id, "Created user collides with an existing id");
                        state.last_error = Some(format!("user id {} is already taken", user.id));
                    }
                    Ok(user) => state.items.push(user),
                    Err(e) => state.last_error = Some(e.to_string()),
                }
            }
        }
        state
    }
}

/// Keeps the first record for each id, preserving order.
fn dedup_by_id(users: Vec<User>) -> Vec<User> {
    let total = users.len();
    let mut seen = HashSet::with_capacity(total);
    let unique: Vec<User> = users
        .into_iter()
        .filter(|user| seen.insert(user.id))
        .collect();
    if unique.len() != total {
        warn!(dropped = total - unique.len(), "Directory listed duplicate ids");
    }
    unique
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::UserDraft;

    fn user(id: u64, name: &str) -> User {
        User {
            id: UserId(id),
            name: name.to_string(),
            email: format!("{}@x.com", name.to_lowercase()),
            username: name.to_lowercase(),
        }
    }

    fn started(state: &CollectionSnapshot, intent: &UserIntent) -> CollectionSnapshot {
        match UsersReducer::begin(state, intent) {
            Transition::Start(next) => next,
            Transition::Reject(reason) => panic!("unexpected rejection: {reason}"),
        }
    }

    fn ready(items: Vec<User>) -> CollectionSnapshot {
        CollectionSnapshot {
            items,
            list_status: ListStatus::Ready,
            ..CollectionSnapshot::default()
        }
    }

    #[test]
    fn test_load_replaces_items_and_clears_error() {
        let state = CollectionSnapshot {
            last_error: Some("boom".to_string()),
            ..ready(vec![user(1, "Ann"), user(1_000_000_000, "Local")])
        };

        let pending = started(&state, &UserIntent::Load);
        assert_eq!(pending.list_status, ListStatus::Loading);
        assert_eq!(pending.last_error, None);
        assert_eq!(pending.items, state.items);

        let next = UsersReducer::apply(
            pending,
            UserOutcome::Loaded(Ok(vec![user(2, "Bo"), user(3, "Cy")])),
        );
        assert_eq!(next.list_status, ListStatus::Ready);
        assert_eq!(next.items, vec![user(2, "Bo"), user(3, "Cy")]);
    }

    #[test]
    fn test_failed_load_keeps_stale_items() {
        let state = ready(vec![user(1, "Ann")]);
        let pending = started(&state, &UserIntent::Load);

        let next = UsersReducer::apply(
            pending,
            UserOutcome::Loaded(Err(DirectoryError::Network("unreachable".to_string()))),
        );
        assert_eq!(next.list_status, ListStatus::Failed);
        assert_eq!(next.items, vec![user(1, "Ann")]);
        assert_eq!(next.last_error.as_deref(), Some("Network error: unreachable"));
    }

    #[test]
    fn test_second_load_is_rejected_while_loading() {
        let pending = started(&CollectionSnapshot::default(), &UserIntent::Load);
        assert!(matches!(
            UsersReducer::begin(&pending, &UserIntent::Load),
            Transition::Reject(_)
        ));
    }

    #[test]
    fn test_load_drops_duplicate_ids() {
        let pending = started(&CollectionSnapshot::default(), &UserIntent::Load);
        let next = UsersReducer::apply(
            pending,
            UserOutcome::Loaded(Ok(vec![user(1, "Ann"), user(2, "Bo"), user(1, "Impostor")])),
        );
        assert_eq!(next.items, vec![user(1, "Ann"), user(2, "Bo")]);
    }

    #[test]
    fn test_remove_preconditions() {
        let state = ready(vec![user(1, "Ann")]);

        let pending = started(&state, &UserIntent::Remove(UserId(1)));
        assert!(pending.is_deleting(UserId(1)));
        assert!(pending.contains(UserId(1)));

        assert!(matches!(
            UsersReducer::begin(&pending, &UserIntent::Remove(UserId(1))),
            Transition::Reject(_)
        ));
        assert!(matches!(
            UsersReducer::begin(&state, &UserIntent::Remove(UserId(42))),
            Transition::Reject(_)
        ));
    }

    #[test]
    fn test_delete_is_applied_only_after_confirmation() {
        let state = ready(vec![user(1, "Ann"), user(2, "Bo")]);
        let pending = started(&state, &UserIntent::Remove(UserId(1)));

        let failed = UsersReducer::apply(
            pending.clone(),
            UserOutcome::Deleted {
                id: UserId(1),
                result: Err(DirectoryError::Server {
                    status: 503,
                    body: String::new(),
                }),
            },
        );
        assert_eq!(failed.items, state.items);
        assert!(failed.pending_deletes.is_empty());
        assert!(failed.last_error.is_some());

        let confirmed = UsersReducer::apply(
            pending,
            UserOutcome::Deleted {
                id: UserId(1),
                result: Ok(UserId(1)),
            },
        );
        assert_eq!(confirmed.items, vec![user(2, "Bo")]);
        assert!(confirmed.pending_deletes.is_empty());
    }

    #[test]
    fn test_create_appends_and_rejects_concurrent_create() {
        let state = ready(vec![user(1, "Ann")]);
        let draft = UserDraft::new("Bo", "b@x.com", "bo");
        let pending = started(&state, &UserIntent::Create(draft.clone()));
        assert_eq!(pending.create_status, CreateStatus::Creating);

        assert!(matches!(
            UsersReducer::begin(&pending, &UserIntent::Create(draft.clone())),
            Transition::Reject(_)
        ));

        let created = User::from_draft(UserId(9999), draft);
        let next = UsersReducer::apply(pending, UserOutcome::Created(Ok(created.clone())));
        assert_eq!(next.create_status, CreateStatus::Idle);
        assert_eq!(next.items, vec![user(1, "Ann"), created]);
    }

    #[test]
    fn test_create_with_taken_id_is_refused() {
        let state = ready(vec![user(1, "Ann")]);
        let draft = UserDraft::new("Bo", "b@x.com", "bo");
        let pending = started(&state, &UserIntent::Create(draft.clone()));

        let next = UsersReducer::apply(
            pending,
            UserOutcome::Created(Ok(User::from_draft(UserId(1), draft))),
        );
        assert_eq!(next.items, vec![user(1, "Ann")]);
        assert_eq!(next.create_status, CreateStatus::Idle);
        assert_eq!(next.last_error.as_deref(), Some("user id 1 is already taken"));
    }

    #[test]
    fn test_failed_create_appends_nothing() {
        let state = ready(vec![]);
        let pending = started(
            &state,
            &UserIntent::Create(UserDraft::new("Bo", "b@x.com", "bo")),
        );
        let next = UsersReducer::apply(pending, UserOutcome::Created(Err(DirectoryError::Timeout)));
        assert!(next.items.is_empty());
        assert_eq!(next.create_status, CreateStatus::Idle);
        assert_eq!(next.last_error.as_deref(), Some("Request timed out"));
    }
}
