//! # Mock Directory
//!
//! A scripted [`Directory`] for testing the users store without a network.
//!
//! Every call pops the next expectation queued for its operation (deletes are queued per id).
//! An expectation either answers immediately or is **gated**: the call stays in flight until
//! the test releases it, which is how tests choose the order in which outcomes complete.
//!
//! ```rust,ignore
//! let mock = MockDirectory::new();
//! mock.expect_list().return_ok(vec![ann]);
//! let gate = mock.expect_delete(UserId(1)).gated();
//!
//! // ... dispatch Load and Remove(1) through the store ...
//!
//! gate.release_ok(UserId(1));
//! mock.verify(); // every expectation consumed, no unexpected calls
//! ```
//!
//! A call with no matching expectation fails with a `Network` error and is remembered, so
//! `verify` reports it instead of a spawned task panicking out of sight.

use crate::directory::{Directory, DirectoryError};
use crate::model::{User, UserDraft, UserId};
use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::oneshot;

enum Reply<T> {
    Ready(Result<T, DirectoryError>),
    Gated(oneshot::Receiver<Result<T, DirectoryError>>),
}

#[derive(Default)]
struct Script {
    list: VecDeque<Reply<Vec<User>>>,
    delete: HashMap<UserId, VecDeque<Reply<UserId>>>,
    create: VecDeque<Reply<User>>,
    list_calls: usize,
    delete_calls: Vec<UserId>,
    create_calls: Vec<UserDraft>,
    unexpected: Vec<String>,
}

impl Script {
    fn remaining(&self) -> usize {
        self.list.len() + self.create.len() + self.delete.values().map(VecDeque::len).sum::<usize>()
    }
}

fn lock(script: &Mutex<Script>) -> MutexGuard<'_, Script> {
    script.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Scripted directory. Clones share the same script.
#[derive(Clone, Default)]
pub struct MockDirectory {
    script: Arc<Mutex<Script>>,
}

impl MockDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects a `list_users` call.
    pub fn expect_list(&self) -> ExpectationBuilder<Vec<User>> {
        let script = Arc::clone(&self.script);
        ExpectationBuilder::new(move |reply| lock(&script).list.push_back(reply))
    }

    /// Expects a `delete_user(id)` call.
    pub fn expect_delete(&self, id: UserId) -> ExpectationBuilder<UserId> {
        let script = Arc::clone(&self.script);
        ExpectationBuilder::new(move |reply| {
            lock(&script).delete.entry(id).or_default().push_back(reply)
        })
    }

    /// Expects a `create_user` call.
    pub fn expect_create(&self) -> ExpectationBuilder<User> {
        let script = Arc::clone(&self.script);
        ExpectationBuilder::new(move |reply| lock(&script).create.push_back(reply))
    }

    pub fn list_calls(&self) -> usize {
        lock(&self.script).list_calls
    }

    pub fn delete_calls(&self) -> Vec<UserId> {
        lock(&self.script).delete_calls.clone()
    }

    pub fn create_calls(&self) -> Vec<UserDraft> {
        lock(&self.script).create_calls.clone()
    }

    /// Panics unless every expectation was consumed and no unexpected call happened.
    pub fn verify(&self) {
        let script = lock(&self.script);
        if !script.unexpected.is_empty() {
            panic!("Unexpected directory calls: {:?}", script.unexpected);
        }
        let remaining = script.remaining();
        if remaining > 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }

    async fn resolve<T>(&self, reply: Option<Reply<T>>, call: String) -> Result<T, DirectoryError> {
        match reply {
            Some(Reply::Ready(result)) => result,
            Some(Reply::Gated(gate)) => gate
                .await
                .unwrap_or_else(|_| Err(DirectoryError::Network("mock gate dropped".to_string()))),
            None => {
                let message = format!("unexpected call: {call}");
                lock(&self.script).unexpected.push(call);
                Err(DirectoryError::Network(message))
            }
        }
    }
}

#[async_trait]
impl Directory for MockDirectory {
    async fn list_users(&self) -> Result<Vec<User>, DirectoryError> {
        let reply = {
            let mut script = lock(&self.script);
            script.list_calls += 1;
            script.list.pop_front()
        };
        self.resolve(reply, "list_users".to_string()).await
    }

    async fn delete_user(&self, id: UserId) -> Result<UserId, DirectoryError> {
        let reply = {
            let mut script = lock(&self.script);
            script.delete_calls.push(id);
            script.delete.get_mut(&id).and_then(VecDeque::pop_front)
        };
        self.resolve(reply, format!("delete_user({id})")).await
    }

    async fn create_user(&self, draft: UserDraft) -> Result<User, DirectoryError> {
        let reply = {
            let mut script = lock(&self.script);
            script.create_calls.push(draft.clone());
            script.create.pop_front()
        };
        self.resolve(reply, format!("create_user({})", draft.username))
            .await
    }
}

/// Builder returned by the `expect_*` methods.
pub struct ExpectationBuilder<T> {
    push: Box<dyn FnOnce(Reply<T>) + Send>,
}

impl<T> ExpectationBuilder<T> {
    fn new(push: impl FnOnce(Reply<T>) + Send + 'static) -> Self {
        Self {
            push: Box::new(push),
        }
    }

    /// Answers the call immediately with `value`.
    pub fn return_ok(self, value: T) {
        (self.push)(Reply::Ready(Ok(value)));
    }

    /// Answers the call immediately with `error`.
    pub fn return_err(self, error: DirectoryError) {
        (self.push)(Reply::Ready(Err(error)));
    }

    /// Holds the call in flight until the returned gate is released.
    pub fn gated(self) -> Gate<T> {
        let (sender, receiver) = oneshot::channel();
        (self.push)(Reply::Gated(receiver));
        Gate { sender }
    }
}

/// Completes a gated call. Dropping it fails the call with a `Network` error.
pub struct Gate<T> {
    sender: oneshot::Sender<Result<T, DirectoryError>>,
}

impl<T> Gate<T> {
    /// Returns false if nobody is waiting any more.
    pub fn release_ok(self, value: T) -> bool {
        self.sender.send(Ok(value)).is_ok()
    }

    pub fn release_err(self, error: DirectoryError) -> bool {
        self.sender.send(Err(error)).is_ok()
    }
}
