use std::sync::Arc;
use store_actor::mock::{create_mock_handle, expect_dispatch, expect_idle, expect_snapshot};
use store_actor::{Dispatched, FrameworkError, StoreClient};
use user_directory::clients::UsersClient;
use user_directory::error::UsersError;
use user_directory::model::{CollectionSnapshot, UserDraft, UserId, UserIntent};
use user_directory::store::UsersReducer;

#[tokio::test]
async fn test_create_dispatches_draft_as_entered() {
    let (handle, mut receiver) = create_mock_handle::<UsersReducer>(10);
    let client = UsersClient::new(handle);

    let task = tokio::spawn(async move {
        client
            .create(UserDraft::new(" Bo ", "b@x.com ", " bo"))
            .await
    });

    let (intent, responder) = expect_dispatch(&mut receiver)
        .await
        .expect("Expected Dispatch");
    assert_eq!(
        intent,
        UserIntent::Create(UserDraft::new(" Bo ", "b@x.com ", " bo"))
    );
    responder.send(Ok(Dispatched::Started)).unwrap();

    assert_eq!(task.await.unwrap(), Ok(Dispatched::Started));
}

#[tokio::test]
async fn test_invalid_draft_is_not_dispatched() {
    let (handle, mut receiver) = create_mock_handle::<UsersReducer>(10);
    let client = UsersClient::new(handle);

    let result = client.create(UserDraft::new("", "b@x", "bo")).await;
    match result {
        Err(UsersError::Validation(err)) => assert_eq!(err.fields.len(), 2),
        other => panic!("expected a validation error, got {other:?}"),
    }
    assert!(expect_idle(&mut receiver));
}

#[tokio::test]
async fn test_remove_passes_rejection_through() {
    let (handle, mut receiver) = create_mock_handle::<UsersReducer>(10);
    let client = UsersClient::new(handle);

    let task = tokio::spawn(async move { client.remove(UserId(7)).await });

    let (intent, responder) = expect_dispatch(&mut receiver)
        .await
        .expect("Expected Dispatch");
    assert_eq!(intent, UserIntent::Remove(UserId(7)));
    responder
        .send(Ok(Dispatched::Rejected("user 7 is not in the collection".to_string())))
        .unwrap();

    assert_eq!(
        task.await.unwrap(),
        Ok(Dispatched::Rejected(
            "user 7 is not in the collection".to_string()
        ))
    );
}

#[tokio::test]
async fn test_snapshot_and_dropped_responder() {
    let (handle, mut receiver) = create_mock_handle::<UsersReducer>(10);
    let client = UsersClient::new(handle);

    let reader = client.clone();
    let task = tokio::spawn(async move { reader.snapshot().await });
    let responder = expect_snapshot(&mut receiver)
        .await
        .expect("Expected Snapshot");
    responder
        .send(Ok(Arc::new(CollectionSnapshot::default())))
        .unwrap();
    assert_eq!(*task.await.unwrap().unwrap(), CollectionSnapshot::default());

    let task = tokio::spawn(async move { client.load().await });
    let (intent, responder) = expect_dispatch(&mut receiver)
        .await
        .expect("Expected Dispatch");
    assert_eq!(intent, UserIntent::Load);
    drop(responder);

    assert_eq!(
        task.await.unwrap(),
        Err(UsersError::StoreUnavailable(
            FrameworkError::StoreDropped.to_string()
        ))
    );
}
