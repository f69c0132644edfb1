mod common;

use anyhow::Result;
use delete_handler::database::{Key, StoreError};
use delete_handler::testing::DeleteCall;
use delete_handler::handlers::{delete_model, try_delete_model};
use delete_handler::types::{DeletedModel, ModelRef};

use common::{seeded_store, TABLE};

#[tokio::test]
async fn delete_existing_returns_id() -> Result<()> {
    let store = seeded_store(&["abc", "def"]).await;

    let result = delete_model(&store, "id", &ModelRef::new("abc"), TABLE).await;

    assert_eq!(result, Some(DeletedModel { id: "abc".to_string() }));
    assert_eq!(
        store.calls().await,
        vec![DeleteCall { table: TABLE.to_string(), key: Key::new("id", "abc") }]
    );
    assert!(store.get(TABLE, &Key::new("id", "abc")).await.is_none());
    assert!(store.get(TABLE, &Key::new("id", "def")).await.is_some());
    Ok(())
}

#[tokio::test]
async fn delete_missing_key_still_returns_id() -> Result<()> {
    let store = seeded_store(&["abc"]).await;
    let id = uuid::Uuid::new_v4().to_string();

    let result = delete_model(&store, "id", &ModelRef::new(id.clone()), TABLE).await;

    assert_eq!(result, Some(DeletedModel { id }));
    assert_eq!(store.len(TABLE).await, 1);
    Ok(())
}

#[tokio::test]
async fn store_failures_become_none() -> Result<()> {
    let failures = vec![
        StoreError::AccessDenied("User is not authorized to perform: dynamodb:DeleteItem".to_string()),
        StoreError::Throttled("Rate of requests exceeds the allowed throughput".to_string()),
        StoreError::Timeout,
        StoreError::Transport("connection reset".to_string()),
    ];

    for failure in failures {
        let store = seeded_store(&["abc"]).await;
        store.fail_next(failure.clone()).await;

        let result = delete_model(&store, "id", &ModelRef::new("abc"), TABLE).await;
        assert_eq!(result, None, "expected None for {:?}", failure);

        let err = try_delete_model(&store, "id", &ModelRef::new("abc"), TABLE).await;
        assert!(err.is_ok(), "failure should not persist past one call");
    }
    Ok(())
}

#[tokio::test]
async fn repeated_delete_is_idempotent() -> Result<()> {
    let store = seeded_store(&["abc"]).await;
    let model = ModelRef::new("abc");

    let first = try_delete_model(&store, "id", &model, TABLE).await?;
    let second = try_delete_model(&store, "id", &model, TABLE).await?;

    assert_eq!(first, second);
    assert_eq!(store.calls().await.len(), 2);
    Ok(())
}

#[tokio::test]
async fn concurrent_deletes_of_same_key_all_succeed() -> Result<()> {
    let store = seeded_store(&["abc"]).await;
    let model = ModelRef::new("abc");

    let results = futures::future::join_all(
        (0..8).map(|_| delete_model(&store, "id", &model, TABLE)),
    )
    .await;

    assert!(results.iter().all(|r| r.as_ref().map(|d| d.id.as_str()) == Some("abc")));
    assert_eq!(store.calls().await.len(), 8);
    assert_eq!(store.len(TABLE).await, 0);
    Ok(())
}

#[tokio::test]
async fn empty_id_is_rejected_by_store() -> Result<()> {
    let store = seeded_store(&["abc"]).await;

    let err = try_delete_model(&store, "id", &ModelRef::new(""), TABLE)
        .await
        .unwrap_err();
    assert_eq!(err.error_code(), "VALIDATION");
    assert_eq!(delete_model(&store, "id", &ModelRef::new(""), TABLE).await, None);
    Ok(())
}
