use async_trait::async_trait;
use aws_sdk_dynamodb::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_dynamodb::operation::delete_item::DeleteItemError;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;
use tracing::debug;

use crate::database::store::{Key, KeyValueStore, StoreError};

/// DynamoDB-backed store. Holds one client for the life of the process.
#[derive(Debug, Clone)]
pub struct DynamoStore {
    client: Client,
}

impl DynamoStore {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl KeyValueStore for DynamoStore {
    async fn delete(&self, table: &str, key: &Key) -> Result<(), StoreError> {
        debug!("DeleteItem {} on {}", key, table);

        self.client
            .delete_item()
            .table_name(table)
            .key(key.attribute.as_str(), AttributeValue::S(key.value.clone()))
            .send()
            .await
            .map(|_| ())
            .map_err(classify)
    }
}

/// Map an SDK failure onto the store taxonomy
fn classify<R>(err: SdkError<DeleteItemError, R>) -> StoreError
where
    R: std::fmt::Debug + 'static,
{
    match err {
        SdkError::ServiceError(service) => {
            let err = service.into_err();
            let message = service_message(&err);

            match &err {
                DeleteItemError::ResourceNotFoundException(_) => StoreError::TableNotFound(message),
                DeleteItemError::ProvisionedThroughputExceededException(_)
                | DeleteItemError::RequestLimitExceeded(_) => StoreError::Throttled(message),
                _ => StoreError::from_service_code(err.code(), message),
            }
        }
        SdkError::TimeoutError(_) => StoreError::Timeout,
        SdkError::DispatchFailure(ref failure) if failure.is_timeout() => StoreError::Timeout,
        other => StoreError::Transport(DisplayErrorContext(&other).to_string()),
    }
}

/// Message carried by the modeled exception, then the response metadata,
/// then the full error chain.
fn service_message(err: &DeleteItemError) -> String {
    let modeled = match err {
        DeleteItemError::ResourceNotFoundException(e) => e.message(),
        DeleteItemError::ProvisionedThroughputExceededException(e) => e.message(),
        DeleteItemError::RequestLimitExceeded(e) => e.message(),
        DeleteItemError::ConditionalCheckFailedException(e) => e.message(),
        _ => None,
    };

    modeled
        .or_else(|| ProvideErrorMetadata::message(err))
        .map(str::to_string)
        .unwrap_or_else(|| DisplayErrorContext(err).to_string())
}
