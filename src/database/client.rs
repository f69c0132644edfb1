use aws_config::BehaviorVersion;
use aws_sdk_dynamodb::config::Region;
use aws_sdk_dynamodb::Client;
use tracing::info;

use crate::config::StoreConfig;

/// Build the DynamoDB client once per process. Credentials come from the
/// default provider chain (the Lambda execution role when deployed).
pub async fn dynamo_client(store: &StoreConfig) -> Client {
    let mut loader = aws_config::defaults(BehaviorVersion::latest());

    if let Some(region) = &store.region {
        loader = loader.region(Region::new(region.clone()));
    }
    if let Some(endpoint) = &store.endpoint_url {
        info!("Using DynamoDB endpoint override: {}", endpoint);
        loader = loader.endpoint_url(endpoint.as_str());
    }

    let sdk_config = loader.load().await;
    Client::new(&sdk_config)
}
