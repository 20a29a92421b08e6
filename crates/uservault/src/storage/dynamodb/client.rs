//! AWS SDK client setup.
//!
//! Builds one explicit `Client` from an explicit configuration struct. No
//! process-wide SDK state is touched; the handle is created once and passed
//! into the store by ownership.

use aws_sdk_dynamodb::config::Credentials;
use aws_sdk_dynamodb::Client;

/// Connection settings for the DynamoDB client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Custom endpoint URL (for local DynamoDB).
    pub endpoint_url: Option<String>,
    /// AWS region.
    pub region: String,
    /// Explicit credentials. When absent, the SDK default credential chain
    /// (environment, profile, instance metadata) is used.
    pub credentials: Option<StaticCredentials>,
}

/// Explicit access key pair for the client.
#[derive(Debug, Clone)]
pub struct StaticCredentials {
    pub access_key_id: String,
    pub secret_access_key: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint_url: std::env::var("AWS_ENDPOINT_URL").ok(),
            region: std::env::var("AWS_REGION").unwrap_or_else(|_| "us-east-1".to_string()),
            credentials: None,
        }
    }
}

/// Creates a DynamoDB client with the given configuration.
pub async fn create_client(config: &ClientConfig) -> Client {
    let mut sdk_config_loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new(config.region.clone()));

    if let Some(endpoint) = &config.endpoint_url {
        sdk_config_loader = sdk_config_loader.endpoint_url(endpoint);
    }

    if let Some(credentials) = &config.credentials {
        sdk_config_loader = sdk_config_loader.credentials_provider(Credentials::new(
            credentials.access_key_id.clone(),
            credentials.secret_access_key.clone(),
            None,
            None,
            "uservault",
        ));
    }

    let sdk_config = sdk_config_loader.load().await;
    Client::new(&sdk_config)
}
