//! Table provisioning.
//!
//! Creates the single-table schema on demand and exposes helpers for
//! observing table state. `create_table` returns as soon as DynamoDB accepts
//! the request: the table is usually still CREATING at that point, and
//! operations issued against it keep failing until it becomes active.
//! Callers that need to close that gap use `wait_for_active`.

use std::time::Duration;

use aws_sdk_dynamodb::operation::describe_table::DescribeTableError;
use aws_sdk_dynamodb::types::{
    AttributeDefinition, KeySchemaElement, KeyType, ProvisionedThroughput, ScalarAttributeType,
};
use aws_sdk_dynamodb::Client;
use uservault_core::storage::{Result, StoreError};

use super::error::{map_create_table_error, map_describe_table_error};

/// Fixed read capacity for newly created tables.
pub const READ_CAPACITY_UNITS: i64 = 5;
/// Fixed write capacity for newly created tables.
pub const WRITE_CAPACITY_UNITS: i64 = 5;

/// Observed table lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableStatus {
    Creating,
    Active,
    Updating,
    Deleting,
}

/// Creates a table with a single string hash key and fixed provisioned
/// capacity.
///
/// Not idempotent: creating a table that already exists (or is being
/// created by a concurrent caller) fails with a client error.
pub async fn create_table(client: &Client, table_name: &str, key_name: &str) -> Result<()> {
    let key_schema = KeySchemaElement::builder()
        .attribute_name(key_name)
        .key_type(KeyType::Hash)
        .build()
        .map_err(|e| StoreError::Client(e.to_string()))?;

    let attribute_definition = AttributeDefinition::builder()
        .attribute_name(key_name)
        .attribute_type(ScalarAttributeType::S)
        .build()
        .map_err(|e| StoreError::Client(e.to_string()))?;

    let throughput = ProvisionedThroughput::builder()
        .read_capacity_units(READ_CAPACITY_UNITS)
        .write_capacity_units(WRITE_CAPACITY_UNITS)
        .build()
        .map_err(|e| StoreError::Client(e.to_string()))?;

    client
        .create_table()
        .table_name(table_name)
        .key_schema(key_schema)
        .attribute_definitions(attribute_definition)
        .provisioned_throughput(throughput)
        .send()
        .await
        .map_err(map_create_table_error)?;

    tracing::info!(table = %table_name, key = %key_name, "table creation started");
    Ok(())
}

/// Fetches the current table status, `None` when the table does not exist.
pub async fn table_status(client: &Client, table_name: &str) -> Result<Option<TableStatus>> {
    match client.describe_table().table_name(table_name).send().await {
        Ok(response) => {
            let table = response.table().ok_or_else(|| {
                StoreError::InvalidData("DescribeTable response without a table".to_string())
            })?;

            let status = match table.table_status() {
                Some(aws_sdk_dynamodb::types::TableStatus::Creating) => TableStatus::Creating,
                Some(aws_sdk_dynamodb::types::TableStatus::Updating) => TableStatus::Updating,
                Some(aws_sdk_dynamodb::types::TableStatus::Deleting) => TableStatus::Deleting,
                _ => TableStatus::Active,
            };

            Ok(Some(status))
        }
        Err(err) => {
            if matches!(
                err.as_service_error(),
                Some(DescribeTableError::ResourceNotFoundException(_))
            ) {
                Ok(None)
            } else {
                Err(map_describe_table_error(err))
            }
        }
    }
}

/// Polls until the table becomes active.
///
/// Fails with `TableActivationTimeout` after two minutes of polling.
pub async fn wait_for_active(client: &Client, table_name: &str) -> Result<()> {
    let max_attempts = 60;
    let delay = Duration::from_secs(2);

    for _ in 0..max_attempts {
        if table_status(client, table_name).await? == Some(TableStatus::Active) {
            return Ok(());
        }
        tokio::time::sleep(delay).await;
    }

    Err(StoreError::TableActivationTimeout {
        table_name: table_name.to_string(),
    })
}
