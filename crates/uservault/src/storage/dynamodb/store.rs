//! DynamoDB record store implementation.
//!
//! Implements the `RecordStore` contract from `uservault_core::storage`
//! using single-item get/put/delete requests against one table. Reads use
//! strong consistency; writes put the whole record back unconditionally,
//! so concurrent writers for the same main key can lose updates.

use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::operation::get_item::GetItemError;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;
use serde_json::Value;

use uservault_core::record::{lookup_value, remove_value, set_value, DataMap, Record};
use uservault_core::storage::{Outcome, RecordStore, Result, StoreError};

use super::conversions::{item_data, record_to_item, MAIN_KEY_ATTR};
use super::error::{map_delete_item_error, map_get_item_error, map_put_item_error};
use super::provision;

/// DynamoDB-based record store.
///
/// Bound to one table and one main key. The client handle is created at
/// construction and reused for the store's lifetime.
pub struct DynamoRecordStore {
    client: Client,
    table_name: String,
    main_key: String,
}

/// What a record fetch observed.
enum Fetch {
    Item(Option<HashMap<String, AttributeValue>>),
    TableMissing,
}

impl DynamoRecordStore {
    /// Creates a store bound to the given table and main key.
    pub fn new(
        client: Client,
        table_name: impl Into<String>,
        main_key: impl Into<String>,
    ) -> Self {
        Self {
            client,
            table_name: table_name.into(),
            main_key: main_key.into(),
        }
    }

    /// Creates a store from environment configuration.
    ///
    /// Uses the AWS SDK default credential chain and reads the table name
    /// from `USERVAULT_TABLE_NAME` (defaults to "uservault").
    pub async fn from_env(main_key: impl Into<String>) -> Self {
        let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        let client = Client::new(&config);
        let table_name =
            std::env::var("USERVAULT_TABLE_NAME").unwrap_or_else(|_| "uservault".to_string());

        Self::new(client, table_name, main_key)
    }

    /// Rebinds the active main key for subsequent operations.
    pub fn bind_main_key(&mut self, main_key: impl Into<String>) -> &mut Self {
        self.main_key = main_key.into();
        self
    }

    /// Get the bound main key.
    pub fn main_key(&self) -> &str {
        &self.main_key
    }

    /// Get the table name.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// Fetches the bound record with strong read consistency.
    async fn fetch_record(&self) -> Result<Fetch> {
        match self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key(MAIN_KEY_ATTR, AttributeValue::S(self.main_key.clone()))
            .consistent_read(true)
            .send()
            .await
        {
            Ok(output) => Ok(Fetch::Item(output.item)),
            Err(err) => {
                if matches!(
                    err.as_service_error(),
                    Some(GetItemError::ResourceNotFoundException(_))
                ) {
                    Ok(Fetch::TableMissing)
                } else {
                    Err(map_get_item_error(err))
                }
            }
        }
    }

    /// Writes the whole record back, replacing whatever is stored.
    async fn put_record(&self, data: &DataMap) -> Result<()> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(record_to_item(&self.main_key, data)))
            .send()
            .await
            .map_err(map_put_item_error)?;

        Ok(())
    }

    /// Starts table creation in place of the requested operation.
    ///
    /// Creation failures are logged and swallowed; the caller reports
    /// `TableCreating` either way and the next operation rediscovers the
    /// table state on its own.
    async fn start_table_creation(&self) {
        tracing::debug!(
            table = %self.table_name,
            "table missing, creating it instead of serving the request"
        );

        if let Err(err) =
            provision::create_table(&self.client, &self.table_name, MAIN_KEY_ATTR).await
        {
            tracing::warn!(table = %self.table_name, error = %err, "table creation failed");
        }
    }

    fn main_key_not_found(&self) -> StoreError {
        StoreError::MainKeyNotFound {
            main_key: self.main_key.clone(),
        }
    }

    fn table_not_found(&self) -> StoreError {
        StoreError::Client(format!("Table not found: {}", self.table_name))
    }
}

#[async_trait]
impl RecordStore for DynamoRecordStore {
    async fn save(&self, data_key: &str, value: Value) -> Result<Outcome<()>> {
        let item = match self.fetch_record().await? {
            Fetch::Item(item) => item,
            Fetch::TableMissing => {
                self.start_table_creation().await;
                return Ok(Outcome::TableCreating);
            }
        };

        let mut data = match &item {
            Some(item) => item_data(item)?,
            None => DataMap::new(),
        };
        set_value(&mut data, data_key, value);
        self.put_record(&data).await?;

        Ok(Outcome::Complete(()))
    }

    async fn load(&self, data_key: &str) -> Result<Outcome<Value>> {
        let item = match self.fetch_record().await? {
            Fetch::Item(item) => item,
            Fetch::TableMissing => {
                self.start_table_creation().await;
                return Ok(Outcome::TableCreating);
            }
        };

        let item = item.ok_or_else(|| self.main_key_not_found())?;
        let data = item_data(&item)?;
        let value = lookup_value(&data, &self.main_key, data_key)?.clone();

        Ok(Outcome::Complete(value))
    }

    async fn load_record(&self) -> Result<Outcome<Record>> {
        let item = match self.fetch_record().await? {
            Fetch::Item(item) => item,
            Fetch::TableMissing => {
                self.start_table_creation().await;
                return Ok(Outcome::TableCreating);
            }
        };

        let item = item.ok_or_else(|| self.main_key_not_found())?;
        let data = item_data(&item)?;

        Ok(Outcome::Complete(Record::with_data(&self.main_key, data)))
    }

    async fn delete_value(&self, data_key: &str) -> Result<()> {
        let item = match self.fetch_record().await? {
            Fetch::Item(item) => item,
            // Unlike save/load, this path does not create the table.
            Fetch::TableMissing => return Err(self.table_not_found()),
        };

        let item = item.ok_or_else(|| self.main_key_not_found())?;
        let mut data = item_data(&item)?;
        remove_value(&mut data, &self.main_key, data_key)?;
        self.put_record(&data).await
    }

    async fn delete_record(&self) -> Result<()> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .key(MAIN_KEY_ATTR, AttributeValue::S(self.main_key.clone()))
            .send()
            .await
            .map_err(map_delete_item_error)?;

        Ok(())
    }
}
