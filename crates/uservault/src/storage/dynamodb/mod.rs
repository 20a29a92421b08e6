//! DynamoDB storage backend implementation.
//!
//! This module provides a DynamoDB-based implementation of the record store
//! contract using `aws-sdk-dynamodb`.

mod client;
mod conversions;
mod error;
mod provision;
mod store;

pub use client::{create_client, ClientConfig, StaticCredentials};
pub use conversions::{DATA_ATTR, MAIN_KEY_ATTR};
pub use provision::{create_table, table_status, wait_for_active, TableStatus};
pub use store::DynamoRecordStore;
