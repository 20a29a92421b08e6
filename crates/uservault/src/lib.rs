//! Per-user key-value record store backed by DynamoDB.
//!
//! One table, one record per main key (a user identifier), one nested data
//! map per record. The store shapes item-level get/put/delete requests for
//! `aws-sdk-dynamodb` and translates service errors; everything of storage
//! substance (durability, replication, consistency, partitioning,
//! throughput) is delegated to DynamoDB itself.
//!
//! ```no_run
//! use serde_json::json;
//! use uservault::storage::dynamodb::{create_client, ClientConfig, DynamoRecordStore};
//! use uservault::{Outcome, RecordStore};
//!
//! # async fn example() -> uservault::Result<()> {
//! let client = create_client(&ClientConfig::default()).await;
//! let store = DynamoRecordStore::new(client, "uservault", "u1");
//!
//! match store.save("color", json!("blue")).await? {
//!     Outcome::Complete(()) => {}
//!     // The table was missing and is now being created; the value was
//!     // not written. Reissue the save once the table is active.
//!     Outcome::TableCreating => {}
//! }
//! # Ok(())
//! # }
//! ```

pub mod storage;

pub use uservault_core::record::{DataMap, Record};
pub use uservault_core::storage::{Outcome, RecordStore, Result, StoreError};
