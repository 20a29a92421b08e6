use async_trait::async_trait;
use serde_json::Value;

use crate::record::Record;

use super::{Outcome, Result};

/// Single-table accessor for per-user records.
///
/// An implementation is bound to one table and one main key; every operation
/// acts on the record for that key. Operations hold no locks and issue one
/// request at a time: concurrent save/delete_value calls for the same main
/// key read-modify-write the whole data map and can lose updates.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Sets a data key to a value within the bound record, creating the
    /// record if it does not exist yet.
    ///
    /// Reports `Outcome::TableCreating` when the table was missing; the
    /// value was not written in that case.
    async fn save(&self, data_key: &str, value: Value) -> Result<Outcome<()>>;

    /// Loads the value stored under a data key.
    ///
    /// Fails with `MainKeyNotFound` when the bound main key has no record,
    /// and with `DataKeyNotFound` when the record lacks the key.
    async fn load(&self, data_key: &str) -> Result<Outcome<Value>>;

    /// Loads the whole record for the bound main key.
    ///
    /// Fails with `MainKeyNotFound` when no record exists.
    async fn load_record(&self) -> Result<Outcome<Record>>;

    /// Removes one data key from the bound record, leaving siblings intact.
    ///
    /// Fails with `MainKeyNotFound` or `DataKeyNotFound`. Unlike save and
    /// load, a missing table is not created on this path; it surfaces as a
    /// client error.
    async fn delete_value(&self, data_key: &str) -> Result<()>;

    /// Deletes the whole record for the bound main key.
    ///
    /// Does not distinguish "did not exist" from "deleted".
    async fn delete_record(&self) -> Result<()>;
}
