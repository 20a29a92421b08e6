//! Storage backend implementations.
//!
//! Concrete implementations of the `RecordStore` contract from
//! `uservault_core::storage`, selected at compile time via feature flags.
//!
//! # Feature Flags
//!
//! - `dynamodb` (default): DynamoDB backend using `aws-sdk-dynamodb`
//! - `inmemory` (default): in-memory backend for testing

#[cfg(not(any(feature = "dynamodb", feature = "inmemory")))]
compile_error!(
    "No storage backend selected. Enable 'dynamodb' or 'inmemory' feature. \
    Example: cargo build -p uservault --features dynamodb"
);

#[cfg(feature = "dynamodb")]
pub mod dynamodb;

#[cfg(feature = "inmemory")]
pub mod inmemory;

#[cfg(feature = "dynamodb")]
pub use dynamodb::DynamoRecordStore;

#[cfg(feature = "inmemory")]
pub use inmemory::InMemoryRecordStore;
