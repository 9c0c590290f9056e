use async_trait::async_trait;

use crate::dynamodb::{Item, Table, TableStatus};
use crate::error::SeedError;

/// The slice of the DynamoDB API a seeding run needs.
///
/// [`DynamoDb`](crate::dynamodb::DynamoDb) implements it against a real
/// endpoint; tests swap in an in-memory store.
#[async_trait]
pub trait TableStore: Send + Sync {
    /// Reports the table's status, or [`TableStatus::Missing`] if the store
    /// does not know the name. Any other failure is an error.
    async fn describe_table(&self, table_name: &str) -> Result<TableStatus, SeedError>;

    /// Submits a create request for `table` with its schema. Returns as soon
    /// as the request is accepted; the table is usually not active yet.
    async fn create_table(&self, table: &Table<'_>) -> Result<(), SeedError>;

    /// Writes `item`, replacing any item with the same key.
    async fn put_item(&self, table_name: &str, item: Item) -> Result<(), SeedError>;
}
