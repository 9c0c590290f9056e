use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_dynamodb::{error::DisplayErrorContext, types::TableStatus as SdkTableStatus, Client};
use tracing::{debug, info};

use crate::dynamodb::{Item, Table, TableStatus, TableStore};
use crate::error::SeedError;

/// DynamoDB client wrapper for the operations a seeding run performs.
///
/// # Operations
///
/// - **Describe**: Look up a table's status, treating "not found" as a normal answer
/// - **Create**: Submit a create request for a table and its secondary indexes
/// - **Put**: Write a whole item, overwriting any item with the same key
///
/// # Error Handling
///
/// SDK failures are mapped into [`SeedError`] variants that name the table and
/// carry the full SDK error chain as text.
#[derive(Debug, Clone)]
pub struct DynamoDb {
    client: Client,
}

impl DynamoDb {
    /// Creates a new `DynamoDb` instance.
    pub fn new(sdk_config: &aws_config::SdkConfig) -> Self {
        Self {
            client: Client::new(sdk_config),
        }
    }

    /// Loads credentials from the environment and targets `endpoint_url` in `region`.
    pub async fn connect(endpoint_url: &str, region: &str) -> Self {
        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(region.to_owned()))
            .endpoint_url(endpoint_url)
            .load()
            .await;
        debug!("DynamoDB client targets {endpoint_url} ({region})");
        Self::new(&sdk_config)
    }
}

#[async_trait]
impl TableStore for DynamoDb {
    async fn describe_table(&self, table_name: &str) -> Result<TableStatus, SeedError> {
        match self
            .client
            .describe_table()
            .table_name(table_name)
            .send()
            .await
        {
            Ok(output) => {
                let status = match output.table().and_then(|table| table.table_status()) {
                    Some(SdkTableStatus::Active) => TableStatus::Active,
                    Some(other) => TableStatus::Pending(other.as_str().to_owned()),
                    None => TableStatus::Pending("UNKNOWN".to_owned()),
                };
                debug!("Table '{table_name}' status: {status}");
                Ok(status)
            }
            Err(e)
                if e.as_service_error()
                    .is_some_and(|service| service.is_resource_not_found_exception()) =>
            {
                Ok(TableStatus::Missing)
            }
            Err(e) => Err(SeedError::Describe {
                table_name: table_name.to_owned(),
                message: DisplayErrorContext(&e).to_string(),
            }),
        }
    }

    async fn create_table(&self, table: &Table<'_>) -> Result<(), SeedError> {
        let schema = table.schema();

        self.client
            .create_table()
            .table_name(table.name())
            .set_attribute_definitions(Some(schema.attribute_definitions()?))
            .set_key_schema(Some(schema.key_schema()?))
            .provisioned_throughput(schema.provisioned_throughput()?)
            .set_global_secondary_indexes(Some(schema.global_secondary_indexes()?))
            .send()
            .await
            .map_err(|e| SeedError::CreateTable {
                table_name: table.name().to_owned(),
                message: DisplayErrorContext(&e).to_string(),
            })?;

        info!("Table creation request submitted for '{}'", table.name());
        Ok(())
    }

    async fn put_item(&self, table_name: &str, item: Item) -> Result<(), SeedError> {
        self.client
            .put_item()
            .table_name(table_name)
            .set_item(Some(item.attributes))
            .send()
            .await
            .map_err(|e| SeedError::PutItem {
                table_name: table_name.to_owned(),
                message: DisplayErrorContext(&e).to_string(),
            })?;

        info!("Item added to '{table_name}'");
        Ok(())
    }
}
