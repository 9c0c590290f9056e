use aws_sdk_dynamodb::{
    error::BuildError,
    types::{
        AttributeDefinition, GlobalSecondaryIndex, KeySchemaElement, KeyType, Projection,
        ProjectionType, ProvisionedThroughput, ScalarAttributeType,
    },
};

/// Partition and sort key attribute names of a table or index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPair {
    pub partition_key: &'static str,
    pub sort_key: &'static str,
}

impl KeyPair {
    /// Key schema elements: the partition key as `HASH`, the sort key as `RANGE`.
    pub fn key_schema(&self) -> Result<Vec<KeySchemaElement>, BuildError> {
        Ok(vec![
            KeySchemaElement::builder()
                .attribute_name(self.partition_key)
                .key_type(KeyType::Hash)
                .build()?,
            KeySchemaElement::builder()
                .attribute_name(self.sort_key)
                .key_type(KeyType::Range)
                .build()?,
        ])
    }
}

/// A global secondary index projecting all attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SecondaryIndex {
    pub name: &'static str,
    pub keys: KeyPair,
}

/// Provisioned read/write capacity, shared by the table and its indexes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Throughput {
    pub read_capacity_units: i64,
    pub write_capacity_units: i64,
}

/// Represents the key layout of a DynamoDB table.
///
/// DynamoDB is schemaless apart from keys: only the attributes used by the
/// primary key or by a secondary index need to be declared, and they are all
/// declared as strings here.
///
/// # Single-table layout
///
/// The layout returned by [`Schema::single_table`] uses generic key names so
/// that many entity types can share one table:
///
/// - primary key `pk` / `sk`
/// - `GSI1` keyed on `GSI1PK` / `GSI1SK`
/// - `GSI2` keyed on `GSI2PK` / `GSI2SK`
///
/// with one read and one write capacity unit everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schema {
    pub keys: KeyPair,
    pub indexes: &'static [SecondaryIndex],
    pub throughput: Throughput,
}

const SINGLE_TABLE_INDEXES: [SecondaryIndex; 2] = [
    SecondaryIndex {
        name: "GSI1",
        keys: KeyPair {
            partition_key: "GSI1PK",
            sort_key: "GSI1SK",
        },
    },
    SecondaryIndex {
        name: "GSI2",
        keys: KeyPair {
            partition_key: "GSI2PK",
            sort_key: "GSI2SK",
        },
    },
];

impl Schema {
    /// The fixed single-table layout.
    pub const fn single_table() -> Self {
        Self {
            keys: KeyPair {
                partition_key: "pk",
                sort_key: "sk",
            },
            indexes: &SINGLE_TABLE_INDEXES,
            throughput: Throughput {
                read_capacity_units: 1,
                write_capacity_units: 1,
            },
        }
    }

    /// Every key attribute name, table keys first, without duplicates.
    pub fn key_attributes(&self) -> Vec<&'static str> {
        let mut names = Vec::with_capacity(2 + 2 * self.indexes.len());
        let pairs = std::iter::once(&self.keys).chain(self.indexes.iter().map(|gsi| &gsi.keys));
        for pair in pairs {
            for name in [pair.partition_key, pair.sort_key] {
                if !names.contains(&name) {
                    names.push(name);
                }
            }
        }
        names
    }

    pub fn attribute_definitions(&self) -> Result<Vec<AttributeDefinition>, BuildError> {
        self.key_attributes()
            .into_iter()
            .map(|name| {
                AttributeDefinition::builder()
                    .attribute_name(name)
                    .attribute_type(ScalarAttributeType::S)
                    .build()
            })
            .collect()
    }

    pub fn key_schema(&self) -> Result<Vec<KeySchemaElement>, BuildError> {
        self.keys.key_schema()
    }

    pub fn provisioned_throughput(&self) -> Result<ProvisionedThroughput, BuildError> {
        ProvisionedThroughput::builder()
            .read_capacity_units(self.throughput.read_capacity_units)
            .write_capacity_units(self.throughput.write_capacity_units)
            .build()
    }

    pub fn global_secondary_indexes(&self) -> Result<Vec<GlobalSecondaryIndex>, BuildError> {
        self.indexes
            .iter()
            .map(|gsi| {
                GlobalSecondaryIndex::builder()
                    .index_name(gsi.name)
                    .set_key_schema(Some(gsi.keys.key_schema()?))
                    .projection(
                        Projection::builder()
                            .projection_type(ProjectionType::All)
                            .build(),
                    )
                    .provisioned_throughput(self.provisioned_throughput()?)
                    .build()
            })
            .collect()
    }
}
