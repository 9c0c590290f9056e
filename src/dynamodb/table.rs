use std::fmt;

use crate::dynamodb::Schema;

/// DynamoDB table configuration.
///
/// Pairs a table name with the key layout the table is created with. The
/// layout only matters when the table does not exist yet: an existing table is
/// used as-is, whatever its keys are.
///
/// # Example
///
/// ```ignore
/// let table = Table::new("TestSingleTable");
/// assert_eq!(table.schema().keys.partition_key, "pk");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Table<'a> {
    name: &'a str,
    schema: Schema,
}

impl<'a> Table<'a> {
    /// Creates a new `Table` using the single-table layout.
    pub fn new(name: &'a str) -> Self {
        Self {
            name,
            schema: Schema::single_table(),
        }
    }

    /// Returns the name of the table.
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// Returns the table's key layout.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }
}

/// Lifecycle state of a table as reported by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableStatus {
    /// The store has no table under that name.
    Missing,
    /// The table exists and accepts reads and writes.
    Active,
    /// The table exists but is creating, updating, deleting, etc.
    Pending(String),
}

impl fmt::Display for TableStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => f.write_str("MISSING"),
            Self::Active => f.write_str("ACTIVE"),
            Self::Pending(status) => f.write_str(status),
        }
    }
}
