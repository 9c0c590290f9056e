//! Loading the JSON fixture and writing it to the table.

use serde::Deserialize;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::dynamodb::{Item, TableStore};
use crate::error::SeedError;

/// A fixture document: a JSON array whose elements are all objects.
#[derive(Debug, Default, Deserialize)]
#[serde(transparent)]
pub struct Fixture {
    records: Vec<Map<String, Value>>,
}

impl Fixture {
    /// Reads and parses the fixture at `path`.
    pub fn load(path: &Path) -> Result<Self, SeedError> {
        let data = fs::read(path).map_err(|source| SeedError::FixtureRead {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_slice(&data).map_err(|source| SeedError::FixtureParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_slice(data: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(data)
    }

    pub fn records(&self) -> &[Map<String, Value>] {
        &self.records
    }

    /// Merges every record into one item, later records winning on shared keys.
    pub fn to_item(&self) -> Item {
        Item::from_records(&self.records)
    }
}

/// Loads the fixture at `path` and writes it to `table_name` as a single item.
///
/// The write is unconditional and replaces any item with the same key. Nothing
/// is sent to the store if the fixture cannot be read or parsed.
pub async fn load_and_write<S>(store: &S, path: &Path, table_name: &str) -> Result<(), SeedError>
where
    S: TableStore + ?Sized,
{
    let fixture = Fixture::load(path)?;
    debug!(
        "Loaded {} records from '{}'",
        fixture.records().len(),
        path.display()
    );

    let item = fixture.to_item();
    if item.is_empty() {
        warn!("Fixture '{}' holds no attributes", path.display());
    }
    info!(
        "Writing item with {} attributes to '{table_name}'",
        item.len()
    );
    store.put_item(table_name, item).await?;

    info!("Item added successfully!");
    Ok(())
}
