//! Makes sure the target table exists before anything is written to it.

use tokio::time::Duration;
use tracing::info;

use crate::dynamodb::{Table, TableStatus, TableStore};
use crate::error::SeedError;
use crate::utils::poll_until;

/// What [`ensure_table`] had to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provisioned {
    /// The table was already there and was left untouched.
    Existing,
    /// The table was created and is now active.
    Created,
}

/// How long to wait for a new table to become active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitPolicy {
    pub delay: Duration,
    pub max_attempts: usize,
}

impl Default for WaitPolicy {
    /// Same budget as the SDK's table-exists waiter: 25 checks, 20 seconds apart.
    fn default() -> Self {
        Self {
            delay: Duration::from_secs(20),
            max_attempts: 25,
        }
    }
}

/// Creates `table` if the store does not have it, then waits until it is active.
///
/// An existing table is accepted whatever its status or key layout. Safe to
/// call repeatedly.
pub async fn ensure_table<S>(
    store: &S,
    table: &Table<'_>,
    wait: WaitPolicy,
) -> Result<Provisioned, SeedError>
where
    S: TableStore + ?Sized,
{
    let status = store.describe_table(table.name()).await?;
    if status != TableStatus::Missing {
        info!("Table with name '{}' found ({status})", table.name());
        return Ok(Provisioned::Existing);
    }

    info!("Table with name '{}' does not exist. Creating...", table.name());
    store.create_table(table).await?;
    wait_until_active(store, table.name(), wait).await?;
    info!("Table '{}' created successfully", table.name());
    Ok(Provisioned::Created)
}

async fn wait_until_active<S>(
    store: &S,
    table_name: &str,
    wait: WaitPolicy,
) -> Result<(), SeedError>
where
    S: TableStore + ?Sized,
{
    let active = poll_until(
        || async move {
            let status = store.describe_table(table_name).await?;
            Ok::<_, SeedError>(status == TableStatus::Active)
        },
        wait.delay,
        wait.max_attempts,
    )
    .await?;

    if active {
        Ok(())
    } else {
        Err(SeedError::ActivationTimeout {
            table_name: table_name.to_owned(),
            attempts: wait.max_attempts,
        })
    }
}
