use clap::Parser;
use std::path::PathBuf;
use tokio::time::Duration;
use tracing::Level;

use crate::dynamodb::{DynamoDb, Table};
use crate::error::SeedError;
use crate::fixture;
use crate::provision::{self, WaitPolicy};

pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000";
pub const DEFAULT_TABLE_NAME: &str = "TestSingleTable";
pub const DEFAULT_FIXTURE: &str = "./fixtures/tours.json";
pub const DEFAULT_REGION: &str = "ap-southeast-2";

/// Command-line arguments.
///
/// `-h` selects the endpoint, so help is only available as `--help`.
#[derive(Debug, Parser)]
#[command(
    name = "single-table-seed",
    version,
    disable_help_flag = true,
    about = "Create a single-table DynamoDB layout if needed and seed it from a JSON fixture",
    long_about = "Create a single-table DynamoDB layout if needed and seed it from a JSON fixture.

The table is created with keys pk/sk and two global secondary indexes
(GSI1PK/GSI1SK, GSI2PK/GSI2SK) when it does not exist. An existing table is
used as-is.

The fixture must be a JSON array of objects. All objects are merged into one
item (later objects win on shared keys) and written with a single PutItem.

Exit codes: 0 on success, 1 when the store fails, 2 when the fixture is
missing or malformed.

Variables in a .env file in the working directory are loaded first."
)]
pub struct Args {
    /// DynamoDB endpoint to target.
    #[arg(short = 'h', long, env = "AWS_ENDPOINT_URL", default_value = DEFAULT_ENDPOINT, value_name = "URL")]
    pub host: String,

    /// Table name. Created if it doesn't exist.
    #[arg(short, long, env = "SEED_TABLE_NAME", default_value = DEFAULT_TABLE_NAME)]
    pub table: String,

    /// JSON fixture to write.
    #[arg(short, long, env = "SEED_FIXTURE", default_value = DEFAULT_FIXTURE, value_name = "PATH")]
    pub fixture: PathBuf,

    /// Region to sign requests for.
    #[arg(short, long, env = "AWS_REGION", default_value = DEFAULT_REGION)]
    pub region: String,

    /// Seconds between checks while waiting for a new table to become active.
    #[arg(long, default_value_t = 20, value_name = "SECS")]
    pub wait_delay: u64,

    /// Checks before giving up on a new table becoming active.
    #[arg(long, default_value_t = 25, value_name = "N", value_parser = clap::value_parser!(u64).range(1..))]
    pub wait_attempts: u64,

    /// Log at debug level.
    #[arg(short, long)]
    pub verbose: bool,

    /// Print help.
    #[arg(long, action = clap::ArgAction::Help)]
    help: Option<bool>,
}

/// Settings for one seeding run, built once from [`Args`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub endpoint_url: String,
    pub region: String,
    pub table_name: String,
    pub fixture_path: PathBuf,
    pub wait: WaitPolicy,
    pub log_level: Level,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            endpoint_url: args.host,
            region: args.region,
            table_name: args.table,
            fixture_path: args.fixture,
            wait: WaitPolicy {
                delay: Duration::from_secs(args.wait_delay),
                max_attempts: usize::try_from(args.wait_attempts).unwrap_or(usize::MAX),
            },
            log_level: if args.verbose {
                Level::DEBUG
            } else {
                Level::INFO
            },
        }
    }
}

/// Ensures the table, then writes the fixture to it.
pub async fn run(config: &Config) -> Result<(), SeedError> {
    let ddb = DynamoDb::connect(&config.endpoint_url, &config.region).await;
    let table = Table::new(&config.table_name);

    provision::ensure_table(&ddb, &table, config.wait).await?;
    fixture::load_and_write(&ddb, &config.fixture_path, table.name()).await
}
