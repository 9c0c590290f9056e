//! Error types for the seeding run.

use aws_sdk_dynamodb::error::BuildError;
use std::path::PathBuf;
use thiserror::Error;

/// Exit code for failures talking to the store.
pub const EXIT_STORE_FAILURE: u8 = 1;
/// Exit code for an unreadable or malformed fixture.
pub const EXIT_FIXTURE_FAILURE: u8 = 2;

/// Errors that can stop a seeding run.
#[derive(Error, Debug)]
pub enum SeedError {
    #[error("Failed to read fixture '{}': {source}", path.display())]
    FixtureRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Fixture '{}' is not a JSON array of objects: {source}", path.display())]
    FixtureParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Invalid table schema: {0}")]
    Schema(#[from] BuildError),

    #[error("Error describing table '{table_name}': {message}")]
    Describe { table_name: String, message: String },

    #[error("Failed to create table '{table_name}': {message}")]
    CreateTable { table_name: String, message: String },

    #[error("Table '{table_name}' was not active after {attempts} checks")]
    ActivationTimeout { table_name: String, attempts: usize },

    #[error("Failed to put item into '{table_name}': {message}")]
    PutItem { table_name: String, message: String },
}

impl SeedError {
    /// True when the fixture itself is at fault rather than the store.
    pub fn is_fixture_error(&self) -> bool {
        matches!(self, Self::FixtureRead { .. } | Self::FixtureParse { .. })
    }

    /// Process exit code for this failure.
    pub fn exit_code(&self) -> u8 {
        if self.is_fixture_error() {
            EXIT_FIXTURE_FAILURE
        } else {
            EXIT_STORE_FAILURE
        }
    }
}
